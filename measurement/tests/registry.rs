/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use measurement::{
    Amount, Dimension, ErrorKind, MeasurementSystem, SimpleUnit, Unit,
    UnitError,
};

#[test]
fn length_end_to_end() {
    let mut m = MeasurementSystem::new();
    let d = m.create_simple_dimension("length", "l", "meter", "m").unwrap();
    assert_eq!(d.base_unit().symbol(), "m");
    assert_eq!(d.base_unit().dimension(), d.id());

    let id = d.id();
    let meter = d.base_unit().clone();
    let q = m.quantity(45.9, &meter).unwrap();
    assert_eq!(q.to_string(), "45.9 m");
    assert_eq!(q.amount(), Amount::Float(45.9));
    assert_eq!(q.unit(), &Unit::from(meter));
    assert_eq!(q.dimension(), Some(id));
    assert_eq!(m.dimension_of(q.unit()).unwrap().map(|d| d.id()), Some(id));
}

#[test]
fn base_unit_is_registered() {
    let mut m = MeasurementSystem::new();
    let meter = Unit::from(
        m.create_simple_dimension("length", "l", "meter", "m")
            .unwrap()
            .base_unit(),
    );
    assert_eq!(m.get_unit_by_name("meter"), Ok(&meter));
    assert_eq!(m.get_unit_by_symbol("m"), Ok(&meter));
    assert!(m.contains_unit(&meter));
}

#[test]
fn reused_base_unit_name() {
    let mut m = MeasurementSystem::new();
    m.create_simple_dimension("length", "l", "meter", "m").unwrap();

    let err = m
        .create_simple_dimension("mass", "kg", "meter", "anything")
        .unwrap_err();
    assert_eq!(err, UnitError::DuplicateBaseUnitName("meter".to_string()));
    assert_eq!(err.kind(), ErrorKind::Duplicate);

    /* Nothing of the failed dimension got registered. */
    assert!(m.get_simple_dimension_by_name("mass").is_err());
    assert!(m.get_simple_dimension_by_symbol("kg").is_err());
    assert!(m.get_unit_by_symbol("anything").is_err());
    assert_eq!(
        m.get_unit_by_name("meter").map(Unit::dimension),
        Ok(Some(m.get_simple_dimension_by_name("length").unwrap().id()))
    );
}

#[test]
fn reused_base_unit_name_any_dimension() {
    for (n2, s2) in [("mass", "M"), ("time", "t"), ("x", "y")] {
        let mut m = MeasurementSystem::new();
        m.create_simple_dimension("length", "l", "meter", "m").unwrap();
        assert!(m
            .create_simple_dimension(n2, s2, "meter", "m")
            .unwrap_err()
            .is_duplicate());
        assert_eq!(m.simple_dimensions().count(), 1);
        assert_eq!(m.units().count(), 1);
    }
}

#[test]
fn dimension_names_collide_with_dimensions_only() {
    let mut m = MeasurementSystem::new();
    m.create_simple_dimension("length", "l", "meter", "m").unwrap();
    assert_eq!(
        m.create_simple_dimension("length", "L", "foot", "ft").err(),
        Some(UnitError::DuplicateDimensionName("length".to_string()))
    );
    assert_eq!(
        m.create_simple_dimension("distance", "l", "foot", "ft").err(),
        Some(UnitError::DuplicateDimensionSymbol("l".to_string()))
    );
    /* A dimension may share its name with a unit. */
    m.create_simple_dimension("meter", "mm", "second", "s").unwrap();
}

#[test]
fn integer_and_float_amounts() {
    let mut m = MeasurementSystem::new();
    let watt = m.create_unit("watt", "W");
    let q = m.quantity(3, &watt).unwrap();
    assert_eq!(q.amount(), Amount::Integer(3));
    assert_eq!(q.to_string(), "3 W");
    let q = m.quantity(3.5, &watt).unwrap();
    assert_eq!(q.amount(), Amount::Float(3.5));
    assert_eq!(q.to_string(), "3.5 W");
}

#[test]
fn foreign_units_are_rejected() {
    let mut m = MeasurementSystem::new();
    m.create_simple_dimension("length", "l", "meter", "m").unwrap();

    let mut other = MeasurementSystem::new();
    let gram = Unit::from(
        other
            .create_simple_dimension("mass", "M", "gram", "g")
            .unwrap()
            .base_unit(),
    );

    let err = m.quantity(1, gram).unwrap_err();
    assert_eq!(err, UnitError::UnrecognizedUnit("g".to_string()));
    assert_eq!(err.kind(), ErrorKind::Unrecognized);
    assert_eq!(err.to_string(), "Unrecognized Unit encountered: g");
}

#[test]
fn unregistered_units_are_rejected() {
    let m = MeasurementSystem::new();
    assert!(!m.contains_unit(&Unit::new("watt", "W")));
    assert_eq!(
        m.quantity(1.0, Unit::new("watt", "W")).err(),
        Some(UnitError::UnrecognizedUnit("W".to_string()))
    );
}

#[test]
fn containment_matches_name_or_symbol() {
    let mut m = MeasurementSystem::new();
    m.create_unit("watt", "W");
    assert!(m.contains_unit(&Unit::new("watt", "X")));
    assert!(m.contains_unit(&Unit::new("wattage", "W")));
    assert!(!m.contains_unit(&Unit::new("volt", "V")));
    assert!(m.quantity(1, Unit::new("watt", "X")).is_ok());
}

#[test]
fn lookup_misses() {
    let m = MeasurementSystem::new();
    assert_eq!(
        m.get_unit_by_name("meter").err().map(|e| e.kind()),
        Some(ErrorKind::NotFound)
    );
    assert_eq!(
        m.get_unit_by_symbol("m").err(),
        Some(UnitError::UnitSymbolNotFound("m".to_string()))
    );
    assert_eq!(
        m.get_simple_dimension_by_name("length").err(),
        Some(UnitError::DimensionNameNotFound("length".to_string()))
    );
    assert_eq!(
        m.get_simple_dimension_by_symbol("l").err().map(|e| e.kind()),
        Some(ErrorKind::NotFound)
    );
}

#[test]
fn dimension_only_attachment_is_not_registered() {
    let mut m = MeasurementSystem::new();
    let id = m
        .create_simple_dimension("length", "l", "meter", "m")
        .unwrap()
        .id();
    let d = m.simple_dimension_mut(id).unwrap();
    let km = SimpleUnit::new("kilometer", "km", &*d, |v| v * 1e3, |v| v / 1e3);
    d.add_other_unit(&km).unwrap();

    assert!(m.simple_dimension(id).unwrap().contains(&Unit::from(&km)));
    assert!(!m.contains_unit(&Unit::from(&km)));
    assert_eq!(
        m.quantity(1, &km).err(),
        Some(UnitError::UnrecognizedUnit("km".to_string()))
    );
}
