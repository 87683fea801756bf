/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use super::error::UnitError;
use super::unit::{BaseUnit, SimpleUnit, Unit};

static NEXT_DIMENSION_ID: AtomicU64 = AtomicU64::new(0);

/// Identifies a dimension. Units refer back to their dimension
/// through this id instead of holding on to the dimension itself.
/// Ids are never reused, so two dimensions never compare equal,
/// even when they live in different measurement systems.
#[derive(PartialEq, PartialOrd, Eq, Ord, Hash, Clone, Copy, Debug)]
pub struct DimensionId(u64);

impl DimensionId {
    fn next() -> Self {
        Self(NEXT_DIMENSION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for DimensionId {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "#{}", self.0)
    }
}

/// A category of measurable quantity (length, mass, ...).
pub trait Dimension {
    fn id(&self) -> DimensionId;
    fn name(&self) -> &str;
    fn symbol(&self) -> &str;
}

/// A dimension anchored by a single base unit. Other units of the
/// dimension carry conversions to and from that base.
#[derive(Debug)]
pub struct SimpleDimension {
    id: DimensionId,
    name: String,
    symbol: String,
    base_unit: BaseUnit,
    other_units: Vec<SimpleUnit>,
    other_units_by_name: HashMap<String, usize>,
    other_units_by_symbol: HashMap<String, usize>,
}

impl SimpleDimension {
    pub(crate) fn new(
        name: &str,
        symbol: &str,
        base_unit_name: &str,
        base_unit_symbol: &str,
    ) -> Self {
        let id = DimensionId::next();
        SimpleDimension {
            id,
            name: name.to_string(),
            symbol: symbol.to_string(),
            base_unit: BaseUnit::new(base_unit_name, base_unit_symbol, id),
            other_units: Vec::new(),
            other_units_by_name: HashMap::new(),
            other_units_by_symbol: HashMap::new(),
        }
    }

    pub fn base_unit(&self) -> &BaseUnit {
        &self.base_unit
    }

    /// Attach another unit to this dimension. Only simple units are
    /// accepted, and neither their name nor their symbol may already
    /// be in use within the dimension (base unit included).
    ///
    /// This does not register the unit with the measurement system;
    /// use [`MeasurementSystem::add_other_unit`] for that.
    ///
    /// [`MeasurementSystem::add_other_unit`]: crate::MeasurementSystem::add_other_unit
    pub fn add_other_unit<U: Into<Unit>>(
        &mut self,
        unit: U,
    ) -> Result<(), UnitError> {
        let unit = self.check_other_unit(unit.into())?;
        self.insert_other_unit(unit);
        Ok(())
    }

    pub(crate) fn check_other_unit(
        &self,
        unit: Unit,
    ) -> Result<SimpleUnit, UnitError> {
        let unit = match unit {
            Unit::Simple(unit) => unit,
            Unit::Base(unit) if unit == self.base_unit => {
                return Err(UnitError::DuplicateBaseUnit(unit.to_string()))
            }
            unit => {
                return Err(UnitError::TypeError(format!(
                    "expected a simple unit, got {} {}",
                    unit.kind(),
                    unit
                )))
            }
        };

        if self.other_units_by_name.contains_key(unit.name())
            || self.base_unit.name() == unit.name()
        {
            return Err(UnitError::DuplicateUnitName(unit.name().to_string()));
        }

        if self.other_units_by_symbol.contains_key(unit.symbol())
            || self.base_unit.symbol() == unit.symbol()
        {
            return Err(UnitError::DuplicateUnitSymbol(
                unit.symbol().to_string(),
            ));
        }

        Ok(unit)
    }

    pub(crate) fn insert_other_unit(&mut self, unit: SimpleUnit) {
        debug!("adding unit {} to dimension {}", unit.name(), self.name);
        let index = self.other_units.len();
        self.other_units_by_name
            .insert(unit.name().to_string(), index);
        self.other_units_by_symbol
            .insert(unit.symbol().to_string(), index);
        self.other_units.push(unit);
    }

    pub fn other_units(&self) -> impl Iterator<Item = &SimpleUnit> {
        self.other_units.iter()
    }

    pub fn get_other_unit_by_name(&self, name: &str) -> Option<&SimpleUnit> {
        self.other_units_by_name
            .get(name)
            .map(|i| &self.other_units[*i])
    }

    pub fn get_other_unit_by_symbol(
        &self,
        symbol: &str,
    ) -> Option<&SimpleUnit> {
        self.other_units_by_symbol
            .get(symbol)
            .map(|i| &self.other_units[*i])
    }

    /// Whether the unit is this dimension's base unit or one of the
    /// units attached to it.
    pub fn contains(&self, unit: &Unit) -> bool {
        match unit {
            Unit::Base(unit) => *unit == self.base_unit,
            Unit::Simple(unit) => {
                self.get_other_unit_by_name(unit.name()) == Some(unit)
            }
            Unit::Plain(_) => false,
        }
    }
}

impl Dimension for SimpleDimension {
    fn id(&self) -> DimensionId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl Display for SimpleDimension {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name)
    }
}

/// Placeholder for dimensions composed of others (velocity =
/// length / time). Composition itself is not supported.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct CompoundDimension {
    id: DimensionId,
    name: String,
    symbol: String,
}

impl CompoundDimension {
    pub fn new<N: Into<String>, S: Into<String>>(name: N, symbol: S) -> Self {
        CompoundDimension {
            id: DimensionId::next(),
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

impl Dimension for CompoundDimension {
    fn id(&self) -> DimensionId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl Display for CompoundDimension {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name)
    }
}
