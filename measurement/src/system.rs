/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::HashMap;

use log::{debug, warn};

use super::amount::Amount;
use super::dimension::{Dimension, DimensionId, SimpleDimension};
use super::error::UnitError;
use super::parser;
use super::quantity::Quantity;
use super::unit::Unit;

/// Registry of units and simple dimensions, and the only way to
/// obtain quantities.
///
/// Every unit created here, including the base unit of each simple
/// dimension, can be looked up by both its name and its symbol, and
/// so can every simple dimension. Failing operations leave the
/// registry untouched.
#[derive(Default, Debug)]
pub struct MeasurementSystem {
    units_by_name: HashMap<String, Unit>,
    units_by_symbol: HashMap<String, Unit>,
    simple_dimensions: Vec<SimpleDimension>,
    simple_dimensions_by_name: HashMap<String, usize>,
    simple_dimensions_by_symbol: HashMap<String, usize>,
}

impl MeasurementSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a free-standing unit. This never fails: a name or
    /// symbol that is already in use is taken over by the new unit.
    pub fn create_unit<N: Into<String>, S: Into<String>>(
        &mut self,
        name: N,
        symbol: S,
    ) -> Unit {
        let unit = Unit::new(name, symbol);
        if let Some(old) = self
            .units_by_name
            .insert(unit.name().to_string(), unit.clone())
        {
            warn!(
                "unit {} ({}) shadows unit {} ({}) by name",
                unit.name(),
                unit,
                old.name(),
                old
            );
        }
        if let Some(old) = self
            .units_by_symbol
            .insert(unit.symbol().to_string(), unit.clone())
        {
            warn!(
                "unit {} ({}) shadows unit {} ({}) by symbol",
                unit.name(),
                unit,
                old.name(),
                old
            );
        }
        debug!("created unit {} ({})", unit.name(), unit);
        unit
    }

    /// Matches on name or symbol: a unit counts as known when either
    /// of them is registered, even if they belong to different units.
    pub fn contains_unit(&self, unit: &Unit) -> bool {
        self.units_by_name.contains_key(unit.name())
            || self.units_by_symbol.contains_key(unit.symbol())
    }

    pub fn get_unit_by_name(&self, name: &str) -> Result<&Unit, UnitError> {
        self.units_by_name
            .get(name)
            .ok_or_else(|| UnitError::UnitNameNotFound(name.to_string()))
    }

    pub fn get_unit_by_symbol(
        &self,
        symbol: &str,
    ) -> Result<&Unit, UnitError> {
        self.units_by_symbol
            .get(symbol)
            .ok_or_else(|| UnitError::UnitSymbolNotFound(symbol.to_string()))
    }

    /// All units reachable by name or by symbol, each listed once.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units_by_name.values().chain(
            self.units_by_symbol
                .values()
                .filter(move |u| self.units_by_name.get(u.name()) != Some(*u)),
        )
    }

    /// Define a new simple dimension together with its base unit.
    pub fn create_simple_dimension(
        &mut self,
        name: &str,
        symbol: &str,
        base_unit_name: &str,
        base_unit_symbol: &str,
    ) -> Result<&SimpleDimension, UnitError> {
        if self.units_by_name.contains_key(base_unit_name) {
            return Err(UnitError::DuplicateBaseUnitName(
                base_unit_name.to_string(),
            ));
        }

        if self.units_by_symbol.contains_key(base_unit_symbol) {
            return Err(UnitError::DuplicateBaseUnitSymbol(
                base_unit_symbol.to_string(),
            ));
        }

        if self.simple_dimensions_by_name.contains_key(name) {
            return Err(UnitError::DuplicateDimensionName(name.to_string()));
        }

        if self.simple_dimensions_by_symbol.contains_key(symbol) {
            return Err(UnitError::DuplicateDimensionSymbol(
                symbol.to_string(),
            ));
        }

        let dimension = SimpleDimension::new(
            name,
            symbol,
            base_unit_name,
            base_unit_symbol,
        );
        let base_unit = Unit::from(dimension.base_unit());
        let index = self.simple_dimensions.len();

        self.simple_dimensions_by_name.insert(name.to_string(), index);
        self.simple_dimensions_by_symbol
            .insert(symbol.to_string(), index);
        self.units_by_name
            .insert(base_unit_name.to_string(), base_unit.clone());
        self.units_by_symbol
            .insert(base_unit_symbol.to_string(), base_unit);

        debug!(
            "created simple dimension {} ({}) with base unit {} ({})",
            name, symbol, base_unit_name, base_unit_symbol
        );
        self.simple_dimensions.push(dimension);
        Ok(&self.simple_dimensions[index])
    }

    pub fn get_simple_dimension_by_name(
        &self,
        name: &str,
    ) -> Result<&SimpleDimension, UnitError> {
        self.simple_dimensions_by_name
            .get(name)
            .map(|i| &self.simple_dimensions[*i])
            .ok_or_else(|| UnitError::DimensionNameNotFound(name.to_string()))
    }

    pub fn get_simple_dimension_by_symbol(
        &self,
        symbol: &str,
    ) -> Result<&SimpleDimension, UnitError> {
        self.simple_dimensions_by_symbol
            .get(symbol)
            .map(|i| &self.simple_dimensions[*i])
            .ok_or_else(|| {
                UnitError::DimensionSymbolNotFound(symbol.to_string())
            })
    }

    pub fn simple_dimension(
        &self,
        id: DimensionId,
    ) -> Result<&SimpleDimension, UnitError> {
        self.simple_dimensions
            .iter()
            .find(|d| d.id() == id)
            .ok_or(UnitError::DimensionNotFound(id))
    }

    /// Mutable access to a dimension. Units attached directly to the
    /// dimension are not registered here; see
    /// [`MeasurementSystem::add_other_unit`].
    pub fn simple_dimension_mut(
        &mut self,
        id: DimensionId,
    ) -> Result<&mut SimpleDimension, UnitError> {
        self.simple_dimensions
            .iter_mut()
            .find(|d| d.id() == id)
            .ok_or(UnitError::DimensionNotFound(id))
    }

    pub fn simple_dimensions(
        &self,
    ) -> impl Iterator<Item = &SimpleDimension> {
        self.simple_dimensions.iter()
    }

    /// Resolve the dimension a unit belongs to. Free-standing units
    /// have none.
    pub fn dimension_of(
        &self,
        unit: &Unit,
    ) -> Result<Option<&SimpleDimension>, UnitError> {
        unit.dimension()
            .map(|id| self.simple_dimension(id))
            .transpose()
    }

    /// Attach a simple unit to the named dimension and register it,
    /// so that it can be used in quantities. The unit must have been
    /// created for that dimension, and its name and symbol must not be
    /// in use by any registered unit.
    pub fn add_other_unit<U: Into<Unit>>(
        &mut self,
        dimension_name: &str,
        unit: U,
    ) -> Result<(), UnitError> {
        let index = *self
            .simple_dimensions_by_name
            .get(dimension_name)
            .ok_or_else(|| {
                UnitError::DimensionNameNotFound(dimension_name.to_string())
            })?;
        let dimension = &self.simple_dimensions[index];
        let unit = dimension.check_other_unit(unit.into())?;

        if unit.dimension() != dimension.id() {
            return Err(UnitError::TypeError(format!(
                "unit {} was not created for dimension {}",
                unit, dimension
            )));
        }

        if self.units_by_name.contains_key(unit.name()) {
            return Err(UnitError::DuplicateUnitName(unit.name().to_string()));
        }

        if self.units_by_symbol.contains_key(unit.symbol()) {
            return Err(UnitError::DuplicateUnitSymbol(
                unit.symbol().to_string(),
            ));
        }

        self.units_by_name
            .insert(unit.name().to_string(), Unit::from(&unit));
        self.units_by_symbol
            .insert(unit.symbol().to_string(), Unit::from(&unit));
        self.simple_dimensions[index].insert_other_unit(unit);
        Ok(())
    }

    pub fn quantity<A: Into<Amount>, U: Into<Unit>>(
        &self,
        amount: A,
        unit: U,
    ) -> Result<Quantity, UnitError> {
        let unit = unit.into();
        if !self.contains_unit(&unit) {
            return Err(UnitError::UnrecognizedUnit(unit.to_string()));
        }
        Ok(Quantity::new(amount.into(), unit))
    }

    /// Parse a quantity such as "45.9 m". The unit is looked up by
    /// symbol.
    pub fn parse_quantity(&self, input: &str) -> Result<Quantity, UnitError> {
        let (amount, symbol) = parser::parse_quantity(input)?;
        let unit = self
            .units_by_symbol
            .get(symbol)
            .ok_or_else(|| UnitError::UnrecognizedUnit(symbol.to_string()))?;
        self.quantity(amount, unit)
    }
}
