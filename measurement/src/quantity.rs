/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use super::amount::Amount;
use super::dimension::DimensionId;
use super::unit::Unit;

/// An amount expressed in a unit. Quantities are only handed out by
/// a measurement system, after checking that it knows the unit.
#[derive(PartialEq, Clone, Debug)]
pub struct Quantity {
    amount: Amount,
    unit: Unit,
}

impl Quantity {
    pub(crate) fn new(amount: Amount, unit: Unit) -> Self {
        Quantity { amount, unit }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn dimension(&self) -> Option<DimensionId> {
        self.unit.dimension()
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} {}", self.amount, self.unit)
    }
}
