/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod amount;
pub mod dimension;
pub mod error;
pub mod parser;
pub mod quantity;
pub mod system;
pub mod unit;

pub use amount::Amount;
pub use dimension::{
    CompoundDimension, Dimension, DimensionId, SimpleDimension,
};
pub use error::{ErrorKind, UnitError};
pub use quantity::Quantity;
pub use system::MeasurementSystem;
pub use unit::{BaseUnit, Conversion, PlainUnit, SimpleUnit, Unit};
