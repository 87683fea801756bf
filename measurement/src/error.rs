/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use thiserror::Error;

use super::dimension::DimensionId;

#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum UnitError {
    #[error("Wrong unit type: {0}")]
    TypeError(String),
    #[error("Attempted to create a new Simple Dimension with an already existent Base Unit Name: {0}")]
    DuplicateBaseUnitName(String),
    #[error("Attempted to create a new Simple Dimension with an already existent Base Unit Symbol: {0}")]
    DuplicateBaseUnitSymbol(String),
    #[error("Attempted to create a new Simple Dimension with an already existent Name: {0}")]
    DuplicateDimensionName(String),
    #[error("Attempted to create a new Simple Dimension with an already existent Symbol: {0}")]
    DuplicateDimensionSymbol(String),
    #[error("Attempted to add a unit with an already existent Name: {0}")]
    DuplicateUnitName(String),
    #[error("Attempted to add a unit with an already existent Symbol: {0}")]
    DuplicateUnitSymbol(String),
    #[error("Attempted to add the base unit {0} as another unit of its own dimension")]
    DuplicateBaseUnit(String),
    #[error("Unrecognized Unit encountered: {0}")]
    UnrecognizedUnit(String),
    #[error("No unit named {0:?}")]
    UnitNameNotFound(String),
    #[error("No unit with symbol {0:?}")]
    UnitSymbolNotFound(String),
    #[error("No simple dimension named {0:?}")]
    DimensionNameNotFound(String),
    #[error("No simple dimension with symbol {0:?}")]
    DimensionSymbolNotFound(String),
    #[error("Unknown simple dimension {0}")]
    DimensionNotFound(DimensionId),
    #[error("Quantity parse error: {0}")]
    ParseError(String),
}

/// Broad classification of registry failures. None of them are
/// recoverable by retrying: the caller has to fix its input.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ErrorKind {
    TypeMismatch,
    Duplicate,
    Unrecognized,
    NotFound,
    Parse,
}

impl UnitError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeError(_) => ErrorKind::TypeMismatch,
            Self::DuplicateBaseUnitName(_)
            | Self::DuplicateBaseUnitSymbol(_)
            | Self::DuplicateDimensionName(_)
            | Self::DuplicateDimensionSymbol(_)
            | Self::DuplicateUnitName(_)
            | Self::DuplicateUnitSymbol(_)
            | Self::DuplicateBaseUnit(_) => ErrorKind::Duplicate,
            Self::UnrecognizedUnit(_) => ErrorKind::Unrecognized,
            Self::UnitNameNotFound(_)
            | Self::UnitSymbolNotFound(_)
            | Self::DimensionNameNotFound(_)
            | Self::DimensionSymbolNotFound(_)
            | Self::DimensionNotFound(_) => ErrorKind::NotFound,
            Self::ParseError(_) => ErrorKind::Parse,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        self.kind() == ErrorKind::Duplicate
    }
}
