/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

use super::dimension::{Dimension, DimensionId};

/// Conversion between a unit and the base unit of its dimension.
pub type Conversion = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Any unit known to a measurement system: free-standing units,
/// base units anchoring a simple dimension and the other units of
/// such a dimension.
///
/// Units always display as their symbol.
#[derive(PartialEq, Clone, Debug)]
pub enum Unit {
    Plain(PlainUnit),
    Base(BaseUnit),
    Simple(SimpleUnit),
}

impl Unit {
    /// A free-standing unit. Note that it is only usable in a
    /// quantity once a measurement system knows about it.
    pub fn new<N: Into<String>, S: Into<String>>(name: N, symbol: S) -> Self {
        Unit::Plain(PlainUnit::new(name, symbol))
    }

    pub fn name(&self) -> &str {
        match self {
            Unit::Plain(u) => u.name(),
            Unit::Base(u) => u.name(),
            Unit::Simple(u) => u.name(),
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            Unit::Plain(u) => u.symbol(),
            Unit::Base(u) => u.symbol(),
            Unit::Simple(u) => u.symbol(),
        }
    }

    /// The dimension this unit belongs to, if any.
    pub fn dimension(&self) -> Option<DimensionId> {
        match self {
            Unit::Plain(_) => None,
            Unit::Base(u) => Some(u.dimension()),
            Unit::Simple(u) => Some(u.dimension()),
        }
    }

    pub fn as_base(&self) -> Option<&BaseUnit> {
        match self {
            Unit::Base(u) => Some(u),
            _ => None,
        }
    }

    pub fn as_simple(&self) -> Option<&SimpleUnit> {
        match self {
            Unit::Simple(u) => Some(u),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Unit::Plain(_) => "unit",
            Unit::Base(_) => "base unit",
            Unit::Simple(_) => "simple unit",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}

impl From<PlainUnit> for Unit {
    fn from(unit: PlainUnit) -> Self {
        Unit::Plain(unit)
    }
}

impl From<BaseUnit> for Unit {
    fn from(unit: BaseUnit) -> Self {
        Unit::Base(unit)
    }
}

impl From<&BaseUnit> for Unit {
    fn from(unit: &BaseUnit) -> Self {
        Unit::Base(unit.clone())
    }
}

impl From<SimpleUnit> for Unit {
    fn from(unit: SimpleUnit) -> Self {
        Unit::Simple(unit)
    }
}

impl From<&SimpleUnit> for Unit {
    fn from(unit: &SimpleUnit) -> Self {
        Unit::Simple(unit.clone())
    }
}

impl From<&Unit> for Unit {
    fn from(unit: &Unit) -> Self {
        unit.clone()
    }
}

/// A unit not attached to any dimension.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct PlainUnit {
    name: String,
    symbol: String,
}

impl PlainUnit {
    pub fn new<N: Into<String>, S: Into<String>>(name: N, symbol: S) -> Self {
        PlainUnit {
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl Display for PlainUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol)
    }
}

/// The reference unit of a simple dimension. Only the dimension
/// creates its base unit, so a base unit equals no other unit than
/// (clones of) itself.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct BaseUnit {
    name: String,
    symbol: String,
    dimension: DimensionId,
}

impl BaseUnit {
    pub(crate) fn new(
        name: &str,
        symbol: &str,
        dimension: DimensionId,
    ) -> Self {
        BaseUnit {
            name: name.to_string(),
            symbol: symbol.to_string(),
            dimension,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn dimension(&self) -> DimensionId {
        self.dimension
    }
}

impl Display for BaseUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol)
    }
}

/// A non-base unit of a dimension. The conversion functions are
/// kept as given; they are never evaluated here.
#[derive(Clone)]
pub struct SimpleUnit {
    name: String,
    symbol: String,
    dimension: DimensionId,
    to_base: Conversion,
    from_base: Conversion,
}

impl SimpleUnit {
    pub fn new<D, F, G>(
        name: &str,
        symbol: &str,
        dimension: &D,
        to_base: F,
        from_base: G,
    ) -> Self
    where
        D: Dimension + ?Sized,
        F: Fn(f64) -> f64 + Send + Sync + 'static,
        G: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        SimpleUnit {
            name: name.to_string(),
            symbol: symbol.to_string(),
            dimension: dimension.id(),
            to_base: Arc::new(to_base),
            from_base: Arc::new(from_base),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn dimension(&self) -> DimensionId {
        self.dimension
    }

    pub fn to_base(&self) -> &Conversion {
        &self.to_base
    }

    pub fn from_base(&self) -> &Conversion {
        &self.from_base
    }
}

/* Closures have no equality; clones share them. */
impl PartialEq for SimpleUnit {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.symbol == other.symbol
            && self.dimension == other.dimension
            && Arc::ptr_eq(&self.to_base, &other.to_base)
            && Arc::ptr_eq(&self.from_base, &other.from_base)
    }
}

impl Debug for SimpleUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.debug_struct("SimpleUnit")
            .field("name", &self.name)
            .field("symbol", &self.symbol)
            .field("dimension", &self.dimension)
            .finish_non_exhaustive()
    }
}

impl Display for SimpleUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol)
    }
}
