/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

/// The numeric part of a quantity: either an integer or a floating
/// point number. Other types are rejected at compile time:
///
/// ```compile_fail
/// use measurement::MeasurementSystem;
///
/// let mut system = MeasurementSystem::new();
/// let watt = system.create_unit("watt", "W");
/// system.quantity("3", watt).unwrap();
/// ```
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum Amount {
    Integer(i64),
    Float(f64),
}

impl Amount {
    pub fn as_f64(&self) -> f64 {
        match self {
            Amount::Integer(n) => *n as f64,
            Amount::Float(n) => *n,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Amount::Integer(_))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Amount::Integer(n) => write!(f, "{}", n),
            Amount::Float(n) => write_float(f, *n),
        }
    }
}

/* Shortest round-trip form with a decimal point (3.0, not 3), a signed
 * two-digit exponent (1e+20, 1e-05) and lowercase nan / inf. */
fn write_float(f: &mut Formatter, n: f64) -> Result<(), fmt::Error> {
    if n.is_nan() {
        return write!(f, "nan");
    }
    if n.is_infinite() {
        return write!(f, "{}inf", if n < 0.0 { "-" } else { "" });
    }
    let repr = format!("{:?}", n);
    match repr.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => write!(f, "{}", repr),
    }
}

macro_rules! integer_amount {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Amount {
                fn from(n: $t) -> Self {
                    Amount::Integer(i64::from(n))
                }
            }
        )*
    };
}

integer_amount!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Amount {
    fn from(n: f32) -> Self {
        Amount::Float(f64::from(n))
    }
}

impl From<f64> for Amount {
    fn from(n: f64) -> Self {
        Amount::Float(n)
    }
}

#[cfg(test)]
mod tests {
    use super::Amount;

    #[test]
    fn display() {
        assert_eq!(Amount::from(45.9).to_string(), "45.9");
        assert_eq!(Amount::from(3).to_string(), "3");
        assert_eq!(Amount::from(3.0).to_string(), "3.0");
        assert_eq!(Amount::from(-0.5).to_string(), "-0.5");
    }

    #[test]
    fn display_exponent_and_non_finite() {
        assert_eq!(Amount::from(1e20).to_string(), "1e+20");
        assert_eq!(Amount::from(1.5e20).to_string(), "1.5e+20");
        assert_eq!(Amount::from(1e-5).to_string(), "1e-05");
        assert_eq!(Amount::from(-2.5e-123).to_string(), "-2.5e-123");
        assert_eq!(Amount::from(1e15).to_string(), "1000000000000000.0");
        assert_eq!(Amount::from(0.0001).to_string(), "0.0001");
        assert_eq!(Amount::from(f64::NAN).to_string(), "nan");
        assert_eq!(Amount::from(f64::INFINITY).to_string(), "inf");
        assert_eq!(Amount::from(f64::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn conversions() {
        assert_eq!(Amount::from(3u8), Amount::Integer(3));
        assert_eq!(Amount::from(-7i64), Amount::Integer(-7));
        assert_eq!(Amount::from(3.5f32), Amount::Float(3.5));
        assert!(Amount::from(3).is_integer());
        assert!(!Amount::from(3.5).is_integer());
        assert_eq!(Amount::from(4).as_f64(), 4.0);
    }
}
