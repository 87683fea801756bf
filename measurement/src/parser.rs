/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use nom::{
    self,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{digit0, digit1, one_of, space0},
    combinator::{map_res, opt, recognize},
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};

use super::amount::Amount;
use super::error::UnitError;

/// Split a quantity string ("45.9 m", "3kg") into its amount and
/// unit symbol. Resolving the symbol is up to the caller.
pub fn parse_quantity(input: &str) -> Result<(Amount, &str), UnitError> {
    match quantity(input) {
        Ok(("", q)) => Ok(q),
        Ok((r, _)) => {
            Err(UnitError::ParseError(format!("Leftover input: {}", r)))
        }
        Err(err) => Err(UnitError::ParseError(format!("{}", err))),
    }
}

/// Parser for quantities (number and unit symbol).
pub fn quantity(input: &str) -> IResult<&str, (Amount, &str)> {
    preceded(
        space0,
        terminated(pair(terminated(amount, space0), symbol), space0),
    )(input)
}

/// Parser for amounts. Numbers without fraction or exponent are
/// read as integers, as long as they fit.
pub fn amount(input: &str) -> IResult<&str, Amount> {
    map_res(number, |s: &str| match s.parse::<i64>() {
        Ok(n) => Ok(Amount::Integer(n)),
        Err(_) => s.parse::<f64>().map(Amount::Float),
    })(input)
}

/// Parser for unit symbols: anything up to the next whitespace.
pub fn symbol(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace())(input)
}

/* Unlike nom's recognize_float, a dangling exponent marker is left
for the symbol ("5em" is 5 em). */
fn number(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

fn char<'r>(t: char) -> impl Fn(&'r str) -> IResult<&'r str, char> {
    nom::character::complete::char(t)
}
