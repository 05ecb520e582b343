//! Parsers for fraction literals such as `3`, `-4/7` or `5/-2`.

use crate::{Error, Fraction, Result};
use chumsky::prelude::*;
use std::str::FromStr;

type Extra<'a> = extra::Err<Rich<'a, char>>;

fn integer<'a>() -> impl Parser<'a, &'a str, i64, Extra<'a>> + Clone {
    one_of("+-")
        .or_not()
        .then(text::int(10))
        .try_map(|(sign, digits): (Option<char>, &str), span| {
            let n = digits
                .parse::<i128>()
                .map_err(|e| Rich::custom(span, e))?;
            let n = if sign == Some('-') { -n } else { n };
            i64::try_from(n).map_err(|_| Rich::custom(span, "integer out of range"))
        })
}

/// A single fraction literal: an integer, optionally followed by `/` and a
/// non-zero denominator.
pub fn fraction<'a>() -> impl Parser<'a, &'a str, Fraction, Extra<'a>> + Clone {
    integer()
        .then(just('/').ignore_then(integer()).or_not())
        .try_map(|(num, den), span| {
            Fraction::new(num, den.unwrap_or(1)).map_err(|e| Rich::custom(span, e))
        })
}

/// Whitespace-separated fraction literals up to the end of input.
pub fn entries<'a>() -> impl Parser<'a, &'a str, Vec<Fraction>, Extra<'a>> {
    fraction()
        .padded()
        .repeated()
        .collect::<Vec<_>>()
        .padded()
        .then_ignore(end())
}

fn join_errors(errs: Vec<Rich<'_, char>>) -> Error {
    let msg = errs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Error::Parse(msg)
}

/// Parses a line of matrix entries.
pub fn parse_entries(input: &str) -> Result<Vec<Fraction>> {
    entries().parse(input).into_result().map_err(join_errors)
}

impl FromStr for Fraction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Fraction> {
        fraction()
            .padded()
            .then_ignore(end())
            .parse(s)
            .into_result()
            .map_err(join_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(num: i64, den: i64) -> Fraction {
        Fraction::new(num, den).unwrap()
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!("3".parse::<Fraction>(), Ok(frac(3, 1)));
        assert_eq!("-4/6".parse::<Fraction>(), Ok(frac(-2, 3)));
        assert_eq!("+5/-2".parse::<Fraction>(), Ok(frac(-5, 2)));
        assert_eq!(" 0/9 ".parse::<Fraction>(), Ok(Fraction::ZERO));
        assert_eq!(
            "-9223372036854775808".parse::<Fraction>(),
            Ok(Fraction::from(i64::MIN))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("1/0".parse::<Fraction>(), Err(Error::Parse(_))));
        assert!(matches!("1/".parse::<Fraction>(), Err(Error::Parse(_))));
        assert!(matches!("x".parse::<Fraction>(), Err(Error::Parse(_))));
        assert!(matches!("1 2".parse::<Fraction>(), Err(Error::Parse(_))));
        assert!(matches!(
            "9223372036854775808".parse::<Fraction>(),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_parse_entries() {
        assert_eq!(
            parse_entries("4 5 6 7\t8 -3/2 0 0").unwrap(),
            vec![
                frac(4, 1),
                frac(5, 1),
                frac(6, 1),
                frac(7, 1),
                frac(8, 1),
                frac(-3, 2),
                Fraction::ZERO,
                Fraction::ZERO,
            ]
        );
        assert_eq!(parse_entries("   ").unwrap(), vec![]);
        assert!(parse_entries("1 2/0 3").is_err());
        assert!(parse_entries("1, 2").is_err());
    }
}
