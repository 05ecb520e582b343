use crate::{Error, Result};
use gcd::Gcd;
use std::cmp::Ordering;

/// An exact rational number.
///
/// Fractions are always stored in lowest terms with a positive denominator,
/// so structural equality is value equality. Arithmetic is carried out on
/// `i128` intermediates and fails with [`Error::Overflow`] when a canonical
/// result does not fit back into `i64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: i64,
    den: i64,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction { num: 0, den: 1 };
    pub const ONE: Fraction = Fraction { num: 1, den: 1 };

    /// Creates a fraction from a numerator and a denominator and reduces it.
    pub fn new(num: i64, den: i64) -> Result<Fraction> {
        if den == 0 {
            return Err(Error::ZeroDenominator { numerator: num });
        }
        canonicalize(num as i128, den as i128)
    }

    pub const fn from_integer(n: i64) -> Fraction {
        Fraction { num: n, den: 1 }
    }

    pub const fn numer(&self) -> i64 {
        self.num
    }

    pub const fn denom(&self) -> i64 {
        self.den
    }

    pub const fn is_zero(&self) -> bool {
        self.num == 0
    }

    pub const fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }

    pub const fn is_negative(&self) -> bool {
        self.num < 0
    }

    pub const fn is_integer(&self) -> bool {
        self.den == 1
    }

    pub fn checked_add(self, rhs: Fraction) -> Result<Fraction> {
        let (a, b, c, d) = self.widen(rhs);
        canonicalize(a * d + c * b, b * d)
    }

    pub fn checked_sub(self, rhs: Fraction) -> Result<Fraction> {
        let (a, b, c, d) = self.widen(rhs);
        canonicalize(a * d - c * b, b * d)
    }

    pub fn checked_mul(self, rhs: Fraction) -> Result<Fraction> {
        let (a, b, c, d) = self.widen(rhs);
        canonicalize(a * c, b * d)
    }

    pub fn checked_div(self, rhs: Fraction) -> Result<Fraction> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (a, b, c, d) = self.widen(rhs);
        canonicalize(a * d, b * c)
    }

    pub fn checked_neg(self) -> Result<Fraction> {
        canonicalize(-(self.num as i128), self.den as i128)
    }

    /// Returns the nearest `f64`; only meant for display and diagnostics.
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    fn widen(self, rhs: Fraction) -> (i128, i128, i128, i128) {
        (
            self.num as i128,
            self.den as i128,
            rhs.num as i128,
            rhs.den as i128,
        )
    }
}

/// Reduces `num/den` to lowest terms with a positive denominator.
///
/// The caller guarantees `den != 0`.
fn canonicalize(mut num: i128, mut den: i128) -> Result<Fraction> {
    let gcd = num.unsigned_abs().gcd(den.unsigned_abs()) as i128;
    if gcd > 1 {
        num /= gcd;
        den /= gcd;
    }
    if den < 0 {
        num = -num;
        den = -den;
    }
    Ok(Fraction {
        num: i64::try_from(num).map_err(|_| Error::Overflow)?,
        den: i64::try_from(den).map_err(|_| Error::Overflow)?,
    })
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::ZERO
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Fraction::from_integer(n)
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplication keeps the order.
        let lhs = self.num as i128 * other.den as i128;
        let rhs = other.num as i128 * self.den as i128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
