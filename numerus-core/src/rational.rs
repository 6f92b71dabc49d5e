use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use thiserror::Error;

/// Significant bits kept in the integer quotient [`Rational::to_f64`] rounds.
const QUOTIENT_BITS: i64 = 64;

/// An exact fraction, always kept in lowest terms.
///
/// The denominator is strictly positive and the sign lives in the numerator.
/// Zero is always stored as `0/1`, so structural equality is value equality.
///
/// Both parts are arbitrary precision, which lets Gaussian elimination grow
/// entries as large as it needs to without overflow.
///
/// # Examples
/// ```
/// use numerus_core::Rational;
///
/// let half = Rational::new(2, 4).unwrap();
/// let third = Rational::new(-1, -3).unwrap();
///
/// assert_eq!((&half + &third).to_string(), "5/6");
/// assert_eq!((half * 2).to_string(), "1");
/// assert!(Rational::new(1, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Creates the reduced fraction `numer / denom`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if `denom` is zero.
    pub fn new(
        numer: impl Into<BigInt>,
        denom: impl Into<BigInt>,
    ) -> Result<Self, RationalError> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::reduced(numer.into(), denom))
    }

    /// Creates the integer `value / 1`.
    #[must_use]
    pub fn integer(value: impl Into<BigInt>) -> Self {
        Self {
            numer: value.into(),
            denom: BigInt::one(),
        }
    }

    /// The rational zero.
    #[must_use]
    pub fn zero() -> Self {
        Self::integer(0)
    }

    /// The rational one.
    #[must_use]
    pub fn one() -> Self {
        Self::integer(1)
    }

    /// Promotes a finite real through its shortest decimal representation.
    ///
    /// `2.5` becomes `5/2` and `0.1` becomes `1/10`, so any decimal a user
    /// can type converts exactly.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::NonFinite`] for `NaN` or infinite input.
    pub fn from_f64(value: f64) -> Result<Self, RationalError> {
        if !value.is_finite() {
            return Err(RationalError::NonFinite(value));
        }
        // `Display` for f64 never uses exponent notation.
        parse_decimal(&value.to_string())
    }

    /// Reduces `numer / denom`; `denom` must be nonzero.
    fn reduced(mut numer: BigInt, mut denom: BigInt) -> Self {
        if numer.is_zero() {
            return Self::zero();
        }

        let gcd = numer.gcd(&denom);
        numer /= &gcd;
        denom /= &gcd;

        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }

        Self { numer, denom }
    }

    /// Returns the numerator. It carries the sign.
    #[must_use]
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// Returns the denominator, always strictly positive.
    #[must_use]
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Returns `1 / self`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if `self` is zero.
    pub fn recip(&self) -> Result<Self, RationalError> {
        Self::new(self.denom.clone(), self.numer.clone())
    }

    /// Returns `self / rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: impl Into<Rational>) -> Result<Self, RationalError> {
        let rhs = rhs.into();
        Self::new(&self.numer * rhs.denom, &self.denom * rhs.numer)
    }

    /// Lossy conversion to the nearest `f64`.
    ///
    /// Divides in integers first, scaled so the quotient keeps about 64
    /// significant bits, then applies the power-of-two scale. Parts far wider
    /// than an `f64` can hold still convert accurately, and values outside its
    /// range saturate to infinity or zero.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }

        let magnitude = self.numer.abs();
        let scale = QUOTIENT_BITS + bit_len(&self.denom) - bit_len(&magnitude);
        let quotient = if scale >= 0 {
            (magnitude << scale.unsigned_abs()) / &self.denom
        } else {
            magnitude / (&self.denom << scale.unsigned_abs())
        };

        let value = scale_by_pow2(quotient.to_f64().unwrap_or(f64::NAN), -scale);
        if self.numer.is_negative() {
            -value
        } else {
            value
        }
    }
}

#[allow(clippy::cast_possible_wrap)]
fn bit_len(value: &BigInt) -> i64 {
    value.bits() as i64
}

/// Multiplies by `2^exp` in steps that keep each factor finite.
fn scale_by_pow2(mut value: f64, mut exp: i64) -> f64 {
    while exp != 0 && value.is_finite() && value != 0.0 {
        let step = exp.clamp(-1000, 1000);
        #[allow(clippy::cast_possible_truncation)]
        let factor = 2f64.powi(step as i32);
        value *= factor;
        exp -= step;
    }
    value
}

/// Errors that can occur when constructing or dividing a [`Rational`].
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum RationalError {
    /// A denominator or divisor was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A real to promote was `NaN` or infinite.
    #[error("value is not finite: {0}")]
    NonFinite(f64),

    /// Text is not an integer, decimal or `a/b` fraction.
    #[error("invalid rational: {0:?}")]
    Parse(String),
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    /// Parses `"-7"`, `"2.50"` or `"3/-4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once('/') {
            Some((numer, denom)) => {
                parse_decimal(numer.trim())?.checked_div(parse_decimal(denom.trim())?)
            }
            None => parse_decimal(s),
        }
    }
}

/// Parses an optionally signed decimal such as `-12.5` or `.25`.
fn parse_decimal(text: &str) -> Result<Rational, RationalError> {
    let invalid = || RationalError::Parse(text.to_string());

    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if int_part.len() + frac_part.len() == 0 || !all_digits(int_part) || !all_digits(frac_part) {
        return Err(invalid());
    }

    let digits = format!("{int_part}{frac_part}");
    let mut numer = BigInt::from_str(&digits).map_err(|_| invalid())?;
    if negative {
        numer = -numer;
    }
    let denom = num_traits::pow(BigInt::from(10), frac_part.len());

    Ok(Rational::reduced(numer, denom))
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::integer(value)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Self::integer(value)
    }
}

impl From<&Rational> for Rational {
    fn from(value: &Rational) -> Self {
        value.clone()
    }
}

impl TryFrom<f64> for Rational {
    type Error = RationalError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl<T: Into<Rational>> Add<T> for Rational {
    type Output = Rational;

    fn add(self, rhs: T) -> Rational {
        let rhs = rhs.into();
        Rational::reduced(
            self.numer * &rhs.denom + rhs.numer * &self.denom,
            self.denom * rhs.denom,
        )
    }
}

impl<T: Into<Rational>> Add<T> for &Rational {
    type Output = Rational;

    fn add(self, rhs: T) -> Rational {
        self.clone() + rhs
    }
}

impl<T: Into<Rational>> Sub<T> for Rational {
    type Output = Rational;

    fn sub(self, rhs: T) -> Rational {
        let rhs: Rational = rhs.into();
        self + -rhs
    }
}

impl<T: Into<Rational>> Sub<T> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: T) -> Rational {
        self.clone() - rhs
    }
}

impl<T: Into<Rational>> Mul<T> for Rational {
    type Output = Rational;

    fn mul(self, rhs: T) -> Rational {
        let rhs = rhs.into();
        Rational::reduced(self.numer * rhs.numer, self.denom * rhs.denom)
    }
}

impl<T: Into<Rational>> Mul<T> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: T) -> Rational {
        self.clone() * rhs
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        -self.clone()
    }
}

impl Ord for Rational {
    /// Cross-multiplies; valid because denominators are always positive.
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rational {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rational {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
