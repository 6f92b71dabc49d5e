//! Polynomial degree classification.
//!
//! The classifier is lexical: it looks for `x^n` terms rather than expanding
//! products, so `x^2*x^3` reports `3`. Its job is to gate which inputs the
//! root finders accept, not to do algebra.

use thiserror::Error;

use crate::expr::{Expression, Token, tokenize};

/// Default cap applied by [`DegreePolicy::default`].
pub const DEFAULT_MAX_DEGREE: u32 = 5;

/// Reports the polynomial degree of `text`, or `None` if it is not a
/// polynomial the classifier recognizes.
///
/// - The largest exponent of any `x^n` (or `x**n`) term governs.
/// - Without power terms, a bare `x` gives degree 1.
/// - Text without `x` that compiles as an expression is a constant, degree 0.
///
/// Text that does not compile, or with a power of `x` whose exponent is not
/// an unsigned integer literal (`x^2.5`, `x^x`, `x^-1`), is `None`.
///
/// # Examples
/// ```
/// use numerus_core::degree::degree;
///
/// assert_eq!(degree("x^3-9*x+3"), Some(3));
/// assert_eq!(degree("2x + 1"), Some(1));
/// assert_eq!(degree("5"), Some(0));
/// assert_eq!(degree("x^7"), Some(7));
/// assert_eq!(degree("sin(x)"), None);
/// ```
#[must_use]
pub fn degree(text: &str) -> Option<u32> {
    Expression::compile(text).ok()?;
    let tokens: Vec<Token> = tokenize(text).ok()?.into_iter().map(|l| l.token).collect();

    let mut max_power: Option<u32> = None;
    let mut has_var = false;

    for (i, token) in tokens.iter().enumerate() {
        if *token != Token::Var {
            continue;
        }
        has_var = true;
        if tokens.get(i + 1) != Some(&Token::Caret) {
            continue;
        }
        let exponent = match tokens.get(i + 2) {
            Some(Token::Number(value)) => integer_exponent(*value)?,
            _ => return None,
        };
        // `x^2^3` is `x^(2^3)`, which this lexical view cannot size.
        if tokens.get(i + 3) == Some(&Token::Caret) {
            return None;
        }
        max_power = Some(max_power.map_or(exponent, |max| max.max(exponent)));
    }

    match (max_power, has_var) {
        (Some(power), _) => Some(power),
        (None, true) => Some(1),
        (None, false) => Some(0),
    }
}

fn integer_exponent(value: f64) -> Option<u32> {
    let integral = value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    integral.then_some(value as u32)
}

/// Rejection reasons of a [`DegreePolicy`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DegreeError {
    /// The text is not a polynomial in `x` the classifier can read.
    #[error("not a recognizable polynomial: {text:?}")]
    Unrecognized { text: String },

    /// The degree is above the policy's cap.
    #[error("degree {degree} exceeds the maximum of {max}")]
    TooHigh { degree: u32, max: u32 },
}

/// Which degrees a caller accepts.
///
/// The cap is a usability limit for interactive use; the scanner and
/// bisection solver work for any continuous function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DegreePolicy {
    /// Highest accepted degree, or `None` for no cap.
    pub max_degree: Option<u32>,
}

impl Default for DegreePolicy {
    fn default() -> Self {
        Self {
            max_degree: Some(DEFAULT_MAX_DEGREE),
        }
    }
}

impl DegreePolicy {
    /// A policy that accepts any recognizable polynomial.
    #[must_use]
    pub fn unbounded() -> Self {
        Self { max_degree: None }
    }

    /// Classifies `text` and applies the cap.
    ///
    /// # Errors
    ///
    /// Returns [`DegreeError::Unrecognized`] if [`degree`] gives `None`, and
    /// [`DegreeError::TooHigh`] if the degree is above the cap.
    pub fn check(&self, text: &str) -> Result<u32, DegreeError> {
        let degree = degree(text).ok_or_else(|| DegreeError::Unrecognized {
            text: text.to_string(),
        })?;
        match self.max_degree {
            Some(max) if degree > max => Err(DegreeError::TooHigh { degree, max }),
            _ => Ok(degree),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("x^3-9*x+3", Some(3))]
    #[case("x**4 + x", Some(4))]
    #[case("3x^2 + x^5 - x^2", Some(5))]
    #[case("2x + 1", Some(1))]
    #[case("x", Some(1))]
    #[case("X^2", Some(2))]
    #[case("x^0", Some(0))]
    #[case("(x+1)^2", Some(1))]
    #[case("x^2*x^3", Some(3))]
    #[case("5", Some(0))]
    #[case("-2.5", Some(0))]
    #[case("2*3", Some(0))]
    #[case("x^7", Some(7))]
    #[case("x^2.5", None)]
    #[case("x^x", None)]
    #[case("x^-1", None)]
    #[case("x^2^3", None)]
    #[case("sin(x)", None)]
    #[case("x^2 +", None)]
    #[case("", None)]
    #[case("abc", None)]
    fn classifies(#[case] text: &str, #[case] expected: Option<u32>) {
        assert_eq!(degree(text), expected, "{text:?}");
    }

    #[test]
    fn default_policy_caps_at_five() {
        let policy = DegreePolicy::default();
        assert_eq!(policy.check("x^5 - 1"), Ok(5));
        assert_eq!(
            policy.check("x^7"),
            Err(DegreeError::TooHigh { degree: 7, max: 5 })
        );
        assert_eq!(
            policy.check("y^2"),
            Err(DegreeError::Unrecognized {
                text: "y^2".to_string()
            })
        );
    }

    #[test]
    fn cap_is_configurable() {
        assert_eq!(DegreePolicy::unbounded().check("x^12"), Ok(12));
        let strict = DegreePolicy {
            max_degree: Some(2),
        };
        assert!(matches!(
            strict.check("x^3"),
            Err(DegreeError::TooHigh { degree: 3, max: 2 })
        ));
    }
}
