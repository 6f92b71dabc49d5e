use thiserror::Error;

/// Reasons a pair of endpoints cannot start a bisection.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("bracket endpoints must be finite")]
    NonFinite,

    /// Both endpoints are the same point.
    #[error("bracket endpoints must differ")]
    ZeroWidth,
}

/// Finite endpoints with `left < right`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    pub(super) left: f64,
    pub(super) right: f64,
}

impl Bounds {
    /// Checks the endpoints, swapping them if given in reverse.
    pub(super) fn new([a, b]: [f64; 2]) -> Result<Self, BracketError> {
        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if a == b {
            return Err(BracketError::ZeroWidth);
        }

        Ok(if a < b {
            Self { left: a, right: b }
        } else {
            Self { left: b, right: a }
        })
    }
}

/// Side of zero a function value falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub(super) fn of(value: f64) -> Self {
        if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}

/// The interval being halved, with the function values at its ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    pub(super) left: f64,
    pub(super) right: f64,
    pub(super) f_left: f64,
    pub(super) f_right: f64,
}

impl Bracket {
    pub(super) fn new(bounds: Bounds, f_left: f64, f_right: f64) -> Self {
        Self {
            left: bounds.left,
            right: bounds.right,
            f_left,
            f_right,
        }
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Keeps the half whose ends still differ in sign.
    pub(super) fn shrink(&mut self, x: f64, value: f64) {
        if Sign::of(self.f_left) == Sign::of(value) {
            self.left = x;
            self.f_left = value;
        } else {
            self.right = x;
            self.f_right = value;
        }
    }
}

/// True if the values rule out a sign change between them.
///
/// Equivalent to `a * b > 0.0` without underflowing to zero for tiny values.
pub(super) fn same_strict_sign(a: f64, b: f64) -> bool {
    (a > 0.0 && b > 0.0) || (a < 0.0 && b < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn bounds_are_ordered() {
        let bounds = Bounds::new([3.0, 1.0]).expect("valid bounds");
        assert_relative_eq!(bounds.left, 1.0);
        assert_relative_eq!(bounds.right, 3.0);
    }

    #[test]
    fn bounds_reject_bad_endpoints() {
        assert_eq!(Bounds::new([f64::NAN, 1.0]), Err(BracketError::NonFinite));
        assert_eq!(
            Bounds::new([0.0, f64::NEG_INFINITY]),
            Err(BracketError::NonFinite)
        );
        assert_eq!(Bounds::new([2.0, 2.0]), Err(BracketError::ZeroWidth));
    }

    #[test]
    fn shrink_keeps_the_sign_change() {
        let bounds = Bounds::new([0.0, 2.0]).expect("valid bounds");
        let mut bracket = Bracket::new(bounds, -1.0, 3.0);

        bracket.shrink(1.0, -0.5);
        assert_relative_eq!(bracket.left, 1.0);
        assert_relative_eq!(bracket.f_left, -0.5);
        assert_relative_eq!(bracket.right, 2.0);

        bracket.shrink(1.5, 0.25);
        assert_relative_eq!(bracket.left, 1.0);
        assert_relative_eq!(bracket.right, 1.5);
        assert_relative_eq!(bracket.f_right, 0.25);
        assert_relative_eq!(bracket.width(), 0.5);
        assert_relative_eq!(bracket.midpoint(), 1.25);
    }

    #[test]
    fn strict_sign_comparison() {
        assert!(same_strict_sign(1e-200, 1e-200));
        assert!(same_strict_sign(-2.0, -0.5));
        assert!(!same_strict_sign(0.0, 1.0));
        assert!(!same_strict_sign(-1.0, 1.0));
    }
}
