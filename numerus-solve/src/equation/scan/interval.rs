use std::fmt;

/// Decimal places shown when no precision is given to the formatter.
const DISPLAY_PRECISION: usize = 1;

/// A sub-interval of a scan where the function changes sign or vanishes.
///
/// Values are kept at full precision; rounding happens only in
/// [`Display`](fmt::Display).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignChangeInterval {
    pub start: f64,
    pub end: f64,
    pub f_start: f64,
    pub f_end: f64,

    /// The probe the interval is centered on, if it was found by a probe
    /// landing on (or near) a zero rather than by a sign change.
    pub exact_zero_at: Option<f64>,
}

impl SignChangeInterval {
    pub(super) fn sign_change(start: (f64, f64), end: (f64, f64)) -> Self {
        Self {
            start: start.0,
            end: end.0,
            f_start: start.1,
            f_end: end.1,
            exact_zero_at: None,
        }
    }

    pub(super) fn near_zero(x: f64, start: (f64, f64), end: (f64, f64)) -> Self {
        Self {
            exact_zero_at: Some(x),
            ..Self::sign_change(start, end)
        }
    }

    /// Returns the interval as a bracket for [`bisection`](crate::equation::bisection).
    #[must_use]
    pub fn bracket(&self) -> [f64; 2] {
        [self.start, self.end]
    }

    #[must_use]
    pub fn is_near_exact(&self) -> bool {
        self.exact_zero_at.is_some()
    }

    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.start <= x && x <= self.end
    }
}

/// Formats as `[start, end]`, one decimal place unless the formatter
/// asks for another precision.
impl fmt::Display for SignChangeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DISPLAY_PRECISION);
        write!(
            f,
            "[{:.p$}, {:.p$}]",
            self.start,
            self.end,
            p = precision
        )?;
        if let Some(x) = self.exact_zero_at {
            write!(f, " zero near {x:.precision$}")?;
        }
        Ok(())
    }
}
