use thiserror::Error;

/// Default distance between probes.
pub const DEFAULT_STEP: f64 = 0.1;

/// Near-zero threshold used by [`Config::strict`].
pub const STRICT_ZERO_TOL: f64 = 1e-4;

/// Default cap on the number of probes in one scan.
pub const DEFAULT_MAX_PROBES: usize = 1_000_000;

/// Configuration for the sign-change scanner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Distance between consecutive probes.
    pub step: f64,

    /// Probes with `|f(x)| < zero_tol` are reported as near-exact zeros.
    ///
    /// Exact zeros are always reported, so `0.0` only catches those.
    pub zero_tol: f64,

    /// Largest number of probes a scan may take, endpoints included.
    ///
    /// A range and step that need more fail up front instead of scanning.
    pub max_probes: usize,
}

/// Errors that can occur when validating a scanner config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The step is zero, negative or non-finite.
    #[error("step must be finite and positive")]
    Step,

    /// The near-zero tolerance is negative or non-finite.
    #[error("zero_tol must be finite and non-negative")]
    ZeroTol,

    /// The probe cap leaves no room for both endpoints.
    #[error("max_probes must be at least 2")]
    MaxProbes,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            zero_tol: 0.0,
            max_probes: DEFAULT_MAX_PROBES,
        }
    }
}

impl Config {
    /// The default step, also flagging probes within [`STRICT_ZERO_TOL`]
    /// of zero.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            zero_tol: STRICT_ZERO_TOL,
            ..Self::default()
        }
    }

    /// Validates the step, tolerance and probe cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not positive, `zero_tol` is negative,
    /// either is non-finite, or `max_probes` is below 2.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ConfigError::Step);
        }
        if !self.zero_tol.is_finite() || self.zero_tol < 0.0 {
            return Err(ConfigError::ZeroTol);
        }
        if self.max_probes < 2 {
            return Err(ConfigError::MaxProbes);
        }
        Ok(())
    }

    /// True if `value` counts as a zero of the function.
    pub(super) fn is_zero(&self, value: f64) -> bool {
        value == 0.0 || value.abs() < self.zero_tol
    }
}
