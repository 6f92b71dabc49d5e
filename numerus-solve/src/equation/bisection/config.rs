use thiserror::Error;

/// Iteration cap used by [`Config::default`].
pub const DEFAULT_MAX_ITERS: usize = 100;

/// Residual tolerance used by [`Config::default`].
pub const DEFAULT_RESIDUAL_TOL: f64 = 1e-6;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Maximum number of halvings.
    pub max_iters: usize,

    /// Converged once `|f(midpoint)| < residual_tol`.
    pub residual_tol: f64,

    /// Converged once the bracket is no wider than this. Zero disables it.
    pub x_abs_tol: f64,
}

/// Errors that can occur when validating a bisection config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The residual tolerance is negative or non-finite.
    #[error("residual_tol must be finite and non-negative")]
    ResidualTol,

    /// The bracket-width tolerance is negative or non-finite.
    #[error("x_abs_tol must be finite and non-negative")]
    XAbsTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            residual_tol: DEFAULT_RESIDUAL_TOL,
            x_abs_tol: 0.0,
        }
    }
}

impl Config {
    /// Validates that all tolerances are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.residual_tol.is_finite() || self.residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol);
        }
        if !self.x_abs_tol.is_finite() || self.x_abs_tol < 0.0 {
            return Err(ConfigError::XAbsTol);
        }
        Ok(())
    }

    /// True if `residual` is small enough to accept its point as a root.
    ///
    /// An exact zero is always accepted, even with a zero tolerance.
    pub(super) fn accepts(&self, residual: f64) -> bool {
        residual == 0.0 || residual.abs() < self.residual_tol
    }
}
