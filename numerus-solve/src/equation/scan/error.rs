use thiserror::Error;

use super::ConfigError;

/// Errors that can occur before a scan starts.
///
/// Evaluation failures at individual probes are not errors; they are
/// counted in [`Scan::skipped`](super::Scan::skipped).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The range is not finite with `lower < upper`.
    #[error("invalid range: lower bound {lower} must be finite and below upper bound {upper}")]
    InvalidRange { lower: f64, upper: f64 },

    /// The config failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The range and step need more probes than the config allows.
    #[error("scan needs {probes} probes, more than the limit of {max}")]
    TooManyProbes { probes: usize, max: usize },
}
