use std::error::Error as StdError;

use thiserror::Error;

use super::{BracketError, ConfigError};

/// Errors that can occur during bisection solving.
#[derive(Debug, Error)]
pub enum Error {
    /// The endpoints are non-finite or coincide.
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    /// The config failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The function has the same strict sign at both endpoints.
    #[error(
        "no sign change in bracket: f({left})={left_residual}, f({right})={right_residual}"
    )]
    NotABracket {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },

    /// The function failed at an endpoint or midpoint.
    #[error("failed to evaluate the function at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The function returned `NaN` or an infinity.
    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },
}
