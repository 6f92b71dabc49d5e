use thiserror::Error;

use numerus_core::RationalError;

use super::EliminationStep;

/// Errors in the shape or entries of a [`LinearSystem`](super::LinearSystem).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SystemError {
    /// The coefficient matrix has no rows.
    #[error("system has no equations")]
    Empty,

    /// A row's length differs from the number of rows.
    #[error("row {row} has {len} coefficient(s) but the system has {size} unknowns")]
    NotSquare { row: usize, len: usize, size: usize },

    /// The constants vector does not have one entry per row.
    #[error("expected {expected} constant(s), found {found}")]
    ConstantsMismatch { expected: usize, found: usize },

    /// An entry could not be converted to a rational.
    #[error("invalid entry: {0}")]
    InvalidEntry(#[from] RationalError),
}

/// Errors that can occur during elimination.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// No nonzero pivot exists in `column` at or below the diagonal.
    ///
    /// `completed` holds the steps emitted before the failure, starting
    /// with the initial state.
    #[error("system is singular: no nonzero pivot in column {column}")]
    Singular {
        column: usize,
        completed: Vec<EliminationStep>,
    },
}
