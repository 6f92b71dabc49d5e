use super::IterationRecord;

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BisectionResult {
    /// Final solver status.
    pub status: Status,
    /// Best estimate of the root.
    pub root: f64,
    /// Function value at `root`.
    pub residual: f64,
    /// Every iteration performed, in order.
    pub trace: Vec<IterationRecord>,
}

impl BisectionResult {
    /// A result at a point that needed no halving.
    pub(super) fn at_point(root: f64, residual: f64) -> Self {
        Self {
            status: Status::Converged,
            root,
            residual,
            trace: Vec::new(),
        }
    }

    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Number of halvings performed.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.trace.len()
    }
}
