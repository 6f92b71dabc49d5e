//! Bisection root finding.
//!
//! # Algorithm
//!
//! Given `[a, b]` with `f(a)` and `f(b)` of opposite signs, each iteration
//! evaluates the midpoint and keeps the half whose ends still differ in
//! sign. The bracket width halves every iteration, so convergence is
//! linear but guaranteed for a continuous function.
//!
//! The opposite-sign requirement is checked up front and reported as
//! [`Error::NotABracket`]; halving is only meaningful when the intermediate
//! value theorem applies.
//!
//! # Observer events
//!
//! The solver emits one [`Event`] per iteration, after the iteration's
//! [`IterationRecord`] is built. Observers can return [`Action::StopEarly`]
//! to end the solve with [`Status::StoppedByObserver`].

mod bracket;
mod config;
mod error;
mod record;
mod solution;

pub use bracket::BracketError;
pub use config::{Config, ConfigError, DEFAULT_MAX_ITERS, DEFAULT_RESIDUAL_TOL};
pub use error::Error;
pub use record::IterationRecord;
pub use solution::{BisectionResult, Status};

use log::{debug, trace, warn};
use numerus_core::{Function, Observer};

use crate::equation::scan::Scan;

use bracket::{Bounds, Bracket, same_strict_sign};

/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop at the current midpoint.
    StopEarly,
}

/// Iteration event emitted by the bisection solver.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The iteration just performed.
    pub record: &'a IterationRecord,
    /// Whether this iteration meets the configured tolerances.
    pub converged: bool,
}

/// Finds a root of `function` inside `bracket` by repeated halving.
/// Observers see each iteration's record.
///
/// The endpoints may be given in either order. If an endpoint already
/// satisfies the residual tolerance it is returned as the root with an
/// empty trace.
///
/// # Errors
///
/// Returns an error if the bracket or config is invalid, if `f(a)` and
/// `f(b)` have the same sign, or if the function fails or returns a
/// non-finite value at any point the solver visits.
pub fn solve<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<BisectionResult, Error>
where
    F: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config.validate()?;
    let bounds = Bounds::new(bracket)?;

    let f_left = eval_at(function, bounds.left)?;
    let f_right = eval_at(function, bounds.right)?;

    if same_strict_sign(f_left, f_right) {
        return Err(Error::NotABracket {
            left: bounds.left,
            right: bounds.right,
            left_residual: f_left,
            right_residual: f_right,
        });
    }

    if config.accepts(f_left) {
        debug!("bisection: left endpoint {} is a root", bounds.left);
        return Ok(BisectionResult::at_point(bounds.left, f_left));
    }
    if config.accepts(f_right) {
        debug!("bisection: right endpoint {} is a root", bounds.right);
        return Ok(BisectionResult::at_point(bounds.right, f_right));
    }

    let mut bracket = Bracket::new(bounds, f_left, f_right);
    let mut trace = Vec::with_capacity(config.max_iters.min(DEFAULT_MAX_ITERS));

    for index in 1..=config.max_iters {
        let midpoint = bracket.midpoint();
        let f_mid = eval_at(function, midpoint)?;

        let record = IterationRecord {
            index,
            a: bracket.left,
            b: bracket.right,
            midpoint,
            fa: bracket.f_left,
            fb: bracket.f_right,
            f_mid,
            width: bracket.width(),
        };
        trace!(
            "bisection iter {index}: [{}, {}] f({midpoint}) = {f_mid}",
            record.a, record.b
        );

        let converged = config.accepts(f_mid) || record.width <= config.x_abs_tol;
        let action = observer.observe(&Event {
            record: &record,
            converged,
        });
        trace.push(record);

        if converged {
            debug!("bisection converged to {midpoint} after {index} iteration(s)");
            return Ok(finish(Status::Converged, midpoint, f_mid, trace));
        }

        if let Some(Action::StopEarly) = action {
            debug!("bisection stopped by observer at {midpoint} after {index} iteration(s)");
            return Ok(finish(Status::StoppedByObserver, midpoint, f_mid, trace));
        }

        bracket.shrink(midpoint, f_mid);
    }

    let root = bracket.midpoint();
    let residual = eval_at(function, root)?;
    warn!(
        "bisection did not converge in {} iteration(s); best estimate {root} with residual {residual}",
        config.max_iters
    );
    Ok(finish(Status::MaxIters, root, residual, trace))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F: Function>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<BisectionResult, Error> {
    solve(function, bracket, config, ())
}

/// Refines every interval of a scan, one result per interval in scan order.
///
/// An interval centered on a probe that already satisfies the residual
/// tolerance resolves to that probe without halving; any other interval is
/// bisected like an explicit bracket.
pub fn solve_all<F: Function>(
    function: &F,
    scan: &Scan,
    config: &Config,
) -> Vec<Result<BisectionResult, Error>> {
    scan.intervals
        .iter()
        .map(|interval| {
            if let Some(x) = interval.exact_zero_at
                && let Ok(value) = function.eval(x)
                && config.accepts(value)
            {
                return Ok(BisectionResult::at_point(x, value));
            }
            solve_unobserved(function, interval.bracket(), config)
        })
        .collect()
}

fn finish(
    status: Status,
    root: f64,
    residual: f64,
    trace: Vec<IterationRecord>,
) -> BisectionResult {
    BisectionResult {
        status,
        root,
        residual,
        trace,
    }
}

fn eval_at<F: Function>(function: &F, x: f64) -> Result<f64, Error> {
    let value = function.eval(x).map_err(|err| Error::Function {
        x,
        source: Box::new(err),
    })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteResidual { x, residual: value })
    }
}
