//! Sign-change scanning.
//!
//! # Algorithm
//!
//! The range `[lower, upper]` is probed at `lower + i * step`, with the last
//! probe clipped to `upper`. Each pair of neighboring probes whose values
//! have opposite signs becomes a [`SignChangeInterval`]; by the intermediate
//! value theorem a continuous function has a root inside it.
//!
//! A probe that lands on a zero (exactly, or within [`Config::zero_tol`])
//! has no sign change to either side, so it is reported on its own as a
//! near-exact interval `[x - step/2, x + step/2]` centered on the probe.
//! A run of neighboring near-zero probes is reported once.
//!
//! The number of probes is known before the first evaluation and is capped
//! by [`Config::max_probes`], so every scan finishes in bounded time.
//!
//! # Evaluation failures
//!
//! A probe where the function cannot be evaluated is skipped and never
//! aborts the scan. No interval is formed across a skipped probe, so a pole
//! such as `1/x` at zero is not mistaken for a root.

mod config;
mod error;
mod interval;

pub use config::{Config, ConfigError, DEFAULT_MAX_PROBES, DEFAULT_STEP, STRICT_ZERO_TOL};
pub use error::Error;
pub use interval::SignChangeInterval;

use log::{debug, trace};
use numerus_core::Function;

/// Relative slack below which a span counts as a whole number of steps.
const STEP_COUNT_SLACK: f64 = 1e-9;

/// The outcome of a scan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scan {
    /// Intervals found, in ascending order.
    pub intervals: Vec<SignChangeInterval>,

    /// Number of probe positions visited.
    pub probes: usize,

    /// Number of evaluations that failed and were skipped.
    pub skipped: usize,
}

impl Scan {
    /// True if no interval was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

/// Scans `[lower, upper]` for sign changes of `function`.
///
/// # Errors
///
/// Returns an error if the range is not finite with `lower < upper`, if the
/// config is invalid, or if the scan would need more than
/// [`Config::max_probes`] probes. Evaluation failures at probes are not
/// errors.
///
/// # Examples
/// ```
/// use numerus_core::Expression;
/// use numerus_solve::equation::scan::{Config, scan};
///
/// let f = Expression::compile("x^3 - 9x + 3").unwrap();
/// let found = scan(&f, [-4.0, 4.0], &Config::default()).unwrap();
///
/// assert_eq!(found.intervals.len(), 3);
/// assert_eq!(found.intervals[0].to_string(), "[-3.2, -3.1]");
/// ```
pub fn scan<F: Function>(function: &F, range: [f64; 2], config: &Config) -> Result<Scan, Error> {
    config.validate()?;
    let [lower, upper] = range;
    if !lower.is_finite() || !upper.is_finite() || lower >= upper {
        return Err(Error::InvalidRange { lower, upper });
    }

    let steps = step_count(lower, upper, config.step);
    let probes = steps.saturating_add(1);
    if probes > config.max_probes {
        return Err(Error::TooManyProbes {
            probes,
            max: config.max_probes,
        });
    }

    debug!("scanning [{lower}, {upper}] with step {}", config.step);

    let mut walk = Walk {
        function,
        config,
        lower,
        upper,
        skipped: 0,
    };

    let mut intervals = Vec::new();
    let mut previous_bracketed = false;
    let mut previous_zero = false;
    let mut current = walk.probe(0);

    for i in 0..=steps {
        let next = (i < steps).then(|| walk.probe(i + 1));

        let mut bracketed = false;
        let mut zero = false;
        if let (x, Some(fx)) = current {
            if let Some((next_x, Some(next_fx))) = next
                && opposite_signs(fx, next_fx)
            {
                intervals.push(SignChangeInterval::sign_change((x, fx), (next_x, next_fx)));
                bracketed = true;
            } else if config.is_zero(fx) {
                zero = true;
                if !previous_bracketed
                    && !previous_zero
                    && let Some(interval) = walk.near_zero(x)
                {
                    intervals.push(interval);
                }
            }
        }
        previous_bracketed = bracketed;
        previous_zero = zero;

        match next {
            Some(probe) => current = probe,
            None => break,
        }
    }

    debug!(
        "scan found {} interval(s) in {} probes, {} evaluation(s) skipped",
        intervals.len(),
        probes,
        walk.skipped
    );

    Ok(Scan {
        intervals,
        probes,
        skipped: walk.skipped,
    })
}

/// Probing state shared across one scan.
struct Walk<'a, F> {
    function: &'a F,
    config: &'a Config,
    lower: f64,
    upper: f64,
    skipped: usize,
}

impl<F: Function> Walk<'_, F> {
    /// Evaluates the `i`-th probe, giving `None` for the value if it fails.
    fn probe(&mut self, i: usize) -> (f64, Option<f64>) {
        #[allow(clippy::cast_precision_loss)]
        let x = (self.lower + i as f64 * self.config.step).min(self.upper);
        (x, self.eval(x))
    }

    fn eval(&mut self, x: f64) -> Option<f64> {
        match self.function.eval(x) {
            Ok(value) if value.is_finite() => Some(value),
            Ok(value) => {
                trace!("skipping x = {x}: non-finite value {value}");
                self.skipped += 1;
                None
            }
            Err(err) => {
                trace!("skipping x = {x}: {err}");
                self.skipped += 1;
                None
            }
        }
    }

    /// Builds the near-exact interval centered on `x`.
    fn near_zero(&mut self, x: f64) -> Option<SignChangeInterval> {
        let half = 0.5 * self.config.step;
        let start = x - half;
        let end = x + half;
        let f_start = self.eval(start)?;
        let f_end = self.eval(end)?;
        Some(SignChangeInterval::near_zero(
            x,
            (start, f_start),
            (end, f_end),
        ))
    }
}

/// Number of steps from `lower` to `upper`, at least one.
///
/// Saturates at `usize::MAX` when the step is tiny against the span.
fn step_count(lower: f64, upper: f64, step: f64) -> usize {
    let span = (upper - lower) / step;
    let whole = span.round();
    let steps = if (span - whole).abs() <= STEP_COUNT_SLACK * span {
        whole
    } else {
        span.ceil()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = steps as usize;
    steps.max(1)
}

fn opposite_signs(a: f64, b: f64) -> bool {
    (a < 0.0 && b > 0.0) || (a > 0.0 && b < 0.0)
}
