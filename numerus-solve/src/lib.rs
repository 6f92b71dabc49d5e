//! Root finding and exact Gaussian elimination.
//!
//! The solvers live in two modules:
//!
//! - [`equation`] locates sign changes of a scalar function with
//!   [`scan`](equation::scan) and refines them with
//!   [`bisection`](equation::bisection)
//! - [`linear`] reduces a square system to upper-triangular form with
//!   [`gauss`](linear::gauss), recording every round
//!
//! Both are generic over the building blocks in [`numerus_core`]. The free
//! functions in this module are the text-in, result-out entry points a user
//! interface calls.
//!
//! # Examples
//! ```
//! use numerus_solve::{bisect, find_brackets};
//!
//! let intervals = find_brackets("x^2 - 4", -10.0, 10.0, 0.1).unwrap();
//! assert_eq!(intervals.len(), 2);
//!
//! let result = bisect("x^2 - 4", 1.0, 3.0, 1e-6, 100).unwrap();
//! assert!(result.converged());
//! assert!((result.root - 2.0).abs() < 1e-6);
//! ```

pub mod equation;
pub mod linear;

use thiserror::Error;

use numerus_core::{
    DegreeError, DegreePolicy, Expression, Rational, degree, expr::ParseError,
};

use equation::{
    bisection::{self, BisectionResult},
    scan::{self, SignChangeInterval},
};
use linear::gauss::{self, EliminationStep, LinearSystem, SystemError};

/// Errors returned by the text-level entry points.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Expression(#[from] ParseError),

    #[error(transparent)]
    Degree(#[from] DegreeError),

    #[error(transparent)]
    Scan(#[from] scan::Error),

    #[error(transparent)]
    Bisection(#[from] bisection::Error),

    #[error(transparent)]
    System(#[from] SystemError),

    #[error(transparent)]
    Elimination(#[from] gauss::Error),
}

/// Reports the polynomial degree of `text`, or `None` if it is not a
/// recognizable polynomial.
///
/// The raw degree is reported without any cap; see [`DegreePolicy`] for
/// the gate a caller applies before scanning.
#[must_use]
pub fn classify_degree(text: &str) -> Option<u32> {
    degree::degree(text)
}

/// Compiles `text` and scans `[lower, upper]` for sign changes with the
/// given step.
///
/// # Errors
///
/// Returns an error if `text` does not compile, if `lower >= upper`, if
/// `step` is not a positive finite number, or if the step is so small that
/// the scan would exceed [`scan::DEFAULT_MAX_PROBES`] probes.
pub fn find_brackets(
    text: &str,
    lower: f64,
    upper: f64,
    step: f64,
) -> Result<Vec<SignChangeInterval>, Error> {
    let function = Expression::compile(text)?;
    let config = scan::Config {
        step,
        ..scan::Config::default()
    };
    Ok(scan::scan(&function, [lower, upper], &config)?.intervals)
}

/// Compiles `text` and refines the root bracketed by `[a, b]`.
///
/// Iteration stops once `|f(midpoint)| < tolerance` or after `max_iters`
/// halvings ([`bisection::DEFAULT_MAX_ITERS`] is the usual choice).
///
/// # Errors
///
/// Returns an error if `text` does not compile, if `f(a)` and `f(b)` have
/// the same sign, or if the function cannot be evaluated along the way.
pub fn bisect(
    text: &str,
    a: f64,
    b: f64,
    tolerance: f64,
    max_iters: usize,
) -> Result<BisectionResult, Error> {
    let function = Expression::compile(text)?;
    let config = bisection::Config {
        max_iters,
        residual_tol: tolerance,
        ..bisection::Config::default()
    };
    Ok(bisection::solve_unobserved(&function, [a, b], &config)?)
}

/// Runs the whole root-finding pipeline on `text`.
///
/// The degree is checked against `policy`, `[lower, upper]` is scanned,
/// and every interval found is refined. Each interval gets its own result,
/// so one that fails to refine does not hide the others.
///
/// # Errors
///
/// Returns an error if `text` does not compile, is rejected by `policy`,
/// or the range or either config is invalid.
pub fn find_roots(
    text: &str,
    [lower, upper]: [f64; 2],
    policy: &DegreePolicy,
    scan_config: &scan::Config,
    bisection_config: &bisection::Config,
) -> Result<Vec<Result<BisectionResult, bisection::Error>>, Error> {
    let function = Expression::compile(text)?;
    policy.check(text)?;
    bisection_config
        .validate()
        .map_err(bisection::Error::InvalidConfig)?;

    let found = scan::scan(&function, [lower, upper], scan_config)?;
    Ok(bisection::solve_all(&function, &found, bisection_config))
}

/// Reduces the system `coefficients · x = constants` to upper-triangular
/// form, returning every elimination round.
///
/// # Errors
///
/// Returns an error if the system is not square with one constant per row,
/// or if it is singular. A zero final diagonal entry counts as singular. The
/// rounds finished before that point are still available in the error's
/// [`completed`](gauss::Error::Singular) steps.
pub fn eliminate(
    coefficients: Vec<Vec<Rational>>,
    constants: Vec<Rational>,
) -> Result<Vec<EliminationStep>, Error> {
    let system = LinearSystem::new(coefficients, constants)?;
    Ok(gauss::eliminate(&system)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    #[test]
    fn classify_degree_reports_raw_degree() {
        assert_eq!(classify_degree("x^3-9*x+3"), Some(3));
        assert_eq!(classify_degree("x^7"), Some(7));
        assert_eq!(classify_degree("x^"), None);
    }

    #[test]
    fn find_brackets_rejects_bad_text_and_range() {
        assert!(matches!(
            find_brackets("x^2 - ", -1.0, 1.0, 0.1),
            Err(Error::Expression(_))
        ));
        assert!(matches!(
            find_brackets("x", 1.0, 1.0, 0.1),
            Err(Error::Scan(scan::Error::InvalidRange { .. }))
        ));
        assert!(matches!(
            find_brackets("x - 0.5", 0.0, 1.0, 1e-300),
            Err(Error::Scan(scan::Error::TooManyProbes { .. }))
        ));
    }

    #[test]
    fn bisect_rejects_non_bracket() {
        let err = bisect("x^2+1", -1.0, 1.0, 1e-6, 100).unwrap_err();
        assert!(matches!(
            err,
            Error::Bisection(bisection::Error::NotABracket { .. })
        ));
    }

    #[test]
    fn find_roots_applies_the_degree_policy() {
        let err = find_roots(
            "x^6 - 1",
            [-2.0, 2.0],
            &DegreePolicy::default(),
            &scan::Config::default(),
            &bisection::Config::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Degree(DegreeError::TooHigh { degree: 6, max: 5 })
        ));

        let roots = find_roots(
            "x^6 - 1",
            [-2.0, 2.0],
            &DegreePolicy::unbounded(),
            &scan::Config::default(),
            &bisection::Config::default(),
        )
        .expect("should scan");
        assert_eq!(roots.len(), 2);
        for (result, expected) in roots.into_iter().zip([-1.0, 1.0]) {
            let result = result.expect("should refine");
            assert!(result.converged());
            assert_abs_diff_eq!(result.root, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn eliminate_checks_shape() {
        let err = eliminate(vec![vec![Rational::one()]], vec![]).unwrap_err();
        assert!(matches!(
            err,
            Error::System(SystemError::ConstantsMismatch { .. })
        ));
    }

    #[test]
    fn eliminate_keeps_the_trace_when_the_last_pivot_vanishes() {
        let ints =
            |row: &[i64]| -> Vec<Rational> { row.iter().map(|&v| Rational::from(v)).collect() };
        let err = eliminate(vec![ints(&[1, 2]), ints(&[2, 4])], ints(&[3, 6])).unwrap_err();

        match err {
            Error::Elimination(gauss::Error::Singular { column, completed }) => {
                assert_eq!(column, 1);
                assert_eq!(completed.len(), 2);
                assert!(completed[1].is_upper_triangular());
                assert_eq!(completed[1].constants[1], Rational::zero());
            }
            other => panic!("expected a singular system, got {other}"),
        }
    }
}
