use approx::assert_abs_diff_eq;
use numerus_core::{DegreePolicy, Expression};
use numerus_solve::{
    Error, bisect, classify_degree,
    equation::{
        bisection::{self, Status},
        scan,
    },
    find_brackets, find_roots,
};

#[test]
fn quadratic_has_exactly_two_brackets() {
    let intervals = find_brackets("x^2-4", -10.0, 10.0, 0.1).expect("should scan");

    assert_eq!(intervals.len(), 2);
    assert!(intervals[0].contains(-2.0));
    assert!(intervals[1].contains(2.0));
    assert!(intervals[0].end < intervals[1].start);
}

#[test]
fn bisection_converges_within_tolerance() {
    let result = bisect("x^2-4", 1.0, 3.0, 1e-6, 100).expect("should converge");

    assert!(result.converged());
    assert_abs_diff_eq!(result.root, 2.0, epsilon = 1e-6);
    assert!(result.residual.abs() < 1e-6);
}

#[test]
fn bisection_requires_a_sign_change() {
    let err = bisect("x^2+1", -1.0, 1.0, 1e-6, 100).unwrap_err();
    assert!(matches!(
        err,
        Error::Bisection(bisection::Error::NotABracket { .. })
    ));
}

#[test]
fn every_bracket_refines_to_a_root_inside_it() {
    let f = Expression::compile("x^3 - 6x^2 + 11x - 6.5").expect("should compile");
    let found = scan::scan(&f, [0.0, 4.0], &scan::Config::default()).expect("should scan");
    assert_eq!(found.intervals.len(), 1);

    let config = bisection::Config::default();
    for (interval, result) in found
        .intervals
        .iter()
        .zip(bisection::solve_all(&f, &found, &config))
    {
        let result = result.expect("should refine");
        assert_eq!(result.status, Status::Converged);
        assert!(interval.contains(result.root));
        assert!(f.evaluate(result.root).expect("defined").abs() < config.residual_tol);
    }
}

#[test]
fn pipeline_from_text_to_roots() {
    let text = "x^3-9*x+3";
    assert_eq!(classify_degree(text), Some(3));

    let roots: Vec<f64> = find_roots(
        text,
        [-5.0, 5.0],
        &DegreePolicy::default(),
        &scan::Config::default(),
        &bisection::Config::default(),
    )
    .expect("should run")
    .into_iter()
    .map(|result| result.expect("should refine").root)
    .collect();

    assert_eq!(roots.len(), 3);
    for (root, expected) in roots.iter().zip([-3.1545, 0.3376, 2.8169]) {
        assert_abs_diff_eq!(*root, expected, epsilon = 1e-3);
    }
}

#[test]
fn iteration_trace_is_reported_even_when_exhausted() {
    let result = bisect("x^2-2", 0.0, 2.0, 1e-12, 10).expect("should finish");

    assert!(!result.converged());
    assert_eq!(result.status, Status::MaxIters);
    assert_eq!(result.trace.len(), 10);
    assert_abs_diff_eq!(result.root, 2f64.sqrt(), epsilon = 2.0 / 1024.0);
    for (i, record) in result.trace.iter().enumerate() {
        assert_eq!(record.index, i + 1);
        assert!(record.fa * record.fb < 0.0);
    }
}
