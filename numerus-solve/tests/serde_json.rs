#![cfg(feature = "serde")]

use numerus_core::Rational;
use numerus_solve::{
    bisect,
    equation::{bisection::BisectionResult, scan::SignChangeInterval},
    find_brackets,
    linear::gauss::{self, EliminationStep, LinearSystem},
};

#[test]
fn elimination_steps_round_trip() {
    let system = LinearSystem::from_integers(&[[0, 2], [3, 1]], &[4, 5]).expect("valid system");
    let steps = gauss::eliminate(&system).expect("nonsingular");

    let json = serde_json::to_string(&steps).expect("should serialize");
    let back: Vec<EliminationStep> = serde_json::from_str(&json).expect("should deserialize");
    assert_eq!(back, steps);
}

#[test]
fn rationals_are_written_as_strings() {
    let system = LinearSystem::new(
        vec![vec![Rational::new(-3, 4).expect("valid")]],
        vec![Rational::from(2)],
    )
    .expect("valid system");

    let json = serde_json::to_value(&system).expect("should serialize");
    assert_eq!(
        json,
        serde_json::json!({ "coefficients": [["-3/4"]], "constants": ["2"] })
    );
}

#[test]
fn deserialized_systems_are_validated() {
    let json = r#"{ "coefficients": [["1", "2"]], "constants": ["1"] }"#;
    assert!(serde_json::from_str::<LinearSystem>(json).is_err());

    let json = r#"{ "coefficients": [["1/2"]], "constants": ["3"] }"#;
    let system: LinearSystem = serde_json::from_str(json).expect("valid system");
    assert_eq!(system.size(), 1);
}

#[test]
fn root_finding_results_round_trip() {
    let intervals = find_brackets("x^3 - 9x + 3", -4.0, 4.0, 0.1).expect("should scan");
    let json = serde_json::to_string(&intervals).expect("should serialize");
    let back: Vec<SignChangeInterval> = serde_json::from_str(&json).expect("should deserialize");
    assert_eq!(back, intervals);

    let result = bisect("x^2 - 2", 1.0, 2.0, 1e-6, 100).expect("should converge");
    let json = serde_json::to_string(&result).expect("should serialize");
    let back: BisectionResult = serde_json::from_str(&json).expect("should deserialize");
    assert_eq!(back, result);
}
