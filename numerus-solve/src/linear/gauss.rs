//! Gaussian elimination to upper-triangular form over exact rationals.
//!
//! # Algorithm
//!
//! For each column `k` except the last, the pivot is `matrix[k][k]`. If it
//! is zero, the first row below with a nonzero entry in column `k` is
//! swapped up. Every row `i > k` then gets `multiplier * pivot_row` added,
//! with `multiplier = -matrix[i][k] / pivot`, which zeroes column `k` below
//! the diagonal. Updates read from a snapshot of the pivot row taken before
//! the round, never from partially updated values.
//!
//! Arithmetic is exact, so the result is truly triangular and no pivoting
//! beyond "first nonzero below" is needed for accuracy. Entries can grow
//! large for big systems; elimination is `O(n³)` rational operations.
//!
//! Back-substitution is left to the caller.

mod error;
mod step;
mod system;

pub use error::{Error, SystemError};
pub use step::{EliminationStep, Multiplier, RowSwap};
pub use system::LinearSystem;

use log::debug;

/// Reduces `system` to upper-triangular form.
///
/// The returned steps start with the initial state (round 0), followed by
/// one step per eliminated column. The input is not modified.
///
/// # Errors
///
/// Returns [`Error::Singular`] if a column has no nonzero pivot at or
/// below the diagonal, including a zero in the final diagonal entry. The
/// error carries the steps completed so far.
///
/// # Examples
/// ```
/// use numerus_solve::linear::gauss::{LinearSystem, eliminate};
///
/// let system = LinearSystem::from_integers(&[[2, 1], [4, 5]], &[3, 6]).unwrap();
/// let steps = eliminate(&system).unwrap();
///
/// let last = steps.last().unwrap();
/// assert!(last.is_upper_triangular());
/// assert_eq!(last.matrix[1][1].to_string(), "3");
/// assert_eq!(last.constants[1].to_string(), "0");
/// ```
pub fn eliminate(system: &LinearSystem) -> Result<Vec<EliminationStep>, Error> {
    let size = system.size();
    let mut matrix = system.coefficients().to_vec();
    let mut constants = system.constants().to_vec();
    let mut steps = vec![EliminationStep::initial(&matrix, &constants)];

    for k in 0..size.saturating_sub(1) {
        let rows_swapped = if matrix[k][k].is_zero() {
            let Some(from) = (k + 1..size).find(|&i| !matrix[i][k].is_zero()) else {
                return Err(singular(k, steps));
            };
            matrix.swap(k, from);
            constants.swap(k, from);
            Some(RowSwap { from, to: k })
        } else {
            None
        };

        let pivot = matrix[k][k].clone();
        let Ok(inverse) = pivot.recip() else {
            return Err(singular(k, steps));
        };
        let pivot_row = matrix[k].clone();
        let pivot_constant = constants[k].clone();

        let mut multipliers = Vec::with_capacity(size - k - 1);
        for i in k + 1..size {
            let multiplier = -(&matrix[i][k] * &inverse);
            for (entry, pivot_entry) in matrix[i].iter_mut().zip(&pivot_row) {
                *entry = &*entry + &multiplier * pivot_entry;
            }
            constants[i] = &constants[i] + &multiplier * &pivot_constant;
            multipliers.push(Multiplier {
                row: i,
                value: multiplier,
            });
        }

        match rows_swapped {
            Some(swap) => debug!(
                "elimination round {}: pivot {pivot} in column {k} after swapping rows {} and {}",
                k + 1,
                swap.from,
                swap.to
            ),
            None => debug!("elimination round {}: pivot {pivot} in column {k}", k + 1),
        }

        steps.push(EliminationStep {
            round: k + 1,
            pivot_column: Some(k),
            matrix: matrix.clone(),
            constants: constants.clone(),
            pivot: Some(pivot),
            multipliers,
            rows_swapped,
        });
    }

    let last = size - 1;
    if matrix[last][last].is_zero() {
        return Err(singular(last, steps));
    }

    Ok(steps)
}

fn singular(column: usize, completed: Vec<EliminationStep>) -> Error {
    debug!("elimination stopped: no nonzero pivot in column {column}");
    Error::Singular { column, completed }
}

#[cfg(test)]
mod tests {
    use super::*;

    use numerus_core::Rational;

    fn rational(numer: i64, denom: i64) -> Rational {
        Rational::new(numer, denom).expect("nonzero denominator")
    }

    fn ints(values: &[i64]) -> Vec<Rational> {
        values.iter().map(|&v| Rational::from(v)).collect()
    }

    #[test]
    fn three_by_three_trace() {
        let system =
            LinearSystem::from_integers(&[[2, 1, -1], [-3, -1, 2], [-2, 1, 2]], &[8, -11, -3])
                .expect("valid system");
        let steps = eliminate(&system).expect("nonsingular");

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].round, 0);
        assert_eq!(steps[0].matrix, system.coefficients());
        assert_eq!(steps[0].pivot, None);

        let first = &steps[1];
        assert_eq!(first.round, 1);
        assert_eq!(first.pivot_column, Some(0));
        assert_eq!(first.pivot, Some(Rational::from(2)));
        assert_eq!(first.rows_swapped, None);
        assert_eq!(
            first.multipliers,
            vec![
                Multiplier {
                    row: 1,
                    value: rational(3, 2)
                },
                Multiplier {
                    row: 2,
                    value: Rational::from(1)
                },
            ]
        );
        assert_eq!(first.matrix[1], vec![Rational::zero(), rational(1, 2), rational(1, 2)]);
        assert_eq!(first.constants, ints(&[8, 1, 5]));

        let last = &steps[2];
        assert_eq!(last.pivot, Some(rational(1, 2)));
        assert_eq!(last.multipliers[0].value, Rational::from(-4));
        assert_eq!(last.matrix[2], ints(&[0, 0, -1]));
        assert_eq!(last.constants, ints(&[8, 1, 1]));
        assert!(last.is_upper_triangular());
    }

    #[test]
    fn input_is_not_modified() {
        let system =
            LinearSystem::from_integers(&[[0, 1], [1, 1]], &[1, 2]).expect("valid system");
        let before = system.clone();
        eliminate(&system).expect("nonsingular");
        assert_eq!(system, before);
    }

    #[test]
    fn zero_pivot_swaps_with_first_nonzero_row_below() {
        let system = LinearSystem::from_integers(&[[0, 2, 1], [0, 1, 1], [3, 0, 1]], &[1, 2, 3])
            .expect("valid system");
        let steps = eliminate(&system).expect("nonsingular");

        assert_eq!(steps[1].rows_swapped, Some(RowSwap { from: 2, to: 0 }));
        assert_eq!(steps[1].matrix[0], ints(&[3, 0, 1]));
        assert_eq!(steps[1].matrix[2], ints(&[0, 2, 1]));
        assert_eq!(steps[1].constants, ints(&[3, 2, 1]));
        assert_eq!(steps[2].rows_swapped, None);
        assert!(steps.last().expect("steps").is_upper_triangular());
    }

    #[test]
    fn zero_column_is_singular() {
        let system = LinearSystem::from_integers(&[[1, 2, 3], [2, 4, 1], [3, 6, 2]], &[1, 2, 3])
            .expect("valid system");
        match eliminate(&system) {
            Err(Error::Singular { column, completed }) => {
                assert_eq!(column, 1);
                assert_eq!(completed.len(), 2);
                assert_eq!(completed[1].matrix[1][1], Rational::zero());
            }
            other => panic!("expected a singular system, got {other:?}"),
        }
    }

    #[test]
    fn all_zero_first_column_fails_immediately() {
        let system =
            LinearSystem::from_integers(&[[0, 1], [0, 2]], &[1, 2]).expect("valid system");
        assert!(matches!(
            eliminate(&system),
            Err(Error::Singular { column: 0, ref completed }) if completed.len() == 1
        ));
    }

    #[test]
    fn zero_final_pivot_is_singular() {
        let system =
            LinearSystem::from_integers(&[[1, 2], [2, 4]], &[3, 6]).expect("valid system");
        match eliminate(&system) {
            Err(Error::Singular { column, completed }) => {
                assert_eq!(column, 1);
                assert_eq!(completed.len(), 2);
                assert!(completed[1].is_upper_triangular());
            }
            other => panic!("expected a singular system, got {other:?}"),
        }
    }

    #[test]
    fn one_by_one_emits_only_the_initial_state() {
        let system = LinearSystem::from_integers(&[[5]], &[10]).expect("valid system");
        let steps = eliminate(&system).expect("nonsingular");
        assert_eq!(steps.len(), 1);
        assert!(steps[0].is_upper_triangular());

        let zero = LinearSystem::from_integers(&[[0]], &[1]).expect("valid system");
        assert!(matches!(
            eliminate(&zero),
            Err(Error::Singular { column: 0, .. })
        ));
    }

    #[test]
    fn fractional_entries_stay_exact() {
        let system = LinearSystem::from_decimals(&[[0.1, 0.2], [0.3, 0.5]], &[0.3, 0.8])
            .expect("valid system");
        let steps = eliminate(&system).expect("nonsingular");
        let last = &steps[1];
        assert_eq!(last.multipliers[0].value, Rational::from(-3));
        assert_eq!(last.matrix[1][1], rational(-1, 10));
        assert_eq!(last.constants[1], rational(-1, 10));
    }
}
