use numerus_core::Rational;

/// A row exchange made to find a nonzero pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowSwap {
    /// The lower row that supplied the pivot.
    pub from: usize,
    /// The pivot row it was moved to.
    pub to: usize,
}

/// The factor by which the pivot row was added to `row`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Multiplier {
    pub row: usize,
    pub value: Rational,
}

/// The state of the system after one elimination round.
///
/// Every step owns its own copy of the matrix and constants.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EliminationStep {
    /// `0` for the initial state, `k + 1` for the round on column `k`.
    pub round: usize,
    /// Column eliminated in this round, `None` for the initial state.
    pub pivot_column: Option<usize>,
    pub matrix: Vec<Vec<Rational>>,
    pub constants: Vec<Rational>,
    pub pivot: Option<Rational>,
    pub multipliers: Vec<Multiplier>,
    pub rows_swapped: Option<RowSwap>,
}

impl EliminationStep {
    pub(super) fn initial(matrix: &[Vec<Rational>], constants: &[Rational]) -> Self {
        Self {
            round: 0,
            pivot_column: None,
            matrix: matrix.to_vec(),
            constants: constants.to_vec(),
            pivot: None,
            multipliers: Vec::new(),
            rows_swapped: None,
        }
    }

    /// True if every entry below the diagonal is zero.
    #[must_use]
    pub fn is_upper_triangular(&self) -> bool {
        self.matrix
            .iter()
            .enumerate()
            .all(|(i, row)| row.iter().take(i).all(Rational::is_zero))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[i64]]) -> Vec<Vec<Rational>> {
        rows.iter()
            .map(|row| row.iter().map(|&v| Rational::from(v)).collect())
            .collect()
    }

    #[test]
    fn upper_triangular_check() {
        let upper = EliminationStep::initial(&matrix(&[&[1, 2], &[0, 3]]), &[]);
        assert!(upper.is_upper_triangular());

        let full = EliminationStep::initial(&matrix(&[&[1, 2], &[4, 3]]), &[]);
        assert!(!full.is_upper_triangular());
    }
}
