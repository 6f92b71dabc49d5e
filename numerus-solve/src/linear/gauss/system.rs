use numerus_core::Rational;

use super::SystemError;

/// A square system `coefficients · x = constants` over exact rationals.
///
/// Construction checks the shape, so every `LinearSystem` has `n` rows of
/// `n` coefficients and `n` constants with `n >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LinearSystem {
    coefficients: Vec<Vec<Rational>>,
    constants: Vec<Rational>,
}

impl LinearSystem {
    /// Creates a system from its coefficient rows and constants.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, if any row's length differs
    /// from the number of rows, or if there is not one constant per row.
    pub fn new(
        coefficients: Vec<Vec<Rational>>,
        constants: Vec<Rational>,
    ) -> Result<Self, SystemError> {
        let size = coefficients.len();
        if size == 0 {
            return Err(SystemError::Empty);
        }
        if let Some((row, values)) = coefficients
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != size)
        {
            return Err(SystemError::NotSquare {
                row,
                len: values.len(),
                size,
            });
        }
        if constants.len() != size {
            return Err(SystemError::ConstantsMismatch {
                expected: size,
                found: constants.len(),
            });
        }

        Ok(Self {
            coefficients,
            constants,
        })
    }

    /// Creates a system from integer entries.
    ///
    /// # Errors
    ///
    /// Returns an error under the same shape conditions as [`LinearSystem::new`].
    pub fn from_integers<R: AsRef<[i64]>>(
        coefficients: &[R],
        constants: &[i64],
    ) -> Result<Self, SystemError> {
        Self::new(
            coefficients
                .iter()
                .map(|row| row.as_ref().iter().map(|&v| Rational::from(v)).collect())
                .collect(),
            constants.iter().map(|&v| Rational::from(v)).collect(),
        )
    }

    /// Creates a system from decimal entries, each promoted exactly through
    /// its shortest decimal form (`0.1` becomes `1/10`).
    ///
    /// # Errors
    ///
    /// Returns an error if any entry is non-finite, or under the same shape
    /// conditions as [`LinearSystem::new`].
    pub fn from_decimals<R: AsRef<[f64]>>(
        coefficients: &[R],
        constants: &[f64],
    ) -> Result<Self, SystemError> {
        let coefficients = coefficients
            .iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .map(|&v| Rational::from_f64(v))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        let constants = constants
            .iter()
            .map(|&v| Rational::from_f64(v))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(coefficients, constants)
    }

    /// Number of equations, and of unknowns.
    #[must_use]
    pub fn size(&self) -> usize {
        self.constants.len()
    }

    #[must_use]
    pub fn coefficients(&self) -> &[Vec<Rational>] {
        &self.coefficients
    }

    #[must_use]
    pub fn constants(&self) -> &[Rational] {
        &self.constants
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LinearSystem {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            coefficients: Vec<Vec<Rational>>,
            constants: Vec<Rational>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.coefficients, raw.constants).map_err(serde::de::Error::custom)
    }
}
