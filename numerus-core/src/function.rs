use std::convert::Infallible;

/// A scalar function of one real variable that may fail at some points.
///
/// Solvers are generic over this trait so they work the same for compiled
/// [`Expression`](crate::Expression)s and for plain closures.
/// Closures returning `Result<f64, E>` implement it directly; infallible
/// closures can be wrapped in [`Infallibly`].
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be computed at `x`.
    fn eval(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F, E> Function for F
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn eval(&self, x: f64) -> Result<f64, E> {
        self(x)
    }
}

/// Wraps an infallible `f64 -> f64` function.
#[derive(Debug, Clone, Copy)]
pub struct Infallibly<F>(pub F);

impl<F> Function for Infallibly<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn eval(&self, x: f64) -> Result<f64, Infallible> {
        Ok((self.0)(x))
    }
}
