/// One halving of the bracket.
///
/// `a`, `b` and their values describe the bracket the iteration started
/// from; `width` is `b - a`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRecord {
    /// Iteration number, starting at 1.
    pub index: usize,
    pub a: f64,
    pub b: f64,
    pub midpoint: f64,
    pub fa: f64,
    pub fb: f64,
    pub f_mid: f64,
    pub width: f64,
}
