//! Root finding for scalar functions of one variable.
//!
//! [`scan`] walks a range looking for sign changes, and [`bisection`]
//! refines each one to a root.

pub mod bisection;
pub mod scan;
