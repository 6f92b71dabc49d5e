//! Core types for the Numerus solvers.
//!
//! This crate defines the building blocks the solvers in `numerus-solve`
//! work with:
//!
//! - [`Rational`]: an always-reduced exact fraction backed by big integers
//! - [`Expression`]: a compiled single-variable expression in `x`,
//!   evaluated by a closed-grammar interpreter
//! - [`degree`]: polynomial degree classification used to gate inputs
//! - [`Function`]: a fallible scalar function, the seam solvers are generic over
//! - [`Observer`]: receives solver events and optionally returns control actions

pub mod degree;
pub mod expr;
mod function;
mod observer;
mod rational;

pub use degree::{DegreeError, DegreePolicy};
pub use expr::Expression;
pub use function::{Function, Infallibly};
pub use observer::Observer;
pub use rational::{Rational, RationalError};
