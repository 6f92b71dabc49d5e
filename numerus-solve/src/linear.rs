//! Linear systems over exact rationals.

pub mod gauss;
