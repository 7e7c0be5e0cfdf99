//! Numerical building blocks.
//!
//! - [`solvers`]: Newton-Raphson root finding with explicit derivatives

pub mod solvers;
