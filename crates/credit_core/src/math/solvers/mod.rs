//! Root-finding solvers.
//!
//! The hazard bootstrap solves one scalar equation per maturity knot, each
//! with an analytic derivative, so Newton-Raphson is the only solver here.
//!
//! ## Configuration
//!
//! [`SolverConfig`] controls:
//! - `tolerance`: Convergence tolerance on `|f(x)|` (default: 1e-10)
//! - `max_iterations`: Maximum Newton steps (default: 100)
//! - `derivative_floor`: Smallest acceptable `|f'(x)|` (default: 1e-14)
//!
//! ## Examples
//!
//! ```
//! use credit_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 (find √2)
//! let solver = NewtonRaphsonSolver::new(SolverConfig::default());
//!
//! let f = |x: f64| x * x - 2.0;
//! let f_prime = |x: f64| 2.0 * x;
//!
//! let root = solver.find_root(f, f_prime, 1.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

mod config;
mod newton_raphson;

pub use config::SolverConfig;
pub use newton_raphson::{NewtonOutcome, NewtonRaphsonSolver};
