//! Newton-Raphson root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Converged state of a Newton solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonOutcome<T: Float> {
    /// Root estimate
    pub root: T,
    /// Newton steps taken (0 when the initial guess already converged)
    pub iterations: usize,
    /// `f(root)`
    pub residual: T,
}

/// Newton-Raphson root finder with an explicit derivative.
///
/// Uses `x_{n+1} = x_n - f(x_n) / f'(x_n)`, takes at most
/// `max_iterations` steps and refuses to step when `|f'(x)|` drops below the
/// configured derivative floor.
///
/// # Example
///
/// ```
/// use credit_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// // Solve x³ - x - 2 = 0
/// let f = |x: f64| x * x * x - x - 2.0;
/// let f_prime = |x: f64| 3.0 * x * x - 1.0;
///
/// let root = solver.find_root(f, f_prime, 1.5).unwrap();
/// assert!(f(root).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` using the derivative `f_prime`.
    ///
    /// # Errors
    ///
    /// * `SolverError::MaxIterationsExceeded` - Failed to converge
    /// * `SolverError::DerivativeNearZero` - Derivative below the floor
    /// * `SolverError::NumericalInstability` - An iterate became non-finite
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        self.solve(|x| Ok::<_, SolverError>((f(x), f_prime(x))), x0)
            .map(|outcome| outcome.root)
    }

    /// Find a root of a fallible function returning `(f(x), f'(x))` together.
    ///
    /// Evaluation errors are propagated unchanged; solver failures are
    /// converted into the caller's error type.
    ///
    /// # Example
    ///
    /// ```
    /// use credit_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    /// use credit_core::types::SolverError;
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    /// let outcome = solver
    ///     .solve(|x: f64| Ok::<_, SolverError>((x.exp() - 2.0, x.exp())), 0.0)
    ///     .unwrap();
    /// assert!((outcome.root - 2.0_f64.ln()).abs() < 1e-10);
    /// assert!(outcome.iterations > 0);
    /// ```
    pub fn solve<F, E>(&self, mut f: F, x0: T) -> Result<NewtonOutcome<T>, E>
    where
        F: FnMut(T) -> Result<(T, T), E>,
        E: From<SolverError>,
    {
        let mut x = x0;

        for iteration in 0..=self.config.max_iterations {
            let (value, derivative) = f(x)?;

            if !value.is_finite() {
                return Err(SolverError::NumericalInstability(format!(
                    "function value is not finite at x = {}",
                    x.to_f64().unwrap_or(f64::NAN)
                ))
                .into());
            }

            if value.abs() <= self.config.tolerance {
                return Ok(NewtonOutcome {
                    root: x,
                    iterations: iteration,
                    residual: value,
                });
            }

            if iteration == self.config.max_iterations {
                return Err(SolverError::MaxIterationsExceeded {
                    iterations: self.config.max_iterations,
                    x: x.to_f64().unwrap_or(f64::NAN),
                    residual: value.to_f64().unwrap_or(f64::NAN),
                }
                .into());
            }

            if derivative.is_nan() || derivative.abs() < self.config.derivative_floor {
                return Err(SolverError::DerivativeNearZero {
                    x: x.to_f64().unwrap_or(f64::NAN),
                    derivative: derivative.to_f64().unwrap_or(f64::NAN),
                }
                .into());
            }

            x = x - value / derivative;

            if !x.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                )
                .into());
            }
        }

        // The loop always returns on its final pass.
        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
            x: x.to_f64().unwrap_or(f64::NAN),
            residual: f64::NAN,
        }
        .into())
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
