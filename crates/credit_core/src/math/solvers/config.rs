//! Solver configuration types.

use num_traits::Float;

/// Configuration for Newton-Raphson root finding.
///
/// # Example
///
/// ```
/// use credit_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.max_iterations, 100);
///
/// let custom = SolverConfig::new(1e-12, 200).with_derivative_floor(1e-10);
/// assert_eq!(custom.derivative_floor, 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance.
    ///
    /// The solver stops when `|f(x)| <= tolerance`.
    pub tolerance: T,

    /// Maximum number of Newton steps before giving up with
    /// `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,

    /// Smallest derivative magnitude accepted for a Newton step.
    ///
    /// Below it the solver returns `SolverError::DerivativeNearZero`.
    pub derivative_floor: T,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-10
    /// - `max_iterations`: 100
    /// - `derivative_floor`: 1e-14
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 100,
            derivative_floor: T::from(1e-14).unwrap(),
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a configuration with the default derivative floor.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
            ..Self::default()
        }
    }

    /// Replace the derivative floor.
    pub fn with_derivative_floor(mut self, floor: T) -> Self {
        self.derivative_floor = floor;
        self
    }

    /// Tight tolerance (1e-14) and 500 iterations.
    pub fn high_precision() -> Self {
        Self {
            tolerance: T::from(1e-14).unwrap(),
            max_iterations: 500,
            ..Self::default()
        }
    }

    /// Relaxed tolerance (1e-6) and 50 iterations.
    pub fn fast() -> Self {
        Self {
            tolerance: T::from(1e-6).unwrap(),
            max_iterations: 50,
            ..Self::default()
        }
    }
}
