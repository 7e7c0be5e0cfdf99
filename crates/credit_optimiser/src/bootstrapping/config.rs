//! Bootstrap configuration types.

use credit_core::math::solvers::SolverConfig;
use num_traits::Float;

/// Configuration for hazard-curve bootstrapping.
///
/// # Examples
///
/// ```
/// use credit_optimiser::bootstrapping::HazardBootstrapConfig;
///
/// let config: HazardBootstrapConfig<f64> = HazardBootstrapConfig::default();
/// assert_eq!(config.max_iterations, 100);
/// assert_eq!(config.initial_hazard, 0.01);
///
/// let strict = HazardBootstrapConfig::<f64>::builder()
///     .tolerance(1e-12)
///     .reject_negative_hazard(true)
///     .build();
/// assert!(strict.reject_negative_hazard);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardBootstrapConfig<T: Float> {
    /// Absolute tolerance on the net value of each calibration contract.
    ///
    /// Default: 1e-10
    pub tolerance: T,

    /// Maximum Newton steps per knot.
    ///
    /// Default: 100
    pub max_iterations: usize,

    /// Seed hazard for every knot.
    ///
    /// Default: 0.01
    pub initial_hazard: T,

    /// Smallest accepted `|dV/dh|`.
    ///
    /// Default: 1e-14
    pub derivative_floor: T,

    /// Turn a negative solved hazard into an error instead of a warning.
    ///
    /// Default: false
    pub reject_negative_hazard: bool,
}

impl<T: Float> Default for HazardBootstrapConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 100,
            initial_hazard: T::from(0.01).unwrap(),
            derivative_floor: T::from(1e-14).unwrap(),
            reject_negative_hazard: false,
        }
    }
}

impl<T: Float> HazardBootstrapConfig<T> {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> HazardBootstrapConfigBuilder<T> {
        HazardBootstrapConfigBuilder::new()
    }

    /// Tighter tolerance (1e-14) and more iterations (500).
    pub fn high_precision() -> Self {
        Self {
            tolerance: T::from(1e-14).unwrap(),
            max_iterations: 500,
            ..Self::default()
        }
    }

    /// Relaxed tolerance (1e-8) and fewer iterations (50).
    pub fn fast() -> Self {
        Self {
            tolerance: T::from(1e-8).unwrap(),
            max_iterations: 50,
            ..Self::default()
        }
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the seed hazard.
    pub fn with_initial_hazard(mut self, initial_hazard: T) -> Self {
        self.initial_hazard = initial_hazard;
        self
    }

    /// Set the derivative floor.
    pub fn with_derivative_floor(mut self, floor: T) -> Self {
        self.derivative_floor = floor;
        self
    }

    /// Set the negative-hazard policy.
    pub fn with_reject_negative_hazard(mut self, reject: bool) -> Self {
        self.reject_negative_hazard = reject;
        self
    }

    /// Check every field, collecting one message per problem.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(self.tolerance.is_finite() && self.tolerance > T::zero()) {
            errors.push(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance.to_f64().unwrap_or(f64::NAN)
            ));
        }
        if self.max_iterations == 0 {
            errors.push("max_iterations must be at least 1".to_string());
        }
        if !self.initial_hazard.is_finite() {
            errors.push(format!(
                "initial_hazard must be finite, got {}",
                self.initial_hazard.to_f64().unwrap_or(f64::NAN)
            ));
        }
        if !(self.derivative_floor.is_finite() && self.derivative_floor >= T::zero()) {
            errors.push(format!(
                "derivative_floor must be non-negative and finite, got {}",
                self.derivative_floor.to_f64().unwrap_or(f64::NAN)
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Newton settings for one knot.
    pub fn solver_config(&self) -> SolverConfig<T> {
        SolverConfig {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
            derivative_floor: self.derivative_floor,
        }
    }
}

/// Builder for [`HazardBootstrapConfig`].
#[derive(Debug, Clone)]
pub struct HazardBootstrapConfigBuilder<T: Float> {
    config: HazardBootstrapConfig<T>,
}

impl<T: Float> Default for HazardBootstrapConfigBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> HazardBootstrapConfigBuilder<T> {
    /// Start from the defaults.
    pub fn new() -> Self {
        Self {
            config: HazardBootstrapConfig::default(),
        }
    }

    /// Set the convergence tolerance.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Set the iteration cap.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Set the seed hazard.
    pub fn initial_hazard(mut self, initial_hazard: T) -> Self {
        self.config.initial_hazard = initial_hazard;
        self
    }

    /// Set the derivative floor.
    pub fn derivative_floor(mut self, floor: T) -> Self {
        self.config.derivative_floor = floor;
        self
    }

    /// Set the negative-hazard policy.
    pub fn reject_negative_hazard(mut self, reject: bool) -> Self {
        self.config.reject_negative_hazard = reject;
        self
    }

    /// Finish.
    pub fn build(self) -> HazardBootstrapConfig<T> {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Defaults and Presets
    // ========================================

    #[test]
    fn test_default_config() {
        let config: HazardBootstrapConfig<f64> = HazardBootstrapConfig::default();
        assert_eq!(config.tolerance, 1e-10);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.initial_hazard, 0.01);
        assert_eq!(config.derivative_floor, 1e-14);
        assert!(!config.reject_negative_hazard);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        let precise: HazardBootstrapConfig<f64> = HazardBootstrapConfig::high_precision();
        assert_eq!(precise.tolerance, 1e-14);
        assert_eq!(precise.max_iterations, 500);

        let fast: HazardBootstrapConfig<f64> = HazardBootstrapConfig::fast();
        assert_eq!(fast.tolerance, 1e-8);
        assert_eq!(fast.max_iterations, 50);
    }

    // ========================================
    // Builder and with_* Tests
    // ========================================

    #[test]
    fn test_builder_matches_with_methods() {
        let built = HazardBootstrapConfig::<f64>::builder()
            .tolerance(1e-9)
            .max_iterations(20)
            .initial_hazard(0.02)
            .derivative_floor(1e-12)
            .reject_negative_hazard(true)
            .build();
        let chained = HazardBootstrapConfig::<f64>::new()
            .with_tolerance(1e-9)
            .with_max_iterations(20)
            .with_initial_hazard(0.02)
            .with_derivative_floor(1e-12)
            .with_reject_negative_hazard(true);
        assert_eq!(built, chained);
    }

    #[test]
    fn test_solver_config_mirrors_fields() {
        let config = HazardBootstrapConfig::<f64>::new()
            .with_tolerance(1e-8)
            .with_max_iterations(7)
            .with_derivative_floor(1e-9);
        let solver = config.solver_config();
        assert_eq!(solver.tolerance, 1e-8);
        assert_eq!(solver.max_iterations, 7);
        assert_eq!(solver.derivative_floor, 1e-9);
    }

    // ========================================
    // Validation Tests
    // ========================================

    #[test]
    fn test_validate_collects_every_problem() {
        let config = HazardBootstrapConfig::<f64>::new()
            .with_tolerance(0.0)
            .with_max_iterations(0)
            .with_initial_hazard(f64::NAN)
            .with_derivative_floor(-1.0);
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors[0].contains("tolerance"));
        assert!(errors[1].contains("max_iterations"));
    }
}
