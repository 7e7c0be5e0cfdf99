//! Bootstrap-specific error types.

use credit_core::market_data::MarketDataError;
use credit_core::types::PricingError;
use thiserror::Error;

/// Errors that stop a hazard bootstrap.
///
/// Knot indices are 1-based, matching the calibration contract they belong to.
///
/// # Examples
///
/// ```
/// use credit_optimiser::bootstrapping::BootstrapError;
///
/// let err = BootstrapError::convergence_failure(4, 4.06, 3e-7, 100);
/// assert!(err.is_convergence_failure());
/// assert!(format!("{}", err).contains("knot 4"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BootstrapError {
    /// Newton hit the iteration cap at a knot.
    #[error("Failed to converge at knot {knot} (maturity {maturity}): residual = {residual} after {iterations} iterations")]
    ConvergenceFailure {
        /// Knot index (1-based)
        knot: usize,
        /// Knot maturity in years
        maturity: f64,
        /// Net value at the last iterate
        residual: f64,
        /// Newton steps taken
        iterations: usize,
    },

    /// `dV/dh` fell under the derivative floor.
    #[error("Degenerate derivative at knot {knot}: dV/dh = {derivative} at hazard {hazard}")]
    DegenerateDerivative {
        /// Knot index (1-based)
        knot: usize,
        /// Hazard iterate where the slope vanished
        hazard: f64,
        /// Offending derivative
        derivative: f64,
    },

    /// Solved hazard is negative and the configuration rejects it.
    #[error("Negative hazard rate {hazard} at knot {knot}")]
    NegativeHazard {
        /// Knot index (1-based)
        knot: usize,
        /// Solved hazard
        hazard: f64,
    },

    /// Non-finite residual or iterate while solving a knot.
    #[error("Numerical instability at knot {knot}: {message}")]
    NumericalInstability {
        /// Knot index (1-based)
        knot: usize,
        /// Solver message
        message: String,
    },

    /// Leg valuation failed.
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Curve construction failed.
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    /// Quotes or configuration rejected before solving.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl BootstrapError {
    /// Create a convergence failure error.
    pub fn convergence_failure(
        knot: usize,
        maturity: f64,
        residual: f64,
        iterations: usize,
    ) -> Self {
        Self::ConvergenceFailure {
            knot,
            maturity,
            residual,
            iterations,
        }
    }

    /// Create a degenerate derivative error.
    pub fn degenerate_derivative(knot: usize, hazard: f64, derivative: f64) -> Self {
        Self::DegenerateDerivative {
            knot,
            hazard,
            derivative,
        }
    }

    /// Create a negative hazard error.
    pub fn negative_hazard(knot: usize, hazard: f64) -> Self {
        Self::NegativeHazard { knot, hazard }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Check if this is a convergence failure.
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, Self::ConvergenceFailure { .. })
    }

    /// Check if this is a degenerate derivative.
    pub fn is_degenerate_derivative(&self) -> bool {
        matches!(self, Self::DegenerateDerivative { .. })
    }

    /// Check if this is a rejected negative hazard.
    pub fn is_negative_hazard(&self) -> bool {
        matches!(self, Self::NegativeHazard { .. })
    }

    /// Check if this is an input error.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Knot the error is attached to, if any.
    pub fn knot(&self) -> Option<usize> {
        match self {
            Self::ConvergenceFailure { knot, .. }
            | Self::DegenerateDerivative { knot, .. }
            | Self::NegativeHazard { knot, .. }
            | Self::NumericalInstability { knot, .. } => Some(*knot),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_and_predicates() {
        let err = BootstrapError::degenerate_derivative(2, 0.03, 1e-16);
        assert!(err.is_degenerate_derivative());
        assert!(!err.is_convergence_failure());
        assert_eq!(err.knot(), Some(2));

        let err = BootstrapError::negative_hazard(7, -0.004);
        assert!(err.is_negative_hazard());
        assert!(format!("{}", err).contains("-0.004"));

        let err = BootstrapError::invalid_input("no quotes");
        assert!(err.is_invalid_input());
        assert_eq!(err.knot(), None);
    }

    #[test]
    fn test_from_pricing_error() {
        let err: BootstrapError = PricingError::InvalidInput("bad".to_string()).into();
        assert!(matches!(err, BootstrapError::Pricing(_)));
    }

    #[test]
    fn test_from_market_data_error() {
        let err: BootstrapError = MarketDataError::InsufficientData { got: 1, need: 2 }.into();
        assert!(matches!(err, BootstrapError::MarketData(_)));
    }
}
