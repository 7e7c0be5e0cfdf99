//! Bootstrap output: curve snapshot, diagnostics, and warnings.

use credit_core::market_data::curves::PiecewiseHazardCurve;
use credit_models::instruments::credit::PartitionCache;
use num_traits::Float;
use std::fmt;
use std::sync::Arc;

/// Non-fatal findings recorded while bootstrapping.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BootstrapWarning {
    /// A solved hazard is negative: the quotes imply survival increasing
    /// over that segment.
    NegativeHazard {
        /// Knot index (1-based)
        knot: usize,
        /// Solved hazard
        hazard: f64,
    },
}

impl fmt::Display for BootstrapWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapWarning::NegativeHazard { knot, hazard } => {
                write!(f, "negative hazard rate {} at knot {}", hazard, knot)
            }
        }
    }
}

/// Overall verdict on a finished bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BootstrapStatus {
    /// Every knot solved with a valid intensity.
    Clean,
    /// Solved, but at least one warning was raised.
    Flagged,
}

/// Immutable result of a hazard bootstrap.
///
/// The curve and the partition cache are shared snapshots; cloning the
/// result only bumps reference counts.
#[derive(Debug, Clone)]
pub struct HazardBootstrapResult<T: Float> {
    /// Calibrated curve
    pub curve: Arc<PiecewiseHazardCurve<T>>,
    /// Partitions of the calibration contracts, reusable for repricing
    pub cache: Arc<PartitionCache<T>>,
    /// Net value of each calibration contract at its solved hazard
    pub residuals: Vec<T>,
    /// Newton steps used per knot
    pub iterations: Vec<usize>,
    /// Warnings raised during the bootstrap
    pub warnings: Vec<BootstrapWarning>,
}

impl<T: Float> HazardBootstrapResult<T> {
    /// Solved hazard rates, one per knot.
    #[inline]
    pub fn hazard_rates(&self) -> &[T] {
        self.curve.hazard_rates()
    }

    /// Knot maturities `maturity[1..=M]`.
    #[inline]
    pub fn maturities(&self) -> &[T] {
        self.curve.maturities()
    }

    /// `Clean` when no warning was raised.
    pub fn status(&self) -> BootstrapStatus {
        if self.warnings.is_empty() {
            BootstrapStatus::Clean
        } else {
            BootstrapStatus::Flagged
        }
    }

    /// Shorthand for `status() == Clean`.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.status() == BootstrapStatus::Clean
    }

    /// Largest absolute residual across knots.
    pub fn max_residual(&self) -> T {
        self.residuals
            .iter()
            .fold(T::zero(), |acc, r| acc.max(r.abs()))
    }

    /// Total Newton steps across knots.
    pub fn total_iterations(&self) -> usize {
        self.iterations.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credit_core::market_data::curves::FlatCurve;

    fn result(warnings: Vec<BootstrapWarning>) -> HazardBootstrapResult<f64> {
        let curve = PiecewiseHazardCurve::new(&[0.0, 1.0, 2.0], &[0.02, 0.03]).unwrap();
        let cache = PartitionCache::build(curve.maturities(), &FlatCurve::new(0.01)).unwrap();
        HazardBootstrapResult {
            curve: Arc::new(curve),
            cache: Arc::new(cache),
            residuals: vec![1e-12, -3e-11],
            iterations: vec![4, 3],
            warnings,
        }
    }

    #[test]
    fn test_clean_status() {
        let r = result(vec![]);
        assert_eq!(r.status(), BootstrapStatus::Clean);
        assert!(r.is_clean());
        assert_eq!(r.max_residual(), 3e-11);
        assert_eq!(r.total_iterations(), 7);
        assert_eq!(r.hazard_rates(), &[0.02, 0.03]);
        assert_eq!(r.maturities(), &[1.0, 2.0]);
    }

    #[test]
    fn test_flagged_status() {
        let r = result(vec![BootstrapWarning::NegativeHazard {
            knot: 2,
            hazard: -0.001,
        }]);
        assert_eq!(r.status(), BootstrapStatus::Flagged);
        assert!(r.warnings[0].to_string().contains("knot 2"));
    }

    #[test]
    fn test_snapshot_is_shareable() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<HazardBootstrapResult<f64>>();
    }
}
