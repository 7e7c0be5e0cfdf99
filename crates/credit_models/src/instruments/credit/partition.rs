//! Integration partitions for the protection leg.

use credit_core::market_data::curves::YieldCurve;
use credit_core::types::PricingError;
use num_traits::Float;

/// Monthly grid on `[0, T]` with discount factors at every boundary.
///
/// `K = ceil(12 T)` equal steps, boundaries `s_i = i T / K`.
///
/// # Examples
///
/// ```
/// use credit_core::market_data::curves::FlatCurve;
/// use credit_models::instruments::credit::IntegrationPartition;
///
/// let partition = IntegrationPartition::new(1.05_f64, &FlatCurve::new(0.03)).unwrap();
/// assert_eq!(partition.steps(), 13);
/// assert_eq!(partition.points().len(), 14);
/// assert_eq!(partition.discount_factors()[0], 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationPartition<T: Float> {
    points: Vec<T>,
    discount_factors: Vec<T>,
}

impl<T: Float> IntegrationPartition<T> {
    /// Number of steps for a maturity: `ceil(12 T)`, at least one.
    pub fn steps_for(maturity: T) -> Result<usize, PricingError> {
        if !maturity.is_finite() || maturity <= T::zero() {
            return Err(PricingError::InvalidInput(format!(
                "partition maturity {} must be positive and finite",
                maturity.to_f64().unwrap_or(f64::NAN)
            )));
        }
        let twelve = T::from(12.0).unwrap();
        (maturity * twelve)
            .ceil()
            .to_usize()
            .map(|k| k.max(1))
            .ok_or_else(|| {
                PricingError::NumericalInstability("partition size overflow".to_string())
            })
    }

    /// Build the partition for `maturity`, caching `Z(s_i)` from `discount`.
    pub fn new<D: YieldCurve<T>>(maturity: T, discount: &D) -> Result<Self, PricingError> {
        let steps = Self::steps_for(maturity)?;
        let k = T::from(steps).unwrap();

        let mut points = Vec::with_capacity(steps + 1);
        let mut discount_factors = Vec::with_capacity(steps + 1);
        for i in 0..=steps {
            let s = if i == steps {
                maturity
            } else {
                T::from(i).unwrap() * maturity / k
            };
            points.push(s);
            discount_factors.push(discount.discount_factor(s)?);
        }

        Ok(Self {
            points,
            discount_factors,
        })
    }

    /// Grid boundaries `s_0 = 0 .. s_K = T`.
    #[inline]
    pub fn points(&self) -> &[T] {
        &self.points
    }

    /// Discount factors at the boundaries.
    #[inline]
    pub fn discount_factors(&self) -> &[T] {
        &self.discount_factors
    }

    /// Number of steps K.
    #[inline]
    pub fn steps(&self) -> usize {
        self.points.len() - 1
    }

    /// Right end of the grid.
    #[inline]
    pub fn maturity(&self) -> T {
        self.points[self.points.len() - 1]
    }
}

/// Partitions of the standard contracts, keyed by 1-based knot index.
///
/// Built once before calibration and shared read-only afterwards.
///
/// # Examples
///
/// ```
/// use credit_core::market_data::curves::FlatCurve;
/// use credit_models::instruments::credit::PartitionCache;
///
/// let cache = PartitionCache::build(&[1.0_f64, 2.0, 5.0], &FlatCurve::new(0.03)).unwrap();
/// assert_eq!(cache.len(), 3);
/// assert_eq!(cache.partition(3).unwrap().steps(), 60);
/// assert!(cache.partition(0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionCache<T: Float> {
    partitions: Vec<IntegrationPartition<T>>,
}

impl<T: Float> PartitionCache<T> {
    /// Precompute one partition per maturity, in knot order.
    pub fn build<D: YieldCurve<T>>(maturities: &[T], discount: &D) -> Result<Self, PricingError> {
        let partitions = maturities
            .iter()
            .map(|&m| IntegrationPartition::new(m, discount))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { partitions })
    }

    /// Partition of knot `m` (1-based).
    pub fn partition(&self, knot: usize) -> Result<&IntegrationPartition<T>, PricingError> {
        knot.checked_sub(1)
            .and_then(|i| self.partitions.get(i))
            .ok_or_else(|| {
                PricingError::InvalidInput(format!(
                    "no cached partition for knot {} (cache holds {})",
                    knot,
                    self.partitions.len()
                ))
            })
    }

    /// Number of cached partitions.
    #[inline]
    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    /// True when no partition is cached.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }
}
