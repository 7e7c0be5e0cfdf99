//! How often a CDS pays its premium.

use std::fmt;
use std::str::FromStr;

/// Coupon frequency for month-rolled CDS schedules.
///
/// # Examples
///
/// ```
/// use credit_models::schedules::Frequency;
///
/// assert_eq!(Frequency::default(), Frequency::Quarterly);
/// assert_eq!(Frequency::SemiAnnual.months_between_payments(), 6);
/// assert_eq!("3m".parse::<Frequency>().unwrap(), Frequency::Quarterly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Frequency {
    /// Once a year.
    Annual,
    /// Twice a year.
    SemiAnnual,
    /// Every three months; the market convention.
    #[default]
    Quarterly,
    /// Every month.
    Monthly,
}

impl Frequency {
    /// Coupons per year.
    pub fn periods_per_year(&self) -> u32 {
        12 / self.months_between_payments()
    }

    /// Roll step in calendar months.
    pub fn months_between_payments(&self) -> u32 {
        match self {
            Frequency::Annual => 12,
            Frequency::SemiAnnual => 6,
            Frequency::Quarterly => 3,
            Frequency::Monthly => 1,
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Frequency {
    type Err = String;

    /// Case-insensitive; accepts names or month tenors (`"6m"`), ignoring
    /// dashes, underscores, and spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "annual" | "yearly" | "1y" | "12m" => Ok(Frequency::Annual),
            "semiannual" | "6m" => Ok(Frequency::SemiAnnual),
            "quarterly" | "3m" => Ok(Frequency::Quarterly),
            "monthly" | "1m" => Ok(Frequency::Monthly),
            _ => Err(format!("unrecognised coupon frequency '{}'", s)),
        }
    }
}
