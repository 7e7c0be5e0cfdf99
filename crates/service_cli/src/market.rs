//! Market data files.
//!
//! A market data file holds the trade date, the Nelson-Siegel discount
//! parameters, the standard quotes to calibrate to, and optionally a book
//! of trades to value.

use credit_core::market_data::curves::NelsonSiegelCurve;
use credit_core::types::Date;
use credit_models::instruments::credit::{CdsTerms, NonStandardCds};
use credit_models::schedules::{CdsScheduleBuilder, Frequency};
use credit_optimiser::bootstrapping::CdsQuote;
use serde::Deserialize;
use std::path::Path;

use crate::{CliError, Result};

const BASIS_POINT: f64 = 1e-4;

/// Discount curve section
#[derive(Debug, Clone, Deserialize)]
pub struct DiscountSection {
    /// `[b0, b1, b2, tau]`
    pub nelson_siegel: [f64; 4],
}

/// One standard quote
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteSpec {
    /// Contract maturity date
    pub maturity: Date,
    /// Par spread in basis points
    pub spread_bp: f64,
}

/// Calibration section
#[derive(Debug, Clone, Deserialize)]
pub struct CalibrationSection {
    /// Recovery assumed by every quote
    pub recovery: f64,
    /// Coupon roll day; defaults to each maturity's day of month
    pub roll_day: Option<u32>,
    /// Coupon frequency
    #[serde(default)]
    pub frequency: Frequency,
    /// Quotes in increasing maturity order
    pub quotes: Vec<QuoteSpec>,
}

/// One trade to value
#[derive(Debug, Clone, Deserialize)]
pub struct TradeSpec {
    /// Display name
    pub name: String,
    /// Maturity date
    pub maturity: Date,
    /// Coupon roll day; defaults to the maturity's day of month
    pub roll_day: Option<u32>,
    /// Contractual spread in basis points
    pub spread_bp: f64,
    /// Recovery rate
    pub recovery: f64,
    /// Face value
    #[serde(default = "default_notional")]
    pub notional: f64,
}

fn default_notional() -> f64 {
    1.0
}

/// Parsed market data file
#[derive(Debug, Clone, Deserialize)]
pub struct MarketData {
    /// Valuation date
    pub trade_date: Date,
    /// Discount curve
    pub discount: DiscountSection,
    /// Calibration quotes
    pub calibration: CalibrationSection,
    /// Trades to value
    #[serde(default)]
    pub trades: Vec<TradeSpec>,
}

impl MarketData {
    /// Load a market data file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse market data from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let market: Self = toml::from_str(content).map_err(|e| CliError::market_data(e.to_string()))?;
        if market.calibration.quotes.is_empty() {
            return Err(CliError::market_data("calibration.quotes is empty"));
        }
        Ok(market)
    }

    /// Nelson-Siegel discount curve.
    pub fn discount_curve(&self) -> Result<NelsonSiegelCurve<f64>> {
        let [b0, b1, b2, tau] = self.discount.nelson_siegel;
        Ok(NelsonSiegelCurve::new(b0, b1, b2, tau)?)
    }

    /// Calibration quotes with schedules generated from the trade date.
    pub fn quotes(&self, discount: &NelsonSiegelCurve<f64>) -> Result<Vec<CdsQuote<f64>>> {
        let calibration = &self.calibration;
        calibration
            .quotes
            .iter()
            .map(|quote| -> Result<CdsQuote<f64>> {
                let mut builder = CdsScheduleBuilder::new()
                    .trade_date(self.trade_date)
                    .maturity(quote.maturity)
                    .frequency(calibration.frequency);
                if let Some(day) = calibration.roll_day {
                    builder = builder.roll_day(day);
                }
                let coupons = builder.build()?;
                Ok(CdsQuote::from_coupons(
                    &coupons,
                    quote.spread_bp * BASIS_POINT,
                    calibration.recovery,
                    discount,
                )?)
            })
            .collect()
    }

    /// Trades as non-standard contracts, paired with their names.
    pub fn contracts(
        &self,
        discount: &NelsonSiegelCurve<f64>,
    ) -> Result<Vec<(String, NonStandardCds<f64>)>> {
        self.trades
            .iter()
            .map(|trade| -> Result<(String, NonStandardCds<f64>)> {
                let mut builder = CdsScheduleBuilder::new()
                    .trade_date(self.trade_date)
                    .maturity(trade.maturity);
                if let Some(day) = trade.roll_day {
                    builder = builder.roll_day(day);
                }
                let coupons = builder.build()?;
                let schedule = coupons.payment_schedule(discount)?;
                let terms = CdsTerms::new(trade.spread_bp * BASIS_POINT, trade.recovery, schedule)?
                    .with_notional(trade.notional);
                let contract = NonStandardCds::new(terms, coupons.previous_accrual())?;
                Ok((trade.name.clone(), contract))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const REFERENCE: &str = include_str!("../data/reference_2014.toml");

    #[test]
    fn test_parse_reference_file() {
        let market = MarketData::parse(REFERENCE).unwrap();
        assert_eq!(market.trade_date, Date::from_ymd(2014, 2, 28).unwrap());
        assert_eq!(market.calibration.quotes.len(), 10);
        assert_eq!(market.calibration.roll_day, Some(20));
        assert_eq!(market.calibration.frequency, Frequency::Quarterly);
        assert_eq!(market.trades.len(), 1);
        assert_eq!(market.trades[0].notional, 100_000_000.0);
    }

    #[test]
    fn test_quotes_follow_file_order() {
        let market = MarketData::parse(REFERENCE).unwrap();
        let discount = market.discount_curve().unwrap();
        let quotes = market.quotes(&discount).unwrap();

        assert_eq!(quotes.len(), 10);
        assert_relative_eq!(quotes[0].spread(), 0.010307, max_relative = 1e-12);
        assert_relative_eq!(quotes[0].maturity(), 385.0 / 365.0, max_relative = 1e-12);
        for w in quotes.windows(2) {
            assert!(w[0].maturity() < w[1].maturity());
        }
    }

    #[test]
    fn test_contracts_carry_previous_accrual() {
        let market = MarketData::parse(REFERENCE).unwrap();
        let discount = market.discount_curve().unwrap();
        let contracts = market.contracts(&discount).unwrap();

        let (name, contract) = &contracts[0];
        assert_eq!(name, "ACME 2042 170bp");
        assert_relative_eq!(contract.previous_accrual(), 11.0 / 360.0, max_relative = 1e-12);
        assert_eq!(contract.terms().recovery(), 0.6);
    }

    #[test]
    fn test_empty_quotes_rejected() {
        let text = r#"
            trade_date = "2014-02-28"
            [discount]
            nelson_siegel = [0.04, -0.04, -0.05, 1.6]
            [calibration]
            recovery = 0.4
            quotes = []
        "#;
        assert!(matches!(MarketData::parse(text), Err(CliError::MarketData(_))));
    }

    #[test]
    fn test_bad_discount_parameters() {
        let text = REFERENCE.replace("1.614]", "-1.0]");
        let market = MarketData::parse(&text).unwrap();
        assert!(matches!(market.discount_curve(), Err(CliError::Curve(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = MarketData::load(Path::new("/nonexistent/market.toml")).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }
}
