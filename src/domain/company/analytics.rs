//! Market analytics — pure derivations over a company snapshot.
//!
//! `change_24h` is exact when the series carries at least two points and an
//! explicit estimate otherwise. The estimate's randomness sits behind
//! [`VolatilitySource`] so callers can pin it in tests.

use super::Company;
use thiserror::Error;

/// Half-width of the synthetic range band used when no history exists.
const SYNTHETIC_BAND: f64 = 0.05;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("invalid series: previous close is zero")]
    InvalidSeries,
    #[error("invalid company: no history and no current price")]
    InvalidCompany,
}

// ─── Volatility source ───────────────────────────────────────────────────────

/// Source of uniform values in `[0, 1)` feeding the 24h-change estimate.
pub trait VolatilitySource {
    fn next_unit(&mut self) -> f64;
}

/// Default source backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngVolatility;

impl VolatilitySource for ThreadRngVolatility {
    fn next_unit(&mut self) -> f64 {
        rand::random::<f64>()
    }
}

/// Fixed source for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedVolatility(pub f64);

impl VolatilitySource for FixedVolatility {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

// ─── Derivations ─────────────────────────────────────────────────────────────

/// 24h price change in percent.
///
/// With at least two points this is the exact delta between the last two
/// closes: `(latest - previous) / previous * 100`. A zero previous close is
/// an error, never a silent coercion.
///
/// With fewer than two points this is an estimate, not a measurement:
/// `daily_increase_rate * 100` perturbed by `(u - 0.45) * 7` for `u` drawn
/// from `volatility`, bounding the term to roughly [-3.15, +4.05].
pub fn change_24h(
    company: &Company,
    volatility: &mut impl VolatilitySource,
) -> Result<f64, AnalyticsError> {
    let series = &company.chart_data;
    if series.len() >= 2 {
        let latest = series[series.len() - 1].price;
        let previous = series[series.len() - 2].price;
        if previous == 0.0 {
            return Err(AnalyticsError::InvalidSeries);
        }
        return Ok((latest - previous) / previous * 100.0);
    }

    let perturbation = (volatility.next_unit() - 0.45) * 7.0;
    Ok(company.daily_increase_rate * 100.0 + perturbation)
}

/// Inclusive low/high of a price series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Price range over the full historical series, or a synthetic ±5% band
/// around the current price when no history exists.
pub fn price_range(company: &Company) -> Result<PriceRange, AnalyticsError> {
    if !company.chart_data.is_empty() {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in &company.chart_data {
            min = min.min(point.price);
            max = max.max(point.price);
        }
        return Ok(PriceRange { min, max });
    }

    if company.current_price > 0.0 {
        return Ok(PriceRange {
            min: company.current_price * (1.0 - SYNTHETIC_BAND),
            max: company.current_price * (1.0 + SYNTHETIC_BAND),
        });
    }

    Err(AnalyticsError::InvalidCompany)
}
