//! Company domain — catalog entries, analytics, filtering, favorites.

pub mod analytics;
#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod favorites;
pub mod filter;
pub mod wire;

use crate::shared::CompanyId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── ChartPoint ──────────────────────────────────────────────────────────────

/// A single point in a historical price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: DateTime<Utc>,
    pub price: f64,
    pub volume: f64,
}

// ─── Company ─────────────────────────────────────────────────────────────────

/// A validated, tradeable catalog entry.
///
/// Owned and mutated exclusively by the backend; the client holds a
/// read-only snapshot per fetch. `chart_data` is either empty or ordered by
/// non-decreasing date (enforced at conversion).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub symbol: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub logo: String,
    pub current_price: f64,
    pub starting_price: f64,
    pub market_cap: f64,
    pub daily_increase_rate: f64,
    pub total_supply: f64,
    pub circulating_supply: f64,
    pub chart_data: Vec<ChartPoint>,
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    MissingId,
    MissingSymbol,
    MissingName,
    NegativePrice,
    UnorderedSeries,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(id, errors) => {
                writeln!(f, "Company validation errors ({id}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::MissingId => write!(f, "Missing id"),
            ValidationError::MissingSymbol => write!(f, "Missing symbol"),
            ValidationError::MissingName => write!(f, "Missing name"),
            ValidationError::NegativePrice => write!(f, "Negative price"),
            ValidationError::UnorderedSeries => {
                write!(f, "Chart series is not ordered by date")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
