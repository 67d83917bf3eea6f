//! Wire types for company responses (REST).
//!
//! The backend serializes in camelCase; field names here are the Rust
//! equivalents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw chart point from the REST API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPointResponse {
    pub date: DateTime<Utc>,
    pub price: f64,
    #[serde(default)]
    pub volume: f64,
}

/// Raw company from the REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub id: Option<String>,
    pub symbol: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    pub current_price: f64,
    #[serde(default)]
    pub starting_price: f64,
    #[serde(default)]
    pub market_cap: f64,
    #[serde(default)]
    pub daily_increase_rate: f64,
    #[serde(default)]
    pub total_supply: f64,
    #[serde(default)]
    pub circulating_supply: f64,
    #[serde(default)]
    pub chart_data: Vec<ChartPointResponse>,
}
