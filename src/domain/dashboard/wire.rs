//! Wire types for the dashboard aggregate (REST).

use super::{Direction, Statistics};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw transaction entry from the REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    #[serde(rename = "type")]
    pub direction: Direction,
    pub counterparty: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Raw dashboard aggregate from the REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub balance: f64,
    pub wallet_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub statistics: Statistics,
    #[serde(default)]
    pub transactions: Vec<TransactionResponse>,
}
