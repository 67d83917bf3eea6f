//! Dashboard domain — the account aggregate and its load lifecycle.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a recorded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Sent,
    Received,
}

/// Lifetime transfer statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_sent: f64,
    pub total_received: f64,
    pub total_transactions: u64,
}

/// One recent ledger entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub direction: Direction,
    pub counterparty: String,
    pub status: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// Read-only aggregate of the account view.
///
/// Replaced wholesale on each successful fetch; never merged incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub balance: f64,
    pub wallet_id: String,
    pub username: String,
    pub email: String,
    pub statistics: Statistics,
    pub transactions: Vec<TransactionRecord>,
}
