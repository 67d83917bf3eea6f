//! Conversions from wire types to domain types for the dashboard.

use super::wire::{DashboardResponse, TransactionResponse};
use super::{DashboardSnapshot, TransactionRecord};

impl From<TransactionResponse> for TransactionRecord {
    fn from(t: TransactionResponse) -> Self {
        Self {
            direction: t.direction,
            counterparty: t.counterparty.unwrap_or_default(),
            status: t.status.unwrap_or_default(),
            description: t.description.unwrap_or_default(),
            timestamp: t.timestamp,
        }
    }
}

impl From<DashboardResponse> for DashboardSnapshot {
    fn from(d: DashboardResponse) -> Self {
        Self {
            balance: d.balance,
            wallet_id: d.wallet_id,
            username: d.username.unwrap_or_default(),
            email: d.email.unwrap_or_default(),
            statistics: d.statistics,
            transactions: d.transactions.into_iter().map(Into::into).collect(),
        }
    }
}
