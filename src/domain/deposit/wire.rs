//! Wire types for deposit submission (REST).

use serde::{Deserialize, Serialize};

/// Deposit submission payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    pub amount: f64,
    pub payment_method: String,
}

/// Backend acknowledgement.
///
/// `accepted` means queued for admin approval, not settled; the backend is
/// the sole authority on when the balance credit occurs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositResponse {
    pub accepted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
