//! Deposit domain — payment configuration, purchase intent, buy workflow.

#[cfg(feature = "http")]
pub mod client;
pub mod state;
pub mod wire;

use serde::{Deserialize, Serialize};

/// Fixed conversion factor between the payment currency and platform coins.
pub const COIN_RATE: f64 = 1.0;

// ─── PaymentMethod ───────────────────────────────────────────────────────────

/// Payment rail configured by the administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Wallet,
    Upi,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Wallet => "wallet",
            PaymentMethod::Upi => "upi",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── PaymentConfiguration ────────────────────────────────────────────────────

/// Administrator-controlled payment target.
///
/// Read once per workflow entry and immutable for the duration of that
/// attempt; written only by the admin surface outside this SDK.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfiguration {
    pub qr_code_image: String,
    pub payment_method: PaymentMethod,
}

impl PaymentConfiguration {
    /// A configuration without a QR target cannot receive payments.
    pub fn is_usable(&self) -> bool {
        !self.qr_code_image.trim().is_empty()
    }
}

/// Capability supplying the current payment configuration snapshot.
///
/// Injected into the workflow so entry reads an explicit snapshot instead
/// of ambient storage.
pub trait ConfigurationProvider {
    fn payment_configuration(&self) -> Option<PaymentConfiguration>;
}

// ─── PurchaseIntent ──────────────────────────────────────────────────────────

/// The amount being entered, with its derived coin quantity.
///
/// Ephemeral: created on workflow entry, destroyed on close.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseIntent {
    pub amount_usd: f64,
    pub derived_coins: f64,
}
