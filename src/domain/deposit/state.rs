//! Deposit/buy workflow — explicit state machine gating submission.
//!
//! One machine replaces the scattered UI flags of a modal-driven buy flow:
//! entry is gated on a usable payment configuration, submission on a
//! positive parsed amount, and cancellation on no request being in flight.
//!
//! The app owns the instance. The SDK provides the transitions; the
//! sub-client in `client.rs` drives the backend call between
//! `begin_submit` and `resolve`.

use super::wire::{DepositRequest, DepositResponse};
use super::{ConfigurationProvider, PaymentConfiguration, PurchaseIntent, COIN_RATE};
use crate::error::HttpError;
use thiserror::Error;

/// Which aggregate view opened the workflow. Refreshed after acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOrigin {
    Catalog,
    Dashboard,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// Payment configuration missing or without a QR target. The attempt
    /// is over; the workflow stays idle and nothing leaks forward.
    #[error("payment configuration missing or incomplete")]
    Unconfigured,
    #[error("amount must be a number greater than zero")]
    InvalidAmount,
    #[error("operation not allowed in the current workflow state")]
    InvalidState,
    /// The in-flight request is not revocable.
    #[error("a deposit request is in flight")]
    SubmitInFlight,
}

/// Workflow phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    AmountEntry,
    Submitting,
}

/// How a resolved submission should be surfaced by the app.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitResolution {
    /// Queued for admin approval. Notify the user and refresh the
    /// originating view; settlement happens later, backend-side.
    Pending { refresh: PurchaseOrigin },
    /// Rejected or transport failure. The entered amount is preserved so
    /// the user can retry without re-entering it. `message` carries the
    /// backend's reason when it provided one.
    Failed { message: Option<String> },
}

/// One buy/deposit attempt.
#[derive(Debug, Clone, Default)]
pub struct DepositWorkflow {
    state: WorkflowState,
    config: Option<PaymentConfiguration>,
    intent: PurchaseIntent,
    raw_amount: String,
    origin: Option<PurchaseOrigin>,
}

impl DepositWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// The configuration snapshot held for this attempt (QR target shown
    /// to the user during amount entry).
    pub fn configuration(&self) -> Option<&PaymentConfiguration> {
        self.config.as_ref()
    }

    pub fn intent(&self) -> &PurchaseIntent {
        &self.intent
    }

    /// The raw amount text as entered.
    pub fn amount(&self) -> &str {
        &self.raw_amount
    }

    /// Enter the workflow for a buy action.
    ///
    /// Reads the payment configuration exactly once. A missing or unusable
    /// configuration blocks entry with [`WorkflowError::Unconfigured`] and
    /// the machine stays idle.
    pub fn open(
        &mut self,
        provider: &impl ConfigurationProvider,
        origin: PurchaseOrigin,
    ) -> Result<(), WorkflowError> {
        if self.state != WorkflowState::Idle {
            return Err(WorkflowError::InvalidState);
        }

        let config = provider
            .payment_configuration()
            .filter(PaymentConfiguration::is_usable)
            .ok_or(WorkflowError::Unconfigured)?;

        self.config = Some(config);
        self.intent = PurchaseIntent::default();
        self.raw_amount.clear();
        self.origin = Some(origin);
        self.state = WorkflowState::AmountEntry;
        Ok(())
    }

    /// Record an amount edit and recompute the derived coin quantity.
    ///
    /// Input is free-form: anything that does not parse to a finite number
    /// greater than zero derives zero coins and disables submission.
    /// Ignored outside amount entry.
    pub fn set_amount(&mut self, raw: &str) {
        if self.state != WorkflowState::AmountEntry {
            return;
        }
        self.raw_amount = raw.to_string();

        match raw.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount > 0.0 => {
                self.intent.amount_usd = amount;
                self.intent.derived_coins = round2(amount * COIN_RATE);
            }
            _ => self.intent = PurchaseIntent::default(),
        }
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self) -> bool {
        self.state == WorkflowState::AmountEntry && self.intent.amount_usd > 0.0
    }

    /// Derived coin quantity rendered with two decimals.
    pub fn derived_display(&self) -> String {
        format!("{:.2}", self.intent.derived_coins)
    }

    /// Move to `Submitting`, producing the request to send.
    ///
    /// Only reachable from amount entry with a positive amount — an
    /// invalid amount never produces a request, so no backend call can be
    /// made for it. The request carries the configured payment method.
    pub fn begin_submit(&mut self) -> Result<DepositRequest, WorkflowError> {
        if self.state != WorkflowState::AmountEntry {
            return Err(WorkflowError::InvalidState);
        }
        if !self.can_submit() {
            return Err(WorkflowError::InvalidAmount);
        }
        let config = self.config.as_ref().ok_or(WorkflowError::InvalidState)?;

        let request = DepositRequest {
            amount: self.intent.amount_usd,
            payment_method: config.payment_method.as_str().to_string(),
        };
        self.state = WorkflowState::Submitting;
        Ok(request)
    }

    /// Apply the backend outcome for the in-flight request.
    ///
    /// Acceptance clears the intent and closes the attempt; rejection or a
    /// transport error returns to amount entry with the amount preserved.
    pub fn resolve(
        &mut self,
        outcome: Result<DepositResponse, HttpError>,
    ) -> Result<SubmitResolution, WorkflowError> {
        if self.state != WorkflowState::Submitting {
            return Err(WorkflowError::InvalidState);
        }

        match outcome {
            Ok(response) if response.accepted => {
                let refresh = self.origin.take().unwrap_or(PurchaseOrigin::Catalog);
                self.reset();
                Ok(SubmitResolution::Pending { refresh })
            }
            Ok(response) => {
                self.state = WorkflowState::AmountEntry;
                Ok(SubmitResolution::Failed {
                    message: response.message,
                })
            }
            Err(err) => {
                tracing::warn!(error = %err, "deposit submission failed");
                self.state = WorkflowState::AmountEntry;
                Ok(SubmitResolution::Failed { message: None })
            }
        }
    }

    /// Abandon the attempt, discarding the intent.
    ///
    /// Not permitted while a request is in flight.
    pub fn cancel(&mut self) -> Result<(), WorkflowError> {
        if self.state == WorkflowState::Submitting {
            return Err(WorkflowError::SubmitInFlight);
        }
        self.reset();
        Ok(())
    }

    fn reset(&mut self) {
        self.state = WorkflowState::Idle;
        self.config = None;
        self.intent = PurchaseIntent::default();
        self.raw_amount.clear();
        self.origin = None;
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
