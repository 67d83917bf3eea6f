//! Dashboard state container — load outcomes mapped to app events.

use super::DashboardSnapshot;
use crate::error::HttpError;

/// App-facing outcome of a dashboard load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Snapshot replaced; render it.
    Loaded,
    /// Session invalid: notify, log out, and redirect. Not locally
    /// recoverable — a retry affordance would be wrong here.
    SessionExpired,
    /// Transient failure: offer a retry.
    RetryAvailable,
}

/// Live dashboard state.
///
/// The app owns instances of this type. The SDK provides update methods.
#[derive(Debug, Clone, Default)]
pub enum DashboardState {
    #[default]
    Empty,
    Ready(DashboardSnapshot),
    Failed,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        match self {
            DashboardState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// Apply a load outcome. Each success replaces the prior snapshot
    /// wholesale; there is no incremental merge.
    pub fn apply(&mut self, outcome: Result<DashboardSnapshot, HttpError>) -> DashboardEvent {
        match outcome {
            Ok(snapshot) => {
                *self = DashboardState::Ready(snapshot);
                DashboardEvent::Loaded
            }
            Err(HttpError::Unauthorized) => {
                *self = DashboardState::Failed;
                DashboardEvent::SessionExpired
            }
            Err(err) => {
                tracing::debug!(error = %err, "dashboard load failed");
                *self = DashboardState::Failed;
                DashboardEvent::RetryAvailable
            }
        }
    }
}
