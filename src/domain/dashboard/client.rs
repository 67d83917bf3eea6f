//! Dashboard sub-client — idempotent aggregate loads.

use super::state::{DashboardEvent, DashboardState};
use super::DashboardSnapshot;
use crate::client::TradecoveClient;
use crate::error::SdkError;

/// Sub-client for dashboard operations.
pub struct Dashboard<'a> {
    pub(crate) client: &'a TradecoveClient,
}

impl<'a> Dashboard<'a> {
    /// Fetch a fresh snapshot into the state container.
    ///
    /// Safe to call repeatedly; each success fully replaces the prior
    /// snapshot. An unauthorized response surfaces as
    /// [`DashboardEvent::SessionExpired`].
    pub async fn load(&self, state: &mut DashboardState) -> DashboardEvent {
        let outcome = self.client.http.get_dashboard().await.map(Into::into);
        state.apply(outcome)
    }

    /// Fetch a snapshot without a state container.
    pub async fn fetch(&self) -> Result<DashboardSnapshot, SdkError> {
        Ok(self.client.http.get_dashboard().await?.into())
    }
}
