//! Deposits sub-client — submits the in-flight request and applies the outcome.

use super::state::{DepositWorkflow, SubmitResolution};
use crate::client::TradecoveClient;
use crate::error::SdkError;

/// Sub-client for deposit operations.
pub struct Deposits<'a> {
    pub(crate) client: &'a TradecoveClient,
}

impl<'a> Deposits<'a> {
    /// Submit the workflow's entered amount.
    ///
    /// Drives `begin_submit` → POST → `resolve`. An invalid amount or
    /// wrong state fails before any backend call is made; the POST itself
    /// is never retried by the transport.
    pub async fn submit(
        &self,
        workflow: &mut DepositWorkflow,
    ) -> Result<SubmitResolution, SdkError> {
        let request = workflow.begin_submit()?;
        let outcome = self.client.http.request_deposit(&request).await;
        Ok(workflow.resolve(outcome)?)
    }
}
