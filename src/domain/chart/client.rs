//! Charts sub-client — drives the period controller against the API.

use super::state::{ChartState, FetchTicket};
use crate::client::TradecoveClient;
use crate::domain::company::Company;
use crate::shared::Period;

/// Sub-client for chart operations.
pub struct Charts<'a> {
    pub(crate) client: &'a TradecoveClient,
}

impl<'a> Charts<'a> {
    /// Select a company and load its series for the current window.
    ///
    /// Never fails: a fetch error falls back to the company's embedded
    /// history inside the state container.
    pub async fn load(&self, state: &mut ChartState, company: &Company) {
        let ticket = state.select_company(company);
        self.fetch_and_apply(state, ticket).await;
    }

    /// Change the chart window, refetching when a company is selected.
    pub async fn change_period(&self, state: &mut ChartState, period: Period) {
        if let Some(ticket) = state.select_period(period) {
            self.fetch_and_apply(state, ticket).await;
        }
    }

    async fn fetch_and_apply(&self, state: &mut ChartState, ticket: FetchTicket) {
        let result = self
            .client
            .http
            .get_company_chart(ticket.company_id.as_str(), ticket.period)
            .await;

        match result {
            Ok(points) => {
                state.apply_success(&ticket, points.into_iter().map(Into::into).collect());
            }
            Err(err) => {
                state.apply_failure(&ticket, err);
            }
        }
    }
}
