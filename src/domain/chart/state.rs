//! Chart period controller — app-owned state, SDK-provided update logic.
//!
//! Fetch results are applied last-writer-wins: every selection issues a
//! ticket with a monotonically increasing sequence number, and responses
//! carrying a superseded ticket are discarded.

use super::ChartSeries;
use crate::domain::company::{ChartPoint, Company};
use crate::shared::{CompanyId, Period};
use std::fmt;

/// Handle for one in-flight chart fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub(crate) seq: u64,
    pub company_id: CompanyId,
    pub period: Period,
}

#[derive(Debug, Clone)]
struct Selected {
    id: CompanyId,
    /// Embedded history from the catalog snapshot, used as fallback.
    embedded: Vec<ChartPoint>,
}

/// Live chart state for the detail view.
///
/// The app owns instances of this type. The SDK provides update methods.
#[derive(Debug, Clone, Default)]
pub struct ChartState {
    selected: Option<Selected>,
    period: Period,
    series: ChartSeries,
    last_error: Option<String>,
    seq: u64,
}

impl ChartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    /// The last fetch error, if the current series is a fallback.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn selected_company(&self) -> Option<&CompanyId> {
        self.selected.as_ref().map(|s| &s.id)
    }

    /// Select a company: resets the series and issues a fetch ticket for
    /// the current window.
    pub fn select_company(&mut self, company: &Company) -> FetchTicket {
        self.selected = Some(Selected {
            id: company.id.clone(),
            embedded: company.chart_data.clone(),
        });
        self.series = ChartSeries::Empty;
        self.last_error = None;
        self.next_ticket()
    }

    /// Change the window. Issues a ticket only when a company is selected.
    pub fn select_period(&mut self, period: Period) -> Option<FetchTicket> {
        self.period = period;
        if self.selected.is_none() {
            return None;
        }
        Some(self.next_ticket())
    }

    /// Replace the series with a successful response.
    ///
    /// Returns false (and changes nothing) for a superseded ticket.
    pub fn apply_success(&mut self, ticket: &FetchTicket, points: Vec<ChartPoint>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(seq = ticket.seq, "discarding superseded chart response");
            return false;
        }
        self.series = ChartSeries::Fetched(points);
        self.last_error = None;
        true
    }

    /// Record a failed fetch, falling back to the embedded history.
    ///
    /// The failure is logged, not surfaced: the view stays usable with
    /// approximate data. Returns false for a superseded ticket.
    pub fn apply_failure(&mut self, ticket: &FetchTicket, error: impl fmt::Display) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(seq = ticket.seq, "discarding superseded chart failure");
            return false;
        }
        tracing::warn!(
            company = %ticket.company_id,
            period = %ticket.period,
            error = %error,
            "chart fetch failed, falling back to embedded history"
        );
        let embedded = self
            .selected
            .as_ref()
            .map(|s| s.embedded.clone())
            .unwrap_or_default();
        self.series = ChartSeries::Fallback(embedded);
        self.last_error = Some(error.to_string());
        true
    }

    /// Discard everything (detail view closed). The sequence counter stays
    /// monotonic so late responses from before the close are still stale.
    pub fn close(&mut self) {
        self.selected = None;
        self.period = Period::default();
        self.series = ChartSeries::Empty;
        self.last_error = None;
        self.seq += 1;
    }

    fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.seq == self.seq
    }

    fn next_ticket(&mut self) -> FetchTicket {
        self.seq += 1;
        FetchTicket {
            seq: self.seq,
            company_id: self
                .selected
                .as_ref()
                .map(|s| s.id.clone())
                .unwrap_or_else(|| CompanyId::from("")),
            period: self.period,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn point(ts: i64, price: f64) -> ChartPoint {
        ChartPoint {
            date: Utc.timestamp_opt(ts, 0).unwrap(),
            price,
            volume: 0.0,
        }
    }

    fn company(id: &str, embedded: Vec<ChartPoint>) -> Company {
        Company {
            id: id.into(),
            symbol: "ACME".into(),
            name: "Acme Corp".into(),
            category: String::new(),
            description: String::new(),
            logo: String::new(),
            current_price: 100.0,
            starting_price: 50.0,
            market_cap: 0.0,
            daily_increase_rate: 0.0,
            total_supply: 0.0,
            circulating_supply: 0.0,
            chart_data: embedded,
        }
    }

    #[test]
    fn test_select_company_resets_series() {
        let mut state = ChartState::new();
        let ticket = state.select_company(&company("cmp_1", vec![]));
        state.apply_success(&ticket, vec![point(1, 10.0)]);
        assert_eq!(state.series().points().len(), 1);

        state.select_company(&company("cmp_2", vec![]));
        assert_eq!(state.series(), &ChartSeries::Empty);
        assert_eq!(state.selected_company().unwrap().as_str(), "cmp_2");
    }

    #[test]
    fn test_select_period_without_company_issues_no_ticket() {
        let mut state = ChartState::new();
        assert!(state.select_period(Period::Month6).is_none());
        assert_eq!(state.period(), Period::Month6);
    }

    #[test]
    fn test_success_replaces_series_atomically() {
        let mut state = ChartState::new();
        let ticket = state.select_company(&company("cmp_1", vec![]));
        assert!(state.apply_success(&ticket, vec![point(1, 10.0), point(2, 11.0)]));
        assert_eq!(state.series().points().len(), 2);
        assert!(!state.series().is_fallback());
        assert!(state.last_error().is_none());
    }

    #[test]
    fn test_failure_falls_back_to_embedded_history() {
        let mut state = ChartState::new();
        let embedded = vec![point(1, 10.0), point(2, 12.0)];
        let ticket = state.select_company(&company("cmp_1", embedded.clone()));
        assert!(state.apply_failure(&ticket, "connection refused"));
        assert!(state.series().is_fallback());
        assert_eq!(state.series().points(), embedded.as_slice());
        assert_eq!(state.last_error(), Some("connection refused"));
    }

    #[test]
    fn test_last_writer_wins_across_periods() {
        let mut state = ChartState::new();
        let first = state.select_company(&company("cmp_1", vec![]));
        let second = state.select_period(Period::Year1).unwrap();

        // The older response arrives last; it must be discarded.
        assert!(state.apply_success(&second, vec![point(1, 20.0)]));
        assert!(!state.apply_success(&first, vec![point(1, 10.0)]));
        assert_eq!(state.series().points()[0].price, 20.0);
    }

    #[test]
    fn test_stale_failure_does_not_clobber_fresh_series() {
        let mut state = ChartState::new();
        let first = state.select_company(&company("cmp_1", vec![]));
        let second = state.select_company(&company("cmp_2", vec![]));

        assert!(state.apply_success(&second, vec![point(1, 20.0)]));
        assert!(!state.apply_failure(&first, "timeout"));
        assert!(!state.series().is_fallback());
        assert!(state.last_error().is_none());
    }

    #[test]
    fn test_close_discards_and_stales_inflight() {
        let mut state = ChartState::new();
        let ticket = state.select_company(&company("cmp_1", vec![]));
        state.close();
        assert!(state.selected_company().is_none());
        assert!(!state.apply_success(&ticket, vec![point(1, 10.0)]));
        assert_eq!(state.series(), &ChartSeries::Empty);
    }
}
