//! Chart domain — period-windowed series for the detail view.

#[cfg(feature = "http")]
pub mod client;
pub mod state;

use crate::domain::company::ChartPoint;

/// The series shown for the selected company, tagged by provenance so the
/// app can mark approximate data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ChartSeries {
    /// Nothing loaded yet.
    #[default]
    Empty,
    /// Fresh points from the dedicated chart endpoint.
    Fetched(Vec<ChartPoint>),
    /// The company's embedded history, shown because the fetch failed.
    Fallback(Vec<ChartPoint>),
}

impl ChartSeries {
    pub fn points(&self) -> &[ChartPoint] {
        match self {
            ChartSeries::Empty => &[],
            ChartSeries::Fetched(points) | ChartSeries::Fallback(points) => points,
        }
    }

    /// True when showing cached/approximate data instead of a fetch result.
    pub fn is_fallback(&self) -> bool {
        matches!(self, ChartSeries::Fallback(_))
    }
}
