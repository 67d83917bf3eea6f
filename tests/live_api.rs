//! Integration tests against the staging REST API.
//!
//! These tests exercise the full client → HTTP → conversion path.
//!
//! All tests are `#[ignore]` because they require network access.
//!
//! Run with:
//! ```bash
//! cargo test --test live_api -- --ignored
//! ```

use tradecove_sdk::prelude::*;

const STAGING_URL: &str = "https://staging-api.tradecove.io";

fn staging_client() -> TradecoveClient {
    TradecoveClient::builder()
        .base_url(STAGING_URL)
        .build()
        .expect("client should build")
}

#[tokio::test]
#[ignore]
async fn list_companies_returns_validated_catalog() {
    let client = staging_client();
    let companies = client.companies().list().await.expect("catalog fetch");

    assert!(!companies.is_empty(), "staging catalog should not be empty");
    for company in &companies {
        assert!(!company.id.as_str().is_empty());
        assert!(!company.symbol.is_empty());
    }
}

#[tokio::test]
#[ignore]
async fn chart_loads_for_first_company() {
    let client = staging_client();
    let companies = client.companies().list().await.expect("catalog fetch");
    let first = companies.first().expect("at least one company");

    let mut chart = ChartState::new();
    client.charts().load(&mut chart, first).await;

    // Either a fetched series or the embedded fallback; never a panic.
    match chart.series() {
        ChartSeries::Fetched(points) => assert!(!points.is_empty()),
        ChartSeries::Fallback(_) => assert!(chart.last_error().is_some()),
        ChartSeries::Empty => panic!("load should populate the series"),
    }

    client.charts().change_period(&mut chart, Period::Year1).await;
    assert_eq!(chart.period(), Period::Year1);
}

#[tokio::test]
#[ignore]
async fn dashboard_without_token_expires_session() {
    let client = staging_client();
    let mut dashboard = DashboardState::new();

    let event = client.dashboard().load(&mut dashboard).await;
    assert_eq!(event, DashboardEvent::SessionExpired);
}
