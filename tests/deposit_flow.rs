//! End-to-end scenario tests for the buy/deposit workflow and the
//! analytics surface, exercised through the public API without a network.
//!
//! The backend leg is simulated by feeding responses into
//! `DepositWorkflow::resolve`, which is exactly what the deposits
//! sub-client does with the real transport.

use tradecove_sdk::prelude::*;

use chrono::{TimeZone, Utc};

struct FixedProvider(Option<PaymentConfiguration>);

impl ConfigurationProvider for FixedProvider {
    fn payment_configuration(&self) -> Option<PaymentConfiguration> {
        self.0.clone()
    }
}

fn wallet_provider() -> FixedProvider {
    FixedProvider(Some(PaymentConfiguration {
        qr_code_image: "qr.png".into(),
        payment_method: PaymentMethod::Wallet,
    }))
}

fn company_with_prices(prices: &[f64]) -> Company {
    Company {
        id: "cmp_1".into(),
        symbol: "ACME".into(),
        name: "Acme Corp".into(),
        category: "Technology".into(),
        description: "Widgets".into(),
        logo: String::new(),
        current_price: 100.0,
        starting_price: 50.0,
        market_cap: 1_200_000.0,
        daily_increase_rate: 0.02,
        total_supply: 1_000_000.0,
        circulating_supply: 500_000.0,
        chart_data: prices
            .iter()
            .enumerate()
            .map(|(i, p)| ChartPoint {
                date: Utc.timestamp_opt(i as i64 * 86_400, 0).unwrap(),
                price: *p,
                volume: 1_000.0,
            })
            .collect(),
    }
}

#[test]
fn catalog_detail_scenario() {
    // A company whose series ends 95 → 100 shows a 5.263% move and a
    // $1.20M market cap.
    let company = company_with_prices(&[95.0, 100.0]);

    let change = change_24h(&company, &mut FixedVolatility(0.5)).unwrap();
    assert!((change - 5.263157894736842).abs() < 1e-9);

    assert_eq!(format_market_cap(company.market_cap), "$1.20M");

    let range = price_range(&company).unwrap();
    assert_eq!(range.min, 95.0);
    assert_eq!(range.max, 100.0);
}

#[test]
fn buy_happy_path_reaches_pending_and_requests_refresh() {
    let mut workflow = DepositWorkflow::new();
    workflow
        .open(&wallet_provider(), PurchaseOrigin::Dashboard)
        .unwrap();

    workflow.set_amount("20");
    assert_eq!(workflow.derived_display(), "20.00");

    let request = workflow.begin_submit().unwrap();
    assert_eq!(request.amount, 20.0);
    assert_eq!(request.payment_method, "wallet");

    let resolution = workflow
        .resolve(Ok(DepositResponse {
            accepted: true,
            message: None,
        }))
        .unwrap();
    assert_eq!(
        resolution,
        SubmitResolution::Pending {
            refresh: PurchaseOrigin::Dashboard
        }
    );
    assert_eq!(workflow.state(), WorkflowState::Idle);
}

#[test]
fn unconfigured_buy_never_collects_an_amount() {
    let mut workflow = DepositWorkflow::new();
    let err = workflow
        .open(&FixedProvider(None), PurchaseOrigin::Catalog)
        .unwrap_err();
    assert_eq!(err, WorkflowError::Unconfigured);

    // The machine never entered amount entry, so no request can exist.
    assert_eq!(workflow.begin_submit(), Err(WorkflowError::InvalidState));
}

#[test]
fn invalid_amount_never_produces_a_request() {
    let mut workflow = DepositWorkflow::new();
    workflow
        .open(&wallet_provider(), PurchaseOrigin::Catalog)
        .unwrap();

    for raw in ["", "abc", "0", "-10", "NaN"] {
        workflow.set_amount(raw);
        assert!(!workflow.can_submit(), "submit enabled for {raw:?}");
        assert_eq!(workflow.begin_submit(), Err(WorkflowError::InvalidAmount));
    }
}

#[test]
fn rejected_deposit_allows_retry_with_preserved_amount() {
    let mut workflow = DepositWorkflow::new();
    workflow
        .open(&wallet_provider(), PurchaseOrigin::Catalog)
        .unwrap();
    workflow.set_amount("50");
    workflow.begin_submit().unwrap();

    let resolution = workflow
        .resolve(Ok(DepositResponse {
            accepted: false,
            message: Some("daily limit reached".into()),
        }))
        .unwrap();
    assert_eq!(
        resolution,
        SubmitResolution::Failed {
            message: Some("daily limit reached".into())
        }
    );

    // Retry without re-entering the amount.
    assert_eq!(workflow.amount(), "50");
    let request = workflow.begin_submit().unwrap();
    assert_eq!(request.amount, 50.0);
}

#[test]
fn chart_controller_survives_fetch_failure_with_fallback() {
    let company = company_with_prices(&[10.0, 12.0, 11.0]);
    let mut chart = ChartState::new();

    let ticket = chart.select_company(&company);
    chart.apply_failure(&ticket, "connection refused");

    assert!(chart.series().is_fallback());
    assert_eq!(chart.series().points().len(), 3);
    assert!(chart.last_error().is_some());

    // A later period change can still fetch fresh data.
    let ticket = chart.select_period(Period::Month6).unwrap();
    chart.apply_success(
        &ticket,
        vec![ChartPoint {
            date: Utc.timestamp_opt(0, 0).unwrap(),
            price: 13.0,
            volume: 0.0,
        }],
    );
    assert!(!chart.series().is_fallback());
    assert!(chart.last_error().is_none());
}

#[test]
fn dashboard_session_expiry_is_not_retryable() {
    let mut dashboard = DashboardState::new();
    assert_eq!(
        dashboard.apply(Err(HttpError::Unauthorized)),
        DashboardEvent::SessionExpired
    );
    assert_eq!(
        dashboard.apply(Err(HttpError::Timeout)),
        DashboardEvent::RetryAvailable
    );
}
