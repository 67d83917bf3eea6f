//! # Tradecove SDK
//!
//! Client-side domain SDK for the Tradecove marketplace dashboard: browse
//! the company catalog, derive market analytics, drive the chart period
//! controller, and run the gated deposit/buy workflow against the backend
//! ledger.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes and domain modules (always available)
//! 2. **HTTP API** — `TradecoveHttp` with per-endpoint retry policies
//! 3. **High-Level Client** — `TradecoveClient` with nested sub-clients
//!    and a catalog cache
//!
//! Presentation concerns (rendering, navigation, notifications) stay in
//! the app: state containers here return events and tagged data the app
//! maps onto its own surfaces.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tradecove_sdk::prelude::*;
//!
//! let client = TradecoveClient::builder()
//!     .base_url("https://api.tradecove.io")
//!     .build()?;
//!
//! let companies = client.companies().list().await?;
//! let mut chart = ChartState::new();
//! client.charts().load(&mut chart, &companies[0]).await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and formatting used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// Session surface: token handling and logout.
#[cfg(feature = "http")]
pub mod auth;

/// `TradecoveClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + formatting
    pub use crate::shared::{format_market_cap, CompanyId, Period};

    // Domain types — company
    pub use crate::domain::company::analytics::{
        change_24h, price_range, AnalyticsError, FixedVolatility, PriceRange,
        ThreadRngVolatility, VolatilitySource,
    };
    pub use crate::domain::company::favorites::{FavoriteChange, FavoriteSet};
    pub use crate::domain::company::filter::{filter_companies, CategorySelection};
    pub use crate::domain::company::{ChartPoint, Company};

    // Domain types — chart
    pub use crate::domain::chart::state::{ChartState, FetchTicket};
    pub use crate::domain::chart::ChartSeries;

    // Domain types — deposit
    pub use crate::domain::deposit::state::{
        DepositWorkflow, PurchaseOrigin, SubmitResolution, WorkflowError, WorkflowState,
    };
    pub use crate::domain::deposit::wire::{DepositRequest, DepositResponse};
    pub use crate::domain::deposit::{
        ConfigurationProvider, PaymentConfiguration, PaymentMethod, PurchaseIntent, COIN_RATE,
    };

    // Domain types — dashboard
    pub use crate::domain::dashboard::state::{DashboardEvent, DashboardState};
    pub use crate::domain::dashboard::{
        DashboardSnapshot, Direction, Statistics, TransactionRecord,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuthClient, ChartsClient, CompaniesClient, DashboardClient, DepositsClient,
        TradecoveClient, TradecoveClientBuilder,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
