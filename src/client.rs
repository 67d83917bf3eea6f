//! High-level client — `TradecoveClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cache state, and accessor methods.

use crate::auth::Auth;
use crate::domain::chart::client::Charts;
use crate::domain::company::client::Companies;
use crate::domain::company::Company;
use crate::domain::dashboard::client::Dashboard;
use crate::domain::deposit::client::Deposits;
use crate::error::SdkError;
use crate::http::TradecoveHttp;

use async_lock::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::auth::Auth as AuthClient;
pub use crate::domain::chart::client::Charts as ChartsClient;
pub use crate::domain::company::client::Companies as CompaniesClient;
pub use crate::domain::dashboard::client::Dashboard as DashboardClient;
pub use crate::domain::deposit::client::Deposits as DepositsClient;

/// The primary entry point for the Tradecove SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.companies()`, `client.deposits()`, etc.
pub struct TradecoveClient {
    pub(crate) http: TradecoveHttp,
    /// Catalog cache: (companies, fetched_at)
    pub(crate) company_cache: Arc<RwLock<Option<(Vec<Company>, Instant)>>>,
    /// Cache TTL for the catalog.
    pub(crate) company_cache_ttl: Duration,
}

impl TradecoveClient {
    pub fn builder() -> TradecoveClientBuilder {
        TradecoveClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn companies(&self) -> Companies<'_> {
        Companies { client: self }
    }

    pub fn charts(&self) -> Charts<'_> {
        Charts { client: self }
    }

    pub fn deposits(&self) -> Deposits<'_> {
        Deposits { client: self }
    }

    pub fn dashboard(&self) -> Dashboard<'_> {
        Dashboard { client: self }
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    /// Clear all HTTP caches.
    pub async fn clear_all_caches(&self) {
        *self.company_cache.write().await = None;
    }
}

impl Clone for TradecoveClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            company_cache: self.company_cache.clone(),
            company_cache_ttl: self.company_cache_ttl,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct TradecoveClientBuilder {
    base_url: String,
    company_cache_ttl: Duration,
    token: Option<String>,
}

impl Default for TradecoveClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            company_cache_ttl: Duration::from_secs(60),
            token: None,
        }
    }
}

impl TradecoveClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn company_cache_ttl(mut self, ttl: Duration) -> Self {
        self.company_cache_ttl = ttl;
        self
    }

    /// Pre-set a bearer token on construction.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn build(self) -> Result<TradecoveClient, SdkError> {
        Ok(TradecoveClient {
            http: TradecoveHttp::new(&self.base_url, self.token),
            company_cache: Arc::new(RwLock::new(None)),
            company_cache_ttl: self.company_cache_ttl,
        })
    }
}
