//! Low-level HTTP client — `TradecoveHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain
//! types happens at the high-level client boundary). Internal to the SDK.

use crate::domain::company::wire::{ChartPointResponse, CompanyResponse};
use crate::domain::dashboard::wire::DashboardResponse;
use crate::domain::deposit::wire::{DepositRequest, DepositResponse};
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::Period;

use async_lock::RwLock;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Low-level HTTP client for the Tradecove REST API.
pub struct TradecoveHttp {
    base_url: String,
    client: Client,
    /// Bearer token for authenticated endpoints. NEVER exposed publicly.
    auth_token: Arc<RwLock<Option<String>>>,
}

impl TradecoveHttp {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            auth_token: Arc::new(RwLock::new(token)),
        }
    }

    /// Set the bearer token.
    pub(crate) async fn set_auth_token(&self, token: Option<String>) {
        *self.auth_token.write().await = token;
    }

    /// Clear the bearer token.
    pub(crate) async fn clear_auth_token(&self) {
        *self.auth_token.write().await = None;
    }

    // ── Companies ────────────────────────────────────────────────────────

    pub async fn get_companies(&self) -> Result<Vec<CompanyResponse>, HttpError> {
        let url = format!("{}/api/companies", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_company_chart(
        &self,
        company_id: &str,
        period: Period,
    ) -> Result<Vec<ChartPointResponse>, HttpError> {
        let url = format!(
            "{}/api/companies/{}/chart?period={}",
            self.base_url,
            company_id,
            period.as_str()
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Deposits ─────────────────────────────────────────────────────────

    pub async fn request_deposit(
        &self,
        request: &DepositRequest,
    ) -> Result<DepositResponse, HttpError> {
        let url = format!("{}/api/deposits", self.base_url);
        self.post(&url, request, RetryPolicy::None).await
    }

    // ── Dashboard ────────────────────────────────────────────────────────

    pub async fn get_dashboard(&self) -> Result<DashboardResponse, HttpError> {
        let url = format!("{}/api/dashboard", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Auth ─────────────────────────────────────────────────────────────

    pub async fn logout(&self) -> Result<serde_json::Value, HttpError> {
        let url = format!("{}/api/auth/logout", self.base_url);
        self.post(&url, &serde_json::json!({}), RetryPolicy::None)
            .await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::GET, url, None::<&()>, retry)
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::POST, url, Some(body), retry)
            .await
    }

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_request(&method, url, body).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T, B>(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            true
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);

        if let Some(token) = self.auth_token.read().await.as_ref() {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: None,
            }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl Clone for TradecoveHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            auth_token: self.auth_token.clone(),
        }
    }
}
