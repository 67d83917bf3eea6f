//! Companies sub-client — catalog fetch with a TTL cache.

use crate::client::TradecoveClient;
use crate::domain::company::{Company, ValidationError};
use crate::error::SdkError;
use std::time::Instant;

/// Sub-client for catalog operations.
pub struct Companies<'a> {
    pub(crate) client: &'a TradecoveClient,
}

impl<'a> Companies<'a> {
    /// List the catalog. Serves the TTL cache when fresh.
    pub async fn list(&self) -> Result<Vec<Company>, SdkError> {
        {
            let cache = self.client.company_cache.read().await;
            if let Some((companies, fetched_at)) = cache.as_ref() {
                if fetched_at.elapsed() < self.client.company_cache_ttl {
                    return Ok(companies.clone());
                }
            }
        }
        self.refresh().await
    }

    /// Force a refetch, replacing the cache wholesale. Used after a deposit
    /// is accepted so the originating view reloads.
    pub async fn refresh(&self) -> Result<Vec<Company>, SdkError> {
        let responses = self.client.http.get_companies().await?;

        let mut companies = Vec::with_capacity(responses.len());
        for response in responses {
            let company: Company = response.try_into().map_err(|e: ValidationError| {
                SdkError::Validation(e.to_string())
            })?;
            companies.push(company);
        }

        *self.client.company_cache.write().await = Some((companies.clone(), Instant::now()));
        tracing::debug!(count = companies.len(), "company catalog refreshed");
        Ok(companies)
    }

    /// Drop the cached catalog without fetching.
    pub async fn invalidate(&self) {
        *self.client.company_cache.write().await = None;
    }
}
