//! Session surface — bearer-token handling and logout.
//!
//! Token issuance (login) is an external collaborator's concern; the SDK
//! only holds the token for request signing and can end the session.

use crate::client::TradecoveClient;
use crate::error::SdkError;

/// Sub-client for session operations.
pub struct Auth<'a> {
    pub(crate) client: &'a TradecoveClient,
}

impl<'a> Auth<'a> {
    /// Install a bearer token obtained by the app's login flow.
    pub async fn set_token(&self, token: impl Into<String>) {
        self.client.http.set_auth_token(Some(token.into())).await;
    }

    /// Log out on the backend, then drop the local token.
    pub async fn logout(&self) -> Result<(), SdkError> {
        self.client.http.logout().await?;
        self.client.http.clear_auth_token().await;
        Ok(())
    }

    /// Drop the local token without a backend call — the session-expired
    /// path, where the backend already considers the token invalid.
    pub async fn clear_token(&self) {
        self.client.http.clear_auth_token().await;
    }
}
