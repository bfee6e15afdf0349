//! Token authenticator
//!
//! Exchanges username/password for a bearer token and applies it to
//! outgoing requests. The token is fetched lazily on the first request of a
//! session and cached for the session lifetime.

use super::types::{
    SessionToken, TokenBundle, CEGID_TOKEN_URL, CLIENT_ID, GRANT_TYPE, SCOPE, TOKEN_TIMEOUT,
};
use crate::error::{Error, Result};
use reqwest::{Client, RequestBuilder};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Handles the Cegid token exchange and bearer-header application
#[derive(Clone)]
pub struct TokenAuthenticator {
    /// Token endpoint URL
    token_url: String,
    /// Credentials for the password grant
    username: String,
    password: String,
    /// Token cached for the lifetime of one extraction session
    session_token: Arc<RwLock<Option<SessionToken>>>,
    /// HTTP client for token requests
    http_client: Client,
}

impl TokenAuthenticator {
    /// Create an authenticator against the fixed Cegid token endpoint
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::with_token_url(username, password, CEGID_TOKEN_URL)
    }

    /// Create an authenticator with a custom token endpoint
    pub fn with_token_url(
        username: impl Into<String>,
        password: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Self {
        Self {
            token_url: token_url.into(),
            username: username.into(),
            password: password.into(),
            session_token: Arc::new(RwLock::new(None)),
            http_client: Client::new(),
        }
    }

    /// Exchange credentials for a token bundle
    ///
    /// Performs exactly one network round trip. Any failure — transport,
    /// timeout, non-2xx status, or a body without an access token — is
    /// reported as [`Error::Auth`]; no partial or placeholder token is ever
    /// returned.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<TokenBundle> {
        let form = [
            ("client_id", CLIENT_ID),
            ("username", username),
            ("password", password),
            ("grant_type", GRANT_TYPE),
            ("scope", SCOPE),
        ];

        let response = self
            .http_client
            .post(&self.token_url)
            .form(&form)
            .timeout(TOKEN_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::auth(format!(
                        "token request to {} timed out after {}s",
                        self.token_url,
                        TOKEN_TIMEOUT.as_secs()
                    ))
                } else {
                    Error::auth(format!("token request to {} failed: {e}", self.token_url))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::auth(format!(
                "token endpoint returned status {status}: {body}"
            )));
        }

        let bundle: TokenBundle = response
            .json()
            .await
            .map_err(|e| Error::auth(format!("no token collection in response: {e}")))?;

        if bundle.access_token.is_empty() {
            return Err(Error::auth("no access token was returned from the API"));
        }

        debug!(token_url = %self.token_url, "token exchange succeeded");
        Ok(bundle)
    }

    /// Apply `Authorization: Bearer <token>` to a request builder
    ///
    /// Fetches the token on first use and reuses it for every subsequent
    /// request in the session.
    pub async fn apply(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        let token = self.session_token_value().await?;
        Ok(req.bearer_auth(token))
    }

    /// Get the session token, fetching it if this is the first use
    async fn session_token_value(&self) -> Result<String> {
        {
            let cached = self.session_token.read().await;
            if let Some(session) = cached.as_ref() {
                return Ok(session.token.clone());
            }
        }

        let mut cached = self.session_token.write().await;

        // Double-check after acquiring the write lock; another task may
        // have completed the exchange meanwhile.
        if let Some(session) = cached.as_ref() {
            return Ok(session.token.clone());
        }

        let bundle = self.authenticate(&self.username, &self.password).await?;
        let session = SessionToken::new(bundle.access_token);
        let token = session.token.clone();
        debug!(fetched_at = %session.fetched_at, "session token cached");
        *cached = Some(session);

        Ok(token)
    }

    /// Drop the cached session token (useful for testing)
    pub async fn clear_session(&self) {
        let mut cached = self.session_token.write().await;
        *cached = None;
    }
}

impl std::fmt::Debug for TokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuthenticator")
            .field("token_url", &self.token_url)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
