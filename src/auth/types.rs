//! Auth types
//!
//! Token response shape and the fixed parameters of the Cegid token
//! exchange.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;

/// The fixed Cegid authentication service endpoint
pub const CEGID_TOKEN_URL: &str = "https://retail-services.cegid.cloud/t/as/connect/token";

/// OAuth client id registered for the retail resource flow
pub(crate) const CLIENT_ID: &str = "CegidRetailResourceFlowClient";

/// Grant type for the token exchange
pub(crate) const GRANT_TYPE: &str = "password";

/// Scopes requested on every token exchange
pub(crate) const SCOPE: &str = "RetailBackendApi offline_access";

/// Bounded wait on the token exchange; exceeding it is a transport failure
pub(crate) const TOKEN_TIMEOUT: Duration = Duration::from_secs(10);

/// Token response from the authentication endpoint
///
/// Only `access_token` is load-bearing; other fields are kept for
/// diagnostics and everything else in the body is ignored.
#[derive(Clone, Deserialize)]
pub struct TokenBundle {
    /// The bearer access token
    pub access_token: String,

    /// Token type reported by the endpoint (usually "Bearer")
    #[serde(default)]
    pub token_type: Option<String>,

    /// Seconds until expiry, if reported. Unused: a session's token is
    /// fetched once and reused for all pages, never refreshed.
    #[serde(default)]
    pub expires_in: Option<i64>,
}

// The token itself is a credential; keep it out of Debug output.
impl std::fmt::Debug for TokenBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenBundle")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// A token cached for the lifetime of one extraction session
#[derive(Clone)]
pub(crate) struct SessionToken {
    /// The bearer access token
    pub token: String,
    /// When the token was fetched, for diagnostics
    pub fetched_at: DateTime<Utc>,
}

impl SessionToken {
    pub fn new(token: String) -> Self {
        Self {
            token,
            fetched_at: Utc::now(),
        }
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionToken")
            .field("token", &"<redacted>")
            .field("fetched_at", &self.fetched_at)
            .finish()
    }
}
