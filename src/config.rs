//! Typed connector configuration
//!
//! The host framework hands over its settings as a JSON value. That value is
//! deserialized into [`ConnectorConfig`] and validated once, at session
//! start, so a missing credential fails before any network I/O rather than
//! at first use.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// Connector configuration, validated at session start
#[derive(Clone, Deserialize)]
pub struct ConnectorConfig {
    /// Username for the Cegid token exchange
    pub username: String,

    /// Password for the Cegid token exchange
    pub password: String,

    /// Base URL of the Cegid API, e.g. `https://retail.cegid.cloud`
    pub api_url: String,

    /// Tenant folder identifier, interpolated into every resource URL
    pub folder_id: String,

    /// Override for the token endpoint; defaults to the fixed Cegid
    /// authentication service
    #[serde(default)]
    pub token_url: Option<String>,

    /// Earliest replication timestamp for incremental runs
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
}

impl ConnectorConfig {
    /// Deserialize and validate a config from the host's JSON value
    pub fn from_value(value: &Value) -> Result<Self> {
        let config: Self = serde_json::from_value(value.clone())
            .map_err(|e| Error::config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate required fields, failing fast on anything missing
    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() {
            return Err(Error::missing_field("username"));
        }
        if self.password.is_empty() {
            return Err(Error::missing_field("password"));
        }
        if self.api_url.is_empty() {
            return Err(Error::missing_field("api_url"));
        }
        if self.folder_id.is_empty() {
            return Err(Error::missing_field("folder_id"));
        }

        Url::parse(&self.api_url)
            .map_err(|e| Error::invalid_value("api_url", e.to_string()))?;

        if let Some(token_url) = &self.token_url {
            Url::parse(token_url)
                .map_err(|e| Error::invalid_value("token_url", e.to_string()))?;
        }

        Ok(())
    }

    /// Root URL for resource requests: `{api_url}/{folder_id}/api`
    pub fn resource_base(&self) -> String {
        format!(
            "{}/{}/api",
            self.api_url.trim_end_matches('/'),
            self.folder_id
        )
    }
}

// Credentials must never leak into logs.
impl std::fmt::Debug for ConnectorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectorConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("folder_id", &self.folder_id)
            .field("token_url", &self.token_url)
            .field("start_date", &self.start_date)
            .finish()
    }
}
