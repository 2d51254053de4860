//! Immutable proxy configuration.
//!
//! [`ProxyConfig`] is built once at startup, validated by
//! [`validation::validate`], and shared read-only through
//! [`AppState`](crate::server::AppState). It carries the PlayFab title
//! identifier and the upstream origin derived from it.

pub mod validation;

use url::Url;

use crate::error::ProxyError;

/// Title identifier compiled into the binary; overridable via `PLAYFAB_TITLE_ID`.
pub const DEFAULT_TITLE_ID: &str = "34dc6";

/// Default inbound body limit (100 KiB).
pub const DEFAULT_MAX_BODY: usize = 100 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    title_id: String,
    upstream_origin: Url,
}

impl ProxyConfig {
    /// Build a config targeting `https://{title_id}.playfabapi.com`.
    pub fn new(title_id: &str) -> Result<Self, ProxyError> {
        Self::with_origin(title_id, None)
    }

    /// Build a config, optionally replacing the PlayFab origin (used for local testing).
    pub fn with_origin(title_id: &str, origin: Option<&str>) -> Result<Self, ProxyError> {
        let title_id = title_id.trim();
        let origin = origin.map_or_else(|| playfab_origin(title_id), str::to_string);

        let upstream_origin = validation::validate(title_id, &origin)
            .map_err(|errors| ProxyError::ConfigValidation { errors })?;

        Ok(Self {
            title_id: title_id.to_string(),
            upstream_origin,
        })
    }

    #[must_use]
    pub fn title_id(&self) -> &str {
        &self.title_id
    }

    #[must_use]
    pub const fn upstream_origin(&self) -> &Url {
        &self.upstream_origin
    }

    /// Full upstream URL for a PlayFab endpoint such as `Client/LoginWithCustomID`.
    #[must_use]
    pub fn upstream_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{endpoint}",
            self.upstream_origin.as_str().trim_end_matches('/')
        )
    }
}

fn playfab_origin(title_id: &str) -> String {
    format!("https://{title_id}.playfabapi.com")
}
