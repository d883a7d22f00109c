//! HTTP client configuration.

use serde::{Deserialize, Serialize};

/// Public directory endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str =
    "https://ohjelmistoalan-yritysten-haku-backend-1.onrender.com/api/companies";

/// Settings for [`HttpSearchService`](crate::HttpSearchService).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Directory search endpoint; `city` and `page` are appended as query
    /// parameters.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("finder/", env!("CARGO_PKG_VERSION")).to_string()
}

impl ClientConfig {
    /// Default settings pointed at `endpoint`.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
