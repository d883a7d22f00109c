//! Directory search over HTTP.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use finder_core::{SearchPage, SearchQuery, SearchService, ServiceFailureKind};
use reqwest::Url;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// [`SearchService`] backed by the remote company directory.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct HttpSearchService {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpSearchService {
    /// Create a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] if the endpoint is not an
    /// `http`/`https` URL, or [`Error::Http`] if the HTTP client cannot be
    /// built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| Error::invalid_endpoint(&config.endpoint, e.to_string()))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::invalid_endpoint(
                &config.endpoint,
                format!("unsupported scheme '{}'", endpoint.scheme()),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        tracing::debug!(endpoint = %endpoint, timeout_secs = config.timeout_secs, "HTTP search client ready");
        Ok(Self { client, endpoint })
    }

    /// The configured search endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The full request URL for `query`.
    pub fn request_url(&self, query: &SearchQuery) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("city", &query.city)
            .append_pair("page", &query.page.to_string());
        url
    }
}

/// Classify a reqwest failure.
fn service_error(e: reqwest::Error) -> finder_core::Error {
    let kind = if e.is_timeout() {
        ServiceFailureKind::Timeout
    } else if e.is_decode() {
        ServiceFailureKind::Malformed
    } else if let Some(status) = e.status() {
        ServiceFailureKind::Status(status.as_u16())
    } else {
        ServiceFailureKind::Transport
    };
    finder_core::Error::service_with_source(kind, format!("search request failed: {e}"), e)
}

#[async_trait]
impl SearchService for HttpSearchService {
    async fn search(&self, query: &SearchQuery) -> finder_core::Result<SearchPage> {
        let url = self.request_url(query);
        tracing::debug!(%url, "Searching directory");

        let response = self.client.get(url).send().await.map_err(service_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(finder_core::Error::service(
                ServiceFailureKind::Status(status.as_u16()),
                format!("directory returned HTTP {status}"),
            ));
        }

        let body = response.bytes().await.map_err(service_error)?;
        let page: SearchPage = serde_json::from_slice(&body).map_err(|e| {
            finder_core::Error::service_with_source(
                ServiceFailureKind::Malformed,
                "could not decode search response",
                e,
            )
        })?;

        tracing::debug!(
            city = %query.city,
            page = query.page,
            results = page.companies.len(),
            total = page.total,
            "Directory responded"
        );
        Ok(page)
    }

    fn name(&self) -> &str {
        "http"
    }
}

impl fmt::Debug for HttpSearchService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpSearchService")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
