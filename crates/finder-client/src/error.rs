//! Error types for finder-client

use thiserror::Error;

/// Result type alias for finder-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up the HTTP client.
///
/// Failures of individual searches are reported as
/// [`finder_core::Error::Service`] through the
/// [`SearchService`](finder_core::SearchService) trait instead.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from finder-core
    #[error("Core error: {0}")]
    Core(#[from] finder_core::Error),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured endpoint is not a usable http(s) URL
    #[error("Invalid endpoint '{endpoint}': {message}")]
    InvalidEndpoint {
        /// The rejected endpoint
        endpoint: String,
        /// Why it was rejected
        message: String,
    },
}

impl Error {
    /// Creates a new invalid-endpoint error.
    pub fn invalid_endpoint(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidEndpoint {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }
}
