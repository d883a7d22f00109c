//! Error types for Finder core library.

use std::fmt;

/// Classification of a search service failure.
///
/// The controller treats every kind the same way (keep prior results, clear
/// the loading flag); the kind exists for diagnostics and for callers that
/// want to distinguish a timeout from a rejected request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ServiceFailureKind {
    /// Connection, DNS, TLS or other transport-level failure.
    Transport,
    /// The request did not complete within the configured timeout.
    Timeout,
    /// The service answered with a non-success HTTP status.
    Status(u16),
    /// The response body could not be decoded.
    Malformed,
}

impl fmt::Display for ServiceFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport => write!(f, "transport"),
            Self::Timeout => write!(f, "timeout"),
            Self::Status(code) => write!(f, "status {code}"),
            Self::Malformed => write!(f, "malformed response"),
        }
    }
}

/// Errors that can occur in Finder.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The remote search service failed (network, status, or payload).
    #[error("Search service failure ({kind}): {message}")]
    Service {
        /// What kind of failure occurred
        kind: ServiceFailureKind,
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A page number outside the valid range was requested.
    #[error("Invalid page: {page} (pages are numbered from 1)")]
    InvalidPage {
        /// The rejected page number
        page: u32,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for Finder operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new service failure without a source error.
    pub fn service<S: Into<String>>(kind: ServiceFailureKind, message: S) -> Self {
        Error::Service {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new service failure with a source error.
    pub fn service_with_source<S, E>(kind: ServiceFailureKind, message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Service {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns the failure kind if this is a service failure.
    pub fn service_kind(&self) -> Option<ServiceFailureKind> {
        match self {
            Error::Service { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns whether this error is retryable.
    ///
    /// Transport failures, timeouts and 5xx responses are transient; client
    /// errors, malformed payloads and local validation errors are not.
    /// Finder never retries on its own; this is informational.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Service { kind, .. } => match kind {
                ServiceFailureKind::Transport | ServiceFailureKind::Timeout => true,
                ServiceFailureKind::Status(code) => *code >= 500,
                ServiceFailureKind::Malformed => false,
            },
            Error::InvalidPage { .. } => false,
            Error::Config { .. } => false,
        }
    }
}
