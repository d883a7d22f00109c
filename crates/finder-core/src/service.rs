//! Search service trait.
//!
//! The remote company directory is consumed through [`SearchService`]. The
//! controller never talks to the network itself; the [`SearchSession`]
//! driver calls the service for every fetch the controller issues.
//!
//! # Implementations
//!
//! - `HttpSearchService` (in `finder-client`): the remote directory over HTTP
//! - [`MockSearchService`]: scripted pages for tests and offline demos
//!
//! [`SearchSession`]: crate::SearchSession
//! [`MockSearchService`]: crate::MockSearchService

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{SearchPage, SearchQuery};

/// Abstract company directory search.
///
/// A search is a single idempotent read: the same query against the same
/// underlying dataset yields the same page of results.
///
/// # Errors
///
/// Every failure (transport, non-success status, undecodable payload) is
/// reported as [`Error::Service`](crate::Error::Service).
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Fetch one page of companies located in `query.city`.
    async fn search(&self, query: &SearchQuery) -> Result<SearchPage>;

    /// Get the service name for diagnostics.
    fn name(&self) -> &str;
}
