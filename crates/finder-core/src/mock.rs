//! In-memory search service.
//!
//! [`MockSearchService`] serves pages out of a fixed list of companies,
//! matching the city case-insensitively against each company's display
//! city. Individual queries can be scripted to fail, and every query is
//! recorded for later inspection.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::controller::DEFAULT_PAGE_SIZE;
use crate::error::{Error, Result, ServiceFailureKind};
use crate::service::SearchService;
use crate::types::{Company, SearchPage, SearchQuery};

/// Scripted [`SearchService`] backed by an in-memory company list.
#[derive(Debug)]
pub struct MockSearchService {
    companies: Vec<Company>,
    page_size: u32,
    failures: Mutex<HashMap<SearchQuery, ServiceFailureKind>>,
    calls: Mutex<Vec<SearchQuery>>,
}

fn guard<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockSearchService {
    /// Create a service over `companies` with the default page size.
    pub fn new(companies: Vec<Company>) -> Self {
        Self {
            companies,
            page_size: DEFAULT_PAGE_SIZE,
            failures: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a service with no companies at all.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Set the number of companies per page (at least one).
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Make `query` fail with `kind` until [`clear_failures`](Self::clear_failures).
    pub fn fail_on(&self, query: SearchQuery, kind: ServiceFailureKind) {
        guard(&self.failures).insert(query, kind);
    }

    /// Remove all scripted failures.
    pub fn clear_failures(&self) {
        guard(&self.failures).clear();
    }

    /// Every query received so far, in arrival order.
    pub fn calls(&self) -> Vec<SearchQuery> {
        guard(&self.calls).clone()
    }

    /// Number of queries received so far.
    pub fn call_count(&self) -> usize {
        guard(&self.calls).len()
    }

    fn page_for(&self, query: &SearchQuery) -> SearchPage {
        let city = query.city.trim();
        let matching: Vec<&Company> = self
            .companies
            .iter()
            .filter(|c| c.display_city().eq_ignore_ascii_case(city))
            .collect();

        let size = self.page_size as usize;
        let skip = (query.page.max(1) as usize - 1).saturating_mul(size);
        let companies = matching.iter().skip(skip).take(size).map(|c| (*c).clone()).collect();

        SearchPage::new(companies, matching.len() as u64)
    }
}

#[async_trait]
impl SearchService for MockSearchService {
    async fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
        guard(&self.calls).push(query.clone());

        if let Some(kind) = guard(&self.failures).get(query).copied() {
            tracing::debug!(city = %query.city, page = query.page, %kind, "Mock failure");
            return Err(Error::service(kind, format!("scripted failure for {query:?}")));
        }

        Ok(self.page_for(query))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

// ============================================================================
// Tests
// ============================================================================
