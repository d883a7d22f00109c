//! Common test utilities for Finder session integration tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use finder_core::{
    Company, Error, Result, SearchPage, SearchQuery, SearchService, ServiceFailureKind,
};
use tokio::sync::oneshot;

/// Sender that releases one gated response.
pub type Gate = oneshot::Sender<Result<SearchPage>>;

/// Search service whose responses are released by the test.
///
/// Each query must be registered with [`GatedSearchService::gate`] before
/// it is issued; the fetch then waits until the test sends the response,
/// which lets a test choose the order in which overlapping fetches finish.
/// Queries marked with [`GatedSearchService::panic_on`] panic once released.
#[derive(Default)]
pub struct GatedSearchService {
    gates: Mutex<HashMap<SearchQuery, oneshot::Receiver<Result<SearchPage>>>>,
    panics: Mutex<HashSet<SearchQuery>>,
}

impl GatedSearchService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `city`/`page` and return the sender that completes it.
    pub fn gate(&self, city: &str, page: u32) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.gates
            .lock()
            .unwrap()
            .insert(SearchQuery::new(city, page), rx);
        tx
    }

    /// Make `city`/`page` panic when its gate is released.
    pub fn panic_on(&self, city: &str, page: u32) {
        self.panics
            .lock()
            .unwrap()
            .insert(SearchQuery::new(city, page));
    }
}

#[async_trait]
impl SearchService for GatedSearchService {
    async fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
        let gate = self.gates.lock().unwrap().remove(query);
        match gate {
            Some(rx) => {
                let response = rx.await.unwrap_or_else(|_| {
                    Err(Error::service(ServiceFailureKind::Transport, "gate dropped"))
                });
                if self.panics.lock().unwrap().contains(query) {
                    panic!("search backend exploded on {query:?}");
                }
                response
            }
            None => Err(Error::service(
                ServiceFailureKind::Status(404),
                format!("no gate registered for {query:?}"),
            )),
        }
    }

    fn name(&self) -> &str {
        "gated"
    }
}

/// Search service that panics on every call.
pub struct PanickingSearchService;

#[async_trait]
impl SearchService for PanickingSearchService {
    async fn search(&self, _query: &SearchQuery) -> Result<SearchPage> {
        panic!("search backend exploded");
    }

    fn name(&self) -> &str {
        "panicking"
    }
}

/// `n` companies in `city`, ids prefixed with `tag`.
pub fn companies(tag: &str, city: &str, n: usize) -> Vec<Company> {
    (0..n)
        .map(|i| Company::new(format!("{tag}-{i}"), format!("{tag} company {i}"), city))
        .collect()
}

/// A result page of `n` tagged companies out of `total`.
pub fn page_of(tag: &str, n: usize, total: u64) -> SearchPage {
    SearchPage::new(companies(tag, "Helsinki", n), total)
}
