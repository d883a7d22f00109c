//! Async driver for a [`SearchController`].
//!
//! [`SearchSession`] pairs a controller with a [`SearchService`]. Each
//! [`FetchRequest`] the controller issues is spawned onto a
//! [`JoinSet`](tokio::task::JoinSet), so overlapping fetches progress
//! concurrently, while their outcomes are applied one at a time through
//! `&mut self` in [`SearchSession::next_completion`].
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use finder_core::{Company, MockSearchService, SearchSession};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let companies = vec![Company::new("1", "Oy Ab", "Helsinki")];
//! let mut session = SearchSession::new(Arc::new(MockSearchService::new(companies)));
//!
//! session.submit("Helsinki");
//! session.settle().await;
//! assert_eq!(session.state().total, 1);
//! # }
//! ```
//!
//! All transition methods spawn tasks and must be called from within a
//! Tokio runtime. Dropping the session aborts every outstanding fetch.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tokio::task::{Id, JoinSet};

use crate::controller::{Completion, FetchRequest, SearchController, SearchState};
use crate::error::{Error, Result, ServiceFailureKind};
use crate::pager::PageMarker;
use crate::service::SearchService;
use crate::types::SearchPage;

/// A search widget: controller state plus the fetches it has in flight.
pub struct SearchSession {
    controller: SearchController,
    service: Arc<dyn SearchService>,
    in_flight: JoinSet<Result<SearchPage>>,
    outstanding: HashMap<Id, FetchRequest>,
}

impl SearchSession {
    /// Create a session with a fresh controller.
    pub fn new(service: Arc<dyn SearchService>) -> Self {
        Self::with_controller(service, SearchController::new())
    }

    /// Create a session around an existing controller.
    pub fn with_controller(service: Arc<dyn SearchService>, controller: SearchController) -> Self {
        Self {
            controller,
            service,
            in_flight: JoinSet::new(),
            outstanding: HashMap::new(),
        }
    }

    /// Current view state.
    pub fn state(&self) -> &SearchState {
        self.controller.state()
    }

    /// The underlying controller.
    pub fn controller(&self) -> &SearchController {
        &self.controller
    }

    /// Pagination strip for the current page.
    pub fn markers(&self) -> Vec<PageMarker> {
        self.controller.markers()
    }

    /// Number of fetches whose tasks have not been joined yet, stale ones
    /// included.
    pub fn pending(&self) -> usize {
        self.in_flight.len()
    }

    /// Update the live text box contents.
    pub fn set_query_input(&mut self, text: impl Into<String>) {
        self.controller.set_query_input(text);
    }

    /// Submit a search for `term`. Returns `false` if the term was blank.
    pub fn submit(&mut self, term: impl Into<String>) -> bool {
        let request = self.controller.submit(term);
        self.dispatch(request)
    }

    /// Submit the current text box contents.
    pub fn submit_input(&mut self) -> bool {
        let request = self.controller.submit_input();
        self.dispatch(request)
    }

    /// Navigate to `page`. Returns `Ok(false)` if nothing was searched yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPage`] for page 0.
    pub fn go_to_page(&mut self, page: u32) -> Result<bool> {
        let request = self.controller.go_to_page(page)?;
        Ok(self.dispatch(request))
    }

    /// Go to the next page. Returns `false` when already on the last page.
    pub fn next_page(&mut self) -> bool {
        let request = self.controller.next_page();
        self.dispatch(request)
    }

    /// Go to the previous page. Returns `false` when already on page 1.
    pub fn previous_page(&mut self) -> bool {
        let request = self.controller.previous_page();
        self.dispatch(request)
    }

    /// Reset the widget. In-flight fetches keep running but their results
    /// will be discarded.
    pub fn clear(&mut self) {
        self.controller.clear();
    }

    fn dispatch(&mut self, request: Option<FetchRequest>) -> bool {
        let Some(request) = request else {
            return false;
        };

        tracing::debug!(%request, service = self.service.name(), "Spawning search");

        let service = Arc::clone(&self.service);
        let query = request.query();
        let handle = self
            .in_flight
            .spawn(async move { service.search(&query).await });
        self.outstanding.insert(handle.id(), request);
        true
    }

    /// Wait for the next fetch to finish and apply it.
    ///
    /// Returns `None` when nothing is in flight. Cancel-safe: dropping the
    /// returned future loses no completion.
    ///
    /// A task that panicked or was cancelled completes its request as a
    /// transport failure.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        loop {
            let (id, outcome) = match self.in_flight.join_next_with_id().await? {
                Ok((id, outcome)) => (id, outcome),
                Err(e) => {
                    tracing::error!(error = %e, "Search task did not complete");
                    let error = Error::service(
                        ServiceFailureKind::Transport,
                        format!("search task ended without a response: {e}"),
                    );
                    (e.id(), Err(error))
                }
            };

            match self.outstanding.remove(&id) {
                Some(request) => return Some(self.controller.complete(&request, outcome)),
                None => tracing::warn!(task = %id, "Joined a search task with no request"),
            }
        }
    }

    /// Apply completions until nothing is in flight.
    pub async fn settle(&mut self) {
        while self.next_completion().await.is_some() {}
    }

}

impl fmt::Debug for SearchSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchSession")
            .field("service", &self.service.name())
            .field("state", self.controller.state())
            .field("pending", &self.in_flight.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
