//! Search state machine.
//!
//! [`SearchController`] owns the [`SearchState`] of one search widget and is
//! the only thing allowed to change it. Every user-facing transition
//! (`submit`, `go_to_page`, `clear`) mutates state synchronously and, when a
//! fetch is needed, hands back a [`FetchRequest`] instead of doing I/O. The
//! caller executes the request and reports the outcome through
//! [`SearchController::complete`].
//!
//! # Staleness
//!
//! Requests carry a sequence number taken from a counter that advances on
//! every issued fetch and on `clear`. A completion is applied only when its
//! sequence number is the latest one; anything older was superseded by a
//! later user action and is discarded without touching `results`, `total`
//! or `loading`.
//!
//! ```rust
//! use finder_core::{Completion, Company, SearchController, SearchPage};
//!
//! let mut controller = SearchController::new();
//! let first = controller.submit("Helsinki").unwrap();
//! let second = controller.go_to_page(2).unwrap().unwrap();
//!
//! // The page-1 response arrives after page 2 was requested.
//! let late = controller.complete(&first, Ok(SearchPage::new(vec![], 25)));
//! assert_eq!(late, Completion::Discarded);
//! assert!(controller.state().loading);
//!
//! let page = SearchPage::new(vec![Company::new("1", "Oy Ab", "Helsinki")], 25);
//! assert_eq!(controller.complete(&second, Ok(page)), Completion::Applied);
//! assert_eq!(controller.state().page, 2);
//! ```

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::pager::{self, PageMarker};
use crate::types::{Company, SearchPage, SearchQuery};

/// Number of companies per page served by the directory.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

// ============================================================================
// SearchState
// ============================================================================

/// View state of a search widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchState {
    /// Current text box contents; may differ from `committed_term`.
    pub query_input: String,
    /// Term of the last submitted search.
    pub committed_term: String,
    /// Current page, 1-indexed.
    pub page: u32,
    /// Companies per page.
    pub page_size: u32,
    /// Total matches reported by the last applied fetch.
    pub total: u64,
    /// Companies on the current page.
    pub results: Vec<Company>,
    /// Whether the latest issued fetch is still outstanding.
    pub loading: bool,
    /// Whether a search has been submitted since creation or the last clear.
    pub has_searched: bool,
}

impl SearchState {
    fn with_page_size(page_size: u32) -> Self {
        Self {
            query_input: String::new(),
            committed_term: String::new(),
            page: 1,
            page_size,
            total: 0,
            results: Vec::new(),
            loading: false,
            has_searched: false,
        }
    }

    /// Number of pages for the current total.
    pub fn total_pages(&self) -> u32 {
        pager::total_pages(self.total, self.page_size)
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

// ============================================================================
// FetchRequest / Completion
// ============================================================================

/// A fetch issued by the controller, tagged for staleness checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Sequence number assigned at issue time.
    pub seq: u64,
    /// City term to search.
    pub term: String,
    /// Page to fetch.
    pub page: u32,
}

impl FetchRequest {
    /// The service query for this request.
    pub fn query(&self) -> SearchQuery {
        SearchQuery::new(self.term.clone(), self.page)
    }
}

impl fmt::Display for FetchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} '{}' page {}", self.seq, self.term, self.page)
    }
}

/// What [`SearchController::complete`] did with a fetch outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Results and total were replaced and loading cleared.
    Applied,
    /// The fetch failed; prior results kept and loading cleared.
    Failed,
    /// The request was superseded; state left untouched.
    Discarded,
}

// ============================================================================
// SearchController
// ============================================================================

/// Owner of all mutable search state.
#[derive(Debug, Clone)]
pub struct SearchController {
    state: SearchState,
    latest_seq: u64,
}

impl SearchController {
    /// Create a controller with empty state and the default page size.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Create a controller for a directory serving `page_size` companies per
    /// page. A zero page size is raised to one.
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            state: SearchState::with_page_size(page_size.max(1)),
            latest_seq: 0,
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Number of pages for the current total.
    pub fn total_pages(&self) -> u32 {
        self.state.total_pages()
    }

    /// Pagination strip for the current page.
    pub fn markers(&self) -> Vec<PageMarker> {
        pager::compact(self.state.page, self.total_pages())
    }

    /// Whether the last search settled without a single match.
    ///
    /// A page past the end of a non-empty result set is not an empty result.
    pub fn is_empty_result(&self) -> bool {
        self.state.has_searched
            && !self.state.loading
            && self.state.results.is_empty()
            && self.state.total == 0
    }

    /// Update the live text box contents. Does not search.
    pub fn set_query_input(&mut self, text: impl Into<String>) {
        self.state.query_input = text.into();
    }

    /// Submit the current text box contents.
    pub fn submit_input(&mut self) -> Option<FetchRequest> {
        let term = self.state.query_input.clone();
        self.submit(term)
    }

    /// Start a new search for `term` from page 1.
    ///
    /// Returns `None` and leaves state untouched when `term` is blank.
    pub fn submit(&mut self, term: impl Into<String>) -> Option<FetchRequest> {
        let term = term.into();
        if term.trim().is_empty() {
            tracing::debug!("Ignoring blank search term");
            return None;
        }

        self.state.committed_term = term.clone();
        self.state.page = 1;
        self.state.has_searched = true;
        Some(self.request(term, 1))
    }

    /// Navigate to `page` of the committed search.
    ///
    /// Returns `Ok(None)` without changing anything when no search has been
    /// committed yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPage`] for page 0.
    pub fn go_to_page(&mut self, page: u32) -> Result<Option<FetchRequest>> {
        if page == 0 {
            return Err(Error::InvalidPage { page });
        }

        if self.state.committed_term.trim().is_empty() {
            tracing::debug!(page, "Ignoring page change before any search");
            return Ok(None);
        }

        self.state.page = page;
        let term = self.state.committed_term.clone();
        Ok(Some(self.request(term, page)))
    }

    /// Go to the next page, if there is one.
    pub fn next_page(&mut self) -> Option<FetchRequest> {
        let target = self.state.page.saturating_add(1);
        self.step_to(target)
    }

    /// Go to the previous page, if there is one.
    pub fn previous_page(&mut self) -> Option<FetchRequest> {
        let target = self.state.page.saturating_sub(1);
        self.step_to(target)
    }

    fn step_to(&mut self, target: u32) -> Option<FetchRequest> {
        let current = self.state.page;
        let clamped = target.clamp(1, self.total_pages().max(1));
        // Clamping must never reverse the direction of travel.
        if clamped == current || (target > current) != (clamped > current) {
            return None;
        }
        self.go_to_page(clamped).ok().flatten()
    }

    /// Reset to the initial state and make any outstanding request stale.
    pub fn clear(&mut self) {
        self.latest_seq += 1;
        self.state = SearchState::with_page_size(self.state.page_size);
        tracing::debug!(seq = self.latest_seq, "Search cleared");
    }

    fn request(&mut self, term: String, page: u32) -> FetchRequest {
        self.latest_seq += 1;
        self.state.loading = true;
        let request = FetchRequest {
            seq: self.latest_seq,
            term,
            page,
        };
        tracing::debug!(seq = request.seq, term = %request.term, page, "Fetch issued");
        request
    }

    /// Whether `request` is still the latest issued fetch.
    pub fn is_current(&self, request: &FetchRequest) -> bool {
        request.seq == self.latest_seq
    }

    /// Apply the outcome of `request`.
    ///
    /// Stale requests are discarded. A failure keeps the prior results and
    /// is logged; it is never returned to the caller.
    pub fn complete(&mut self, request: &FetchRequest, outcome: Result<SearchPage>) -> Completion {
        if !self.is_current(request) {
            tracing::debug!(
                seq = request.seq,
                latest = self.latest_seq,
                term = %request.term,
                page = request.page,
                "Discarding stale response"
            );
            return Completion::Discarded;
        }

        self.state.loading = false;
        match outcome {
            Ok(page) => {
                tracing::debug!(
                    seq = request.seq,
                    results = page.companies.len(),
                    total = page.total,
                    "Response applied"
                );
                self.state.results = page.companies;
                self.state.total = page.total;
                Completion::Applied
            }
            Err(e) => {
                tracing::warn!(
                    seq = request.seq,
                    term = %request.term,
                    page = request.page,
                    error = %e,
                    retryable = e.is_retryable(),
                    "Search failed"
                );
                Completion::Failed
            }
        }
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
