#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Finder Core
//!
//! Search state, pagination, and the service contract for the Finder company
//! directory search.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: Company records and the service wire types
//! - [`service`]: The [`SearchService`] trait consumed by the controller
//! - [`pager`]: Compacted page-index computation
//! - [`controller`]: The [`SearchController`] state machine
//! - [`session`]: Async driver that executes controller fetches
//! - [`mock`]: Scripted in-memory [`SearchService`] for tests and demos
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                      finder-core                          │
//! ├───────────────────────────────────────────────────────────┤
//! │  SearchSession (JoinSet of in-flight fetches)             │
//! │  └── SearchController (state machine, seq-tagged fetches) │
//! │      └── pager::compact (PageMarker strip)                │
//! ├───────────────────────────────────────────────────────────┤
//! │  SearchService trait                                      │
//! │  ├── MockSearchService (scripted pages)                   │
//! │  └── HttpSearchService (finder-client crate)              │
//! └───────────────────────────────────────────────────────────┘
//! ```

pub mod controller;
pub mod error;
pub mod mock;
pub mod pager;
pub mod service;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use controller::{Completion, FetchRequest, SearchController, SearchState, DEFAULT_PAGE_SIZE};
pub use error::{Error, Result, ServiceFailureKind};
pub use mock::MockSearchService;
pub use pager::{compact, PageMarker};
pub use service::SearchService;
pub use session::SearchSession;
pub use types::{Address, Company, CompanyName, PostOffice, SearchPage, SearchQuery};
