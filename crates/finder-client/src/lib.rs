//! # finder-client
//!
//! HTTP client for the Finder company directory.
//!
//! This crate provides [`HttpSearchService`], the production implementation
//! of [`finder_core::SearchService`]:
//! - `GET <endpoint>?city=<city>&page=<page>` against the directory API
//! - Configurable endpoint, timeout and user agent ([`ClientConfig`])
//! - Failure classification into [`finder_core::ServiceFailureKind`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;

pub use client::HttpSearchService;
pub use config::ClientConfig;
pub use error::{Error, Result};
