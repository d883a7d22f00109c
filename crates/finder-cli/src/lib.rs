//! # finder-cli
//!
//! Terminal front end for the Finder company directory search.
//!
//! This crate provides the `finder` binary:
//! - One-shot searches (`finder search <city> [--page N] [--json]`)
//! - An interactive prompt driving a [`finder_core::SearchSession`]
//! - Configuration management (`finder config path|show|init`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod render;
pub mod repl;

pub use config::FinderConfig;
pub use error::{Error, Result};
