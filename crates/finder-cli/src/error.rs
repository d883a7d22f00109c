//! Error types for finder-cli

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for finder-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in finder-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from finder-core
    #[error("Core error: {0}")]
    Core(#[from] finder_core::Error),

    /// I/O error on a specific file
    #[error("I/O error at {path}: {source}")]
    FileIo {
        /// The file involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// I/O error on the terminal
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unrecognized interactive command
    #[error("{0}")]
    Command(String),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// Creates a new interactive command error.
    pub fn command(message: impl Into<String>) -> Self {
        Error::Command(message.into())
    }

    /// Wraps an I/O error with the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::FileIo {
            path: path.to_path_buf(),
            source,
        }
    }
}
