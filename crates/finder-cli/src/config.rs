//! Configuration for the `finder` binary.
//!
//! Resolution order:
//! 1. `--config <path>` (must exist)
//! 2. `<config dir>/finder/config.toml`, if present
//! 3. Built-in defaults
//!
//! `--endpoint` / `FINDER_ENDPOINT` override the endpoint afterwards.
//!
//! ```toml
//! [service]
//! endpoint = "https://ohjelmistoalan-yritysten-haku-backend-1.onrender.com/api/companies"
//! timeout_secs = 30
//!
//! [search]
//! page_size = 10
//! ```

use std::path::{Path, PathBuf};

use finder_client::ClientConfig;
use finder_core::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Project name, used for the config directory.
pub const PROJECT_NAME: &str = "finder";

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Directory service connection settings.
    #[serde(default)]
    pub service: ClientConfig,

    /// Search widget settings.
    #[serde(default)]
    pub search: SearchSettings,
}

/// Search widget settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Companies per page served by the directory.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl FinderConfig {
    /// Default config file location for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// The file that [`load`](Self::load) would read, if any.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Load configuration following the resolution order above.
    ///
    /// # Errors
    ///
    /// Fails if an explicit path does not exist, a file cannot be read or
    /// parsed, or the result does not [`validate`](Self::validate).
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let config = match explicit {
            Some(path) => {
                let path = Path::new(path);
                if !path.exists() {
                    return Err(Error::config(format!(
                        "Config file does not exist at {}",
                        path.display()
                    )));
                }
                Self::from_file(path)?
            }
            None => match Self::default_config_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Replace the configured endpoint.
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.service.endpoint = endpoint;
        }
        self
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.search.page_size == 0 {
            return Err(Error::config("search.page_size must be at least 1"));
        }
        if self.service.timeout_secs == 0 {
            return Err(Error::config("service.timeout_secs must be at least 1"));
        }
        if self.service.endpoint.trim().is_empty() {
            return Err(Error::config("service.endpoint must not be empty"));
        }
        Ok(())
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
