//! Global configuration model for shipdesk.
//!
//! Values are layered: built-in defaults, then an optional JSON config
//! file, then command-line overrides applied by the binary.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{Result, ShipdeskError};

/// Root configuration for shipdesk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipdeskConfig {
    /// Base URL of the shipments backend.
    pub api_url: String,
    /// Local JSON file to read shipments from instead of the backend.
    pub data_file: Option<PathBuf>,
    /// Number of rows per page of the shipment list.
    pub rows_per_page: usize,
    /// Whether name edits are pushed to the source.
    pub persist_edits: bool,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ShipdeskConfig {
    fn default() -> Self {
        Self {
            api_url: constants::DEFAULT_API_URL.to_string(),
            data_file: None,
            rows_per_page: constants::ROWS_PER_PAGE,
            persist_edits: false,
            request_timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ShipdeskConfig {
    /// Loads configuration from `path`, or from the default config file if
    /// `path` is `None` and that file exists, or falls back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given file is missing, or if a
    /// config file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::load_if_present(&constants::default_config_file()),
        }
    }

    /// Reads `path` if it is a file, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_if_present(path: &Path) -> Result<Self> {
        if path.is_file() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Reads a configuration file. Keys absent from the file keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path).map_err(|e| ShipdeskError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Checks that all values are usable.
    ///
    /// # Errors
    ///
    /// Returns `ShipdeskError::Config` describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ShipdeskError::Config {
                message: format!("api url must use http:// or https://: {}", self.api_url),
            });
        }
        if !(1..=constants::MAX_ROWS_PER_PAGE).contains(&self.rows_per_page) {
            return Err(ShipdeskError::Config {
                message: format!(
                    "rows per page must be between 1 and {}: {}",
                    constants::MAX_ROWS_PER_PAGE,
                    self.rows_per_page
                ),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ShipdeskError::Config {
                message: "request timeout must be at least 1 second".to_string(),
            });
        }
        Ok(())
    }
}
