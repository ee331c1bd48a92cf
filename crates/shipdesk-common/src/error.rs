//! Unified error types for the shipdesk workspace.
//!
//! Higher-level crates either return these directly or wrap them in their
//! own domain-specific error enum.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ShipdeskError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// A required resource was not found.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Type of the missing resource.
        kind: &'static str,
        /// Identifier of the missing resource.
        id: String,
    },

    /// An edit was requested while no shipment is selected.
    #[error("no shipment is selected")]
    NoSelection,

    /// The HTTP request could not be completed.
    #[error("request to {url} failed: {message}")]
    Http {
        /// Target URL of the request.
        url: String,
        /// Transport-level failure description.
        message: String,
    },

    /// The backend answered with a non-success status code.
    #[error("HTTP {status} from {url}")]
    Status {
        /// Target URL of the request.
        url: String,
        /// Status code returned by the backend.
        status: u16,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ShipdeskError>;
