//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type
//!
//! Defines the error enum used across the client. Variants carry enough
//! context for diagnostics; the user-facing text shown in the error banner is
//! derived separately (`tasks::search_task`), so raw causes never leak into
//! the UI.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for the search client.
#[derive(Debug, Error)]
pub enum AppError {
    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file I/O error with path.
    #[error("Config I/O error on {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The network call to the ranking service itself failed: connect, DNS,
    /// timeout, or a non-2xx status with no usable body.
    #[error("Transport failure talking to ranking service: {reason}")]
    Transport { reason: String },

    /// The service answered, but the body did not match the expected shape.
    /// Carries the text to surface: the server's own explanation when it
    /// supplied one, else a generic fallback.
    #[error("Malformed response from ranking service: {0}")]
    MalformedResponse(String),

    /// Failure launching the external browser for a profile link.
    #[error("Failed to open profile link {url}: {reason}")]
    BrowserLaunch { url: String, reason: String },

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl AppError {
    /// Create a transport failure error.
    pub fn transport<S: Into<String>>(reason: S) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    /// Create a browser launch error.
    pub fn browser_launch<S1: Into<String>, S2: Into<String>>(url: S1, reason: S2) -> Self {
        Self::BrowserLaunch {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
