//! Error types for search capture
//!
//! Every failure aborts the run. Nothing here is considered transient.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for capture operations
pub type CaptureResult<T> = Result<T, CaptureError>;

#[derive(Debug, Error)]
pub enum CaptureError {
    /// A required element did not appear within the wait bound
    #[error("Element '{locator}' not found after {timeout:?}")]
    ElementNotFound { locator: String, timeout: Duration },

    /// Output file or console could not be written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Navigation failed or timed out
    #[error("Failed to navigate to {url}: {message}")]
    Navigation { url: String, message: String },

    /// Any other automation backend failure
    #[error("Browser error: {0}")]
    Browser(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<anyhow::Error> for CaptureError {
    fn from(err: anyhow::Error) -> Self {
        // {:#} keeps the whole context chain
        Self::Browser(format!("{err:#}"))
    }
}

impl From<chromiumoxide::error::CdpError> for CaptureError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Self::Browser(err.to_string())
    }
}

impl CaptureError {
    pub(crate) fn element_not_found(locator: &str, timeout: Duration) -> Self {
        Self::ElementNotFound {
            locator: locator.to_string(),
            timeout,
        }
    }

    #[must_use]
    pub fn is_element_not_found(&self) -> bool {
        matches!(self, Self::ElementNotFound { .. })
    }
}
