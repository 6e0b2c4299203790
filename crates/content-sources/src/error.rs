// crates/content-sources/src/error.rs
//! Error types for the remote content sources

use marquee_core::FetchFailure;
use thiserror::Error;

/// Result type for content source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur while talking to the catalog or the trending store
#[derive(Debug, Error)]
pub enum SourceError {
    /// The request never produced a response (DNS, connect, timeout, ...)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// The body was not valid JSON or lacked required fields
    #[error("Unexpected response shape: {0}")]
    DataShape(#[from] serde_json::Error),

    /// The client could not be built from its configuration
    #[error("Client misconfigured: {0}")]
    Configuration(String),
}

impl SourceError {
    /// HTTP status code, for status errors
    pub fn status(&self) -> Option<u16> {
        match self {
            SourceError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true for a 404 answer
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns true for a 409 answer
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    /// Collapses the error into the kind carried by an empty result page
    pub fn failure(&self) -> FetchFailure {
        match self {
            SourceError::Transport(_) => FetchFailure::Transport,
            SourceError::HttpStatus { status, .. } => FetchFailure::HttpStatus(*status),
            SourceError::DataShape(_) => FetchFailure::DataShape,
            SourceError::Configuration(_) => FetchFailure::Configuration,
        }
    }
}
