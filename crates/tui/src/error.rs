// crates/tui/src/error.rs
//! Error types for TUI

use thiserror::Error;

/// Result type for TUI operations
pub type TuiResult<T> = Result<T, TuiError>;

/// Errors that can occur in the TUI
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The terminal input stream ended unexpectedly
    #[error("Input stream closed")]
    InputClosed,
}
