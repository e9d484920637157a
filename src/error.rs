//! Error types for the artinset library.

use std::io;
use thiserror::Error;

/// Result type alias for artinset operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while resolving or applying offsets.
#[derive(Error, Debug)]
pub enum Error {
    /// No document is bound to the run.
    #[error("No active document found, please open one")]
    NoActiveDocument,

    /// The selection expression contains a malformed token.
    #[error("Invalid artboard selection '{token}': {reason}")]
    Parse {
        /// The offending token, trimmed
        token: String,
        /// Why the token was rejected
        reason: String,
    },

    /// An offset field is missing, non-numeric or not finite.
    #[error("Invalid offset configuration: {0}")]
    Config(String),

    /// Region index is out of range.
    #[error("Artboard {0} is out of range (document has {1} artboards)")]
    RegionOutOfRange(usize, usize),

    /// The document model rejected an operation.
    #[error("Document error: {0}")]
    Host(String),

    /// I/O error when reading or writing documents.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Document or report (de)serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create a parse error for a selection token.
    pub fn parse(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Parse {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error was caused by user input rather than the document.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::NoActiveDocument | Error::Parse { .. } | Error::Config(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.into())
        } else {
            Error::Serialization(err.to_string())
        }
    }
}
