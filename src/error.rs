//! Unified error types for talkview.
//!
//! This module provides a single [`TalkviewError`] enum that covers all error
//! cases in the library. Note that *parsing* has no error case at all: the
//! line parser is total and always returns a well-formed [`ChatLog`]
//! (see [`crate::parser`]). Errors here come from the edges: reading files,
//! decoding UTF-8, and writing output.
//!
//! [`ChatLog`]: crate::ChatLog

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for talkview operations.
///
/// # Example
///
/// ```rust
/// use talkview::error::Result;
/// use talkview::ChatLog;
///
/// fn my_function() -> Result<ChatLog> {
///     // ... operations that may fail
///     Ok(ChatLog::new())
/// }
/// ```
pub type Result<T> = std::result::Result<T, TalkviewError>;

/// The error type for all talkview operations.
///
/// Each variant contains context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TalkviewError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// UTF-8 decoding error.
    ///
    /// Export files must be UTF-8 encoded. Decoding happens before the
    /// parser runs; the parser itself never sees invalid bytes.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred (usually a file path)
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// JSON serialization error.
    ///
    /// This can occur when writing JSON or JSONL output.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An output format name or file extension was not recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What was being interpreted (e.g., "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl TalkviewError {
    /// Creates a UTF-8 decode error with context.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        TalkviewError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        TalkviewError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, TalkviewError::Io(_))
    }

    /// Returns `true` if this is a UTF-8 decode error.
    pub fn is_utf8(&self) -> bool {
        matches!(self, TalkviewError::Utf8 { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, TalkviewError::InvalidFormat { .. })
    }
}

impl From<std::string::FromUtf8Error> for TalkviewError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        TalkviewError::Utf8 {
            context: "input decoding".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
