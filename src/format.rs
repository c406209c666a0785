//! Output format types for the talkview library.
//!
//! This module provides library-first format types that don't depend on CLI
//! frameworks, plus a dispatcher that routes a log (through a view query)
//! to the matching writer.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() -> talkview::Result<()> {
//! use talkview::LogParser;
//! use talkview::core::ViewQuery;
//! use talkview::format::{OutputFormat, to_format_string};
//!
//! let log = LogParser::new().parse_str("2025.04.18\n07:10 sima ありがと\n");
//! let json = to_format_string(&log, &ViewQuery::new(), OutputFormat::Json)?;
//!
//! // Or use format detection from extension
//! let format = OutputFormat::from_path("talk.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::chatlog::ChatLog;
use crate::core::view::ViewQuery;
use crate::error::TalkviewError;

/// Output format for a parsed conversation.
///
/// - [`Text`](OutputFormat::Text) - the transcript view (default)
/// - [`Json`](OutputFormat::Json) - nested array of day groups
/// - [`Jsonl`](OutputFormat::Jsonl) - one flattened message per line
/// - [`Csv`](OutputFormat::Csv) - flattened messages, semicolon-delimited
///
/// # Example
///
/// ```rust
/// use talkview::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Human-readable transcript (default)
    #[default]
    Text,

    /// JSON array of day groups
    Json,

    /// JSON Lines - one flattened message per line
    ///
    /// Also known as NDJSON.
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "json", "jsonl", "ndjson", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Text,
            OutputFormat::Json,
            OutputFormat::Jsonl,
            OutputFormat::Csv,
        ]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
            OutputFormat::Csv => "text/csv",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use talkview::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("talk.jsonl").unwrap();
    /// assert_eq!(format, OutputFormat::Jsonl);
    /// ```
    pub fn from_path(path: &str) -> Result<Self, TalkviewError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "txt" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(TalkviewError::InvalidFormat {
                format: "output",
                message: format!(
                    "Unknown file extension: '.{}'. Expected one of: txt, json, jsonl, csv",
                    ext
                ),
            }),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes the query's visible projection of the log to a file in the
/// specified format.
///
/// The date filter of `query` decides which days are written; for the text
/// format, the current-user and keyword markers are rendered too.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    log: &ChatLog,
    query: &ViewQuery,
    path: &str,
    format: OutputFormat,
) -> Result<(), TalkviewError> {
    match format {
        OutputFormat::Text => crate::core::output::write_transcript(log, query, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(&query.visible_log(log), path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(&query.visible_log(log), path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(&query.visible_log(log), path),
        #[allow(unreachable_patterns)]
        _ => Err(feature_missing(format)),
    }
}

/// Converts the query's visible projection of the log to a string in the
/// specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    log: &ChatLog,
    query: &ViewQuery,
    format: OutputFormat,
) -> Result<String, TalkviewError> {
    match format {
        OutputFormat::Text => Ok(crate::core::output::render_transcript(log, query)),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(&query.visible_log(log)),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(&query.visible_log(log)),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(&query.visible_log(log)),
        #[allow(unreachable_patterns)]
        _ => Err(feature_missing(format)),
    }
}

#[allow(dead_code)]
fn feature_missing(format: OutputFormat) -> TalkviewError {
    TalkviewError::InvalidFormat {
        format: "output",
        message: format!(
            "Output format {:?} requires the '{}' feature to be enabled",
            format,
            match format {
                OutputFormat::Csv => "csv-output",
                _ => "json-output",
            }
        ),
    }
}
