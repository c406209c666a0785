//! Output writers for parsed logs and search results.
//!
//! This module provides writers for different output formats:
//! - [`render_transcript`] / [`write_transcript`] - the terminal conversation view (always available)
//! - [`render_search_hits`] - the search-results panel (always available)
//! - [`write_json`] / [`to_json`] - JSON array of day groups - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one flattened message per line - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - semicolon-delimited flattened messages - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> talkview::Result<()> {
//! use talkview::LogParser;
//! use talkview::core::output::{write_csv, write_json, write_jsonl};
//!
//! let log = LogParser::new().parse_str("2025.04.18\n07:10 sima ありがと\n");
//!
//! write_json(&log, "talk.json")?;
//! write_jsonl(&log, "talk.jsonl")?;
//! write_csv(&log, "talk.csv")?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, to_search_json, write_json, write_search_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
pub use text_writer::{render_search_hits, render_transcript, write_transcript};
