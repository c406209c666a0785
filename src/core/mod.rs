//! Core processing logic for talkview.
//!
//! This module contains:
//! - [`view`] - Pure projections: date filtering, keyword search, mine/other
//! - [`output`] - Format writers (text transcript, JSON, JSONL, CSV)
//!
//! # Quick Start
//!
//! ```rust
//! use talkview::LogParser;
//! use talkview::core::{ViewQuery, render_transcript};
//!
//! let log = LogParser::new().parse_str("2025.04.18\n07:10 sima ありがと\n");
//! let query = ViewQuery::for_log(&log).with_keyword("がと");
//! let transcript = render_transcript(&log, &query);
//! ```

pub mod output;
pub mod view;

// Re-export main types for convenience
pub use view::{MessageKey, SearchHit, ViewQuery};

// Re-export the model types from the crate root
pub use crate::chatlog::{ChatLog, Day};
pub use crate::message::Message;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, to_search_json, write_json, write_jsonl, write_search_json};

pub use output::{render_search_hits, render_transcript, write_transcript};
