//! # Talkview
//!
//! A Rust library for parsing LINE talk-history TXT exports into day-grouped
//! records and projecting them as a searchable conversation view.
//!
//! ## Overview
//!
//! LINE's "export talk history" feature produces a plain-text file: date
//! headings (two shapes occur in the wild), message lines, and whatever else
//! the app felt like writing (call notices, system lines). Talkview turns
//! that into a [`ChatLog`] (an ordered sequence of [`Day`] groups, each an
//! ordered sequence of [`Message`]s) and derives the projections a viewer
//! needs: date filtering, keyword search with stable jump-to keys, and
//! mine/other classification for bubble alignment.
//!
//! Parsing is **total**: any input, however malformed, yields a (possibly
//! empty) log. Unrecognized lines are skipped, never errors. Export formats
//! vary and a viewer must always have something to render.
//!
//! ## Quick Start
//!
//! ```rust
//! use talkview::prelude::*;
//!
//! let log = LogParser::new().parse_str(
//!     "2025.04.18 金曜日\n\
//!      07:10 sima ありがと\n\
//!      2021/11/26(金)\n\
//!      2:19 Reina 通話時間 1:30:01\n",
//! );
//! assert_eq!(log.len(), 2);
//! assert_eq!(log.users(), vec!["sima", "Reina"]);
//!
//! // Search across the view, like typing into the keyword box
//! let query = ViewQuery::for_log(&log).with_keyword("がと");
//! let hits = query.search_hits(&log);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].key.to_string(), "0-0");
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — the line classifier and fold ([`LogParser`], [`ParseStats`](parser::ParseStats))
//! - [`chatlog`] — day-grouped containers ([`ChatLog`], [`Day`])
//! - [`message`] — the message record ([`Message`])
//! - [`config`] — parser configuration ([`ParserConfig`](config::ParserConfig))
//! - [`core`] — projections and writers
//!   - [`core::view`] — [`ViewQuery`](core::view::ViewQuery), [`SearchHit`](core::view::SearchHit), [`MessageKey`](core::view::MessageKey)
//!   - [`core::output`] — transcript, JSON, JSONL, CSV writers
//! - [`format`] — [`OutputFormat`](format::OutputFormat) and writer dispatch
//! - [`cli`] — CLI types (requires the `cli` feature)
//! - [`error`] — unified error types ([`TalkviewError`], [`Result`])
//! - [`prelude`] — convenient re-exports

pub mod chatlog;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;

// Re-export the main types at the crate root for convenience
pub use chatlog::{ChatLog, Day};
pub use error::{Result, TalkviewError};
pub use message::Message;
pub use parser::LogParser;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use talkview::prelude::*;
/// ```
pub mod prelude {
    // Model types
    pub use crate::chatlog::{ChatLog, Day};
    pub use crate::message::Message;

    // Error types
    pub use crate::error::{Result, TalkviewError};

    // Parser
    pub use crate::config::ParserConfig;
    pub use crate::parser::{LogParser, ParseStats};

    // View projections
    pub use crate::core::view::{MessageKey, SearchHit, ViewQuery};

    // Output (writers and string converters)
    pub use crate::core::output::{render_search_hits, render_transcript, write_transcript};
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{
        to_json, to_jsonl, to_search_json, write_json, write_jsonl, write_search_json,
    };

    // Format dispatch
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
