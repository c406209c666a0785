//! Configuration types for the parser.
//!
//! This module provides a clean configuration struct for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use talkview::config::ParserConfig;
//! use talkview::LogParser;
//!
//! let config = ParserConfig::new().with_merge_repeated_dates(true);
//! let parser = LogParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for talk-export parsing.
///
/// The defaults reproduce the export format's observed behavior exactly;
/// every knob is opt-in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Reuse an existing day group when a heading repeats a date (default: false).
    ///
    /// By default, every date heading opens a fresh [`Day`](crate::Day),
    /// even when an earlier heading named the same calendar date: the two
    /// groups are kept separate, matching the export format. Multi-part
    /// exports that repeat the heading at each file boundary can enable
    /// this to route messages back into the first group with that date.
    pub merge_repeated_dates: bool,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables merging of repeated date headings.
    #[must_use]
    pub fn with_merge_repeated_dates(mut self, merge: bool) -> Self {
        self.merge_repeated_dates = merge;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_repeated_dates_separate() {
        let config = ParserConfig::new();
        assert!(!config.merge_repeated_dates);
    }

    #[test]
    fn test_builder() {
        let config = ParserConfig::new().with_merge_repeated_dates(true);
        assert!(config.merge_repeated_dates);
    }

    #[test]
    fn test_config_serde() {
        let config = ParserConfig::new().with_merge_repeated_dates(true);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ParserConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
