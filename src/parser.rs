//! LINE talk-history TXT export parser.
//!
//! Exports are line-oriented: date headings open a day group, message lines
//! attach to the most recent group, and anything else (system notices,
//! sticker placeholders, corrupted lines) is skipped. Two heading shapes
//! occur in the wild:
//!
//! - Dotted: `2025.04.18 金曜日` (always zero-padded, optional weekday tail)
//! - Slashed: `2021/11/26(金)` (month/day may be 1 or 2 digits)
//!
//! Message lines look like `07:10 sima ありがと`: a clock time, a sender
//! token with no whitespace, and the rest of the line verbatim.
//!
//! Parsing is **total**: any input, however malformed, yields a (possibly
//! empty) [`ChatLog`]. Lines that match no pattern are dropped silently;
//! callers that want line accounting use
//! [`parse_str_with_stats`](LogParser::parse_str_with_stats).

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::Message;
use crate::chatlog::{ChatLog, Day};
use crate::config::ParserConfig;
use crate::error::{Result, TalkviewError};

/// Parser for LINE talk-history TXT exports.
///
/// # Example
///
/// ```rust
/// use talkview::LogParser;
///
/// let parser = LogParser::new();
/// let log = parser.parse_str("2025.04.18 金曜日\n07:10 sima ありがと\n");
/// assert_eq!(log.len(), 1);
/// ```
pub struct LogParser {
    config: ParserConfig,
    matchers: Vec<(LinePattern, Regex)>,
}

/// The three line shapes recognized in an export, in precedence order.
///
/// Precedence matters only in principle: the leading-token shapes are
/// mutually exclusive (`\d{4}\.` vs `\d{4}/` vs `\d{1,2}:`), so no line can
/// match two patterns. Each line is tested independently; first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinePattern {
    /// Dot separators, fixed 4+2+2 digits, tail ignored.
    /// Example: `2025.04.18 金曜日`
    DottedDate,
    /// Slash separators, 1-2 digit month/day, tail ignored.
    /// Example: `2021/11/26(金)`
    SlashedDate,
    /// Time, sender token, verbatim remainder.
    /// Example: `07:10 sima ありがと`
    Message,
}

impl LinePattern {
    /// Returns the regex source for this line shape.
    fn pattern(self) -> &'static str {
        match self {
            LinePattern::DottedDate => r"^(\d{4})\.(\d{2})\.(\d{2})",
            LinePattern::SlashedDate => r"^(\d{4})/(\d{1,2})/(\d{1,2})",
            LinePattern::Message => r"^(\d{1,2}:\d{2})\s+(\S+)\s+(.+)$",
        }
    }

    /// All shapes in precedence order.
    fn all() -> [LinePattern; 3] {
        [
            LinePattern::DottedDate,
            LinePattern::SlashedDate,
            LinePattern::Message,
        ]
    }
}

/// Classification result for a single trimmed line.
#[derive(Debug)]
enum ParsedLine {
    /// A date heading, already canonicalized to `YYYY-MM-DD`.
    Heading(String),
    /// A message line with its three captures.
    Message(Message),
    /// Anything else. Dropped without comment.
    Unrecognized,
}

/// Per-line accounting for one parse run.
///
/// Collected by [`LogParser::parse_str_with_stats`]. The parser itself never
/// logs or surfaces skipped lines; these counters exist for callers that
/// want diagnostics (a CLI `--stats` flag, a sanity check in tests).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Total lines seen, including blank ones.
    pub total_lines: usize,
    /// Lines that were empty after trimming.
    pub blank_lines: usize,
    /// Recognized date headings (including repeated dates).
    pub day_headings: usize,
    /// Message lines attached to a day.
    pub messages: usize,
    /// Message-shaped lines discarded because no heading had been seen yet.
    pub orphan_lines: usize,
    /// Lines matching none of the three patterns.
    pub unrecognized_lines: usize,
}

impl ParseStats {
    /// Lines that carried no data into the output.
    pub fn discarded_lines(&self) -> usize {
        self.orphan_lines + self.unrecognized_lines
    }
}

impl LogParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        let matchers = LinePattern::all()
            .into_iter()
            .map(|p| (p, Regex::new(p.pattern()).unwrap()))
            .collect();
        Self { config, matchers }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses an export file.
    ///
    /// Only the read and the UTF-8 decode can fail; once the text is in
    /// hand, parsing is infallible.
    pub fn parse(&self, path: &Path) -> Result<ChatLog> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes)
            .map_err(|e| TalkviewError::utf8(path.display().to_string(), e))?;
        Ok(self.parse_str(&text))
    }

    /// Parses export text into a day-grouped [`ChatLog`].
    ///
    /// Total over all inputs: empty strings, whitespace, and garbage all
    /// produce a well-formed (possibly empty) log.
    pub fn parse_str(&self, text: &str) -> ChatLog {
        self.parse_str_with_stats(text).0
    }

    /// Parses export text, also returning per-line accounting.
    pub fn parse_str_with_stats(&self, text: &str) -> (ChatLog, ParseStats) {
        let mut stats = ParseStats::default();
        let mut days: Vec<Day> = Vec::new();
        // Index of the day currently receiving messages. Usually the last
        // one pushed; merge_repeated_dates can point it at an earlier day.
        let mut current: Option<usize> = None;

        for raw in text.lines() {
            stats.total_lines += 1;
            let line = raw.trim();
            if line.is_empty() {
                stats.blank_lines += 1;
                continue;
            }

            match self.classify(line) {
                ParsedLine::Heading(date) => {
                    stats.day_headings += 1;
                    if self.config.merge_repeated_dates {
                        if let Some(idx) = days.iter().position(|d| d.date == date) {
                            current = Some(idx);
                            continue;
                        }
                    }
                    days.push(Day::new(date));
                    current = Some(days.len() - 1);
                }
                ParsedLine::Message(msg) => match current {
                    Some(idx) => {
                        stats.messages += 1;
                        days[idx].messages.push(msg);
                    }
                    // Message line before any heading: dropped.
                    None => stats.orphan_lines += 1,
                },
                ParsedLine::Unrecognized => stats.unrecognized_lines += 1,
            }
        }

        (ChatLog::from_days(days), stats)
    }

    /// Tests a trimmed, non-empty line against the patterns in precedence
    /// order. First match wins.
    fn classify(&self, line: &str) -> ParsedLine {
        for (pattern, regex) in &self.matchers {
            let Some(caps) = regex.captures(line) else {
                continue;
            };
            return match pattern {
                LinePattern::DottedDate => {
                    // Captures are already two-digit; join verbatim.
                    ParsedLine::Heading(format!("{}-{}-{}", &caps[1], &caps[2], &caps[3]))
                }
                LinePattern::SlashedDate => {
                    ParsedLine::Heading(format!("{}-{:0>2}-{:0>2}", &caps[1], &caps[2], &caps[3]))
                }
                LinePattern::Message => {
                    ParsedLine::Message(Message::new(&caps[1], &caps[2], &caps[3]))
                }
            };
        }
        ParsedLine::Unrecognized
    }
}

impl Default for LogParser {
    fn default() -> Self {
        Self::new()
    }
}
