//! Day-grouped containers for parsed conversations.
//!
//! A LINE talk export is organized by date headings: every heading opens a
//! new [`Day`], and the message lines that follow belong to it. A [`ChatLog`]
//! is the ordered sequence of those days, in file order: no sorting, no
//! deduplication, no merging across headings.
//!
//! # Example
//!
//! ```
//! use talkview::LogParser;
//!
//! let log = LogParser::new().parse_str("2025.04.18 金曜日\n07:10 sima ありがと\n");
//! assert_eq!(log.len(), 1);
//! assert_eq!(log.days()[0].date(), "2025-04-18");
//! assert_eq!(log.users(), vec!["sima"]);
//! ```

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Message;

/// One day of conversation: a canonical date plus its messages in file order.
///
/// `date` is always in canonical `YYYY-MM-DD` form, with month and day
/// zero-padded to two digits regardless of which heading format produced it.
/// The canonical form is shape-guaranteed, not calendar-guaranteed: a heading
/// like `2025.13.40` canonicalizes to `2025-13-40` and simply fails
/// [`naive_date`](Day::naive_date).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// Canonical `YYYY-MM-DD` date for this group.
    pub date: String,

    /// Messages under this heading, in order of appearance.
    pub messages: Vec<Message>,
}

impl Day {
    /// Creates an empty day for the given canonical date.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            messages: Vec::new(),
        }
    }

    /// Returns the canonical date string.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the messages of this day.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns `true` if this day has no messages.
    ///
    /// Empty days are legal: a date heading followed immediately by another
    /// heading (or end of input) produces one.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Parses the canonical date into a [`NaiveDate`].
    ///
    /// Returns `None` for dates that are well-shaped but not valid calendar
    /// dates.
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// An ordered sequence of [`Day`] groups, in file order.
///
/// Two headings naming the same calendar date produce two separate entries,
/// both retained in sequence; the parser performs no merging by default
/// (see [`ParserConfig`](crate::config::ParserConfig) for the opt-in).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatLog {
    days: Vec<Day>,
}

impl ChatLog {
    /// Creates an empty chat log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a chat log from an already-ordered list of days.
    pub fn from_days(days: Vec<Day>) -> Self {
        Self { days }
    }

    /// Returns the days in file order.
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Returns the number of day groups.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if the log contains no days at all.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns the total number of messages across all days.
    pub fn message_count(&self) -> usize {
        self.days.iter().map(|d| d.messages.len()).sum()
    }

    /// Returns an iterator over the days.
    pub fn iter(&self) -> std::slice::Iter<'_, Day> {
        self.days.iter()
    }

    /// Returns the distinct user names across all messages, in order of
    /// first appearance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use talkview::LogParser;
    ///
    /// let log = LogParser::new().parse_str(
    ///     "2025.04.18\n07:10 sima ありがと\n07:11 Reina どういたしまして\n07:12 sima 😊\n",
    /// );
    /// assert_eq!(log.users(), vec!["sima", "Reina"]);
    /// ```
    pub fn users(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut users = Vec::new();
        for day in &self.days {
            for msg in &day.messages {
                if seen.insert(msg.user.as_str()) {
                    users.push(msg.user.as_str());
                }
            }
        }
        users
    }

    /// Returns the first distinct user in file order, if any.
    ///
    /// Consumers are expected to default their "current user" identity to
    /// this value when a log is freshly loaded.
    pub fn default_user(&self) -> Option<&str> {
        self.days
            .iter()
            .flat_map(|d| d.messages.first())
            .next()
            .map(|m| m.user.as_str())
    }
}

impl From<Vec<Day>> for ChatLog {
    fn from(days: Vec<Day>) -> Self {
        Self::from_days(days)
    }
}

impl<'a> IntoIterator for &'a ChatLog {
    type Item = &'a Day;
    type IntoIter = std::slice::Iter<'a, Day>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_log() -> ChatLog {
        let mut day1 = Day::new("2025-04-18");
        day1.messages.push(Message::new("07:10", "sima", "ありがと"));
        day1.messages.push(Message::new("07:12", "Reina", "うん"));
        let mut day2 = Day::new("2021-11-26");
        day2.messages
            .push(Message::new("2:19", "Reina", "通話時間 1:30:01"));
        ChatLog::from_days(vec![day1, day2])
    }

    #[test]
    fn test_len_and_message_count() {
        let log = sample_log();
        assert_eq!(log.len(), 2);
        assert!(!log.is_empty());
        assert_eq!(log.message_count(), 3);
    }

    #[test]
    fn test_users_first_appearance_order() {
        let log = sample_log();
        assert_eq!(log.users(), vec!["sima", "Reina"]);
    }

    #[test]
    fn test_default_user() {
        let log = sample_log();
        assert_eq!(log.default_user(), Some("sima"));
        assert_eq!(ChatLog::new().default_user(), None);
    }

    #[test]
    fn test_default_user_skips_empty_leading_day() {
        let empty = Day::new("2025-01-01");
        let mut day = Day::new("2025-01-02");
        day.messages.push(Message::new("9:00", "Reina", "hi"));
        let log = ChatLog::from_days(vec![empty, day]);
        assert_eq!(log.default_user(), Some("Reina"));
    }

    #[test]
    fn test_naive_date() {
        assert!(Day::new("2025-04-18").naive_date().is_some());
        assert!(Day::new("2025-13-40").naive_date().is_none());
    }

    #[test]
    fn test_serde_transparent() {
        let log = sample_log();
        let json = serde_json::to_string(&log).unwrap();
        // A ChatLog serializes as a bare array of days.
        assert!(json.starts_with('['));
        let parsed: ChatLog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, log);
    }

    #[test]
    fn test_iteration() {
        let log = sample_log();
        let dates: Vec<&str> = log.iter().map(|d| d.date()).collect();
        assert_eq!(dates, vec!["2025-04-18", "2021-11-26"]);
    }
}
