//! The message type produced by the line parser.
//!
//! A [`Message`] is one line of conversation from a LINE talk-history export:
//! a clock time, a sender, and the message body. Messages are immutable once
//! parsed and always live inside a [`Day`](crate::Day); the parser never
//! emits a message without a surrounding date heading.
//!
//! # Examples
//!
//! ```
//! use talkview::Message;
//!
//! let msg = Message::new("07:10", "sima", "ありがと");
//! assert_eq!(msg.user(), "sima");
//! assert_eq!(msg.text(), "ありがと");
//! ```
//!
//! ## Serialization
//!
//! ```
//! use talkview::Message;
//!
//! let msg = Message::new("07:10", "sima", "ありがと");
//! let json = serde_json::to_string(&msg)?;
//! let parsed: Message = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A single chat message as it appeared in the export.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `time` | `String` | Clock time token, `H:MM` or `HH:MM`, kept as captured |
/// | `user` | `String` | Display name of the sender (contains no whitespace) |
/// | `text` | `String` | Remainder of the line, verbatim |
///
/// The `time` token is shape-checked by the parser but not range-checked, and
/// is never re-padded: `2:19` in the export stays `2:19` here. `text` may
/// contain anything, including further whitespace, digits, and colons; a
/// call-duration notice like `通話時間 1:30:01` is ordinary message text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Clock time token as captured from the line.
    pub time: String,

    /// Display name of the sender.
    pub user: String,

    /// Text content of the message, verbatim.
    pub text: String,
}

impl Message {
    /// Creates a new message from its three parts.
    ///
    /// # Example
    ///
    /// ```rust
    /// use talkview::Message;
    ///
    /// let msg = Message::new("2:19", "Reina", "通話時間 1:30:01");
    /// assert_eq!(msg.time(), "2:19");
    /// ```
    pub fn new(time: impl Into<String>, user: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            user: user.into(),
            text: text.into(),
        }
    }

    /// Returns the time token.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the sender name.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parses the time token into a [`NaiveTime`].
    ///
    /// Returns `None` when the captured token is not a valid 24-hour clock
    /// time (the parser only checks its shape, so `25:99` can reach here).
    ///
    /// # Example
    ///
    /// ```rust
    /// use talkview::Message;
    ///
    /// let msg = Message::new("7:10", "sima", "おはよう");
    /// assert!(msg.naive_time().is_some());
    ///
    /// let bad = Message::new("25:99", "sima", "?");
    /// assert!(bad.naive_time().is_none());
    /// ```
    pub fn naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.time, "%H:%M").ok()
    }

    /// Returns `true` if this message's text is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_new() {
        let msg = Message::new("07:10", "sima", "ありがと");
        assert_eq!(msg.time(), "07:10");
        assert_eq!(msg.user(), "sima");
        assert_eq!(msg.text(), "ありがと");
    }

    #[test]
    fn test_naive_time_padded_and_unpadded() {
        assert!(Message::new("07:10", "a", "x").naive_time().is_some());
        assert!(Message::new("2:19", "a", "x").naive_time().is_some());
        assert!(Message::new("25:99", "a", "x").naive_time().is_none());
    }

    #[test]
    fn test_message_is_empty() {
        assert!(Message::new("07:10", "sima", "").is_empty());
        assert!(Message::new("07:10", "sima", "   ").is_empty());
        assert!(!Message::new("07:10", "sima", "hi").is_empty());
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::new("2:19", "Reina", "通話時間 1:30:01");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("Reina"));
        assert!(json.contains("通話時間 1:30:01"));
    }

    #[test]
    fn test_message_deserialization() {
        let json = r#"{"time":"07:10","user":"sima","text":"ありがと"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.time(), "07:10");
        assert_eq!(msg.user(), "sima");
        assert_eq!(msg.text(), "ありがと");
    }
}
