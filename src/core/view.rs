//! Pure view projections over a parsed [`ChatLog`].
//!
//! This module derives everything a conversation renderer needs from three
//! inputs: a date substring filter, a search keyword, and the identity of
//! the "current" user. Nothing here mutates the log; every projection is
//! recomputed from scratch when its inputs change.
//!
//! # Projections
//!
//! | Projection | Method | Description |
//! |-----------|--------|-------------|
//! | Visible days | [`visible_days`](ViewQuery::visible_days) | Days whose date contains the filter |
//! | Search hits | [`search_hits`](ViewQuery::search_hits) | Keyword matches with stable jump keys |
//! | Highlight | [`highlighted`](ViewQuery::highlighted) | Inline marker for matching messages |
//! | Mine/other | [`is_mine`](ViewQuery::is_mine) | Drives left/right alignment |
//!
//! # Example
//!
//! ```
//! use talkview::LogParser;
//! use talkview::core::view::ViewQuery;
//!
//! let log = LogParser::new().parse_str(
//!     "2025.04.18\n07:10 sima ありがと\n2021/11/26(金)\n2:19 Reina 通話時間 1:30:01\n",
//! );
//!
//! let query = ViewQuery::new().with_keyword("がと");
//! let hits = query.search_hits(&log);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].user, "sima");
//! assert_eq!(hits[0].key.to_string(), "0-0");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, de, ser};

use crate::Message;
use crate::chatlog::{ChatLog, Day};

/// The filter and identity state driving all view projections.
///
/// All three fields are optional; an unset (or empty-string) field
/// deactivates its projection: no date filter shows every day, no keyword
/// disables search entirely, no current user marks nothing as "mine".
///
/// # Example
///
/// ```
/// use talkview::core::view::ViewQuery;
///
/// let query = ViewQuery::new()
///     .with_date_filter("2025-04")
///     .with_keyword("ありがと")
///     .with_current_user("sima");
/// assert!(query.is_active());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewQuery {
    /// Show only days whose canonical date contains this substring.
    pub date_filter: Option<String>,

    /// Literal, case-sensitive search keyword. Empty means search is off.
    pub keyword: Option<String>,

    /// Exact user name whose messages count as "mine".
    pub current_user: Option<String>,
}

impl ViewQuery {
    /// Creates an empty query: all days visible, search off, nothing "mine".
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query whose current user defaults to the log's first
    /// distinct user, the way a viewer initializes after loading a file.
    pub fn for_log(log: &ChatLog) -> Self {
        Self {
            current_user: log.default_user().map(String::from),
            ..Self::default()
        }
    }

    /// Sets the date substring filter.
    #[must_use]
    pub fn with_date_filter(mut self, filter: impl Into<String>) -> Self {
        self.date_filter = Some(filter.into());
        self
    }

    /// Sets the search keyword.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Sets the current-user identity.
    #[must_use]
    pub fn with_current_user(mut self, user: impl Into<String>) -> Self {
        self.current_user = Some(user.into());
        self
    }

    /// Returns `true` if a non-empty date filter is set.
    pub fn has_date_filter(&self) -> bool {
        self.date_filter.as_deref().is_some_and(|f| !f.is_empty())
    }

    /// Returns `true` if a non-empty keyword is set.
    pub fn has_keyword(&self) -> bool {
        self.keyword.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Returns `true` if any projection-affecting field is set.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.has_keyword() || self.current_user.is_some()
    }

    /// Returns the days whose date contains the filter substring, in order.
    ///
    /// An unset or empty filter keeps every day.
    pub fn visible_days<'a>(&self, log: &'a ChatLog) -> Vec<&'a Day> {
        match self.date_filter.as_deref().filter(|f| !f.is_empty()) {
            None => log.iter().collect(),
            Some(filter) => log.iter().filter(|d| d.date.contains(filter)).collect(),
        }
    }

    /// Clones the visible days into an owned log.
    ///
    /// Useful when handing a filtered view to an output writer.
    pub fn visible_log(&self, log: &ChatLog) -> ChatLog {
        ChatLog::from_days(self.visible_days(log).into_iter().cloned().collect())
    }

    /// Returns keyword matches across the visible days, in order.
    ///
    /// Matching is a literal, case-sensitive substring test on the message
    /// text. An unset or empty keyword yields an empty result (search is
    /// inactive, not "match everything"). Keys index into the *visible*
    /// projection, matching what a renderer laid out.
    pub fn search_hits<'a>(&self, log: &'a ChatLog) -> Vec<SearchHit<'a>> {
        let Some(keyword) = self.keyword.as_deref().filter(|k| !k.is_empty()) else {
            return Vec::new();
        };

        let mut hits = Vec::new();
        for (i, day) in self.visible_days(log).iter().enumerate() {
            for (j, msg) in day.messages.iter().enumerate() {
                if msg.text.contains(keyword) {
                    hits.push(SearchHit {
                        date: &day.date,
                        time: &msg.time,
                        user: &msg.user,
                        text: &msg.text,
                        key: MessageKey { day: i, message: j },
                    });
                }
            }
        }
        hits
    }

    /// Returns `true` if the keyword is active and occurs in the message.
    pub fn highlighted(&self, message: &Message) -> bool {
        self.keyword
            .as_deref()
            .filter(|k| !k.is_empty())
            .is_some_and(|k| message.text.contains(k))
    }

    /// Returns `true` if the message was sent by the current user.
    ///
    /// Exact string equality; no user set means nothing is "mine".
    pub fn is_mine(&self, message: &Message) -> bool {
        self.current_user
            .as_deref()
            .is_some_and(|u| message.user == u)
    }
}

/// Position of a message within the visible projection.
///
/// Renderers use this as the stable "jump to message" handle: day index
/// within the visible days, message index within that day. Displays and
/// serializes as `"{day}-{message}"`.
///
/// # Example
///
/// ```
/// use talkview::core::view::MessageKey;
///
/// let key: MessageKey = "3-7".parse().unwrap();
/// assert_eq!(key, MessageKey { day: 3, message: 7 });
/// assert_eq!(key.to_string(), "3-7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageKey {
    /// Index of the day within the visible projection.
    pub day: usize,
    /// Index of the message within its day.
    pub message: usize,
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.message)
    }
}

impl FromStr for MessageKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || format!("Invalid message key: '{s}'. Expected 'DAY-MESSAGE'");
        let (day, message) = s.split_once('-').ok_or_else(err)?;
        Ok(MessageKey {
            day: day.parse().map_err(|_| err())?,
            message: message.parse().map_err(|_| err())?,
        })
    }
}

impl Serialize for MessageKey {
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MessageKey {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// One keyword match, ready for the search-results panel.
///
/// Borrows from the log it was derived from; the `key` points back at the
/// message's position in the visible projection for jump navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchHit<'a> {
    /// Canonical date of the containing day.
    pub date: &'a str,
    /// Time token of the matching message.
    pub time: &'a str,
    /// Sender of the matching message.
    pub user: &'a str,
    /// Full text of the matching message.
    pub text: &'a str,
    /// Stable position key within the visible projection.
    pub key: MessageKey,
}
