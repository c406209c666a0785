//! Plain-text transcript renderer.
//!
//! Produces the terminal equivalent of the conversation view: date headings
//! between days, one line per message, with a `»` gutter marker on the
//! current user's messages (the right-aligned bubbles in a graphical
//! viewer) and a `*` marker on keyword matches.

use std::fs;

use crate::chatlog::ChatLog;
use crate::core::view::{SearchHit, ViewQuery};
use crate::error::Result;

/// Renders the visible days of the log as a text transcript.
///
/// # Format
/// ```text
/// ━━━ 2025-04-18 ━━━
///    07:10 sima ありがと
/// »* 2:19 Reina 通話時間 1:30:01
/// ```
///
/// Gutter columns: `»` marks messages from the query's current user, `*`
/// marks messages containing the query's keyword.
pub fn render_transcript(log: &ChatLog, query: &ViewQuery) -> String {
    let mut out = String::new();
    for day in query.visible_days(log) {
        out.push_str(&format!("━━━ {} ━━━\n", day.date()));
        for msg in day.messages() {
            let mine = if query.is_mine(msg) { '»' } else { ' ' };
            let hit = if query.highlighted(msg) { '*' } else { ' ' };
            out.push_str(&format!("{mine}{hit} {} {} {}\n", msg.time(), msg.user(), msg.text()));
        }
        out.push('\n');
    }
    out
}

/// Writes the rendered transcript to a file.
pub fn write_transcript(log: &ChatLog, query: &ViewQuery, output_path: &str) -> Result<()> {
    fs::write(output_path, render_transcript(log, query))?;
    Ok(())
}

/// Renders search hits as a results panel, one hit per line.
///
/// # Format
/// ```text
/// [2025-04-18 07:10] sima「ありがと」 (0-0)
/// ```
///
/// The trailing key is the hit's position in the visible projection, the
/// same handle a viewer uses to jump to the message.
pub fn render_search_hits(hits: &[SearchHit<'_>]) -> String {
    let mut out = String::new();
    for hit in hits {
        out.push_str(&format!(
            "[{} {}] {}「{}」 ({})\n",
            hit.date, hit.time, hit.user, hit.text, hit.key
        ));
    }
    out
}
