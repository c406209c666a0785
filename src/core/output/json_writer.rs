//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::chatlog::ChatLog;
use crate::core::view::SearchHit;
use crate::error::Result;

/// Writes the log to a JSON file as an array of day groups.
///
/// # Format
/// ```json
/// [
///   {"date": "2025-04-18", "messages": [{"time": "07:10", "user": "sima", "text": "ありがと"}]}
/// ]
/// ```
pub fn write_json(log: &ChatLog, output_path: &str) -> Result<()> {
    let json = to_json(log)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the log to a pretty-printed JSON string.
///
/// Same format as [`write_json`], but returns a String instead of writing
/// to a file.
pub fn to_json(log: &ChatLog) -> Result<String> {
    Ok(serde_json::to_string_pretty(log)?)
}

/// Writes search hits to a JSON file as an array.
pub fn write_search_json(hits: &[SearchHit<'_>], output_path: &str) -> Result<()> {
    let json = to_search_json(hits)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts search hits to a pretty-printed JSON string.
///
/// Each hit carries its day date and its `"day-message"` position key, so a
/// consumer can jump back to the message it names.
pub fn to_search_json(hits: &[SearchHit<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(hits)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogParser;
    use crate::core::view::ViewQuery;
    use std::io::Read;
    use tempfile::NamedTempFile;

    fn sample_log() -> ChatLog {
        LogParser::new().parse_str("2025.04.18\n07:10 sima ありがと\n2021/11/26(金)\n2:19 Reina 通話時間 1:30:01\n")
    }

    #[test]
    fn test_to_json_structure() {
        let json = to_json(&sample_log()).unwrap();
        assert!(json.trim_start().starts_with('['));
        assert!(json.contains(r#""date": "2025-04-18""#));
        assert!(json.contains(r#""user": "sima""#));
        assert!(json.contains(r#""text": "通話時間 1:30:01""#));
    }

    #[test]
    fn test_write_json() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_json(&sample_log(), path).unwrap();

        let mut content = String::new();
        std::fs::File::open(path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert!(content.contains(r#""date": "2021-11-26""#));
    }

    #[test]
    fn test_search_json_carries_keys() {
        let log = sample_log();
        let hits = ViewQuery::new().with_keyword("通話").search_hits(&log);
        let json = to_search_json(&hits).unwrap();
        assert!(json.contains(r#""key": "1-0""#));
        assert!(json.contains(r#""user": "Reina""#));
    }

    #[test]
    fn test_empty_log_is_empty_array() {
        let json = to_json(&ChatLog::new()).unwrap();
        assert_eq!(json.trim(), "[]");
    }
}
