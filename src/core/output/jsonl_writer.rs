//! JSONL (JSON Lines) output writer.
//!
//! Flattens the day grouping: each line is one message object carrying its
//! day's date, which suits line-oriented tooling better than nested arrays.

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::chatlog::ChatLog;
use crate::error::Result;

/// One message flattened with its day's date for line-oriented output.
#[derive(Serialize)]
struct FlatMessage<'a> {
    date: &'a str,
    time: &'a str,
    user: &'a str,
    text: &'a str,
}

/// Writes the log to a JSONL file, one flattened message per line.
///
/// # Format
/// ```json
/// {"date":"2025-04-18","time":"07:10","user":"sima","text":"ありがと"}
/// {"date":"2021-11-26","time":"2:19","user":"Reina","text":"通話時間 1:30:01"}
/// ```
pub fn write_jsonl(log: &ChatLog, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for day in log {
        for msg in day.messages() {
            let flat = FlatMessage {
                date: day.date(),
                time: msg.time(),
                user: msg.user(),
                text: msg.text(),
            };
            serde_json::to_writer(&mut writer, &flat)?;
            writer.write_all(b"\n")?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Converts the log to a JSONL string, one flattened message per line.
///
/// Same format as [`write_jsonl`], but returns a String instead of writing
/// to a file.
pub fn to_jsonl(log: &ChatLog) -> Result<String> {
    let mut out = String::new();
    for day in log {
        for msg in day.messages() {
            let flat = FlatMessage {
                date: day.date(),
                time: msg.time(),
                user: msg.user(),
                text: msg.text(),
            };
            out.push_str(&serde_json::to_string(&flat)?);
            out.push('\n');
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogParser;
    use std::io::Read;
    use tempfile::NamedTempFile;

    fn sample_log() -> ChatLog {
        LogParser::new().parse_str(
            "2025.04.18\n07:10 sima ありがと\n07:12 Reina うん\n2021/11/26(金)\n2:19 Reina 通話時間 1:30:01\n",
        )
    }

    #[test]
    fn test_to_jsonl_one_line_per_message() {
        let jsonl = to_jsonl(&sample_log()).unwrap();
        let lines: Vec<&str> = jsonl.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains(r#""date":"2025-04-18""#));
        assert!(lines[2].contains(r#""user":"Reina""#));
        // Each line is standalone JSON.
        for line in lines {
            serde_json::from_str::<serde_json::Value>(line).unwrap();
        }
    }

    #[test]
    fn test_write_jsonl() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_jsonl(&sample_log(), path).unwrap();

        let mut content = String::new();
        std::fs::File::open(path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_empty_log_is_empty_output() {
        assert!(to_jsonl(&ChatLog::new()).unwrap().is_empty());
    }
}
