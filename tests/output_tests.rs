//! Tests for the output writers across all formats.

#![cfg(all(feature = "json-output", feature = "csv-output"))]

use std::fs;

use talkview::core::view::ViewQuery;
use talkview::prelude::*;
use tempfile::tempdir;

const EXPORT: &str = "2025.04.18 金曜日
07:10 sima ありがと
07:12 Reina うん、また明日
2021/11/26(金)
2:19 Reina 通話時間 1:30:01
";

fn sample_log() -> ChatLog {
    LogParser::new().parse_str(EXPORT)
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_json_is_nested_by_day() {
    let json = to_json(&sample_log()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let days = value.as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["date"], "2025-04-18");
    assert_eq!(days[0]["messages"].as_array().unwrap().len(), 2);
    assert_eq!(days[1]["messages"][0]["time"], "2:19");
}

#[test]
fn test_json_file_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("talk.json");
    let path = path.to_str().unwrap();

    let log = sample_log();
    write_json(&log, path).unwrap();

    let parsed: ChatLog = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(parsed, log);
}

#[test]
fn test_search_json_keys_and_fields() {
    let log = sample_log();
    let hits = ViewQuery::new().with_keyword("また").search_hits(&log);
    let json = to_search_json(&hits).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let arr = value.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["key"], "0-1");
    assert_eq!(arr[0]["date"], "2025-04-18");
    assert_eq!(arr[0]["user"], "Reina");
}

// ============================================================================
// JSONL
// ============================================================================

#[test]
fn test_jsonl_flattens_days() {
    let jsonl = to_jsonl(&sample_log()).unwrap();
    let lines: Vec<&str> = jsonl.lines().collect();
    assert_eq!(lines.len(), 3);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["date"], "2025-04-18");
    assert_eq!(first["user"], "sima");

    let last: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
    assert_eq!(last["date"], "2021-11-26");
    assert_eq!(last["text"], "通話時間 1:30:01");
}

#[test]
fn test_jsonl_file_matches_string() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("talk.jsonl");
    let path = path.to_str().unwrap();

    let log = sample_log();
    write_jsonl(&log, path).unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), to_jsonl(&log).unwrap());
}

// ============================================================================
// CSV
// ============================================================================

#[test]
fn test_csv_header_and_rows() {
    let csv_out = to_csv(&sample_log()).unwrap();
    let mut lines = csv_out.lines();
    assert_eq!(lines.next(), Some("Date;Time;User;Text"));
    assert_eq!(lines.next(), Some("2025-04-18;07:10;sima;ありがと"));
    assert_eq!(csv_out.lines().count(), 4);
}

#[test]
fn test_csv_quotes_delimiter_in_text() {
    let log = LogParser::new().parse_str("2025.04.18\n07:10 sima semi;colons;here\n");
    let csv_out = to_csv(&log).unwrap();
    assert!(csv_out.contains("\"semi;colons;here\""));
}

#[test]
fn test_csv_file_write() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("talk.csv");
    let path = path.to_str().unwrap();

    write_csv(&sample_log(), path).unwrap();
    let content = fs::read_to_string(path).unwrap();
    assert!(content.starts_with("Date;Time;User;Text"));
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn test_transcript_full_shape() {
    let log = sample_log();
    let query = ViewQuery::for_log(&log).with_keyword("がと");
    let text = render_transcript(&log, &query);

    let expected = "\
━━━ 2025-04-18 ━━━
»* 07:10 sima ありがと
   07:12 Reina うん、また明日

━━━ 2021-11-26 ━━━
   2:19 Reina 通話時間 1:30:01

";
    assert_eq!(text, expected);
}

#[test]
fn test_search_panel_lines() {
    let log = sample_log();
    let hits = ViewQuery::new().with_keyword("Reina-nope").search_hits(&log);
    assert_eq!(render_search_hits(&hits), "");

    let hits = ViewQuery::new().with_keyword("通話").search_hits(&log);
    assert_eq!(
        render_search_hits(&hits),
        "[2021-11-26 2:19] Reina「通話時間 1:30:01」 (1-0)\n"
    );
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_to_format_string_all_formats() {
    let log = sample_log();
    let query = ViewQuery::new();
    for format in OutputFormat::all() {
        let out = to_format_string(&log, &query, *format).unwrap();
        assert!(out.contains("sima"), "{format} output missing sender");
        assert!(out.contains("2025-04-18"), "{format} output missing date");
    }
}

#[test]
fn test_write_to_format_respects_query() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("filtered.csv");
    let path = path.to_str().unwrap();

    let log = sample_log();
    let query = ViewQuery::new().with_date_filter("2021");
    write_to_format(&log, &query, path, OutputFormat::Csv).unwrap();

    let content = fs::read_to_string(path).unwrap();
    assert!(content.contains("2021-11-26"));
    assert!(!content.contains("2025-04-18"));
}
