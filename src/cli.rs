//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options for the CLI
//!
//! The CLI plays the "file source" and "renderer" roles around the library:
//! it reads and decodes the export, parses it, applies the view query built
//! from the flags, and renders or writes the result.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// View, search, and convert LINE talk-history TXT exports.
#[derive(Parser, Debug, Clone)]
#[command(name = "talkview")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    talkview talk.txt
    talkview talk.txt --keyword ありがと
    talkview talk.txt --date 2025-04 --user sima
    talkview talk.txt --format jsonl -o talk.jsonl
    talkview talk.txt --users
    talkview talk.txt --stats")]
pub struct Args {
    /// Path to the exported talk-history TXT file
    pub input: String,

    /// Show only days whose date contains this substring (e.g. 2025-04)
    #[arg(short = 'd', long, value_name = "SUBSTR")]
    pub date: Option<String>,

    /// Search keyword (literal, case-sensitive substring)
    #[arg(short = 'k', long, value_name = "WORD")]
    pub keyword: Option<String>,

    /// Name of the user whose messages count as "mine"
    /// (defaults to the first user in the file)
    #[arg(short = 'u', long, value_name = "NAME")]
    pub user: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<String>,

    /// Write keyword search hits as JSON to this file
    #[arg(long, value_name = "PATH")]
    pub hits: Option<String>,

    /// List the distinct users in the file and exit
    #[arg(long)]
    pub users: bool,

    /// Print per-line parse accounting
    #[arg(long)]
    pub stats: bool,

    /// Route messages under a repeated date heading back into the first
    /// day group with that date (for multi-part exports)
    #[arg(long)]
    pub merge_repeated_dates: bool,
}

/// Output format options.
///
/// # Example
///
/// ```rust
/// use talkview::cli::OutputFormat;
///
/// let format = OutputFormat::Jsonl;
/// println!("{}", format); // "JSONL"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable transcript (default)
    #[default]
    Text,

    /// JSON array of day groups
    Json,

    /// JSON Lines - one flattened message per line
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: text, json, jsonl, csv",
                s
            )),
        }
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Text => crate::format::OutputFormat::Text,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}
