//! # talkview CLI
//!
//! Command-line interface for the talkview library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use talkview::TalkviewError;
use talkview::cli::Args;
use talkview::config::ParserConfig;
use talkview::core::{ViewQuery, render_search_hits, render_transcript};
use talkview::format::{OutputFormat, to_format_string, write_to_format};
use talkview::parser::LogParser;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), TalkviewError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let format: OutputFormat = args.format.into();

    // Print header
    println!("💬 talkview v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    if let Some(ref output) = args.output {
        println!("💾 Output:  {}", output);
        println!("📄 Format:  {}", format);
    }
    if let Some(ref date) = args.date {
        println!("📅 Date:    contains '{}'", date);
    }
    if let Some(ref keyword) = args.keyword {
        println!("🔍 Keyword: '{}'", keyword);
    }
    println!();

    // Step 1: Read and decode (the parser itself never touches the disk)
    let bytes = fs::read(&args.input)?;
    let text =
        String::from_utf8(bytes).map_err(|e| TalkviewError::utf8(args.input.clone(), e))?;

    // Step 2: Parse
    println!("⏳ Parsing talk history...");
    let parse_start = Instant::now();
    let parser = LogParser::with_config(
        ParserConfig::new().with_merge_repeated_dates(args.merge_repeated_dates),
    );
    let (log, stats) = parser.parse_str_with_stats(&text);
    println!(
        "   {} days, {} messages ({:.2}s)",
        log.len(),
        log.message_count(),
        parse_start.elapsed().as_secs_f64()
    );

    if args.stats {
        println!();
        println!("📊 Line accounting:");
        println!("   Total:        {} lines", stats.total_lines);
        println!("   Blank:        {}", stats.blank_lines);
        println!("   Headings:     {}", stats.day_headings);
        println!("   Messages:     {}", stats.messages);
        println!("   Orphans:      {}", stats.orphan_lines);
        println!("   Unrecognized: {}", stats.unrecognized_lines);
    }

    // --users: list and stop
    if args.users {
        println!();
        println!("👥 Users:");
        for user in log.users() {
            println!("   {}", user);
        }
        return Ok(());
    }

    // Step 3: Build the view query; "mine" defaults to the first user
    let mut query = ViewQuery::for_log(&log);
    if let Some(user) = args.user {
        query = query.with_current_user(user);
    }
    if let Some(date) = args.date {
        query = query.with_date_filter(date);
    }
    if let Some(keyword) = args.keyword {
        query = query.with_keyword(keyword);
    }
    if let Some(ref user) = query.current_user {
        println!("👤 Viewing as: {}", user);
    }

    // Step 4: Search panel
    if query.has_keyword() {
        let hits = query.search_hits(&log);
        println!();
        println!("🔎 {} matching messages:", hits.len());
        print!("{}", render_search_hits(&hits));

        #[cfg(feature = "json-output")]
        if let Some(ref hits_path) = args.hits {
            talkview::core::write_search_json(&hits, hits_path)?;
            println!("   Hits written to {}", hits_path);
        }
    }

    // Step 5: Render or write the conversation
    println!();
    match args.output {
        Some(ref path) => {
            println!("💾 Writing {}...", format);
            let write_start = Instant::now();
            write_to_format(&log, &query, path, format)?;
            println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());
            println!();
            println!("✅ Done! Output saved to {}", path);
        }
        None => {
            if format == OutputFormat::Text {
                print!("{}", render_transcript(&log, &query));
            } else {
                print!("{}", to_format_string(&log, &query, format)?);
            }
        }
    }

    println!();
    println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
