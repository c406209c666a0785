//! Example: Using talkview as a library
//!
//! This example demonstrates how to use talkview in your own projects.
//!
//! Run with: cargo run --example library_usage

use talkview::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== talkview Library Usage Examples ===\n");

    // Example 1: Parse an export from a string
    println!("1. Parsing a talk export:");
    let export = "2025.04.18 金曜日\n\
                  07:10 sima ありがと\n\
                  07:12 Reina どういたしまして\n\
                  2021/11/26(金)\n\
                  2:19 Reina 通話時間 1:30:01\n";
    let log = LogParser::new().parse_str(export);

    for day in &log {
        println!("   {} ({} messages)", day.date(), day.messages().len());
    }

    // Example 2: Distinct users, first-appearance order
    println!("\n2. Users in the file:");
    for user in log.users() {
        println!("   {}", user);
    }
    println!("   (default viewing identity: {:?})", log.default_user());

    // Example 3: Keyword search with stable keys
    println!("\n3. Searching for 'がと':");
    let query = ViewQuery::for_log(&log).with_keyword("がと");
    for hit in query.search_hits(&log) {
        println!("   [{} {}] {}「{}」 at key {}", hit.date, hit.time, hit.user, hit.text, hit.key);
    }

    // Example 4: Date filtering
    println!("\n4. Only days containing '2021':");
    let query = ViewQuery::new().with_date_filter("2021");
    for day in query.visible_days(&log) {
        println!("   {}", day.date());
    }

    // Example 5: Rendering a transcript
    println!("\n5. Transcript with markers (viewing as Reina, keyword '通話'):");
    let query = ViewQuery::new().with_current_user("Reina").with_keyword("通話");
    print!("{}", render_transcript(&log, &query));

    // Example 6: Parse accounting
    println!("6. Line accounting for a messy export:");
    let messy = "garbage line\n07:00 orphan before-heading\n2025.04.18\n07:10 sima hi\n";
    let (_, stats) = LogParser::new().parse_str_with_stats(messy);
    println!("   headings: {}", stats.day_headings);
    println!("   messages: {}", stats.messages);
    println!("   discarded: {}", stats.discarded_lines());

    // Example 7: Serialization
    println!("\n7. JSON serialization:");
    let json = serde_json::to_string_pretty(&log)?;
    println!("{}", json);

    println!("\n=== Examples complete! ===");
    Ok(())
}
