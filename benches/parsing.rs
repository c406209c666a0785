//! Benchmarks for talkview parsing and projection operations.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- parse`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use talkview::LogParser;
use talkview::core::view::ViewQuery;

// =============================================================================
// Test Data Generators
// =============================================================================

const USERS: &[&str] = &["sima", "Reina", "村上", "Alice"];
const PHRASES: &[&str] = &[
    "ありがと",
    "おはよう〜",
    "了解です",
    "通話時間 1:30:01",
    "This one has   extra   spaces",
    "😂😂😂",
];

/// Deterministic synthetic export alternating both heading shapes.
fn generate_export(days: usize, per_day: usize) -> String {
    let mut out = String::new();
    for d in 0..days {
        let year = 2021 + d / 365;
        let month = 1 + (d / 28) % 12;
        let day = 1 + d % 28;
        if d % 2 == 0 {
            out.push_str(&format!("{year}.{month:02}.{day:02} 金曜日\n"));
        } else {
            out.push_str(&format!("{year}/{month}/{day}(金)\n"));
        }
        for m in 0..per_day {
            let hour = (7 + m / 10) % 24;
            let minute = m % 60;
            let user = USERS[m % USERS.len()];
            let phrase = PHRASES[m % PHRASES.len()];
            out.push_str(&format!("{hour}:{minute:02} {user} {phrase}\n"));
        }
        out.push('\n');
    }
    out
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let parser = LogParser::new();

    for (days, per_day) in [(10_usize, 10_usize), (100, 50), (365, 100)] {
        let text = generate_export(days, per_day);
        let messages = days * per_day;
        group.throughput(Throughput::Elements(messages as u64));
        group.bench_with_input(BenchmarkId::from_parameter(messages), &text, |b, text| {
            b.iter(|| {
                let log = parser.parse_str(black_box(text));
                assert_eq!(log.message_count(), messages);
                log
            });
        });
    }

    group.finish();
}

fn bench_parsing_with_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_noisy");
    let parser = LogParser::new();

    // Interleave unrecognized lines to exercise the skip path.
    let clean = generate_export(100, 50);
    let noisy: String = clean
        .lines()
        .flat_map(|l| [l, "☎ 通話に応答がありませんでした"])
        .collect::<Vec<_>>()
        .join("\n");

    group.throughput(Throughput::Bytes(noisy.len() as u64));
    group.bench_function("interleaved_noise", |b| {
        b.iter(|| parser.parse_str(black_box(&noisy)));
    });

    group.finish();
}

// =============================================================================
// Projection Benchmarks
// =============================================================================

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");
    let parser = LogParser::new();
    let log = parser.parse_str(&generate_export(365, 100));

    group.bench_function("visible_days_filtered", |b| {
        let query = ViewQuery::new().with_date_filter("2021-0");
        b.iter(|| query.visible_days(black_box(&log)));
    });

    group.bench_function("search_hits", |b| {
        let query = ViewQuery::new().with_keyword("通話");
        b.iter(|| query.search_hits(black_box(&log)));
    });

    group.bench_function("users", |b| {
        b.iter(|| black_box(&log).users());
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_parsing_with_noise, bench_projection);
criterion_main!(benches);
