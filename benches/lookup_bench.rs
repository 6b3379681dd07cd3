// Benchmark for cell-to-entry lookups
// Compares the start-sorted index against a front-to-back scan

use std::collections::HashMap;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use column_week_view::{EntryCategory, EntryDefinition, EventStore, ScheduledEntry, TimeRange};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 6)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Non-overlapping one-hour entries, alternating categories.
fn build_store(count: usize) -> EventStore {
    let mut defs = HashMap::new();
    defs.insert("p".to_string(), EntryDefinition::new(EntryCategory::Primary));
    defs.insert("s".to_string(), EntryDefinition::new(EntryCategory::Secondary));

    let entries = (0..count).map(|i| {
        let start = base() + Duration::minutes(90 * i as i64);
        let def = if i % 2 == 0 { "p" } else { "s" };
        ScheduledEntry::new(
            format!("e{}", i),
            def,
            TimeRange::new(start, start + Duration::hours(1)),
        )
    });
    EventStore::new(defs, entries)
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("cell_lookup");

    for count in [10, 100, 1000].iter() {
        let store = build_store(*count);
        // Probe near the end so the scan has to walk most of the store
        let probe = base() + Duration::minutes(90 * (*count as i64 - 2) + 30);

        group.bench_with_input(BenchmarkId::new("index", count), &probe, |b, &probe| {
            b.iter(|| store.find_at(black_box(EntryCategory::Primary), black_box(probe)));
        });
        group.bench_with_input(BenchmarkId::new("scan", count), &probe, |b, &probe| {
            b.iter(|| store.scan_at(black_box(EntryCategory::Primary), black_box(probe)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
