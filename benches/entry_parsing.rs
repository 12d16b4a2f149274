use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use roster_view::models::RawEntry;
use roster_view::parsers::{parse_entries, to_minutes};

/// Generate a roster mixing both entry shapes and a few unreadable entries
fn generate_entries(num_entries: usize) -> Vec<RawEntry> {
    (0..num_entries)
        .map(|i| match i % 5 {
            0 => RawEntry::object(format!("ESL Person {}", i), "10:30am - 6:30pm"),
            1 => RawEntry::object(format!("First Day Person {}", i), "noon"),
            2 => RawEntry::text(format!("French Person {} 9am-5pm", i)),
            3 => RawEntry::text(format!("Natasha{} 11 am - 7 pm", i)),
            _ => RawEntry::Unrecognized,
        })
        .collect()
}

fn bench_entry_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("entry_parsing");

    for size in [100, 1_000, 10_000].iter() {
        let entries = generate_entries(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("parse_entries", size), size, |b, _| {
            b.iter(|| parse_entries(black_box(&entries)));
        });
    }

    group.finish();
}

fn bench_time_normalizer(c: &mut Criterion) {
    let tokens = ["9am", "10:30am", "12:00pm", "7.15 PM", "noon", ""];

    c.bench_function("to_minutes", |b| {
        b.iter(|| tokens.iter().map(|t| to_minutes(black_box(t))).sum::<u32>());
    });
}

criterion_group!(benches, bench_entry_parsing, bench_time_normalizer);
criterion_main!(benches);
