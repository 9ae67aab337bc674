//! Performance benchmarks for the weekly birthday planner.
//!
//! These benchmarks measure how the planner scales with the size of the
//! address book, and the cost of a save/load cycle.

use chrono::NaiveDate;
use contact_book::{AddressBook, BookStorage, Record};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Build a book where every contact has a phone and a birthday spread over the year.
fn create_test_book(size: usize) -> AddressBook {
    (0..size)
        .map(|i| {
            let mut record = Record::new(format!("Contact{}", i)).unwrap();
            record.add_phone(format!("{:010}", i)).unwrap();
            record
                .add_birthday(format!("{:02}.{:02}.1990", i % 28 + 1, i % 12 + 1))
                .unwrap();
            record
        })
        .collect()
}

/// Benchmark the weekly query for different book sizes.
fn bench_birthdays_per_week(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
    let mut group = c.benchmark_group("birthdays_per_week");

    for size in [100, 1_000, 10_000] {
        let book = create_test_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.birthdays_per_week(black_box(today)));
        });
    }

    group.finish();
}

/// Benchmark a full save followed by a load.
fn bench_save_load(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let storage = BookStorage::new(dir.path().join("bench.json"));
    let book = create_test_book(1_000);

    c.bench_function("save_load_1000", |b| {
        b.iter(|| {
            storage.save(black_box(&book)).unwrap();
            storage.load().unwrap()
        });
    });
}

criterion_group!(benches, bench_birthdays_per_week, bench_save_load);
criterion_main!(benches);
