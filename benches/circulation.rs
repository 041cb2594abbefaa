// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 The library-catalog-rs authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Benchmarks for the circulation engine.
//!
//! Run with: cargo bench
//!
//! Benchmarks include:
//! - Single-threaded checkout/return cycles
//! - Title and author lookup scaling with catalog size
//! - Multi-threaded circulation under contention

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use library_catalog_rs::{Book, BookCategory, Library, User};
use rayon::prelude::*;
use std::sync::Arc;

fn make_book(title: &str) -> Book {
    Book::new(title, "Bench Author", BookCategory::Fiction)
}

/// Library with `books` titles and `users` members.
fn seeded_library(books: usize, users: usize) -> Library {
    let library = Library::new();
    for i in 0..books {
        library.add_book(make_book(&format!("Book {i}")));
    }
    for i in 0..users {
        library.register_user(User::new(format!("user{i}"), "Bench Member"));
    }
    library
}

// =============================================================================
// Single-Threaded Benchmarks
// =============================================================================

fn bench_checkout_return_cycle(c: &mut Criterion) {
    c.bench_function("checkout_return_cycle", |b| {
        let library = seeded_library(1, 1);
        b.iter(|| {
            library.checkout(black_box("Book 0"), "user0").unwrap();
            library.return_book(black_box("Book 0"), "user0").unwrap();
        })
    });
}

fn bench_add_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_throughput");

    for count in [100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter(|| {
                let library = Library::new();
                for i in 0..count {
                    library.add_book(make_book(&format!("Book {i}")));
                }
                black_box(&library);
            })
        });
    }
    group.finish();
}

fn bench_title_lookup_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("title_lookup");

    // Lookup cost grows with catalog size; probe the last title (worst case).
    for size in [100, 1_000, 10_000].iter() {
        let library = seeded_library(*size, 0);
        let last = format!("Book {}", size - 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(library.find_book(&last)))
        });
    }
    group.finish();
}

fn bench_author_lookup_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("author_lookup");

    for size in [100, 1_000, 10_000].iter() {
        let library = seeded_library(*size, 0);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(library.books_by_author("Bench Author")))
        });
    }
    group.finish();
}

// =============================================================================
// Multi-Threaded Benchmarks
// =============================================================================

fn bench_parallel_distinct_titles(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_distinct_titles");

    for count in [100, 1_000].iter() {
        group.throughput(Throughput::Elements(*count as u64 * 2));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter(|| {
                let library = Arc::new(seeded_library(count, count));

                (0..count).into_par_iter().for_each(|i| {
                    let title = format!("Book {i}");
                    let username = format!("user{i}");
                    library.checkout(&title, &username).unwrap();
                    library.return_book(&title, &username).unwrap();
                });

                black_box(&library);
            })
        });
    }
    group.finish();
}

fn bench_contention_same_title(c: &mut Criterion) {
    let mut group = c.benchmark_group("contention_same_title");
    let attempts = 1_000u32;

    group.throughput(Throughput::Elements(attempts as u64));
    group.bench_function("single_copy", |b| {
        b.iter(|| {
            let library = Arc::new(seeded_library(1, 8));

            // All callers race for the one copy; one wins per cycle.
            (0..attempts).into_par_iter().for_each(|i| {
                let username = format!("user{}", i % 8);
                if library.checkout("Book 0", &username).is_ok() {
                    library.return_book("Book 0", &username).unwrap();
                }
            });

            black_box(&library);
        })
    });
    group.finish();
}

// =============================================================================
// Criterion Groups
// =============================================================================

criterion_group!(
    single_threaded,
    bench_checkout_return_cycle,
    bench_add_throughput,
    bench_title_lookup_scaling,
    bench_author_lookup_scaling,
);

criterion_group!(
    multi_threaded,
    bench_parallel_distinct_titles,
    bench_contention_same_title,
);

criterion_main!(single_threaded, multi_threaded);
