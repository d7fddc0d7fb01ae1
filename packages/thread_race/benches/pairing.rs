//! Benchmarks comparing the two pairings of the CPU-bound workload.
//!
//! The interesting output is the ratio between the two: on a machine with
//! idle cores the threaded pairing finishes in roughly half the sequential
//! time, minus the thread spawn and join overhead.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use thread_race::{busy_countdown, sequential_pair, threaded_pair};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairing");

    group.bench_function("sequential_pair_busy_countdown", |b| {
        b.iter(|| {
            let elapsed = sequential_pair(|| busy_countdown(black_box(100_000)));
            black_box(elapsed);
        });
    });

    group.bench_function("threaded_pair_busy_countdown", |b| {
        b.iter(|| {
            let elapsed = threaded_pair(|| busy_countdown(black_box(100_000)));
            black_box(elapsed);
        });
    });

    group.finish();
}
