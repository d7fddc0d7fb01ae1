//! Basic usage of `wall_time`: one-shot measurement plus session statistics.
//!
//! Run with: `cargo run --example wall_time_basic`

#![expect(
    clippy::arithmetic_side_effects,
    reason = "this is example code that doesn't need production-level safety"
)]

use std::hint::black_box;

use wall_time::{Session, measure};

fn main() {
    // One-shot: time a single call and keep its result.
    let (sum, elapsed) = measure(|| (0..1_000_000_u64).sum::<u64>());
    println!("summed to {sum} in {elapsed:?}");

    // Session: accumulate repeated measurements and report the mean.
    let session = Session::new();

    for _ in 0..10 {
        let operation = session.operation("string_reversal");
        let _span = operation.measure();

        let text = "the quick brown fox jumps over the lazy dog".repeat(100);
        let reversed = text.chars().rev().collect::<String>();
        black_box(reversed);
    }

    {
        let operation = session.operation("batched_multiplication");
        let _span = operation.iterations(10_000).measure();
        for i in 0..10_000_u64 {
            black_box(i * 31);
        }
    }

    session.print_to_stdout();
}
