//! Averaged CPU-bound comparison driver.
//!
//! Repeats each pairing of the busy countdown 10 times and prints the mean
//! elapsed wall-clock seconds per pairing: `<sequential mean> <threaded mean>`.
//!
//! Run with: `cargo run --release --example cpu_bound_averaged`

#![expect(
    clippy::arithmetic_side_effects,
    reason = "this is example code that doesn't need production-level safety"
)]

use std::time::Duration;

use thread_race::{busy_countdown, sequential_pair, threaded_pair};

const COUNTDOWN_START: u64 = 10_000_000;
const REPETITIONS: u32 = 10;

fn main() {
    let mut sequential_total = Duration::ZERO;
    let mut threaded_total = Duration::ZERO;

    for _ in 0..REPETITIONS {
        sequential_total += sequential_pair(|| busy_countdown(COUNTDOWN_START));
        threaded_total += threaded_pair(|| busy_countdown(COUNTDOWN_START));
    }

    let sequential_mean = sequential_total / REPETITIONS;
    let threaded_mean = threaded_total / REPETITIONS;

    println!(
        "{} {}",
        sequential_mean.as_secs_f64(),
        threaded_mean.as_secs_f64()
    );
}
