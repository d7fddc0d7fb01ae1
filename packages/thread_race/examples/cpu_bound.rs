//! CPU-bound comparison driver.
//!
//! Busy-decrements a 10-million counter twice, once back-to-back on the main
//! thread and once as two concurrent worker threads, and prints both elapsed
//! wall-clock timings in seconds: `<sequential> <threaded>`.
//!
//! Run with: `cargo run --release --example cpu_bound`

use thread_race::{busy_countdown, sequential_pair, threaded_pair};

const COUNTDOWN_START: u64 = 10_000_000;

fn main() {
    let sequential = sequential_pair(|| busy_countdown(COUNTDOWN_START));
    let threaded = threaded_pair(|| busy_countdown(COUNTDOWN_START));

    println!("{} {}", sequential.as_secs_f64(), threaded.as_secs_f64());
}
