//! I/O-bound comparison driver.
//!
//! Runs two concurrent 2-second idle waits on two worker threads and prints
//! the total elapsed wall-clock time in seconds. Because the waits overlap,
//! the printed value is close to one timeout, not the sum of both.
//!
//! Run with: `cargo run --release --example io_bound`

use std::time::Duration;

use thread_race::{idle_wait, threaded_pair};

const WAIT_TIMEOUT: Duration = Duration::from_secs(2);

fn main() {
    let threaded = threaded_pair(|| idle_wait(WAIT_TIMEOUT));

    println!("{}", threaded.as_secs_f64());
}
