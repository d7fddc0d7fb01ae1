//! Demonstrating thread-safe `Report` merging with `wall_time`.
//!
//! This example shows how to use `Report` to combine wall-clock measurements
//! from multiple threads, including both same-operation merging and
//! different-operation merging.
//!
//! This is not a requirement of using multiple threads but may be a useful
//! feature in cases where multiple independent sessions need to be merged.
//! The multithreading is just a simple example case.
//!
//! Run with: `cargo run --example wall_time_report_merging`

#![expect(
    clippy::arithmetic_side_effects,
    reason = "this is example code that doesn't need production-level safety"
)]

use std::hint::black_box;
use std::thread;

use wall_time::{Report, Session};

fn main() {
    // Create two worker threads that each do their own measurements
    let handle1 = thread::spawn(|| worker_thread("Thread-1"));
    let handle2 = thread::spawn(|| worker_thread("Thread-2"));

    // Wait for both threads and collect their reports
    let report1 = handle1
        .join()
        .expect("Thread-1 should complete successfully");
    let report2 = handle2
        .join()
        .expect("Thread-2 should complete successfully");

    println!("Report from Thread-1:");
    report1.print_to_stdout();
    println!();

    println!("Report from Thread-2:");
    report2.print_to_stdout();
    println!();

    // Merge the reports to show combined statistics:
    // 'common_work' operations are merged (both threads recorded this),
    // 'unique_work' operations appear separately.
    let merged_report = Report::merge(&report1, &report2);
    println!("=== Merged Report ===");
    merged_report.print_to_stdout();
}

/// Simulates work done by a worker thread and returns a report.
fn worker_thread(thread_name: &str) -> Report {
    let session = Session::new();

    // Each thread does some "common work" that will be merged.
    {
        let common_op = session.operation("common_work");
        let iterations = 10;
        let _span = common_op.iterations(iterations).measure();

        for i in 0..iterations {
            let mut text = String::new();
            for j in 0..1000 {
                text.push_str(&format!("{thread_name} iteration {i}-{j} "));
            }

            let mut sum = 0_u64;
            for byte in text.bytes() {
                sum += u64::from(byte);
            }
            black_box(sum);
        }
    }

    // Each thread also does some unique work specific to its thread.
    let unique_work_name = format!("unique_work_{thread_name}");
    {
        let unique_op = session.operation(&unique_work_name);
        let _span = unique_op.measure();

        let mut accumulator = 0_u64;
        for i in 0..500_000_u64 {
            accumulator = accumulator.wrapping_mul(1_103_515_245).wrapping_add(i);
        }
        black_box(accumulator);
    }

    // Convert session to thread-safe report
    session.to_report()
}
