//! Drivers comparing threaded and sequential execution of paired workloads.
//!
//! This package provides the workloads and the execution harness behind a set
//! of small runnable comparisons: run the same workload twice, once as two
//! concurrent worker threads and once back-to-back on the calling thread, and
//! compare the elapsed wall-clock time of the two pairings.
//!
//! The core functionality includes:
//! - [`threaded_pair`] - Runs two instances of a workload on two worker threads
//! - [`sequential_pair`] - Runs a workload twice on the calling thread
//! - [`busy_countdown`] - CPU-bound workload: a busy counter decrement loop
//! - [`idle_wait`] - I/O-bound workload: a fixed-timeout blocking wait
//!
//! This package is not meant for use in production, serving only as a
//! development tool.
//!
//! A workload that spends its time computing gains little from the second
//! thread when the machine is contended (and loses nothing when it is not),
//! while a workload that spends its time blocked overlaps almost perfectly:
//!
//! ```
//! use std::time::Duration;
//!
//! use thread_race::{idle_wait, sequential_pair, threaded_pair};
//!
//! let timeout = Duration::from_millis(50);
//!
//! // Two concurrent waits complete in roughly one timeout...
//! let threaded = threaded_pair(move || idle_wait(timeout));
//!
//! // ...while two back-to-back waits take roughly twice as long.
//! let sequential = sequential_pair(move || idle_wait(timeout));
//!
//! assert!(sequential >= timeout * 2);
//! assert!(threaded >= timeout);
//! ```

mod pair;
mod workloads;

pub use pair::*;
pub use workloads::*;
