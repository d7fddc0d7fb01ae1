//! Wall-clock time measurement utilities for benchmarks and performance analysis.
//!
//! This package provides utilities to measure elapsed wall-clock time during code
//! execution, enabling comparison of execution strategies (e.g. threaded versus
//! sequential) in benchmarks and performance tests.
//!
//! The core functionality includes:
//! - [`measure`] - Executes an operation and returns its result paired with the elapsed time
//! - [`Session`] - Configures wall-clock time tracking and provides access to tracking data
//! - [`Span`] - Measures the wall-clock time of a region of code
//! - [`Operation`] - Calculates mean wall-clock time per operation
//! - [`SpanBuilder`] - Builder for creating spans with explicit iteration counts
//! - [`Report`] - Thread-safe snapshot of captured statistics
//!
//! This package is not meant for use in production, serving only as a development tool.
//!
//! # One-shot measurement
//!
//! Time a single operation and keep its return value:
//!
//! ```
//! use wall_time::measure;
//!
//! let (sum, elapsed) = measure(|| 2 + 2);
//!
//! assert_eq!(sum, 4);
//! println!("computed in {elapsed:?}");
//! ```
//!
//! Arguments are forwarded by closing over them, so the wrapper stays
//! workload-agnostic:
//!
//! ```
//! use wall_time::measure;
//!
//! fn join_words(words: &[&str], separator: &str) -> String {
//!     words.join(separator)
//! }
//!
//! let words = ["alpha", "beta"];
//! let (joined, _elapsed) = measure(|| join_words(&words, ", "));
//! assert_eq!(joined, "alpha, beta");
//! ```
//!
//! # Tracking mean wall-clock time
//!
//! For benchmarking scenarios, where you run multiple repetitions of an operation,
//! accumulate measurements in a [`Session`]:
//!
//! ```
//! use wall_time::Session;
//!
//! let session = Session::new();
//!
//! for _ in 0..10 {
//!     let operation = session.operation("busy_work");
//!     let _span = operation.measure();
//!     // Perform the work being measured
//!     let mut sum = 0;
//!     for i in 0..1000 {
//!         sum += i;
//!     }
//!     std::hint::black_box(sum);
//! }
//!
//! // Output statistics of all operations to console.
//! session.print_to_stdout();
//! ```
//!
//! Batched measurements divide one span over many iterations, which keeps the
//! measurement overhead out of fast operations:
//!
//! ```
//! use wall_time::Session;
//!
//! let session = Session::new();
//!
//! {
//!     let operation = session.operation("fast_work");
//!     let _span = operation.iterations(1000).measure();
//!     for _ in 0..1000 {
//!         std::hint::black_box(42 * 2);
//!     }
//! }
//!
//! println!("{session}");
//! ```
//!
//! # Threading
//!
//! The measurement itself always happens on the calling thread - neither [`measure`]
//! nor a [`Span`] ever spawns concurrency. An operation that spawns and joins its own
//! threads is timed from before the spawns until after the joins complete. Sessions
//! and reports are thread-safe; [`Report`]s captured on different threads can be
//! merged with [`Report::merge`].
//!
//! # Session management
//!
//! Multiple [`Session`] instances can be used concurrently as they track wall-clock
//! time independently. Each session maintains its own set of operations and statistics.

mod measure;
mod operation;
mod operation_metrics;
mod pal;
mod report;
mod session;
mod span;
mod span_builder;

pub use measure::measure;
pub use operation::Operation;
pub use report::{Report, ReportOperation};
pub use session::Session;
pub use span::Span;
pub use span_builder::SpanBuilder;

pub(crate) use operation_metrics::OperationMetrics;

pub(crate) const ERR_POISONED_LOCK: &str = "poisoned lock - safe execution is no longer possible";
