//! Span builder for wall-clock time measurement.

use crate::{Operation, Span};

/// Builder for creating wall-clock measurement spans with explicit iteration
/// counts.
///
/// Requiring an explicit iteration count keeps the per-iteration cost honest
/// when one span covers a whole batch of fast operations.
///
/// # Examples
///
/// ```
/// use wall_time::Session;
///
/// let session = Session::new();
/// let operation = session.operation("batch_work");
///
/// {
///     let _span = operation.iterations(1000).measure();
///     for _ in 0..1000 {
///         // Perform the same operation 1000 times
///         std::hint::black_box(42 * 2);
///     }
/// }
/// ```
#[derive(Debug)]
pub struct SpanBuilder<'a> {
    operation: &'a Operation,
    iterations: u64,
}

impl<'a> SpanBuilder<'a> {
    /// Creates a new span builder with the specified iteration count.
    ///
    /// # Panics
    ///
    /// Panics if `iterations` is zero.
    #[must_use]
    pub(crate) fn new(operation: &'a Operation, iterations: u64) -> Self {
        assert!(iterations != 0, "iterations cannot be zero");

        Self {
            operation,
            iterations,
        }
    }

    /// Creates a span that measures elapsed wall-clock time from now until it
    /// is dropped, spreading the measurement over the configured number of
    /// iterations.
    #[must_use]
    pub fn measure(self) -> Span {
        Span::new(self.operation, self.iterations)
    }
}
