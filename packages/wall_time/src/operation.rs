//! Mean wall-clock time tracking.

use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::pal::PlatformFacade;
use crate::{ERR_POISONED_LOCK, OperationMetrics, Span, SpanBuilder};

/// Calculates mean wall-clock time per operation across multiple repetitions.
///
/// This utility is particularly useful for benchmarking scenarios where you
/// want to understand the mean elapsed time of repeated operations.
///
/// Operations share data directly with the session - data is merged when
/// spans are dropped. Multiple operations with the same name can be created
/// concurrently and their statistics merge.
///
/// # Examples
///
/// ```
/// use wall_time::Session;
///
/// let session = Session::new();
/// let operation = session.operation("busy_work");
///
/// for _ in 0..5 {
///     {
///         let _span = operation.measure();
///         // Perform the work being measured
///         let mut sum = 0;
///         for j in 0..1000 {
///             sum += j;
///         }
///         std::hint::black_box(sum);
///     } // Span is dropped here, ensuring the measurement is recorded
/// }
///
/// let mean_duration = operation.mean();
/// println!("Mean wall-clock time: {mean_duration:?} per repetition");
/// ```
#[derive(Debug)]
pub struct Operation {
    metrics: Arc<Mutex<OperationMetrics>>,
    platform: PlatformFacade,
}

impl Operation {
    /// Creates a new mean wall-clock time calculator over the given shared
    /// metrics.
    #[must_use]
    pub(crate) fn new(metrics: Arc<Mutex<OperationMetrics>>, platform: PlatformFacade) -> Self {
        Self { metrics, platform }
    }

    /// Returns a reference to the platform facade for creating spans.
    #[must_use]
    pub(crate) fn platform(&self) -> &PlatformFacade {
        &self.platform
    }

    /// Returns a clone of the operation metrics for use by spans.
    #[must_use]
    pub(crate) fn metrics(&self) -> Arc<Mutex<OperationMetrics>> {
        Arc::clone(&self.metrics)
    }

    /// Creates a span that measures elapsed wall-clock time from creation
    /// until it is dropped, recorded as a single iteration.
    ///
    /// # Examples
    ///
    /// ```
    /// use wall_time::Session;
    ///
    /// let session = Session::new();
    /// let operation = session.operation("busy_work");
    /// {
    ///     let _span = operation.measure();
    ///     // Perform the work being measured
    ///     let mut sum = 0;
    ///     for i in 0..1000 {
    ///         sum += i;
    ///     }
    ///     std::hint::black_box(sum);
    /// } // Elapsed wall-clock time is recorded for 1 iteration
    /// ```
    pub fn measure(&self) -> Span {
        Span::new(self, 1)
    }

    /// Starts building a span that spreads one measurement over an explicit
    /// number of iterations.
    ///
    /// Batching reduces measurement overhead for operations fast enough that
    /// reading the clock would otherwise dominate.
    ///
    /// # Panics
    ///
    /// Panics if `iterations` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use wall_time::Session;
    ///
    /// let session = Session::new();
    /// let operation = session.operation("fast_work");
    /// {
    ///     let _span = operation.iterations(10_000).measure();
    ///     for _ in 0..10_000 {
    ///         // Fast operation that would be dominated by measurement overhead
    ///         std::hint::black_box(42 * 2);
    ///     }
    /// } // Total time is measured once and spread over 10 000 iterations
    /// ```
    pub fn iterations(&self, iterations: u64) -> SpanBuilder<'_> {
        SpanBuilder::new(self, iterations)
    }

    /// Calculates the mean wall-clock time per iteration.
    ///
    /// Returns zero duration if no spans have been recorded.
    #[must_use]
    pub fn mean(&self) -> Duration {
        let data = self.metrics.lock().expect(ERR_POISONED_LOCK);
        if data.total_iterations == 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos(
                data.total_wall_time
                    .as_nanos()
                    .checked_div(u128::from(data.total_iterations))
                    .expect("guarded by if condition")
                    .try_into()
                    .expect("all realistic values fit in u64"),
            )
        }
    }

    /// Returns the total number of iterations recorded.
    #[must_use]
    #[cfg(test)]
    pub(crate) fn total_iterations(&self) -> u64 {
        let data = self.metrics.lock().expect(ERR_POISONED_LOCK);
        data.total_iterations
    }

    /// Returns the total wall-clock time across all spans.
    #[must_use]
    #[cfg(test)]
    pub(crate) fn total_wall_time(&self) -> Duration {
        let data = self.metrics.lock().expect(ERR_POISONED_LOCK);
        data.total_wall_time
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} (mean)", self.mean())
    }
}

#[cfg(test)]
mod tests {
    use std::hint::black_box;

    use super::*;
    use crate::Session;
    use crate::pal::{FakePlatform, PlatformFacade};

    fn create_test_session() -> (Session, FakePlatform) {
        let fake_platform = FakePlatform::new();
        let session = Session::with_platform(PlatformFacade::fake(fake_platform.clone()));
        (session, fake_platform)
    }

    #[test]
    fn starts_with_zero_values() {
        let (session, _platform) = create_test_session();
        let operation = session.operation("test");

        assert_eq!(operation.mean(), Duration::ZERO);
        assert_eq!(operation.total_iterations(), 0);
        assert_eq!(operation.total_wall_time(), Duration::ZERO);
    }

    #[test]
    fn tracks_single_span() {
        let (session, platform) = create_test_session();
        let operation = session.operation("test");

        {
            let _span = operation.measure();
            platform.set_wall_time(Duration::from_millis(100));
        }

        assert_eq!(operation.mean(), Duration::from_millis(100));
        assert_eq!(operation.total_iterations(), 1);
        assert_eq!(operation.total_wall_time(), Duration::from_millis(100));
    }

    #[test]
    fn calculates_mean_of_multiple_spans() {
        let (session, _platform) = create_test_session();
        let operation = session.operation("test");

        {
            let mut metrics = operation.metrics.lock().expect(ERR_POISONED_LOCK);
            metrics.record_span(Duration::from_millis(100), 1);
            metrics.record_span(Duration::from_millis(200), 1);
            metrics.record_span(Duration::from_millis(300), 1);
        }

        assert_eq!(operation.mean(), Duration::from_millis(200)); // (100 + 200 + 300) / 3
        assert_eq!(operation.total_iterations(), 3);
        assert_eq!(operation.total_wall_time(), Duration::from_millis(600));
    }

    #[test]
    fn handles_zero_durations() {
        let (session, _platform) = create_test_session();
        let operation = session.operation("test");

        {
            let mut metrics = operation.metrics.lock().expect(ERR_POISONED_LOCK);
            metrics.record_span(Duration::ZERO, 1);
            metrics.record_span(Duration::ZERO, 1);
        }

        assert_eq!(operation.mean(), Duration::ZERO);
        assert_eq!(operation.total_iterations(), 2);
    }

    #[test]
    fn batched_iterations_divide_the_mean() {
        let (session, platform) = create_test_session();
        let operation = session.operation("test");

        {
            let _span = operation.iterations(10).measure();
            platform.set_wall_time(Duration::from_millis(100));
        }

        assert_eq!(operation.total_iterations(), 10);
        assert_eq!(operation.mean(), Duration::from_millis(10));
    }

    #[test]
    fn integrates_with_real_platform() {
        let session = Session::new();
        let operation = session.operation("test");
        {
            let _span = operation.measure();
            // Perform some work
            let mut sum = 0;
            for i in 0..1000 {
                sum += i;
            }
            black_box(sum);
        }

        assert_eq!(operation.total_iterations(), 1);
        // We cannot test the exact time, but the accumulator must be usable.
        assert!(operation.total_wall_time() >= Duration::ZERO);
    }

    #[test]
    fn display_shows_mean() {
        let (session, _platform) = create_test_session();
        let operation = session.operation("test");

        {
            let mut metrics = operation.metrics.lock().expect(ERR_POISONED_LOCK);
            metrics.record_span(Duration::from_millis(200), 2);
        }

        let display = operation.to_string();
        assert!(display.contains("mean"), "Display should mention 'mean'");
        assert!(
            display.contains("100"),
            "Display should show the 100ms mean: got {display}"
        );
    }

    static_assertions::assert_impl_all!(Operation: Send, Sync);
}
