//! Wall-clock measurement spans.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::pal::{Platform, PlatformFacade};
use crate::{ERR_POISONED_LOCK, Operation, OperationMetrics};

/// A measured span of code that records elapsed wall-clock time between
/// creation and drop.
///
/// The measurement covers everything executed while the span is alive,
/// including any blocking waits or child-thread joins.
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
///     // Perform the operation being measured
///     let mut sum = 0;
///     for i in 0..1000 {
///         sum += i;
///     }
///     std::hint::black_box(sum);
/// } // Elapsed wall-clock time is recorded here
/// ```
///
/// For benchmarks with many iterations:
///
/// ```
/// use wall_time::Session;
///
/// let session = Session::new();
/// let operation = session.operation("fast_work");
/// {
///     let _span = operation.iterations(1000).measure();
///     for _ in 0..1000 {
///         std::hint::black_box(42 * 2);
///     }
/// } // Elapsed time is measured once and spread over 1000 iterations
/// ```
#[derive(Debug)]
#[must_use = "measurements are taken between creation and drop"]
pub struct Span {
    metrics: Arc<Mutex<OperationMetrics>>,
    platform: PlatformFacade,
    start_time: Duration,
    iterations: u64,
}

impl Span {
    /// Creates a new span for the given operation and iteration count.
    ///
    /// # Panics
    ///
    /// Panics if `iterations` is zero.
    pub(crate) fn new(operation: &Operation, iterations: u64) -> Self {
        assert!(iterations != 0, "iterations cannot be zero");

        let platform = operation.platform().clone();
        let start_time = platform.wall_time();

        Self {
            metrics: operation.metrics(),
            platform,
            start_time,
            iterations,
        }
    }
}

impl Drop for Span {
    fn drop(&mut self) {
        let elapsed = self.platform.wall_time().saturating_sub(self.start_time);

        let mut metrics = self.metrics.lock().expect(ERR_POISONED_LOCK);
        metrics.record_span(elapsed, self.iterations);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::Session;
    use crate::pal::{FakePlatform, PlatformFacade};

    fn create_test_session() -> (Session, FakePlatform) {
        let fake_platform = FakePlatform::new();
        let session = Session::with_platform(PlatformFacade::fake(fake_platform.clone()));
        (session, fake_platform)
    }

    #[test]
    fn records_elapsed_time_on_drop() {
        let (session, platform) = create_test_session();
        let operation = session.operation("test");

        platform.set_wall_time(Duration::from_millis(10));
        {
            let _span = operation.measure();
            platform.set_wall_time(Duration::from_millis(60));
        }

        assert_eq!(operation.total_iterations(), 1);
        assert_eq!(operation.total_wall_time(), Duration::from_millis(50));
    }

    #[test]
    fn records_zero_when_clock_stands_still() {
        let (session, _platform) = create_test_session();
        let operation = session.operation("test");

        {
            let _span = operation.measure();
        }

        assert_eq!(operation.total_iterations(), 1);
        assert_eq!(operation.total_wall_time(), Duration::ZERO);
    }

    #[test]
    fn batched_span_records_all_iterations() {
        let (session, platform) = create_test_session();
        let operation = session.operation("test");

        {
            let _span = operation.iterations(10).measure();
            platform.set_wall_time(Duration::from_millis(100));
        }

        assert_eq!(operation.total_iterations(), 10);
        assert_eq!(operation.total_wall_time(), Duration::from_millis(100));
    }

    #[test]
    fn consecutive_spans_accumulate() {
        let (session, platform) = create_test_session();
        let operation = session.operation("test");

        {
            let _span = operation.measure();
            platform.set_wall_time(Duration::from_millis(30));
        }
        {
            let _span = operation.measure();
            platform.set_wall_time(Duration::from_millis(70));
        }

        assert_eq!(operation.total_iterations(), 2);
        assert_eq!(operation.total_wall_time(), Duration::from_millis(70));
    }

    #[test]
    fn clock_regression_is_recorded_as_zero() {
        let (session, platform) = create_test_session();
        platform.set_wall_time(Duration::from_millis(100));

        let operation = session.operation("test");
        {
            let _span = operation.measure();
            platform.set_wall_time(Duration::from_millis(10));
        }

        assert_eq!(operation.total_iterations(), 1);
        assert_eq!(operation.total_wall_time(), Duration::ZERO);
    }

    #[test]
    #[should_panic(expected = "iterations cannot be zero")]
    fn panics_on_zero_iterations() {
        let (session, _platform) = create_test_session();
        let operation = session.operation("test");
        let _span = operation.iterations(0).measure();
    }
}
