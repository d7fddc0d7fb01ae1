//! One-shot wall-clock measurement of a single operation.

use std::time::Duration;

use crate::pal::{Platform, PlatformFacade};

/// Executes an operation and returns its result paired with the elapsed
/// wall-clock time.
///
/// The operation runs synchronously on the calling thread. The clock is read
/// immediately before invocation and immediately after completion, so any
/// blocking or child-thread joins performed inside the operation are included
/// in the elapsed time. The same monotonic clock source is used for both
/// readings.
///
/// The wrapper itself never spawns concurrency and has no side effects beyond
/// those of the operation. Arguments are forwarded by closing over them at
/// the call site, so the wrapper stays workload-agnostic. A fallible
/// operation is timed by returning its `Result` - the wrapper does not
/// inspect the result value.
///
/// # Panics
///
/// A panic raised by the operation unwinds through this function unmodified;
/// no timing value is produced for that call.
///
/// # Examples
///
/// ```
/// use wall_time::measure;
///
/// let (sum, elapsed) = measure(|| 2 + 2);
///
/// assert_eq!(sum, 4);
/// println!("computed in {elapsed:?}");
/// ```
///
/// Timing an operation that manages its own threads:
///
/// ```
/// use std::thread;
/// use std::time::Duration;
///
/// use wall_time::measure;
///
/// let ((), elapsed) = measure(|| {
///     let worker = thread::spawn(|| thread::sleep(Duration::from_millis(10)));
///     worker.join().expect("worker thread panicked");
/// });
///
/// // The join happens inside the operation, so the wait is part of the measurement.
/// assert!(elapsed >= Duration::from_millis(10));
/// ```
#[must_use = "the measurement is the point of calling this"]
pub fn measure<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    measure_with_platform(&PlatformFacade::real(), f)
}

/// Measurement core, parameterized over the platform so tests can supply a
/// fake clock.
pub(crate) fn measure_with_platform<F, R>(platform: &PlatformFacade, f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = platform.wall_time();
    let result = f();
    let elapsed = platform.wall_time().saturating_sub(start);

    (result, elapsed)
}
