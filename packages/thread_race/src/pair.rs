//! Paired execution of a workload: two concurrent threads versus twice
//! sequentially.

use std::thread;
use std::time::Duration;

use wall_time::measure;

/// Runs two instances of the workload on two freshly spawned worker threads
/// and returns the elapsed wall-clock time from just before the first spawn
/// until both threads have been joined.
///
/// Exactly two worker threads exist at a time. The calling thread blocks
/// until both joins complete; the joins are part of the measurement.
///
/// # Panics
///
/// Panics if a worker thread panics, terminating the comparison with a
/// diagnostic.
///
/// # Examples
///
/// ```
/// use thread_race::{busy_countdown, threaded_pair};
///
/// let elapsed = threaded_pair(|| busy_countdown(100_000));
/// println!("two concurrent countdowns took {elapsed:?}");
/// ```
#[must_use = "the measurement is the point of running the pair"]
pub fn threaded_pair<W>(workload: W) -> Duration
where
    W: FnOnce() + Clone + Send + 'static,
{
    let ((), elapsed) = measure(|| {
        let first = thread::spawn(workload.clone());
        let second = thread::spawn(workload);

        first.join().expect("first worker thread panicked");
        second.join().expect("second worker thread panicked");
    });

    elapsed
}

/// Runs the workload twice back-to-back on the calling thread and returns the
/// elapsed wall-clock time of both runs.
///
/// # Examples
///
/// ```
/// use thread_race::{busy_countdown, sequential_pair};
///
/// let elapsed = sequential_pair(|| busy_countdown(100_000));
/// println!("two sequential countdowns took {elapsed:?}");
/// ```
#[must_use = "the measurement is the point of running the pair"]
pub fn sequential_pair<W>(workload: W) -> Duration
where
    W: FnOnce() + Clone,
{
    let ((), elapsed) = measure(|| {
        (workload.clone())();
        workload();
    });

    elapsed
}
