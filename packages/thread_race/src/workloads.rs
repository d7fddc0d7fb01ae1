//! Workloads whose wall-clock timing the drivers compare.

use std::hint::black_box;
use std::sync::mpsc;
use std::time::Duration;

/// CPU-bound workload: busy-decrements a counter from `n` to zero.
///
/// Every step passes through [`black_box`] so the optimizer cannot collapse
/// the loop into its (known) final value. The duration of this workload is
/// dominated by computation and grows with `n`.
///
/// # Examples
///
/// ```
/// use thread_race::busy_countdown;
/// use wall_time::measure;
///
/// let ((), elapsed) = measure(|| busy_countdown(100_000));
/// println!("counted down in {elapsed:?}");
/// ```
pub fn busy_countdown(n: u64) {
    let mut remaining = black_box(n);

    while remaining > 0 {
        remaining = black_box(remaining.wrapping_sub(1));
    }
}

/// I/O-bound workload: blocks the calling thread for the fixed timeout.
///
/// The wait is a timed receive on a channel that never carries a message, so
/// the thread sleeps in the operating system until the timeout expires. No
/// processor time is consumed and no lock is held while waiting, which is
/// what lets two concurrent instances overlap completely.
///
/// The timeout is this workload's own internal parameter; callers time the
/// workload from the outside.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use thread_race::idle_wait;
/// use wall_time::measure;
///
/// let ((), elapsed) = measure(|| idle_wait(Duration::from_millis(50)));
/// assert!(elapsed >= Duration::from_millis(50));
/// ```
pub fn idle_wait(timeout: Duration) {
    let (sender, receiver) = mpsc::channel::<()>();

    match receiver.recv_timeout(timeout) {
        Err(mpsc::RecvTimeoutError::Timeout) => {}
        Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => {
            unreachable!("nothing is ever sent and the sender outlives the wait")
        }
    }

    // The sender must stay alive until here - a disconnected channel would
    // end the wait immediately instead of after the timeout.
    drop(sender);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn busy_countdown_zero_completes() {
        busy_countdown(0);
    }

    #[test]
    fn busy_countdown_small_completes() {
        busy_countdown(1000);
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Timed waits are not meaningful under Miri.
    fn idle_wait_blocks_for_the_timeout() {
        let timeout = Duration::from_millis(100);

        let start = Instant::now();
        idle_wait(timeout);
        let elapsed = start.elapsed();

        assert!(
            elapsed >= timeout,
            "wait returned early after {elapsed:?} with timeout {timeout:?}"
        );
        assert!(
            elapsed < Duration::from_secs(2),
            "wait overshot wildly: {elapsed:?}"
        );
    }
}
