//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Duration;

/// Provides wall-clock readings.
///
/// This trait abstracts the underlying clock, allowing for both a real
/// implementation (using the operating system monotonic clock) and fake
/// implementations (for testing).
///
/// Readings are monotonic durations since an arbitrary process-local origin.
/// Only the difference between two readings from the same platform is
/// meaningful.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Gets the current wall-clock reading.
    fn wall_time(&self) -> Duration;
}
