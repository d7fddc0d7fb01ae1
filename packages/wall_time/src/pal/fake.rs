//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::pal::abstractions::Platform;

/// Internal state for the fake platform that can be shared between clones.
#[derive(Debug)]
struct FakePlatformState {
    wall_time: Duration,
}

/// Fake implementation of the platform abstraction for testing.
///
/// This implementation allows tests to control the clock instead of relying
/// on the real one. Multiple clones of the same `FakePlatform` share the same
/// underlying state, allowing tests to modify the time after platform
/// creation to simulate time progression.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    state: Arc<Mutex<FakePlatformState>>,
}

impl FakePlatform {
    /// Creates a new fake platform with a zero wall-clock reading.
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakePlatformState {
                wall_time: Duration::ZERO,
            })),
        }
    }

    /// Sets the wall-clock reading.
    ///
    /// This affects all clones of this platform, allowing tests to simulate
    /// time progression during measurement.
    pub(crate) fn set_wall_time(&self, time: Duration) {
        self.state
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
            .wall_time = time;
    }
}

impl Platform for FakePlatform {
    fn wall_time(&self) -> Duration {
        self.state
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
            .wall_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initializes_with_zero_time() {
        let platform = FakePlatform::new();
        assert_eq!(platform.wall_time(), Duration::ZERO);
    }

    #[test]
    fn sets_wall_time() {
        let platform = FakePlatform::new();
        platform.set_wall_time(Duration::from_millis(150));

        assert_eq!(platform.wall_time(), Duration::from_millis(150));
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        // Setting the time on one clone affects the other.
        platform1.set_wall_time(Duration::from_millis(100));
        assert_eq!(platform2.wall_time(), Duration::from_millis(100));
    }
}
