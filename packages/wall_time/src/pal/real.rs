//! Real platform implementation backed by the operating system monotonic clock.

use std::sync::LazyLock;
use std::time::{Duration, Instant};

use crate::pal::abstractions::Platform;

/// The moment this process first read the clock. Readings are expressed
/// relative to this origin so they fit in a plain [`Duration`].
static ORIGIN: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Real implementation of the platform abstraction, reading
/// [`std::time::Instant`].
#[derive(Debug)]
pub(crate) struct RealPlatform;

pub(crate) static REAL_PLATFORM: RealPlatform = RealPlatform;

impl Platform for RealPlatform {
    fn wall_time(&self) -> Duration {
        ORIGIN.elapsed()
    }
}
