//! Facade over the real and fake platforms.

use std::time::Duration;

#[cfg(test)]
use crate::pal::FakePlatform;
use crate::pal::{Platform, REAL_PLATFORM, RealPlatform};

/// Dispatches clock reads to the real platform or, in tests, to a fake
/// platform with controllable time.
#[derive(Clone, Debug)]
pub(crate) enum PlatformFacade {
    Real(&'static RealPlatform),

    #[cfg(test)]
    Fake(FakePlatform),
}

impl PlatformFacade {
    pub(crate) fn real() -> Self {
        Self::Real(&REAL_PLATFORM)
    }

    #[cfg(test)]
    pub(crate) fn fake(fake: FakePlatform) -> Self {
        Self::Fake(fake)
    }
}

impl Platform for PlatformFacade {
    fn wall_time(&self) -> Duration {
        match self {
            Self::Real(p) => p.wall_time(),
            #[cfg(test)]
            Self::Fake(p) => p.wall_time(),
        }
    }
}
