use std::time::Instant;

use crate::pal::Platform;

pub(crate) static REAL_PLATFORM: RealPlatform = RealPlatform;

/// Reads the time from the operating system monotonic clock.
#[derive(Debug)]
pub(crate) struct RealPlatform;

impl Platform for RealPlatform {
    #[cfg_attr(test, mutants::skip)] // Cannot assert on the real clock beyond "it moves".
    fn now(&self) -> Instant {
        Instant::now()
    }
}
