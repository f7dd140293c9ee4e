//! Platform abstraction layer for reading the current time.
//!
//! This allows switching between the real monotonic clock and a fake clock that tests can
//! advance by exact amounts.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::Platform;
pub(crate) use facade::PlatformFacade;
#[cfg(test)]
pub(crate) use fake::FakePlatform;
pub(crate) use real::{REAL_PLATFORM, RealPlatform};
