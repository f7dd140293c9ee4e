#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Thread-safe lap stopwatches, created through a registry that guarantees every stopwatch a
//! unique identifier.
//!
//! The core types are:
//!
//! * [`StopwatchRegistry`] - creates stopwatches and lists every stopwatch it has created.
//! * [`Stopwatch`] - measures time as a sequence of laps; may be shared between threads.
//! * [`StopwatchSnapshot`] - a copy of the state of a stopwatch that compares by value.
//!
//! # Basic usage
//!
//! ```
//! use std::thread;
//! use std::time::Duration;
//!
//! use lapwatch::StopwatchRegistry;
//!
//! let watch = StopwatchRegistry::global()
//!     .get_stopwatch("lib-example")
//!     .unwrap();
//!
//! watch.start().unwrap();
//! thread::sleep(Duration::from_millis(5));
//! watch.lap().unwrap();
//! thread::sleep(Duration::from_millis(5));
//! watch.stop().unwrap();
//!
//! let laps = watch.lap_times();
//! assert_eq!(laps.len(), 2);
//! assert_eq!(laps.iter().sum::<Duration>(), watch.total_time());
//!
//! // Renders as HH:MM:SS.mmm
//! println!("{}: {watch}", watch.id());
//! ```
//!
//! # Threading
//!
//! All operations on a single stopwatch are serialized by a lock owned by that stopwatch, so a
//! stopwatch may be started on one thread, lapped on several others and stopped on yet another.
//! Operations on different stopwatches do not interact.
//!
//! Creating stopwatches is serialized by a lock owned by the registry. When several threads try
//! to create a stopwatch with the same identifier at the same time, exactly one of them gets the
//! stopwatch and all others get [`Error::DuplicateId`].
//!
//! # Precision
//!
//! Lap times are whole milliseconds, read from the monotonic clock of the operating system.
//!
//! # Logging
//!
//! The crate emits `tracing` events: registrations and rejected registrations at debug level and
//! every stopwatch state change at trace level. No subscriber is installed by the crate.

mod error;
mod format;
mod pal;
mod registry;
mod snapshot;
mod stopwatch;

pub use error::*;
pub use format::*;
pub use registry::*;
pub use snapshot::*;
pub use stopwatch::*;
