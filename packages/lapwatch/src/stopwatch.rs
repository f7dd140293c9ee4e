use std::any::type_name;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::trace;

use crate::pal::{Platform, PlatformFacade};
use crate::{Error, Result, StopwatchSnapshot, format_elapsed};

/// A thread-safe stopwatch that records lap times.
///
/// Stopwatches are obtained from a [`StopwatchRegistry`][crate::StopwatchRegistry], which
/// guarantees that each has a unique identifier. The type is a cheap handle: clones refer to the
/// same stopwatch and may be freely sent to other threads.
///
/// Every operation that reads or modifies the timing state holds a lock on the stopwatch for its
/// whole duration, so concurrent calls on the same stopwatch behave as if they were made one
/// after another. Operations on different stopwatches never contend with each other.
///
/// # States
///
/// A stopwatch is unstarted, running or stopped:
///
/// * [`start()`][Self::start] moves an unstarted or stopped stopwatch to running.
/// * [`lap()`][Self::lap] records a lap while running.
/// * [`stop()`][Self::stop] records a final lap and stops the stopwatch.
/// * [`reset()`][Self::reset] returns the stopwatch to unstarted from any state.
///
/// # Equality
///
/// Stopwatches compare by identity: two handles are equal if they refer to the same stopwatch.
/// Use [`snapshot()`][Self::snapshot] to compare the timing state of two stopwatches by value.
///
/// # Examples
///
/// ```
/// use lapwatch::StopwatchRegistry;
///
/// let registry = StopwatchRegistry::new();
/// let watch = registry.get_stopwatch("example").unwrap();
///
/// watch.start().unwrap();
/// watch.lap().unwrap();
/// watch.stop().unwrap();
///
/// assert_eq!(watch.lap_times().len(), 2);
/// println!("{} took {watch}", watch.id());
/// ```
#[derive(Clone)]
pub struct Stopwatch {
    inner: Arc<StopwatchInner>,
}

struct StopwatchInner {
    id: String,

    // Timestamps are recorded as whole milliseconds since this instant.
    epoch: Instant,
    platform: PlatformFacade,

    state: Mutex<LapState>,
}

impl StopwatchInner {
    fn now(&self) -> Duration {
        whole_millis(self.platform.now().saturating_duration_since(self.epoch))
    }
}

impl Stopwatch {
    pub(crate) fn new(id: String, epoch: Instant, platform: PlatformFacade) -> Self {
        Self {
            inner: Arc::new(StopwatchInner {
                id,
                epoch,
                platform,
                state: Mutex::new(LapState::default()),
            }),
        }
    }

    /// The identifier the stopwatch was registered with.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Starts the stopwatch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyRunning`] if the stopwatch is already running. The stopwatch is
    /// not modified in that case.
    pub fn start(&self) -> Result<()> {
        let mut state = self.inner.state.lock();
        let now = self.inner.now();

        state.start(self.id(), now)?;

        trace!(id = self.id(), "stopwatch started");
        Ok(())
    }

    /// Records the time since the stopwatch was started or since the previous lap, whichever
    /// is later, and returns the recorded lap.
    ///
    /// The stopwatch keeps running.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRunning`] if the stopwatch is not running. The stopwatch is not
    /// modified in that case.
    pub fn lap(&self) -> Result<Duration> {
        let mut state = self.inner.state.lock();
        let now = self.inner.now();

        let lap = state.lap(self.id(), now)?;

        trace!(
            id = self.id(),
            lap_ms = millis(lap),
            total_ms = millis(state.total_time),
            "lap recorded"
        );
        Ok(lap)
    }

    /// Records one final lap and stops the stopwatch, returning the final lap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRunning`] if the stopwatch is not running. The stopwatch is not
    /// modified in that case.
    pub fn stop(&self) -> Result<Duration> {
        let mut state = self.inner.state.lock();
        let now = self.inner.now();

        let lap = state.stop(self.id(), now)?;

        trace!(
            id = self.id(),
            lap_ms = millis(lap),
            total_ms = millis(state.total_time),
            "stopwatch stopped"
        );
        Ok(lap)
    }

    /// Stops the stopwatch if it is running and clears all recorded laps.
    ///
    /// The stopwatch is left in the same state as a newly created one. It remains registered
    /// under its identifier.
    pub fn reset(&self) {
        *self.inner.state.lock() = LapState::default();

        trace!(id = self.id(), "stopwatch reset");
    }

    /// Returns a copy of the recorded lap times in the order they were recorded.
    ///
    /// Every lap is a whole number of milliseconds.
    #[must_use]
    pub fn lap_times(&self) -> Vec<Duration> {
        self.inner.state.lock().lap_times.clone()
    }

    /// Whether the stopwatch is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.state.lock().running
    }

    /// The sum of all recorded laps, excluding any interval that is still in progress.
    #[must_use]
    pub fn total_time(&self) -> Duration {
        self.inner.state.lock().total_time
    }

    /// The sum of all recorded laps plus, if the stopwatch is running, the time since the last
    /// lap (or since the start, if there has been no lap yet).
    ///
    /// This is the value rendered by the [`Display`][fmt::Display] implementation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        let state = self.inner.state.lock();
        state.elapsed(self.inner.now())
    }

    /// Captures the complete timing state of the stopwatch at this moment.
    #[must_use]
    pub fn snapshot(&self) -> StopwatchSnapshot {
        let state = self.inner.state.lock();

        StopwatchSnapshot {
            id: self.inner.id.clone(),
            running: state.running,
            lap_times: state.lap_times.clone(),
            total_time: state.total_time,
            start_time: state.start_time,
            stop_time: state.stop_time,
        }
    }
}

impl PartialEq for Stopwatch {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Stopwatch {}

impl Hash for Stopwatch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(Arc::as_ptr(&self.inner), state);
    }
}

impl fmt::Display for Stopwatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The lock is released before formatting.
        let elapsed = self.elapsed();
        f.write_str(&format_elapsed(elapsed))
    }
}

impl fmt::Debug for Stopwatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();

        f.debug_struct(type_name::<Self>())
            .field("id", &self.inner.id)
            .field("state", &*state)
            .finish_non_exhaustive()
    }
}

/// The mutable part of a stopwatch. All timestamps are offsets from the stopwatch epoch.
#[derive(Debug, Default)]
struct LapState {
    running: bool,
    start_time: Option<Duration>,
    stop_time: Option<Duration>,
    total_time: Duration,
    lap_times: Vec<Duration>,
}

impl LapState {
    fn start(&mut self, id: &str, now: Duration) -> Result<()> {
        if self.running {
            return Err(Error::AlreadyRunning { id: id.to_owned() });
        }

        self.start_time = Some(now);
        self.running = true;
        Ok(())
    }

    fn lap(&mut self, id: &str, now: Duration) -> Result<Duration> {
        let lap = self.record_lap(id, now)?;
        self.start_time = Some(now);
        Ok(lap)
    }

    fn stop(&mut self, id: &str, now: Duration) -> Result<Duration> {
        let lap = self.record_lap(id, now)?;
        self.running = false;
        Ok(lap)
    }

    fn record_lap(&mut self, id: &str, now: Duration) -> Result<Duration> {
        if !self.running {
            return Err(Error::NotRunning { id: id.to_owned() });
        }

        let lap = self
            .start_time
            .map_or(Duration::ZERO, |start| now.saturating_sub(start));

        self.lap_times.push(lap);
        self.total_time = self.total_time.saturating_add(lap);
        self.stop_time = Some(now);

        Ok(lap)
    }

    fn elapsed(&self, now: Duration) -> Duration {
        match (self.running, self.start_time) {
            (true, Some(start)) => self.total_time.saturating_add(now.saturating_sub(start)),
            _ => self.total_time,
        }
    }
}

fn whole_millis(duration: Duration) -> Duration {
    Duration::from_millis(millis(duration))
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
