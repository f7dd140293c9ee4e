use std::time::Duration;

/// A point-in-time copy of the complete state of a [`Stopwatch`][crate::Stopwatch].
///
/// Unlike [`Stopwatch`][crate::Stopwatch] itself, which compares by identity, snapshots compare
/// by value: two snapshots are equal if the identifier, running flag, lap times, total time, start
/// time and stop time are all equal.
///
/// Start and stop times are offsets from the moment the owning registry was created, so
/// snapshots of stopwatches from the same registry are on a common timeline.
///
/// # Examples
///
/// ```
/// use lapwatch::StopwatchRegistry;
///
/// let registry = StopwatchRegistry::new();
/// let watch = registry.get_stopwatch("snapshot-example").unwrap();
///
/// let before = watch.snapshot();
/// assert!(!before.is_running());
/// assert!(before.lap_times().is_empty());
///
/// watch.start().unwrap();
/// assert_ne!(before, watch.snapshot());
///
/// watch.reset();
/// assert_eq!(before, watch.snapshot());
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct StopwatchSnapshot {
    pub(crate) id: String,
    pub(crate) running: bool,
    pub(crate) lap_times: Vec<Duration>,
    pub(crate) total_time: Duration,
    pub(crate) start_time: Option<Duration>,
    pub(crate) stop_time: Option<Duration>,
}

impl StopwatchSnapshot {
    /// The identifier of the stopwatch.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the stopwatch was running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The recorded laps, in recording order.
    #[must_use]
    pub fn lap_times(&self) -> &[Duration] {
        &self.lap_times
    }

    /// The sum of all recorded laps.
    #[must_use]
    pub fn total_time(&self) -> Duration {
        self.total_time
    }

    /// When the current (or last) interval began, or `None` if the stopwatch has not been
    /// started since it was created or reset.
    #[must_use]
    pub fn start_time(&self) -> Option<Duration> {
        self.start_time
    }

    /// When the last lap was recorded, or `None` if no lap has been recorded since the
    /// stopwatch was created or reset.
    #[must_use]
    pub fn stop_time(&self) -> Option<Duration> {
        self.stop_time
    }
}
