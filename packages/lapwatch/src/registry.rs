use std::any::type_name;
use std::fmt;
use std::sync::LazyLock;
use std::time::Instant;

use foldhash::{HashSet, HashSetExt};
use parking_lot::Mutex;
use tracing::debug;

use crate::pal::{Platform, PlatformFacade};
use crate::{Error, Result, Stopwatch};

static GLOBAL: LazyLock<StopwatchRegistry> = LazyLock::new(StopwatchRegistry::new);

/// Creates stopwatches and keeps track of every stopwatch it has created.
///
/// Each stopwatch is identified by a string that is unique within the registry. Identifiers are
/// never released: once a stopwatch has been created with an identifier, no other stopwatch can
/// be created with it for the lifetime of the registry, even if [`reset()`][Stopwatch::reset]
/// is called on the stopwatch.
///
/// The registry is safe to use from any number of threads. If several threads race to create a
/// stopwatch with the same identifier, exactly one of them succeeds.
///
/// Most code uses the process-wide registry from [`StopwatchRegistry::global()`]. Independent
/// registries can be created with [`StopwatchRegistry::new()`], each with its own identifier
/// space.
///
/// # Examples
///
/// ```
/// use lapwatch::{Error, StopwatchRegistry};
///
/// let registry = StopwatchRegistry::new();
///
/// let parse = registry.get_stopwatch("parse").unwrap();
/// let _emit = registry.get_stopwatch("emit").unwrap();
///
/// assert!(matches!(
///     registry.get_stopwatch("parse"),
///     Err(Error::DuplicateId { .. })
/// ));
///
/// let all = registry.stopwatches();
/// assert_eq!(all.len(), 2);
/// assert_eq!(all[0], parse);
/// ```
pub struct StopwatchRegistry {
    // All stopwatches created by this registry record time relative to this instant.
    epoch: Instant,
    platform: PlatformFacade,

    // One lock guards both the identifier set and the creation order, so they never disagree.
    entries: Mutex<Entries>,
}

#[derive(Debug)]
struct Entries {
    ids: HashSet<String>,
    stopwatches: Vec<Stopwatch>,
}

impl StopwatchRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::with_platform(PlatformFacade::real())
    }

    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        Self {
            epoch: platform.now(),
            platform,
            entries: Mutex::new(Entries {
                ids: HashSet::new(),
                stopwatches: Vec::new(),
            }),
        }
    }

    /// The process-wide registry.
    ///
    /// It is created empty on first use and lives until the process exits.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Creates a new stopwatch with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyId`] if the identifier is empty and [`Error::DuplicateId`] if a
    /// stopwatch with this identifier has already been created by this registry. No identifier
    /// is claimed when an error is returned.
    pub fn get_stopwatch(&self, id: impl Into<String>) -> Result<Stopwatch> {
        let id = id.into();

        if id.is_empty() {
            debug!("rejected stopwatch with empty identifier");
            return Err(Error::EmptyId);
        }

        let mut entries = self.entries.lock();

        if entries.ids.contains(&id) {
            debug!(id = %id, "rejected stopwatch with duplicate identifier");
            return Err(Error::DuplicateId { id });
        }

        let stopwatch = Stopwatch::new(id.clone(), self.epoch, self.platform.clone());

        entries.ids.insert(id);
        entries.stopwatches.push(stopwatch.clone());

        debug!(
            id = stopwatch.id(),
            count = entries.stopwatches.len(),
            "stopwatch registered"
        );

        Ok(stopwatch)
    }

    /// Returns every stopwatch created so far, in creation order.
    ///
    /// The returned list is a copy. Stopwatches created after this call returns are not in it
    /// and modifying it does not affect the registry.
    #[must_use]
    pub fn stopwatches(&self) -> Vec<Stopwatch> {
        self.entries.lock().stopwatches.clone()
    }

    /// Whether a stopwatch with this identifier has been created.
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.entries.lock().ids.contains(id)
    }

    /// The number of stopwatches created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().stopwatches.len()
    }

    /// Whether no stopwatches have been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().stopwatches.is_empty()
    }
}

impl Default for StopwatchRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StopwatchRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.len();

        f.debug_struct(type_name::<Self>())
            .field("platform", &self.platform)
            .field("count", &count)
            .finish_non_exhaustive()
    }
}
