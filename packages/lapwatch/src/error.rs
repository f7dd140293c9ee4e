use thiserror::Error;

/// Errors that can occur when creating or operating stopwatches.
///
/// All of these are contract violations by the caller. None of them are transient and none of
/// them leave the registry or the stopwatch in a modified state.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller asked the registry for a stopwatch with an empty identifier.
    #[error("stopwatch identifier must not be empty")]
    EmptyId,

    /// The caller asked the registry for a stopwatch with an identifier that has already been
    /// claimed by another stopwatch.
    #[error("stopwatch identifier '{id}' is already taken")]
    DuplicateId {
        /// The identifier that was requested.
        id: String,
    },

    /// `start()` was called on a stopwatch that is already running.
    #[error("stopwatch '{id}' is already running")]
    AlreadyRunning {
        /// The identifier of the stopwatch.
        id: String,
    },

    /// `lap()` or `stop()` was called on a stopwatch that is not running.
    #[error("stopwatch '{id}' is not running")]
    NotRunning {
        /// The identifier of the stopwatch.
        id: String,
    },
}

impl Error {
    /// Whether the error was caused by calling a stopwatch operation in a state that does not
    /// permit it (starting a running stopwatch, or lapping/stopping one that is not running).
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::AlreadyRunning { .. } | Self::NotRunning { .. })
    }
}

/// A specialized `Result` type for stopwatch operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
