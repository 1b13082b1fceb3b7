//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Every variant is a configuration error: it is reported before a replay
/// touches the first trace position. Once a replay starts it always runs to
/// completion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested number of frames is below [`MIN_CAPACITY`].
    ///
    /// [`MIN_CAPACITY`]: crate::common::config::MIN_CAPACITY
    #[error("Invalid capacity {0}: a frame set needs at least one frame")]
    InvalidCapacity(usize),

    /// A policy name did not match any known replacement policy.
    #[error("Unknown replacement policy: {0:?}")]
    UnknownPolicy(String),
}
