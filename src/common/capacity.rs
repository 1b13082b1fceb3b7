//! Frame set capacity.

use std::fmt;

use crate::common::config::{DEFAULT_CAPACITY, MIN_CAPACITY};
use crate::common::{Error, Result};

/// Number of frames in a frame set, validated to be at least one.
///
/// Using a newtype moves the `capacity >= 1` check to construction time, so
/// policies never have to handle an empty frame set mid-replay.
///
/// # Example
/// ```
/// use pagesim::Capacity;
///
/// let capacity = Capacity::new(3).unwrap();
/// assert_eq!(capacity.get(), 3);
/// assert!(Capacity::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Capacity(usize);

impl Capacity {
    /// Create a capacity, rejecting counts below [`MIN_CAPACITY`].
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `frames` is 0
    pub fn new(frames: usize) -> Result<Self> {
        if frames < MIN_CAPACITY {
            return Err(Error::InvalidCapacity(frames));
        }
        Ok(Capacity(frames))
    }

    /// Get the number of frames.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Capacity(DEFAULT_CAPACITY)
    }
}

impl TryFrom<usize> for Capacity {
    type Error = Error;

    fn try_from(frames: usize) -> Result<Self> {
        Capacity::new(frames)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} frames", self.0)
    }
}
