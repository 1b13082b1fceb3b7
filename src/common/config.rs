//! Configuration constants for pagesim.

/// Number of frames used when the caller does not pick one.
///
/// Matches the frame count the interactive simulator starts with.
pub const DEFAULT_CAPACITY: usize = 4;

/// Smallest frame set a replay can run against.
///
/// A frame set with zero slots can never hold the page being referenced,
/// so every capacity below this is rejected at configuration time.
pub const MIN_CAPACITY: usize = 1;
