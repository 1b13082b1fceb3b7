//! Page symbol bound.

use std::fmt::Debug;
use std::hash::Hash;

/// A page symbol from the trace alphabet.
///
/// Pages are opaque: a policy only ever compares them for equality, hashes
/// them (LPR's transition table) and copies them into snapshots. Any type
/// with those capabilities is a page, so `char`, integers and strings all
/// work without wrapping.
///
/// # Example
/// ```
/// use pagesim::Page;
///
/// fn assert_page<P: Page>() {}
///
/// assert_page::<char>();
/// assert_page::<u32>();
/// assert_page::<String>();
/// ```
pub trait Page: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Page for T {}
