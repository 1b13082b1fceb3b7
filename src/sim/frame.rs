//! Frame - a resident-page slot.
//!
//! A [`Frame`] holds at most one page plus the one-bit recency flag the
//! clock policy uses for second-chance decisions. Frames are created
//! empty, filled on first assignment and overwritten on eviction; the slot
//! itself is reused for the whole replay.

use crate::common::Page;

/// A slot in a frame set.
///
/// # Recency Bit
/// Only [`ClockPolicy`](crate::sim::ClockPolicy) reads or writes the bit.
/// Installing a page always clears it: a page that was just brought in has
/// not been referenced again yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<P> {
    /// The resident page, or None if the slot is empty.
    page: Option<P>,

    /// Set by a hit, cleared when the clock hand grants a second chance.
    referenced: bool,
}

impl<P: Page> Frame<P> {
    /// Create a new empty frame.
    pub fn new() -> Self {
        Self {
            page: None,
            referenced: false,
        }
    }

    /// Create a frame already holding `page`, recency bit clear.
    pub fn with_page(page: P) -> Self {
        Self {
            page: Some(page),
            referenced: false,
        }
    }

    // ========================================================================
    // Page slot
    // ========================================================================

    /// Get the resident page, if any.
    #[inline]
    pub fn page(&self) -> Option<&P> {
        self.page.as_ref()
    }

    /// Check if the frame is empty (no page loaded).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.page.is_none()
    }

    /// Check if the frame currently holds `page`.
    #[inline]
    pub fn holds(&self, page: &P) -> bool {
        self.page.as_ref() == Some(page)
    }

    /// Install `page`, returning the page it replaced.
    ///
    /// The recency bit is reset.
    pub fn install(&mut self, page: P) -> Option<P> {
        self.referenced = false;
        self.page.replace(page)
    }

    // ========================================================================
    // Recency bit
    // ========================================================================

    /// Check if the recency bit is set.
    #[inline]
    pub fn is_referenced(&self) -> bool {
        self.referenced
    }

    /// Set the recency bit.
    #[inline]
    pub fn mark_referenced(&mut self) {
        self.referenced = true;
    }

    /// Clear the recency bit.
    #[inline]
    pub fn clear_referenced(&mut self) {
        self.referenced = false;
    }
}

impl<P: Page> Default for Frame<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy the pages of occupied frames, in iteration order.
pub(crate) fn resident_pages<'a, P, I>(frames: I) -> Vec<P>
where
    P: Page + 'a,
    I: IntoIterator<Item = &'a Frame<P>>,
{
    frames
        .into_iter()
        .filter_map(|frame| frame.page().cloned())
        .collect()
}

/// Index of the frame holding `page`.
pub(crate) fn position_of<'a, P, I>(frames: I, page: &P) -> Option<usize>
where
    P: Page + 'a,
    I: IntoIterator<Item = &'a Frame<P>>,
{
    frames.into_iter().position(|frame| frame.holds(page))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_new() {
        let frame: Frame<char> = Frame::new();
        assert!(frame.is_empty());
        assert!(!frame.is_referenced());
        assert_eq!(frame.page(), None);
    }

    #[test]
    fn test_frame_install() {
        let mut frame = Frame::new();

        assert_eq!(frame.install('A'), None);
        assert!(frame.holds(&'A'));
        assert!(!frame.is_empty());

        frame.mark_referenced();
        assert_eq!(frame.install('B'), Some('A'));
        assert!(frame.holds(&'B'));
        assert!(!frame.is_referenced());
    }

    #[test]
    fn test_frame_recency_bit() {
        let mut frame = Frame::with_page('A');
        assert!(!frame.is_referenced());

        frame.mark_referenced();
        assert!(frame.is_referenced());

        frame.clear_referenced();
        assert!(!frame.is_referenced());
    }

    #[test]
    fn test_resident_pages_skips_empty() {
        let frames = vec![Frame::with_page('A'), Frame::new(), Frame::with_page('C')];
        assert_eq!(resident_pages(&frames), vec!['A', 'C']);
        assert_eq!(position_of(&frames, &'C'), Some(2));
        assert_eq!(position_of(&frames, &'B'), None);
    }
}
