//! Optimal (Belady) replacement policy.
//!
//! Off-line: the victim is chosen by looking at the *rest of the trace*,
//! which no real system can do. It is the lower bound other policies are
//! measured against.

use crate::common::{Capacity, Page};
use crate::sim::frame::{position_of, resident_pages, Frame};
use crate::sim::policy::{Access, PolicyKind, ReplacementPolicy};

/// Next-use index for pages that never occur again.
const NEVER: usize = usize::MAX;

/// Evicts the page whose next reference lies farthest in the future.
///
/// # Tie-break
/// Frames are scanned in frame-set order and only a strictly farther next
/// use replaces the running candidate, so among equally distant pages
/// (typically several that are never used again) the lowest index goes.
#[derive(Debug)]
pub struct OptimalPolicy<P> {
    /// Unordered frame set; positions only matter for snapshots and ties.
    frames: Vec<Frame<P>>,
    capacity: Capacity,
}

impl<P: Page> OptimalPolicy<P> {
    /// Create a new Optimal policy.
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            capacity: Capacity::default(),
        }
    }

    /// Pick the frame to evict at `position`.
    fn find_victim(&self, trace: &[P], position: usize) -> usize {
        let mut victim = 0;
        let mut farthest = None;

        for (index, frame) in self.frames.iter().enumerate() {
            let Some(page) = frame.page() else { continue };
            let next = next_use(trace, position, page);
            let farther = match farthest {
                Some(best) => next > best,
                None => true,
            };
            if farther {
                farthest = Some(next);
                victim = index;
            }
        }

        assert!(
            farthest.is_some(),
            "no eviction candidate among {} frames",
            self.frames.len()
        );
        victim
    }
}

impl<P: Page> Default for OptimalPolicy<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Position of the first reference to `page` strictly after `position`.
fn next_use<P: Page>(trace: &[P], position: usize, page: &P) -> usize {
    trace
        .iter()
        .enumerate()
        .skip(position + 1)
        .find(|(_, candidate)| *candidate == page)
        .map_or(NEVER, |(index, _)| index)
}

impl<P: Page> ReplacementPolicy<P> for OptimalPolicy<P> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Optimal
    }

    fn reset(&mut self, capacity: Capacity) {
        self.frames = Vec::with_capacity(capacity.get());
        self.capacity = capacity;
    }

    fn access(&mut self, trace: &[P], position: usize) -> Access<P> {
        let page = &trace[position];
        if position_of(&self.frames, page).is_some() {
            return Access::Hit;
        }

        if self.frames.len() < self.capacity.get() {
            self.frames.push(Frame::with_page(page.clone()));
            return Access::Fault { evicted: None };
        }

        let victim = self.find_victim(trace, position);
        let evicted = self.frames[victim].install(page.clone());
        Access::Fault { evicted }
    }

    fn resident(&self) -> Vec<P> {
        resident_pages(&self.frames)
    }
}
