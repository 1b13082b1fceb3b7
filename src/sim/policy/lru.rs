//! LRU (Least Recently Used) replacement policy.

use std::collections::VecDeque;

use crate::common::{Capacity, Page};
use crate::sim::frame::{position_of, resident_pages, Frame};
use crate::sim::policy::{Access, PolicyKind, ReplacementPolicy};

/// Evicts the page whose last reference is oldest.
///
/// The frame set is kept as a recency list: front = least recently used,
/// back = most recently used. Both hits and faults leave the referenced
/// page at the back, which is the only thing separating this from FIFO.
#[derive(Debug)]
pub struct LruPolicy<P> {
    recency: VecDeque<Frame<P>>,
    capacity: Capacity,
}

impl<P: Page> LruPolicy<P> {
    /// Create a new LRU policy.
    pub fn new() -> Self {
        Self {
            recency: VecDeque::new(),
            capacity: Capacity::default(),
        }
    }
}

impl<P: Page> Default for LruPolicy<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Page> ReplacementPolicy<P> for LruPolicy<P> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn reset(&mut self, capacity: Capacity) {
        self.recency = VecDeque::with_capacity(capacity.get());
        self.capacity = capacity;
    }

    fn access(&mut self, trace: &[P], position: usize) -> Access<P> {
        let page = &trace[position];

        if let Some(index) = position_of(&self.recency, page) {
            // Move to the most recently used end.
            if let Some(frame) = self.recency.remove(index) {
                self.recency.push_back(frame);
            }
            return Access::Hit;
        }

        let evicted = if self.recency.len() == self.capacity.get() {
            self.recency.pop_front().and_then(|frame| frame.page().cloned())
        } else {
            None
        };
        self.recency.push_back(Frame::with_page(page.clone()));

        Access::Fault { evicted }
    }

    fn resident(&self) -> Vec<P> {
        resident_pages(&self.recency)
    }
}
