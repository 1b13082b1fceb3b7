//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use crate::common::{Capacity, Page};
use crate::sim::frame::{position_of, resident_pages, Frame};
use crate::sim::policy::{Access, PolicyKind, ReplacementPolicy};

/// Evicts pages in the order they arrived.
///
/// Hits do not reorder the queue: a page that is referenced constantly
/// still leaves first if it came in first.
#[derive(Debug)]
pub struct FifoPolicy<P> {
    /// Resident frames in arrival order (front = oldest).
    queue: VecDeque<Frame<P>>,

    capacity: Capacity,
}

impl<P: Page> FifoPolicy<P> {
    /// Create a new FIFO policy.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            capacity: Capacity::default(),
        }
    }
}

impl<P: Page> Default for FifoPolicy<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Page> ReplacementPolicy<P> for FifoPolicy<P> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn reset(&mut self, capacity: Capacity) {
        self.queue = VecDeque::with_capacity(capacity.get());
        self.capacity = capacity;
    }

    fn access(&mut self, trace: &[P], position: usize) -> Access<P> {
        let page = &trace[position];
        if position_of(&self.queue, page).is_some() {
            return Access::Hit;
        }

        let evicted = if self.queue.len() == self.capacity.get() {
            self.queue.pop_front().and_then(|frame| frame.page().cloned())
        } else {
            None
        };
        self.queue.push_back(Frame::with_page(page.clone()));

        Access::Fault { evicted }
    }

    fn resident(&self) -> Vec<P> {
        resident_pages(&self.queue)
    }
}
