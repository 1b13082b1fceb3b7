//! CLOCK (second chance) replacement policy.

use crate::common::{Capacity, Page};
use crate::sim::frame::{position_of, resident_pages, Frame};
use crate::sim::policy::{Access, PolicyKind, ReplacementPolicy};

/// Approximates LRU with one recency bit per frame and a roaming hand.
///
/// # Algorithm
/// ```text
///          hand
///           ↓
///   [A:1] [B:0] [C:1] [D:0]      (page:recency bit)
/// ```
/// - Hit: set the page's bit. The hand does not move.
/// - Fault, free slot: fill the next free slot, advance the hand by one.
/// - Fault, full: look at the frame under the hand. Bit set → clear it and
///   advance (second chance). Bit clear → replace the page (bit stays
///   clear) and advance past it.
///
/// The first sweep clears every set bit, so a victim is always found
/// within two sweeps.
#[derive(Debug)]
pub struct ClockPolicy<P> {
    /// Fixed circular array of `capacity` slots, filled in array order.
    frames: Vec<Frame<P>>,

    /// Index of the frame the hand points at.
    hand: usize,

    /// Number of occupied slots; slots `0..occupied` are the full ones.
    occupied: usize,
}

impl<P: Page> ClockPolicy<P> {
    /// Create a new CLOCK policy.
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            hand: 0,
            occupied: 0,
        }
    }

    /// Current hand position.
    pub fn hand(&self) -> usize {
        self.hand
    }

    /// All slots in array order, including empty ones.
    pub fn frames(&self) -> &[Frame<P>] {
        &self.frames
    }

    fn advance(&mut self) {
        self.hand = (self.hand + 1) % self.frames.len();
    }

    /// Sweep from the hand until a frame without a second chance turns up.
    fn find_victim(&mut self) -> usize {
        // Two sweeps always suffice; one more inspection would be a bug.
        for _ in 0..2 * self.frames.len() {
            let frame = &mut self.frames[self.hand];
            if !frame.is_referenced() {
                return self.hand;
            }
            frame.clear_referenced();
            self.advance();
        }
        panic!(
            "clock hand swept {} frames twice without a victim",
            self.frames.len()
        );
    }
}

impl<P: Page> Default for ClockPolicy<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Page> ReplacementPolicy<P> for ClockPolicy<P> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Clock
    }

    fn reset(&mut self, capacity: Capacity) {
        self.frames = (0..capacity.get()).map(|_| Frame::new()).collect();
        self.hand = 0;
        self.occupied = 0;
    }

    fn access(&mut self, trace: &[P], position: usize) -> Access<P> {
        let page = &trace[position];

        if let Some(index) = position_of(&self.frames, page) {
            self.frames[index].mark_referenced();
            return Access::Hit;
        }

        if self.occupied < self.frames.len() {
            self.frames[self.occupied].install(page.clone());
            self.occupied += 1;
            self.advance();
            return Access::Fault { evicted: None };
        }

        let victim = self.find_victim();
        let evicted = self.frames[victim].install(page.clone());
        self.advance();
        Access::Fault { evicted }
    }

    fn resident(&self) -> Vec<P> {
        resident_pages(&self.frames)
    }
}
