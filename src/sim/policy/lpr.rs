//! LPR (Lowest Probability Replacement) policy.
//!
//! A history-based predictor: it learns which page tends to follow which
//! and, on a fault, keeps the pages most likely to come next after the one
//! being brought in.

use crate::common::{Capacity, Page};
use crate::sim::frame::{position_of, resident_pages, Frame};
use crate::sim::policy::{Access, PolicyKind, ReplacementPolicy, TransitionTable};

/// Evicts the resident page least likely to follow the incoming page.
///
/// # Model
/// After every position `i > 0` the pair `trace[i - 1] -> trace[i]` is
/// counted in a [`TransitionTable`]. On a fault with a full frame set the
/// row of the incoming page gives, for each resident page, the empirical
/// probability that it comes next. The lowest probability loses.
///
/// # Fallbacks and ties
/// - No recorded successors for the incoming page: evict frame 0.
/// - Equal probabilities: the lowest index goes (strict `<` replacement).
#[derive(Debug)]
pub struct LprPolicy<P: Page> {
    frames: Vec<Frame<P>>,
    transitions: TransitionTable<P>,
    capacity: Capacity,
}

impl<P: Page> LprPolicy<P> {
    /// Create a new LPR policy.
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            transitions: TransitionTable::new(),
            capacity: Capacity::default(),
        }
    }

    /// Transition counts learned during the last replay.
    pub fn transitions(&self) -> &TransitionTable<P> {
        &self.transitions
    }

    /// Pick the frame to evict to make room for `incoming`.
    fn find_victim(&self, incoming: &P) -> usize {
        if self.transitions.total(incoming) == 0 {
            return 0;
        }

        let mut victim = 0;
        let mut lowest = f64::MAX;

        for (index, frame) in self.frames.iter().enumerate() {
            let Some(page) = frame.page() else { continue };
            let probability = self
                .transitions
                .probability(incoming, page)
                .unwrap_or(0.0);
            if probability < lowest {
                lowest = probability;
                victim = index;
            }
        }

        victim
    }
}

impl<P: Page> Default for LprPolicy<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Page> ReplacementPolicy<P> for LprPolicy<P> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lpr
    }

    fn reset(&mut self, capacity: Capacity) {
        self.frames = Vec::with_capacity(capacity.get());
        self.transitions.clear();
        self.capacity = capacity;
    }

    fn access(&mut self, trace: &[P], position: usize) -> Access<P> {
        let page = &trace[position];

        let access = if position_of(&self.frames, page).is_some() {
            Access::Hit
        } else if self.frames.len() < self.capacity.get() {
            self.frames.push(Frame::with_page(page.clone()));
            Access::Fault { evicted: None }
        } else {
            let victim = self.find_victim(page);
            let evicted = self.frames[victim].install(page.clone());
            Access::Fault { evicted }
        };

        if let Some(previous) = position.checked_sub(1).map(|prev| &trace[prev]) {
            self.transitions.observe(previous, page);
        }

        access
    }

    fn resident(&self) -> Vec<P> {
        resident_pages(&self.frames)
    }
}
