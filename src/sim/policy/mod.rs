//! Eviction policy implementations.
//!
//! Currently implements:
//! - [`FifoPolicy`] - First-In-First-Out
//! - [`LruPolicy`] - Least Recently Used
//! - [`OptimalPolicy`] - Belady's off-line optimum (needs the whole trace)
//! - [`ClockPolicy`] - Second chance with a roaming hand
//! - [`LprPolicy`] - Lowest Probability Replacement (transition frequencies)
//!
//! All of them implement [`ReplacementPolicy`]. Each keeps its frame set in
//! whatever shape suits it (queue, recency list, plain vector, circular
//! array) and publishes it in frame-set order through
//! [`ReplacementPolicy::resident`].

use std::fmt;
use std::str::FromStr;

use crate::common::{Capacity, Error, Page};
use crate::sim::result::{RunRecorder, RunResult};

mod clock;
mod fifo;
mod lpr;
mod lru;
mod optimal;
mod transitions;

pub use clock::ClockPolicy;
pub use fifo::FifoPolicy;
pub use lpr::LprPolicy;
pub use lru::LruPolicy;
pub use optimal::OptimalPolicy;
pub use transitions::TransitionTable;

/// What happened when one page was referenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access<P> {
    /// The page was already resident.
    Hit,

    /// The page had to be installed. `evicted` is the page it displaced,
    /// or None if a free frame was available.
    Fault { evicted: Option<P> },
}

impl<P> Access<P> {
    /// Check if the access was a hit.
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Access::Hit)
    }
}

/// A page replacement policy.
///
/// Implementors provide the per-reference state machine; [`run`] drives it
/// over a whole trace. Every call to [`run`] starts from an empty frame set,
/// so replaying twice on the same instance yields the same record.
///
/// Instances are not meant to be shared between concurrent replays. To
/// compare policies, use one instance per policy.
///
/// # Example
/// ```
/// use pagesim::{Capacity, LruPolicy, ReplacementPolicy};
///
/// let trace: Vec<char> = "ABCAD".chars().collect();
/// let mut lru = LruPolicy::new();
/// let result = lru.run(&trace, Capacity::new(3).unwrap());
///
/// // The hit on A protected it; B was least recently used.
/// assert_eq!(result.step(4).unwrap().evicted, Some('B'));
/// ```
///
/// [`run`]: ReplacementPolicy::run
pub trait ReplacementPolicy<P: Page>: fmt::Debug {
    /// Which policy this is.
    fn kind(&self) -> PolicyKind;

    /// Display name of the policy.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Drop all frame state and prepare for a replay with `capacity` frames.
    fn reset(&mut self, capacity: Capacity);

    /// Handle the reference at `trace[position]`.
    ///
    /// The whole trace is passed so that off-line policies can look ahead
    /// and history-based ones can look back. Positions are visited in order,
    /// starting at 0 after a [`reset`](ReplacementPolicy::reset).
    fn access(&mut self, trace: &[P], position: usize) -> Access<P>;

    /// Resident pages in frame-set order.
    fn resident(&self) -> Vec<P>;

    /// Replay `trace` from an empty frame set and record every step.
    fn run(&mut self, trace: &[P], capacity: Capacity) -> RunResult<P> {
        tracing::debug!(
            policy = self.name(),
            trace_len = trace.len(),
            capacity = capacity.get(),
            "starting replay"
        );

        self.reset(capacity);
        let mut recorder = RunRecorder::new(self.kind(), capacity, trace.len());

        for (position, page) in trace.iter().enumerate() {
            let access = self.access(trace, position);
            if let Access::Fault {
                evicted: Some(victim),
            } = &access
            {
                tracing::trace!(
                    policy = self.name(),
                    position,
                    ?victim,
                    incoming = ?page,
                    "evicted page"
                );
            }
            recorder.record(page.clone(), access, self.resident());
        }

        let result = recorder.finish();
        tracing::debug!(
            policy = self.name(),
            hits = result.hit_count(),
            faults = result.fault_count(),
            "replay finished"
        );
        result
    }
}

/// The available replacement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Optimal,
    Clock,
    Lpr,
}

impl PolicyKind {
    /// Every policy, in the order result viewers list them.
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Fifo,
        PolicyKind::Lru,
        PolicyKind::Optimal,
        PolicyKind::Clock,
        PolicyKind::Lpr,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Optimal => "Optimal",
            PolicyKind::Clock => "Clock",
            PolicyKind::Lpr => "LPR",
        }
    }

    /// Construct a fresh instance of this policy.
    pub fn build<P: Page + 'static>(self) -> Box<dyn ReplacementPolicy<P>> {
        match self {
            PolicyKind::Fifo => Box::new(FifoPolicy::new()),
            PolicyKind::Lru => Box::new(LruPolicy::new()),
            PolicyKind::Optimal => Box::new(OptimalPolicy::new()),
            PolicyKind::Clock => Box::new(ClockPolicy::new()),
            PolicyKind::Lpr => Box::new(LprPolicy::new()),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "optimal" | "opt" => Ok(PolicyKind::Optimal),
            "clock" => Ok(PolicyKind::Clock),
            "lpr" => Ok(PolicyKind::Lpr),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_kind_names() {
        let names: Vec<&str> = PolicyKind::ALL.iter().map(|kind| kind.name()).collect();
        assert_eq!(names, vec!["FIFO", "LRU", "Optimal", "Clock", "LPR"]);
    }

    #[test]
    fn test_policy_kind_from_str() {
        assert_eq!("fifo".parse::<PolicyKind>(), Ok(PolicyKind::Fifo));
        assert_eq!("LRU".parse::<PolicyKind>(), Ok(PolicyKind::Lru));
        assert_eq!(" Optimal ".parse::<PolicyKind>(), Ok(PolicyKind::Optimal));
        assert_eq!("opt".parse::<PolicyKind>(), Ok(PolicyKind::Optimal));
        assert_eq!("Clock".parse::<PolicyKind>(), Ok(PolicyKind::Clock));
        assert_eq!("lpr".parse::<PolicyKind>(), Ok(PolicyKind::Lpr));
        assert_eq!(
            "mru".parse::<PolicyKind>(),
            Err(Error::UnknownPolicy("mru".to_string()))
        );
    }

    #[test]
    fn test_policy_kind_round_trips_through_display() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.to_string().parse::<PolicyKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_build_matches_kind() {
        for kind in PolicyKind::ALL {
            let policy = kind.build::<char>();
            assert_eq!(policy.kind(), kind);
            assert_eq!(policy.name(), kind.name());
        }
    }

    #[test]
    fn test_access_is_hit() {
        assert!(Access::<char>::Hit.is_hit());
        assert!(!Access::Fault { evicted: Some('A') }.is_hit());
    }
}
