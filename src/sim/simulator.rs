//! Simulator - the replay driver.
//!
//! The [`Simulator`] provides:
//! - Validated configuration (trace + capacity) before any replay
//! - One-shot replays through a swappable policy
//! - Access to the last run's record

use std::fmt;

use crate::common::{Capacity, Page, Result};
use crate::sim::policy::{PolicyKind, ReplacementPolicy};
use crate::sim::result::RunResult;

/// Drives one policy over one trace.
///
/// # Usage
/// ```
/// use pagesim::{PolicyKind, Simulator, StepLabel};
///
/// let trace = pagesim::parse_trace("A B C A D");
/// let mut sim = Simulator::with_kind(PolicyKind::Fifo, trace, 3).unwrap();
///
/// let result = sim.run();
/// assert_eq!(result.hit_count(), 1);
/// assert_eq!(result.label(4), Some(StepLabel::Migrated));
/// ```
pub struct Simulator<P: Page> {
    /// Eviction policy used for every replay.
    policy: Box<dyn ReplacementPolicy<P>>,

    /// Reference trace, fixed between reconfigurations.
    trace: Vec<P>,

    capacity: Capacity,

    /// Record of the most recent replay.
    last: Option<RunResult<P>>,
}

impl<P: Page> Simulator<P> {
    /// Create a simulator around an existing policy instance.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(
        policy: Box<dyn ReplacementPolicy<P>>,
        trace: Vec<P>,
        capacity: usize,
    ) -> Result<Self> {
        let capacity = Capacity::new(capacity)?;
        Ok(Self {
            policy,
            trace,
            capacity,
            last: None,
        })
    }

    /// Create a simulator with a fresh instance of `kind`.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn with_kind(kind: PolicyKind, trace: Vec<P>, capacity: usize) -> Result<Self>
    where
        P: 'static,
    {
        Self::new(kind.build(), trace, capacity)
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Replace the trace used by later replays.
    pub fn set_trace(&mut self, trace: Vec<P>) {
        self.trace = trace;
    }

    /// Change the capacity used by later replays.
    ///
    /// On error the previous capacity is kept.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        self.capacity = Capacity::new(capacity)?;
        Ok(())
    }

    /// Get the trace.
    pub fn trace(&self) -> &[P] {
        &self.trace
    }

    /// Get the capacity.
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Display name of the configured policy.
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    // ========================================================================
    // Replay
    // ========================================================================

    /// Replay the whole trace from an empty frame set.
    ///
    /// The new record replaces the previous one.
    pub fn run(&mut self) -> &RunResult<P> {
        let result = self.policy.run(&self.trace, self.capacity);
        self.last.insert(result)
    }

    /// Record of the most recent replay, if any.
    pub fn result(&self) -> Option<&RunResult<P>> {
        self.last.as_ref()
    }

    /// The trace rendered as one string, e.g. `"ABCA"` for a char trace.
    pub fn reference_string(&self) -> String
    where
        P: fmt::Display,
    {
        self.trace.iter().map(ToString::to_string).collect()
    }
}

impl<P: Page> fmt::Debug for Simulator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("policy", &self.policy.name())
            .field("trace_len", &self.trace.len())
            .field("capacity", &self.capacity)
            .field("has_result", &self.last.is_some())
            .finish()
    }
}

/// Replay the same trace through several policies, one after another.
///
/// Every policy gets a fresh instance; results come back in the order of
/// `kinds`.
///
/// # Errors
/// - `Error::InvalidCapacity` if `capacity` is 0
///
/// # Example
/// ```
/// use pagesim::PolicyKind;
///
/// let trace = pagesim::parse_trace("ABCABDA");
/// let results = pagesim::compare(&trace, 3, &PolicyKind::ALL).unwrap();
///
/// let optimal = results.iter().find(|r| r.kind() == PolicyKind::Optimal).unwrap();
/// assert!(results.iter().all(|r| optimal.fault_count() <= r.fault_count()));
/// ```
pub fn compare<P: Page + 'static>(
    trace: &[P],
    capacity: usize,
    kinds: &[PolicyKind],
) -> Result<Vec<RunResult<P>>> {
    let capacity = Capacity::new(capacity)?;
    Ok(kinds
        .iter()
        .map(|kind| kind.build::<P>().run(trace, capacity))
        .collect())
}

/// Build a character trace from text, ignoring whitespace.
///
/// ```
/// assert_eq!(pagesim::parse_trace("A B\tC"), vec!['A', 'B', 'C']);
/// ```
pub fn parse_trace(text: &str) -> Vec<char> {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;
    use crate::sim::FifoPolicy;

    #[test]
    fn test_simulator_rejects_zero_capacity() {
        let err = Simulator::with_kind(PolicyKind::Lru, parse_trace("AB"), 0).unwrap_err();
        assert_eq!(err, Error::InvalidCapacity(0));
    }

    #[test]
    fn test_set_capacity_keeps_previous_on_error() {
        let mut sim = Simulator::new(Box::new(FifoPolicy::new()), parse_trace("AB"), 2).unwrap();

        assert_eq!(sim.set_capacity(0), Err(Error::InvalidCapacity(0)));
        assert_eq!(sim.capacity().get(), 2);

        sim.set_capacity(1).unwrap();
        assert_eq!(sim.run().capacity().get(), 1);
    }

    #[test]
    fn test_run_stores_result() {
        let mut sim = Simulator::with_kind(PolicyKind::Clock, parse_trace("ABA"), 2).unwrap();
        assert!(sim.result().is_none());

        let hits = sim.run().hit_count();
        assert_eq!(hits, 1);
        assert_eq!(sim.result().map(RunResult::hit_count), Some(1));
        assert_eq!(sim.policy_name(), "Clock");
    }

    #[test]
    fn test_set_trace_changes_next_run() {
        let mut sim = Simulator::with_kind(PolicyKind::Lpr, parse_trace("AAA"), 2).unwrap();
        assert_eq!(sim.run().hit_count(), 2);

        sim.set_trace(parse_trace("ABC"));
        assert_eq!(sim.run().hit_count(), 0);
        assert_eq!(sim.trace(), &['A', 'B', 'C']);
    }

    #[test]
    fn test_reference_string() {
        let sim = Simulator::with_kind(PolicyKind::Fifo, vec![1u8, 2, 3], 2).unwrap();
        assert_eq!(sim.reference_string(), "123");
    }

    #[test]
    fn test_compare_preserves_order() {
        let kinds = [PolicyKind::Lpr, PolicyKind::Fifo];
        let results = compare(&parse_trace("ABC"), 2, &kinds).unwrap();

        let names: Vec<&str> = results.iter().map(RunResult::name).collect();
        assert_eq!(names, vec!["LPR", "FIFO"]);
    }

    #[test]
    fn test_compare_rejects_zero_capacity() {
        assert_eq!(
            compare(&parse_trace("ABC"), 0, &PolicyKind::ALL),
            Err(Error::InvalidCapacity(0))
        );
    }

    #[test]
    fn test_parse_trace_skips_whitespace() {
        assert_eq!(parse_trace(" A\nB  C "), vec!['A', 'B', 'C']);
        assert!(parse_trace("   ").is_empty());
    }
}
