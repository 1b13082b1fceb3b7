//! Transition frequency table for the LPR policy.

use std::collections::HashMap;

use crate::common::Page;

/// Counts how often page `to` immediately followed page `from`.
///
/// Rows are keyed by the preceding page; each row maps successor pages to
/// occurrence counts. Only history is ever recorded, never lookahead.
///
/// # Example
/// ```
/// use pagesim::TransitionTable;
///
/// let mut table = TransitionTable::new();
/// table.observe(&'A', &'B');
/// table.observe(&'A', &'B');
/// table.observe(&'A', &'C');
///
/// assert_eq!(table.total(&'A'), 3);
/// assert_eq!(table.probability(&'A', &'B'), Some(2.0 / 3.0));
/// assert_eq!(table.probability(&'A', &'D'), Some(0.0));
/// assert_eq!(table.probability(&'B', &'A'), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable<P: Page> {
    rows: HashMap<P, HashMap<P, u64>>,
}

impl<P: Page> TransitionTable<P> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Record that `to` was referenced right after `from`.
    pub fn observe(&mut self, from: &P, to: &P) {
        *self
            .rows
            .entry(from.clone())
            .or_default()
            .entry(to.clone())
            .or_insert(0) += 1;
    }

    /// Number of times `to` followed `from`.
    pub fn count(&self, from: &P, to: &P) -> u64 {
        self.rows
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(0)
    }

    /// Number of observed successors of `from`.
    pub fn total(&self, from: &P) -> u64 {
        self.rows.get(from).map_or(0, |row| row.values().sum())
    }

    /// Empirical probability that `to` follows `from`.
    ///
    /// Returns None when `from` has no recorded successors, since there is
    /// nothing to estimate from. A successor never seen after `from` has
    /// probability 0.
    pub fn probability(&self, from: &P, to: &P) -> Option<f64> {
        let total = self.total(from);
        if total == 0 {
            return None;
        }
        Some(self.count(from, to) as f64 / total as f64)
    }

    /// Check if nothing has been observed.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Forget every observation.
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

impl<P: Page> Default for TransitionTable<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observe_and_count() {
        let mut table = TransitionTable::new();
        table.observe(&'A', &'B');
        table.observe(&'A', &'B');
        table.observe(&'B', &'A');

        assert_eq!(table.count(&'A', &'B'), 2);
        assert_eq!(table.count(&'B', &'A'), 1);
        assert_eq!(table.count(&'B', &'B'), 0);
        assert_eq!(table.count(&'C', &'A'), 0);
        assert_eq!(table.total(&'A'), 2);
    }

    #[test]
    fn test_probability_without_history() {
        let table: TransitionTable<char> = TransitionTable::new();
        assert!(table.is_empty());
        assert_eq!(table.total(&'A'), 0);
        assert_eq!(table.probability(&'A', &'B'), None);
    }

    #[test]
    fn test_clear() {
        let mut table = TransitionTable::new();
        table.observe(&1u32, &2u32);
        table.clear();

        assert!(table.is_empty());
        assert_eq!(table.probability(&1, &2), None);
    }
}
