//! Run results - the output of one replay.
//!
//! A [`RunResult`] is built once per replay by a [`RunRecorder`] and is
//! immutable afterwards. It keeps the full per-step history so a
//! presentation layer can jump to any past step without replaying.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::common::{Capacity, Page};
use crate::sim::policy::{Access, PolicyKind};

/// Outcome of one trace position.
///
/// Reflects the frame set *after* the position was processed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StepOutcome<P> {
    /// The page referenced at this position.
    pub page: P,

    /// Whether the page was already resident.
    pub hit: bool,

    /// The page evicted to make room, if the fault hit a full frame set.
    pub evicted: Option<P>,

    /// Resident pages in frame-set order.
    pub snapshot: Vec<P>,
}

/// Three-way classification of a step, as shown by result viewers.
///
/// Derived purely from the step's hit flag and the size of the previous
/// snapshot, see [`RunResult::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepLabel {
    /// The page was resident.
    Hit,

    /// The page was missing and the frame set still had room.
    Fault,

    /// The page was missing and the frame set was already full, so another
    /// page had to move out.
    Migrated,
}

impl fmt::Display for StepLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StepLabel::Hit => "Hit",
            StepLabel::Fault => "Fault",
            StepLabel::Migrated => "Migrated",
        };
        f.write_str(label)
    }
}

/// The record of one complete replay.
///
/// # Invariants
/// - `hit_count() + fault_count() == len()`
/// - every snapshot holds at most `capacity()` pages
///
/// # Example
/// ```
/// use pagesim::{Capacity, FifoPolicy, ReplacementPolicy};
///
/// let trace: Vec<char> = "ABCA".chars().collect();
/// let mut fifo = FifoPolicy::new();
/// let result = fifo.run(&trace, Capacity::new(3).unwrap());
///
/// assert_eq!(result.hit_count(), 1);
/// assert_eq!(result.fault_count(), 3);
/// assert_eq!(result.snapshots()[3], &['A', 'B', 'C']);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RunResult<P> {
    kind: PolicyKind,
    capacity: Capacity,
    hit_count: usize,
    fault_count: usize,
    steps: Vec<StepOutcome<P>>,
}

impl<P: Page> RunResult<P> {
    // ========================================================================
    // Aggregates
    // ========================================================================

    /// Display name of the policy that produced this record.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The policy that produced this record.
    pub fn kind(&self) -> PolicyKind {
        self.kind
    }

    /// Frame set capacity the replay ran with.
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Number of references satisfied from resident pages.
    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    /// Number of references that had to bring a page in.
    pub fn fault_count(&self) -> usize {
        self.fault_count
    }

    /// Number of trace positions replayed.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the replayed trace was empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.steps.is_empty() {
            0.0
        } else {
            self.hit_count as f64 / self.steps.len() as f64
        }
    }

    // ========================================================================
    // Per-step history
    // ========================================================================

    /// All step outcomes, in trace order.
    pub fn steps(&self) -> &[StepOutcome<P>] {
        &self.steps
    }

    /// Get the outcome at `index`.
    pub fn step(&self, index: usize) -> Option<&StepOutcome<P>> {
        self.steps.get(index)
    }

    /// Hit (`true`) or fault (`false`) per position.
    pub fn hit_history(&self) -> Vec<bool> {
        self.steps.iter().map(|step| step.hit).collect()
    }

    /// Frame set contents after each position.
    pub fn snapshots(&self) -> Vec<&[P]> {
        self.steps.iter().map(|step| step.snapshot.as_slice()).collect()
    }

    /// Classify the step at `index`.
    ///
    /// A fault counts as [`StepLabel::Migrated`] when the snapshot of the
    /// previous step already held `capacity` pages. The first step has no
    /// previous snapshot and is never migrated.
    pub fn label(&self, index: usize) -> Option<StepLabel> {
        let step = self.steps.get(index)?;
        if step.hit {
            return Some(StepLabel::Hit);
        }

        let was_full = index
            .checked_sub(1)
            .and_then(|prev| self.steps.get(prev))
            .is_some_and(|prev| prev.snapshot.len() == self.capacity.get());

        Some(if was_full {
            StepLabel::Migrated
        } else {
            StepLabel::Fault
        })
    }

    /// Labels for every step.
    pub fn labels(&self) -> Vec<StepLabel> {
        (0..self.steps.len())
            .filter_map(|index| self.label(index))
            .collect()
    }

    /// CRC32 over the entire record.
    ///
    /// Two records with the same checksum are, for all practical purposes,
    /// identical. The value is stable for a given build and platform only,
    /// since it is fed through each page type's `Hash` impl.
    pub fn checksum(&self) -> u32 {
        let mut hasher = Crc32Hasher::new();
        self.hash(&mut hasher);
        hasher.finalize()
    }
}

impl<P: Page> fmt::Display for RunResult<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ hits: {}, faults: {}, hit_rate: {:.2}% }}",
            self.name(),
            self.hit_count,
            self.fault_count,
            self.hit_rate() * 100.0
        )
    }
}

/// Adapts `crc32fast` to `std::hash::Hasher` so derived `Hash` impls can
/// feed it.
struct Crc32Hasher(crc32fast::Hasher);

impl Crc32Hasher {
    fn new() -> Self {
        Crc32Hasher(crc32fast::Hasher::new())
    }

    fn finalize(self) -> u32 {
        self.0.finalize()
    }
}

impl Hasher for Crc32Hasher {
    fn write(&mut self, bytes: &[u8]) {
        self.0.update(bytes);
    }

    fn finish(&self) -> u64 {
        u64::from(self.0.clone().finalize())
    }
}

/// Accumulates step outcomes during a replay.
pub(crate) struct RunRecorder<P> {
    kind: PolicyKind,
    capacity: Capacity,
    hit_count: usize,
    fault_count: usize,
    steps: Vec<StepOutcome<P>>,
}

impl<P: Page> RunRecorder<P> {
    pub(crate) fn new(kind: PolicyKind, capacity: Capacity, trace_len: usize) -> Self {
        Self {
            kind,
            capacity,
            hit_count: 0,
            fault_count: 0,
            steps: Vec::with_capacity(trace_len),
        }
    }

    /// Record the outcome of one position.
    ///
    /// # Panics
    /// Panics if `snapshot` holds more pages than the capacity allows.
    pub(crate) fn record(&mut self, page: P, access: Access<P>, snapshot: Vec<P>) {
        assert!(
            snapshot.len() <= self.capacity.get(),
            "{} holds {} pages with capacity {}",
            self.kind,
            snapshot.len(),
            self.capacity.get()
        );

        let (hit, evicted) = match access {
            Access::Hit => {
                self.hit_count += 1;
                (true, None)
            }
            Access::Fault { evicted } => {
                self.fault_count += 1;
                (false, evicted)
            }
        };

        self.steps.push(StepOutcome {
            page,
            hit,
            evicted,
            snapshot,
        });
    }

    pub(crate) fn finish(self) -> RunResult<P> {
        RunResult {
            kind: self.kind,
            capacity: self.capacity,
            hit_count: self.hit_count,
            fault_count: self.fault_count,
            steps: self.steps,
        }
    }
}
