//! Page replacement simulation.
//!
//! A replay feeds a reference trace through one eviction policy and
//! records, per position, whether the page was resident and what the frame
//! set looked like afterwards.
//!
//! # Components
//! - [`Simulator`] - Owns a policy, a trace and a capacity; runs replays
//! - [`Frame`] - A resident-page slot with a recency bit
//! - [`RunResult`] - Counts plus the per-step history of one replay
//! - [`policy`] - The eviction policies

mod frame;
pub mod policy;
mod result;
mod simulator;

pub use frame::Frame;
pub use policy::{
    Access, ClockPolicy, FifoPolicy, LprPolicy, LruPolicy, OptimalPolicy, PolicyKind,
    ReplacementPolicy, TransitionTable,
};
pub use result::{RunResult, StepLabel, StepOutcome};
pub use simulator::{compare, parse_trace, Simulator};
