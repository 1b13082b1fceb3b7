//! pagesim - A page replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   trace: [A B C A D ...]          capacity: 3                   │
//! │                   ↓                    ↓                        │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Simulator (sim/)                         │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  Policies: FIFO | LRU | Optimal | Clock | LPR   │   │   │
//! │  │   │       (one boxed ReplacementPolicy per run)     │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │        Frame set + per-policy bookkeeping               │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │   RunResult: hits, faults, per-step hit flag + snapshot │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Page, Capacity, Error, config)
//! - [`sim`] - Frames, eviction policies, the driver and run results
//!
//! # Quick Start
//! ```
//! use pagesim::{PolicyKind, Simulator};
//!
//! let trace = pagesim::parse_trace("ABCABDA");
//! let mut sim = Simulator::with_kind(PolicyKind::Optimal, trace, 3).unwrap();
//!
//! let result = sim.run();
//! assert_eq!(result.hit_count(), 3);
//! assert_eq!(result.fault_count(), 4);
//! println!("{}", result); // Optimal { hits: 3, faults: 4, hit_rate: 42.86% }
//! ```

pub mod common;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_CAPACITY, MIN_CAPACITY};
pub use common::{Capacity, Error, Page, Result};

pub use sim::{
    compare, parse_trace, Access, ClockPolicy, FifoPolicy, Frame, LprPolicy, LruPolicy,
    OptimalPolicy, PolicyKind, ReplacementPolicy, RunResult, Simulator, StepLabel, StepOutcome,
    TransitionTable,
};
