//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - The [`Page`] symbol bound and the validated [`Capacity`]

pub mod config;
pub mod error;
mod capacity;
mod page;

pub use capacity::Capacity;
pub use error::{Error, Result};
pub use page::Page;
