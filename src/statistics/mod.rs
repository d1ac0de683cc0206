//! Counters collected while benchmarking traversals.
//!
//! This module tracks how many traversals ran, how many nodes they visited,
//! and how much work the lazy-deletion frontiers did.

mod stats;
pub use stats::*;
