//! Graph traversal algorithms.
//!
//! Breadth-first and depth-first search share one lazy-deletion traversal and
//! differ only in the frontier they plug into it.

mod breadth_first;
mod depth_first;
mod search_algorithm;
mod strategy;

pub use breadth_first::*;
pub use depth_first::*;
pub use search_algorithm::*;
pub use strategy::*;

#[cfg(test)]
mod properties;
