//! Per-traversal bookkeeping structures.
//!
//! Every traversal call builds and owns one of each, so calls never share
//! state.
//!
//! # Submodules
//!
//! - [`frontier`]: FIFO queue and LIFO stack frontiers behind the [`frontier::Frontier`] trait
//! - [`visited`]: Bitmap-based visited node tracking

pub mod frontier;
pub mod visited;
