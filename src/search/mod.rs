//! Graph representation and traversal.

pub mod graph_algo;

mod adjacency_graph;
mod node;

pub use adjacency_graph::*;
pub use node::*;
