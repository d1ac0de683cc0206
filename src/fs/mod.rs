//! Loading graphs from edge-list text files.
//!
//! Each line holds one undirected edge, `NODE_A,NODE_B`, with optional
//! whitespace around either label.

mod edge_load;

pub use edge_load::*;
