//! Pending-node containers for graph traversals.

mod fifo;
mod lifo;
mod pending;

pub use fifo::*;
pub use lifo::*;
pub use pending::*;
