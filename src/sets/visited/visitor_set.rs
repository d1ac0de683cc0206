use crate::search::NodeId;

/// Tracks which nodes a single traversal has already expanded.
pub trait VisitorSet {
    fn contains(&self, id: NodeId) -> bool;

    /// Marks `id` visited. Returns `false` if it already was.
    fn insert(&mut self, id: NodeId) -> bool;

    /// Number of distinct nodes marked so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
