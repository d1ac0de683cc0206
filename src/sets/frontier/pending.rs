use crate::search::NodeId;

/// The pending-node container that decides a traversal's visiting order.
///
/// Entries are not deduplicated: a node may sit in the frontier several times
/// and stale copies are discarded when popped.
pub trait Frontier {
    fn seeded(start: NodeId) -> Self;

    fn pop(&mut self) -> Option<NodeId>;

    /// Adds the given neighbors, which arrive in stored order. Implementations
    /// arrange them so that `pop` yields them in that same order.
    fn push_neighbors<I>(&mut self, neighbors: I)
    where
        I: DoubleEndedIterator<Item = NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
