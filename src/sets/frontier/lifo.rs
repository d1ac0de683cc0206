use crate::{search::NodeId, sets::frontier::Frontier};

/// Last-in-first-out frontier used by depth-first search.
///
/// Neighbor batches are pushed back to front, so the first stored neighbor is
/// the next one popped. This gives DFS the same left-to-right neighbor
/// priority as BFS.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl Frontier for LifoFrontier {
    fn seeded(start: NodeId) -> Self {
        LifoFrontier { stack: vec![start] }
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn push_neighbors<I>(&mut self, neighbors: I)
    where
        I: DoubleEndedIterator<Item = NodeId>,
    {
        self.stack.extend(neighbors.rev());
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}
