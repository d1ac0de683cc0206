use std::collections::VecDeque;

use crate::{search::NodeId, sets::frontier::Frontier};

/// First-in-first-out frontier used by breadth-first search.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl Frontier for FifoFrontier {
    fn seeded(start: NodeId) -> Self {
        FifoFrontier {
            queue: VecDeque::from([start]),
        }
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn push_neighbors<I>(&mut self, neighbors: I)
    where
        I: DoubleEndedIterator<Item = NodeId>,
    {
        self.queue.extend(neighbors);
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
