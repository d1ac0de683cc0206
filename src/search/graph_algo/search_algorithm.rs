use std::fmt;

use serde::{Serialize, Serializer};

use crate::{
    search::{AdjacencyGraph, NodeId},
    sets::{
        frontier::Frontier,
        visited::{VisitedBitset, VisitorSet},
    },
    statistics::Tally,
};

/// Result of a single start-to-target traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOutcome {
    /// The target was reached after marking this many nodes visited,
    /// the start node and the target included.
    Visited(usize),
    /// The frontier ran dry before the target was visited.
    Unreachable,
}

impl TraversalOutcome {
    pub fn visited_count(self) -> Option<usize> {
        match self {
            TraversalOutcome::Visited(count) => Some(count),
            TraversalOutcome::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, TraversalOutcome::Visited(_))
    }
}

/// Serializes as the visited count, or `null` when unreachable.
impl Serialize for TraversalOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.visited_count().serialize(serializer)
    }
}

impl fmt::Display for TraversalOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalOutcome::Visited(count) => write!(f, "{count}"),
            TraversalOutcome::Unreachable => f.write_str("-"),
        }
    }
}

/// Short-circuiting search from `start` towards `target`, with the visiting
/// order decided by the frontier type `F`.
///
/// Labels missing from the graph behave like nodes without neighbors: an
/// unknown start is visited on its own and reaches nothing else, and an
/// unknown target is only reached when it equals the start.
pub fn traverse<F: Frontier, T: Tally>(
    graph: &AdjacencyGraph,
    start: &str,
    target: &str,
    tally: &mut T,
) -> TraversalOutcome {
    let outcome = match graph.node_id(start) {
        Some(start_id) => walk::<F, T>(graph, start_id, graph.node_id(target), tally),
        None => {
            tally.frontier_pushed(1);
            tally.node_visited();
            if start == target {
                TraversalOutcome::Visited(1)
            } else {
                TraversalOutcome::Unreachable
            }
        }
    };
    tally.traversal_finished(outcome.is_reachable());
    outcome
}

fn walk<F: Frontier, T: Tally>(
    graph: &AdjacencyGraph,
    start: NodeId,
    target: Option<NodeId>,
    tally: &mut T,
) -> TraversalOutcome {
    let mut visited = VisitedBitset::new(graph.len());
    let mut frontier = F::seeded(start);
    tally.frontier_pushed(1);

    while let Some(current) = frontier.pop() {
        // lazy deletion: a node can be queued several times before its first pop
        if !visited.insert(current) {
            tally.stale_popped();
            continue;
        }
        tally.node_visited();

        if Some(current) == target {
            return TraversalOutcome::Visited(visited.len());
        }

        let before = frontier.len();
        frontier.push_neighbors(
            graph
                .neighbors(current)
                .iter()
                .copied()
                .filter(|&neighbor| !visited.contains(neighbor)),
        );
        tally.frontier_pushed(frontier.len() - before);
    }

    TraversalOutcome::Unreachable
}
