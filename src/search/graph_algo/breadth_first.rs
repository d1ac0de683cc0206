use crate::{
    search::{
        AdjacencyGraph,
        graph_algo::{TraversalOutcome, traverse},
    },
    sets::frontier::FifoFrontier,
    statistics::Tally,
};

/// Breadth-first search from `start`, stopping as soon as `target` is visited.
///
/// Returns the number of nodes visited up to and including the target, which
/// is one more than the hop distance between the two.
///
/// ```
/// use graphwalk::search::AdjacencyGraph;
/// use graphwalk::search::graph_algo::{TraversalOutcome, bfs};
///
/// let mut graph = AdjacencyGraph::new();
/// graph.add_edge("N_0", "N_1");
/// graph.add_edge("N_1", "N_2");
///
/// assert_eq!(bfs(&graph, "N_0", "N_2"), TraversalOutcome::Visited(3));
/// ```
pub fn bfs(graph: &AdjacencyGraph, start: &str, target: &str) -> TraversalOutcome {
    bfs_with_stats(graph, start, target, &mut ())
}

pub fn bfs_with_stats<T: Tally>(
    graph: &AdjacencyGraph,
    start: &str,
    target: &str,
    tally: &mut T,
) -> TraversalOutcome {
    traverse::<FifoFrontier, T>(graph, start, target, tally)
}
