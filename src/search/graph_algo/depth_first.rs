use crate::{
    search::{
        AdjacencyGraph,
        graph_algo::{TraversalOutcome, traverse},
    },
    sets::frontier::LifoFrontier,
    statistics::Tally,
};

/// Depth-first search from `start`, stopping as soon as `target` is visited.
///
/// Neighbors are explored in their stored order, the same priority BFS uses.
///
/// ```
/// use graphwalk::search::AdjacencyGraph;
/// use graphwalk::search::graph_algo::{TraversalOutcome, dfs};
///
/// let mut graph = AdjacencyGraph::new();
/// graph.add_edge("N_0", "N_1");
/// graph.add_edge("N_0", "N_2");
/// graph.add_edge("N_1", "N_3");
///
/// // N_0, N_1, N_3, then N_2
/// assert_eq!(dfs(&graph, "N_0", "N_2"), TraversalOutcome::Visited(4));
/// ```
pub fn dfs(graph: &AdjacencyGraph, start: &str, target: &str) -> TraversalOutcome {
    dfs_with_stats(graph, start, target, &mut ())
}

pub fn dfs_with_stats<T: Tally>(
    graph: &AdjacencyGraph,
    start: &str,
    target: &str,
    tally: &mut T,
) -> TraversalOutcome {
    traverse::<LifoFrontier, T>(graph, start, target, tally)
}
