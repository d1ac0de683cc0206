use std::fmt;

use crate::{
    search::{
        AdjacencyGraph,
        graph_algo::{TraversalOutcome, bfs_with_stats, dfs_with_stats},
    },
    statistics::Tally,
};

/// The traversal strategies the benchmark compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    Bfs,
    Dfs,
}

impl Traversal {
    /// Pass `&mut ()` to skip counting.
    pub fn run<T: Tally>(
        self,
        graph: &AdjacencyGraph,
        start: &str,
        target: &str,
        tally: &mut T,
    ) -> TraversalOutcome {
        match self {
            Traversal::Bfs => bfs_with_stats(graph, start, target, tally),
            Traversal::Dfs => dfs_with_stats(graph, start, target, tally),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Traversal::Bfs => "BFS",
            Traversal::Dfs => "DFS",
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
