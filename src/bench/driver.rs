use std::{hint::black_box, time::Instant};

use tqdm::tqdm;
use tracing::{debug, info, warn};

use crate::{
    bench::ReportRow,
    search::{
        AdjacencyGraph, compare_labels,
        graph_algo::{Traversal, TraversalOutcome},
    },
    statistics::Stats,
};

/// Start node used when none is given.
pub const DEFAULT_START: &str = "N_0";

/// Every label except `start`, ordered by numeric suffix.
pub fn benchmark_targets<'g>(graph: &'g AdjacencyGraph, start: &str) -> Vec<&'g str> {
    let mut targets: Vec<&str> = graph.labels().filter(|&label| label != start).collect();
    targets.sort_by(|a, b| compare_labels(a, b));
    targets
}

/// Rows in target order plus per-strategy counters.
#[derive(Debug)]
pub struct BenchmarkReport {
    pub rows: Vec<ReportRow>,
    pub bfs_stats: Stats,
    pub dfs_stats: Stats,
}

/// Times BFS against DFS from one start node to every other node.
pub struct Benchmark<'g> {
    graph: &'g AdjacencyGraph,
    start: String,
    progress: bool,
}

impl<'g> Benchmark<'g> {
    pub fn new(graph: &'g AdjacencyGraph, start: impl Into<String>) -> Self {
        Benchmark {
            graph,
            start: start.into(),
            progress: false,
        }
    }

    /// Draw a progress bar on stderr while running.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn run(&self) -> BenchmarkReport {
        if !self.graph.contains(&self.start) {
            warn!(start = %self.start, "start node is not in the graph, every target will be unreachable");
        }

        let targets = benchmark_targets(self.graph, &self.start);
        let mut bfs_stats = Stats::new();
        let mut dfs_stats = Stats::new();
        let mut rows = Vec::with_capacity(targets.len());

        let iter: Box<dyn Iterator<Item = &&str> + '_> = if self.progress {
            Box::new(tqdm(targets.iter()))
        } else {
            Box::new(targets.iter())
        };

        for &target in iter {
            let (bfs, bfs_ms) = self.timed(Traversal::Bfs, target);
            let (dfs, dfs_ms) = self.timed(Traversal::Dfs, target);
            // counted on a separate, untimed pass
            Traversal::Bfs.run(self.graph, &self.start, target, &mut bfs_stats);
            Traversal::Dfs.run(self.graph, &self.start, target, &mut dfs_stats);
            debug!(node = target, %bfs, bfs_ms, %dfs, dfs_ms, "measured pair");

            rows.push(ReportRow {
                start: self.start.clone(),
                target: target.to_string(),
                bfs,
                bfs_ms,
                dfs,
                dfs_ms,
            });
        }

        info!(
            targets = rows.len(),
            bfs_mean_visited = bfs_stats.mean_visited(),
            dfs_mean_visited = dfs_stats.mean_visited(),
            unreachable = bfs_stats.get_unreachable(),
            bfs_pushes = bfs_stats.get_frontier_pushes(),
            dfs_pushes = dfs_stats.get_frontier_pushes(),
            bfs_stale_pops = bfs_stats.get_stale_pops(),
            dfs_stale_pops = dfs_stats.get_stale_pops(),
            "benchmark finished"
        );

        BenchmarkReport {
            rows,
            bfs_stats,
            dfs_stats,
        }
    }

    /// One uncounted traversal under a monotonic clock, elapsed time in milliseconds.
    fn timed(&self, traversal: Traversal, target: &str) -> (TraversalOutcome, f64) {
        let started = Instant::now();
        let outcome = black_box(traversal.run(self.graph, &self.start, target, &mut ()));
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        (outcome, elapsed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::graph_algo::TraversalOutcome::{Unreachable, Visited};

    fn sample_graph() -> AdjacencyGraph {
        AdjacencyGraph::from_edge_lines([
            "N_0,N_10", "N_0,N_2", "N_2,N_1", "N_10,N_3", "N_7,N_8",
        ])
        .unwrap()
    }

    #[test]
    fn test_targets_sorted_numerically_without_start() {
        let graph = sample_graph();
        assert_eq!(
            benchmark_targets(&graph, DEFAULT_START),
            vec!["N_1", "N_2", "N_3", "N_7", "N_8", "N_10"]
        );
    }

    #[test]
    fn test_targets_with_unknown_start_keep_every_node() {
        let graph = sample_graph();
        assert_eq!(benchmark_targets(&graph, "N_99").len(), graph.len());
    }

    #[test]
    fn test_rows_follow_target_order() {
        let graph = sample_graph();
        let report = Benchmark::new(&graph, DEFAULT_START).run();
        let targets: Vec<_> = report.rows.iter().map(|r| r.target.as_str()).collect();
        assert_eq!(targets, benchmark_targets(&graph, DEFAULT_START));
        assert!(report.rows.iter().all(|r| r.start == DEFAULT_START));
    }

    #[test]
    fn test_rows_hold_both_outcomes() {
        let graph = sample_graph();
        let report = Benchmark::new(&graph, DEFAULT_START).run();
        let row = |t: &str| report.rows.iter().find(|r| r.target == t).unwrap();

        // N_0: [N_10, N_2]
        assert_eq!(row("N_10").bfs, Visited(2));
        assert_eq!(row("N_10").dfs, Visited(2));
        assert_eq!(row("N_2").bfs, Visited(3));
        assert_eq!(row("N_2").dfs, Visited(4));
        assert_eq!(row("N_7").bfs, Unreachable);
        assert_eq!(row("N_7").dfs, Unreachable);
        assert!(report.rows.iter().all(|r| r.bfs_ms >= 0.0 && r.dfs_ms >= 0.0));
    }

    #[test]
    fn test_stats_cover_every_target() {
        let graph = sample_graph();
        let report = Benchmark::new(&graph, DEFAULT_START).run();
        assert_eq!(report.bfs_stats.get_traversals(), 6);
        assert_eq!(report.dfs_stats.get_traversals(), 6);
        assert_eq!(report.bfs_stats.get_unreachable(), 2);
        assert_eq!(report.dfs_stats.get_unreachable(), 2);
    }

    #[test]
    fn test_counted_pass_matches_timed_outcomes() {
        let graph = sample_graph();
        let report = Benchmark::new(&graph, DEFAULT_START).run();
        let reached = |outcomes: Vec<TraversalOutcome>| {
            outcomes.iter().filter(|o| o.is_reachable()).count()
        };
        let bfs_reached = reached(report.rows.iter().map(|r| r.bfs).collect());
        let dfs_reached = reached(report.rows.iter().map(|r| r.dfs).collect());
        assert_eq!(
            bfs_reached,
            report.bfs_stats.get_traversals() - report.bfs_stats.get_unreachable()
        );
        assert_eq!(
            dfs_reached,
            report.dfs_stats.get_traversals() - report.dfs_stats.get_unreachable()
        );
        let bfs_visited: usize = report.rows.iter().filter_map(|r| r.bfs.visited_count()).sum();
        assert!(report.bfs_stats.get_nodes_visited() >= bfs_visited);
        assert!(report.bfs_stats.get_frontier_pushes() >= report.bfs_stats.get_nodes_visited());
    }

    #[test]
    fn test_missing_start_reports_all_unreachable() {
        let graph = sample_graph();
        let report = Benchmark::new(&graph, "N_42").run();
        assert_eq!(report.rows.len(), graph.len());
        assert!(
            report
                .rows
                .iter()
                .all(|r| r.bfs == Unreachable && r.dfs == Unreachable)
        );
    }

    #[test]
    fn test_progress_does_not_change_rows() {
        let graph = sample_graph();
        let plain = Benchmark::new(&graph, DEFAULT_START).run();
        let with_bar = Benchmark::new(&graph, DEFAULT_START).with_progress(true).run();
        let outcomes = |r: &BenchmarkReport| {
            r.rows
                .iter()
                .map(|row| (row.target.clone(), row.bfs, row.dfs))
                .collect::<Vec<_>>()
        };
        assert_eq!(outcomes(&plain), outcomes(&with_bar));
    }
}
