use std::collections::VecDeque;

use hashbrown::HashMap;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::search::{
    AdjacencyGraph,
    graph_algo::{TraversalOutcome, bfs, dfs},
};

fn random_graph(seed: u64, nodes: usize, edges: usize) -> AdjacencyGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = AdjacencyGraph::new();
    for i in 0..nodes {
        graph.intern(&format!("N_{i}"));
    }
    for _ in 0..edges {
        let a = rng.random_range(0..nodes);
        let b = rng.random_range(0..nodes);
        graph.add_edge(&format!("N_{a}"), &format!("N_{b}"));
    }
    graph
}

/// Hop distance from `start` to every reachable label.
fn hop_distances<'g>(graph: &'g AdjacencyGraph, start: &str) -> HashMap<&'g str, usize> {
    let mut distances = HashMap::new();
    let Some(start_id) = graph.node_id(start) else {
        return distances;
    };
    distances.insert(graph.label(start_id), 0);
    let mut queue = VecDeque::from([start_id]);
    while let Some(current) = queue.pop_front() {
        let next = distances[graph.label(current)] + 1;
        for &neighbor in graph.neighbors(current) {
            let label = graph.label(neighbor);
            if !distances.contains_key(label) {
                distances.insert(label, next);
                queue.push_back(neighbor);
            }
        }
    }
    distances
}

const SEEDS: u64 = 40;

#[test]
fn reachability_agrees_between_strategies() {
    for seed in 0..SEEDS {
        let graph = random_graph(seed, 30, 25);
        let reachable = hop_distances(&graph, "N_0");
        for target in graph.labels() {
            let expected = reachable.contains_key(target);
            assert_eq!(bfs(&graph, "N_0", target).is_reachable(), expected, "seed {seed} target {target}");
            assert_eq!(dfs(&graph, "N_0", target).is_reachable(), expected, "seed {seed} target {target}");
        }
    }
}

#[test]
fn start_equals_target_is_one() {
    for seed in 0..SEEDS {
        let graph = random_graph(seed, 20, 30);
        for label in graph.labels() {
            assert_eq!(bfs(&graph, label, label), TraversalOutcome::Visited(1));
            assert_eq!(dfs(&graph, label, label), TraversalOutcome::Visited(1));
        }
    }
}

#[test]
fn visited_counts_are_bounded() {
    for seed in 0..SEEDS {
        let graph = random_graph(seed, 40, 60);
        let distances = hop_distances(&graph, "N_0");
        let component = distances.len();
        for (&target, &hops) in &distances {
            let bfs_count = bfs(&graph, "N_0", target).visited_count().unwrap();
            let dfs_count = dfs(&graph, "N_0", target).visited_count().unwrap();
            // every node closer than the target is visited first
            assert!(bfs_count > hops, "seed {seed} target {target}");
            assert!(bfs_count <= component, "seed {seed} target {target}");
            assert!(dfs_count > hops, "seed {seed} target {target}");
            assert!(dfs_count <= component, "seed {seed} target {target}");
        }
    }
}

#[test]
fn bfs_on_path_counts_hops_plus_one() {
    let lines: Vec<String> = (0..50).map(|i| format!("N_{i},N_{}", i + 1)).collect();
    let graph = AdjacencyGraph::from_edge_lines(&lines).unwrap();
    for i in 0..=50 {
        let target = format!("N_{i}");
        assert_eq!(bfs(&graph, "N_0", &target), TraversalOutcome::Visited(i + 1));
        assert_eq!(dfs(&graph, "N_0", &target), TraversalOutcome::Visited(i + 1));
    }
}

#[test]
fn repeated_calls_are_identical() {
    for seed in 0..SEEDS {
        let graph = random_graph(seed, 25, 35);
        for target in graph.labels() {
            assert_eq!(bfs(&graph, "N_0", target), bfs(&graph, "N_0", target));
            assert_eq!(dfs(&graph, "N_0", target), dfs(&graph, "N_0", target));
        }
    }
}

#[test]
fn built_graphs_are_symmetric_and_duplicate_free() {
    for seed in 0..SEEDS {
        let graph = random_graph(seed, 15, 60);
        for label in graph.labels() {
            let neighbors = graph.neighbor_labels(label).unwrap();
            for (i, &neighbor) in neighbors.iter().enumerate() {
                assert!(!neighbors[..i].contains(&neighbor), "duplicate {neighbor} under {label}");
                assert!(graph.neighbor_labels(neighbor).unwrap().contains(&label));
            }
        }
    }
}
