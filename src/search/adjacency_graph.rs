use hashbrown::HashMap;

use crate::search::node::{Node, NodeId};

/// In-memory undirected graph keyed by string labels.
///
/// # Invariants
/// - `adjacency[i]` represents node `NodeId { internal: i }`.
/// - Every neighbor entry is a valid index into `adjacency`.
/// - Symmetric: if `b` is a neighbor of `a`, `a` is a neighbor of `b`.
/// - Neighbor lists hold no duplicates and keep first-insertion order, which
///   decides traversal tie-breaking.
#[derive(Debug, Default)]
pub struct AdjacencyGraph {
    adjacency: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `label`, creating an isolated node if it is new.
    pub fn intern(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = NodeId::new(self.adjacency.len());
        self.adjacency.push(Node::new(label.to_string()));
        self.index.insert(label.to_string(), id);
        id
    }

    /// Adds the undirected edge `a - b`. Both endpoints are created if needed
    /// and each is appended to the other's neighbor list unless already there.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        let a = self.intern(a);
        let b = self.intern(b);
        self.adjacency[a.internal].link(b);
        self.adjacency[b.internal].link(a);
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// # Panics
    /// If `id` does not belong to this graph.
    pub fn label(&self, id: NodeId) -> &str {
        &self.adjacency[id.internal].label
    }

    /// # Panics
    /// If `id` does not belong to this graph.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.adjacency[id.internal].neighbors
    }

    /// Neighbor labels of `label` in stored order, or `None` for an unknown label.
    pub fn neighbor_labels(&self, label: &str) -> Option<Vec<&str>> {
        let id = self.node_id(label)?;
        Some(
            self.neighbors(id)
                .iter()
                .map(|&neighbor| self.label(neighbor))
                .collect(),
        )
    }

    /// All labels in first-seen order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.adjacency.iter().map(|node| node.label.as_str())
    }

    /// Number of distinct undirected edges. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        let (endpoints, loops) = self
            .adjacency
            .iter()
            .enumerate()
            .fold((0, 0), |(endpoints, loops), (i, node)| {
                let is_loop = node.neighbors.contains(&NodeId::new(i));
                (endpoints + node.neighbors.len(), loops + is_loop as usize)
            });
        (endpoints + loops) / 2
    }
}
