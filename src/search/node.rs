use std::{cmp::Ordering, fmt::Debug};

/// Dense index of a node inside an [`AdjacencyGraph`](crate::search::AdjacencyGraph).
///
/// Ids are handed out in first-seen order while the graph is built, so they
/// are always valid indices into the graph's node storage.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NodeId {
    pub internal: usize,
}

impl NodeId {
    pub fn new(internal: usize) -> Self {
        NodeId { internal }
    }
}

/// A single vertex: its label and its neighbors in first-insertion order.
pub struct Node {
    pub label: String,
    pub neighbors: Vec<NodeId>,
}

impl Node {
    pub fn new(label: String) -> Self {
        Node {
            label,
            neighbors: Vec::new(),
        }
    }

    /// Appends `neighbor` unless it is already present. Returns whether it was added.
    pub fn link(&mut self, neighbor: NodeId) -> bool {
        if self.neighbors.contains(&neighbor) {
            false
        } else {
            self.neighbors.push(neighbor);
            true
        }
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("label", &self.label)
            .field("neighbors", &self.neighbors)
            .finish()
    }
}

/// Numeric suffix of a `prefix_index` label, e.g. `3` for `"N_3"`.
///
/// Only used to order report rows; graph semantics never look at it.
///
/// ```
/// use graphwalk::search::label_index;
///
/// assert_eq!(label_index("N_12"), Some(12));
/// assert_eq!(label_index("hub"), None);
/// ```
pub fn label_index(label: &str) -> Option<u64> {
    label
        .rsplit_once('_')
        .and_then(|(_, suffix)| suffix.parse().ok())
}

/// Display ordering of labels: numbered labels ascending by suffix, then the
/// rest by text. Ties on the suffix fall back to the text as well.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    match (label_index(a), label_index(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
