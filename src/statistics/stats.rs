/// Counters accumulated over traversal calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    traversals: usize,
    unreachable: usize,
    nodes_visited: usize,
    frontier_pushes: usize,
    stale_pops: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            traversals: 0,
            unreachable: 0,
            nodes_visited: 0,
            frontier_pushes: 0,
            stale_pops: 0,
        }
    }

    /// Record that a traversal finished, and whether it reached its target.
    pub fn bump_traversals(&mut self, reached: bool) {
        self.traversals += 1;
        if !reached {
            self.unreachable += 1;
        }
    }

    /// Record that a node was marked visited.
    pub fn bump_visited(&mut self) {
        self.nodes_visited += 1
    }

    /// Record that `amount` entries were added to a frontier.
    pub fn bump_pushes(&mut self, amount: usize) {
        self.frontier_pushes += amount
    }

    /// Record that a popped entry was discarded because its node was already visited.
    pub fn bump_stale_pops(&mut self) {
        self.stale_pops += 1
    }

    pub fn get_traversals(&self) -> usize {
        self.traversals
    }

    pub fn get_unreachable(&self) -> usize {
        self.unreachable
    }

    pub fn get_nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    pub fn get_frontier_pushes(&self) -> usize {
        self.frontier_pushes
    }

    pub fn get_stale_pops(&self) -> usize {
        self.stale_pops
    }

    /// Average visited nodes per traversal, 0 when nothing ran.
    pub fn mean_visited(&self) -> f64 {
        if self.traversals == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / self.traversals as f64
        }
    }
}

/// Receives the events of a traversal. `()` ignores them, so an untallied
/// traversal compiles down to the bare search.
pub trait Tally {
    fn traversal_finished(&mut self, reached: bool);
    fn node_visited(&mut self);
    fn frontier_pushed(&mut self, amount: usize);
    fn stale_popped(&mut self);
}

impl Tally for Stats {
    fn traversal_finished(&mut self, reached: bool) {
        self.bump_traversals(reached)
    }

    fn node_visited(&mut self) {
        self.bump_visited()
    }

    fn frontier_pushed(&mut self, amount: usize) {
        self.bump_pushes(amount)
    }

    fn stale_popped(&mut self) {
        self.bump_stale_pops()
    }
}

impl Tally for () {
    fn traversal_finished(&mut self, _reached: bool) {}
    fn node_visited(&mut self) {}
    fn frontier_pushed(&mut self, _amount: usize) {}
    fn stale_popped(&mut self) {}
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}
