use crate::{search::NodeId, sets::visited::VisitorSet};

/// A fixed-capacity visited set, one bit per node id, packed into `u64` words.
///
/// # Examples
///
/// ```
/// use graphwalk::search::NodeId;
/// use graphwalk::sets::visited::{VisitedBitset, VisitorSet};
///
/// let mut visited = VisitedBitset::new(10);
/// assert!(!visited.contains(NodeId::new(3)));
///
/// assert!(visited.insert(NodeId::new(3)));
/// assert!(!visited.insert(NodeId::new(3)));
/// assert_eq!(visited.len(), 1);
/// ```
pub struct VisitedBitset {
    words: Box<[u64]>,
    capacity: usize,
    count: usize,
}

impl VisitedBitset {
    /// Constructs a set with room for ids `0..capacity`, all unvisited.
    pub fn new(capacity: usize) -> Self {
        VisitedBitset {
            words: vec![0u64; capacity.div_ceil(64)].into_boxed_slice(),
            capacity,
            count: 0,
        }
    }

    fn locate(&self, id: NodeId) -> (usize, u64) {
        assert!(id.internal < self.capacity);
        (id.internal / 64, 1u64 << (id.internal % 64))
    }
}

impl VisitorSet for VisitedBitset {
    /// # Panics
    ///
    /// Panics if `id` is outside the capacity.
    fn contains(&self, id: NodeId) -> bool {
        let (word, mask) = self.locate(id);
        self.words[word] & mask != 0
    }

    /// # Panics
    ///
    /// Panics if `id` is outside the capacity.
    fn insert(&mut self, id: NodeId) -> bool {
        let (word, mask) = self.locate(id);
        let fresh = self.words[word] & mask == 0;
        self.words[word] |= mask;
        self.count += fresh as usize;
        fresh
    }

    fn len(&self) -> usize {
        self.count
    }
}
