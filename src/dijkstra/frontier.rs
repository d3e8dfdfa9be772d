//! Frontier priority queue entry.
//!
//! Implements ordering for `BinaryHeap` min-heap behavior.

use std::cmp::Ordering;

/// Entry in the frontier priority queue.
///
/// Uses reverse ordering so the standard max-heap pops the entry with the
/// smallest tentative distance first. Entries with equal distance compare by
/// node index, lowest first, which reproduces the deterministic tie-break of
/// a first-minimum linear scan in index order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierEntry {
    /// Node index in the graph arena.
    pub index: usize,
    /// Tentative distance at the time this entry was pushed. Stale entries
    /// (superseded by a later relaxation) are skipped on pop.
    pub weight: f32,
}

impl FrontierEntry {
    pub fn new(index: usize, weight: f32) -> Self {
        Self { index, weight }
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.weight == other.weight
    }
}

// Weights come from validated finite non-negative matrix entries, so they
// are never NaN and the ordering is total.
impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse both comparisons for min-heap behavior: smallest weight
        // pops first, and on ties the smallest index pops first.
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.index.cmp(&self.index))
    }
}
