//! Shortest-path result type.

use serde::{Deserialize, Serialize};

/// Result of a shortest-path query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPath {
    /// Node indices from start to end, both inclusive.
    pub path: Vec<usize>,

    /// Total path weight: the end node's finalized tentative distance,
    /// which equals the sum of the path's edge weights.
    pub total_weight: f32,

    /// Number of nodes settled before the end node was reached.
    pub nodes_settled: usize,
}

impl ShortestPath {
    /// Number of nodes on the path.
    #[must_use]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Number of edges on the path.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
