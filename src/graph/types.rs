//! Core graph types: nodes, edges, and the owning arena.

/// A directed edge between two nodes, owned by its source node.
///
/// Both endpoints are stored as indices into the graph's node arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Index of the node this edge leaves.
    pub source: usize,
    /// Index of the node this edge enters.
    pub target: usize,
    /// Edge weight; strictly positive and finite once constructed.
    pub weight: f32,
}

/// One graph vertex.
///
/// `weight` and `predecessor` are the only fields that mutate after
/// construction, and only during a single shortest-path run.
#[derive(Debug, Clone)]
pub struct Node {
    /// Position in the original matrix, assigned at construction.
    pub index: usize,
    /// Tentative distance from the start node: `0.0` for the start node,
    /// `f32::INFINITY` until a relaxation reaches this node. Monotonically
    /// non-increasing over a run; final once the node is settled.
    pub weight: f32,
    /// Outgoing edges in matrix column order.
    pub edges: Vec<Edge>,
    /// Index of the node the current best path arrives from; `None` until
    /// a relaxation first improves this node.
    pub predecessor: Option<usize>,
}

impl Node {
    pub(crate) fn new(index: usize, weight: f32) -> Self {
        Self {
            index,
            weight,
            edges: Vec::new(),
            predecessor: None,
        }
    }
}

/// A directed graph built from a dense adjacency matrix, owning its nodes.
///
/// The start and end indices of the query are fixed at construction, and a
/// graph serves exactly one query: [`Graph::shortest_path`] consumes the
/// graph, so stale tentative distances can never leak into a second run.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl Graph {
    /// Number of nodes (the matrix dimension).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edges across all nodes.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    /// The query's start node index.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The query's end node index.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Borrow a node by index.
    ///
    /// # Panics
    /// Panics if `index` is out of range; indices obtained from this graph's
    /// own edges and results are always valid.
    #[must_use]
    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }
}
