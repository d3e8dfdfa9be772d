//! Single-target Dijkstra shortest paths over dense adjacency matrices.
//!
//! This crate computes the minimum-total-weight path between two nodes of a
//! weighted directed graph given as a dense `N×N` adjacency matrix. It is a
//! small, self-contained pathfinding primitive: build a [`Graph`] from the
//! matrix, run the query, get back the ordered node indices.
//!
//! # Architecture
//!
//! - **error**: typed error handling with [`GraphError`]
//! - **graph**: the node/edge arena and the matrix-to-graph builder
//! - **dijkstra**: the relaxation loop and path reconstruction
//!
//! # Input contract
//!
//! The matrix must be square. Entry `matrix[i][j]` is the weight of the
//! directed edge `i -> j` when strictly positive; an entry of `0.0` means
//! "no edge". Negative and non-finite entries are rejected at construction,
//! since Dijkstra's greedy-finality argument only holds for non-negative
//! weights.
//!
//! # Example
//!
//! ```
//! use dense_dijkstra::shortest_path;
//!
//! let matrix = vec![
//!     vec![0.0, 1.0, 4.0],
//!     vec![0.0, 0.0, 2.0],
//!     vec![0.0, 0.0, 0.0],
//! ];
//!
//! // The two-hop route 0 -> 1 -> 2 (weight 3) beats the direct edge (4).
//! let path = shortest_path(&matrix, 0, 2)?;
//! assert_eq!(path, vec![0, 1, 2]);
//! # Ok::<(), dense_dijkstra::GraphError>(())
//! ```

pub mod dijkstra;
pub mod error;
pub mod graph;

// Re-exports for convenience
pub use dijkstra::{shortest_path, ShortestPath};
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph, Node};
