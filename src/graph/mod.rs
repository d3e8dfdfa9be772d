//! Graph data model and matrix-to-graph construction.
//!
//! The graph is an arena of [`Node`]s addressed by `usize` index; edges are
//! owned by their source node and back-pointers are stored as optional
//! indices, so no reference cycles exist anywhere in the structure.
//!
//! # Components
//!
//! - **types**: [`Node`], [`Edge`], and the owning [`Graph`] arena
//! - **builder**: validated construction from a dense weight matrix
//!
//! # Example
//!
//! ```
//! use dense_dijkstra::graph::Graph;
//!
//! let matrix = vec![
//!     vec![0.0, 2.0],
//!     vec![0.0, 0.0],
//! ];
//! let graph = Graph::build(&matrix, 0, 1)?;
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! # Ok::<(), dense_dijkstra::GraphError>(())
//! ```

mod builder;
mod types;


pub use types::{Edge, Graph, Node};
