//! Matrix-to-graph construction with fail-fast validation.

use crate::error::{GraphError, GraphResult};

use super::types::{Edge, Graph, Node};

impl Graph {
    /// Build a graph from a dense `N×N` weight matrix.
    ///
    /// Entry `matrix[i][j]` becomes the directed edge `i -> j` when strictly
    /// positive; an entry of `0.0` means "no edge". This is the input-format
    /// contract, not a general rule about zero-weight edges. Self-loops
    /// (`matrix[i][i] > 0.0`) are kept as given; with non-negative weights a
    /// self-loop can never shorten a path, so there is no reason to filter
    /// them.
    ///
    /// The `start` node's tentative distance is initialized to `0.0`, every
    /// other node's to `f32::INFINITY`.
    ///
    /// # Arguments
    /// * `matrix` - Square adjacency matrix; rows are edge sources
    /// * `start` - Index of the path's origin node
    /// * `end` - Index of the path's target node
    ///
    /// # Errors
    /// * [`GraphError::NonSquareMatrix`] - a row's length differs from the row count
    /// * [`GraphError::InvalidIndex`] - `start` or `end` outside `[0, N)`
    /// * [`GraphError::NegativeWeight`] - a negative matrix entry
    /// * [`GraphError::NonFiniteWeight`] - a NaN or infinite matrix entry
    ///
    /// # Example
    ///
    /// ```
    /// use dense_dijkstra::graph::Graph;
    ///
    /// let matrix = vec![
    ///     vec![0.0, 1.0, 4.0],
    ///     vec![0.0, 0.0, 2.0],
    ///     vec![0.0, 0.0, 0.0],
    /// ];
    /// let graph = Graph::build(&matrix, 0, 2)?;
    /// assert_eq!(graph.node_count(), 3);
    /// # Ok::<(), dense_dijkstra::GraphError>(())
    /// ```
    pub fn build(matrix: &[Vec<f32>], start: usize, end: usize) -> GraphResult<Self> {
        let n = matrix.len();

        for (row, weights) in matrix.iter().enumerate() {
            if weights.len() != n {
                return Err(GraphError::NonSquareMatrix {
                    rows: n,
                    row,
                    len: weights.len(),
                });
            }
        }

        // An empty matrix has no valid indices, so this also rejects N = 0.
        for index in [start, end] {
            if index >= n {
                return Err(GraphError::InvalidIndex { index, len: n });
            }
        }

        let mut nodes: Vec<Node> = (0..n)
            .map(|i| {
                let weight = if i == start { 0.0 } else { f32::INFINITY };
                Node::new(i, weight)
            })
            .collect();

        for (row, weights) in matrix.iter().enumerate() {
            for (col, &value) in weights.iter().enumerate() {
                if !value.is_finite() {
                    return Err(GraphError::NonFiniteWeight { row, col });
                }
                if value < 0.0 {
                    return Err(GraphError::NegativeWeight { row, col, value });
                }
                if value > 0.0 {
                    nodes[row].edges.push(Edge {
                        source: row,
                        target: col,
                        weight: value,
                    });
                }
            }
        }

        let graph = Self { nodes, start, end };

        log::debug!(
            "graph built: {} nodes, {} edges, start={}, end={}",
            graph.node_count(),
            graph.edge_count(),
            start,
            end
        );

        Ok(graph)
    }
}
