//! Dijkstra shortest-path search with early exit on the target node.
//!
//! Classic single-source Dijkstra restricted to one target: the search stops
//! as soon as the end node is settled, since a settled node's tentative
//! distance is final when all edge weights are non-negative.
//!
//! # Algorithm
//!
//! 1. Push the start node (distance `0.0`) onto the frontier.
//! 2. Pop the frontier node with minimum tentative distance.
//! 3. If it is the end node, walk predecessor links back to the start and
//!    reverse.
//! 4. Otherwise relax its outgoing edges and repeat.
//!
//! # Frontier
//!
//! The frontier is a `BinaryHeap` min-heap with lazy deletion of stale
//! entries, giving `O((N + E) log N)` instead of the naive `O(N²)` scan.
//! Ties on equal tentative distance resolve to the lowest node index, so
//! results are deterministic.
//!
//! # Unreachable targets
//!
//! If the frontier drains before the end node is settled, no finite-weight
//! path exists and the query returns [`GraphError::PathNotFound`] rather
//! than a degenerate single-node path.
//!
//! [`GraphError::PathNotFound`]: crate::error::GraphError::PathNotFound
//!
//! # Example
//!
//! ```
//! use dense_dijkstra::graph::Graph;
//!
//! let matrix = vec![
//!     vec![0.0, 1.0, 4.0],
//!     vec![0.0, 0.0, 2.0],
//!     vec![0.0, 0.0, 0.0],
//! ];
//! let result = Graph::build(&matrix, 0, 2)?.shortest_path()?;
//! assert_eq!(result.path, vec![0, 1, 2]);
//! assert_eq!(result.total_weight, 3.0);
//! # Ok::<(), dense_dijkstra::GraphError>(())
//! ```

mod algorithm;
mod frontier;
mod types;


pub use types::ShortestPath;

use crate::error::GraphResult;
use crate::graph::Graph;

/// Convenience function: build a graph and return just the path indices.
///
/// Equivalent to `Graph::build(matrix, start, end)?.shortest_path()` with
/// the result reduced to its node-index sequence.
///
/// # Example
///
/// ```
/// use dense_dijkstra::shortest_path;
///
/// let matrix = vec![
///     vec![0.0, 1.0],
///     vec![0.0, 0.0],
/// ];
/// assert_eq!(shortest_path(&matrix, 0, 1)?, vec![0, 1]);
/// # Ok::<(), dense_dijkstra::GraphError>(())
/// ```
pub fn shortest_path(matrix: &[Vec<f32>], start: usize, end: usize) -> GraphResult<Vec<usize>> {
    let result = Graph::build(matrix, start, end)?.shortest_path()?;
    Ok(result.path)
}
