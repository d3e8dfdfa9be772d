//! Error types for graph construction and pathfinding.
//!
//! All fallible operations in this crate return [`GraphResult`]. Construction
//! errors carry the offending matrix coordinates so callers can point at the
//! exact bad input; the unreachable-target case is an explicit variant rather
//! than a degenerate single-node path.

use thiserror::Error;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Error type for all graph operations.
///
/// Each variant includes enough context to identify the failing input.
/// All errors fail fast at construction or query time; there is nothing to
/// retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A matrix row's length differs from the number of rows.
    #[error("non-square matrix: {rows} rows but row {row} has {len} columns")]
    NonSquareMatrix { rows: usize, row: usize, len: usize },

    /// Start or end index outside `[0, N)`.
    #[error("invalid node index {index} for graph of {len} nodes")]
    InvalidIndex { index: usize, len: usize },

    /// A matrix entry is negative, violating the non-negativity precondition
    /// Dijkstra's correctness argument depends on.
    #[error("negative weight {value} at matrix[{row}][{col}]")]
    NegativeWeight { row: usize, col: usize, value: f32 },

    /// A matrix entry is NaN or infinite.
    #[error("non-finite weight at matrix[{row}][{col}]")]
    NonFiniteWeight { row: usize, col: usize },

    /// No path exists between the start and end nodes.
    #[error("no path found from node {start} to node {end}")]
    PathNotFound { start: usize, end: usize },
}

// Compile-time verification that GraphError is thread-safe
static_assertions::assert_impl_all!(GraphError: Send, Sync, std::error::Error);
