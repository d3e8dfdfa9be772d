//! Core Dijkstra search loop and path reconstruction.

use std::collections::BinaryHeap;

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

use super::frontier::FrontierEntry;
use super::types::ShortestPath;

impl Graph {
    /// Run the shortest-path query this graph was built for.
    ///
    /// Consumes the graph: tentative distances and predecessors mutate during
    /// the run, so a graph serves exactly one query. Build a fresh graph for
    /// the next one.
    ///
    /// # Returns
    /// * `Ok(ShortestPath)` - path from start to end with its total weight
    /// * `Err(GraphError::PathNotFound)` - the end node is unreachable
    ///
    /// # Determinism
    /// When two frontier nodes share the minimum tentative distance, the one
    /// with the lower index is settled first, so equal-weight alternatives
    /// always resolve to the same path.
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
    /// let result = Graph::build(&matrix, 0, 2)?.shortest_path()?;
    /// assert_eq!(result.path, vec![0, 1, 2]);
    /// # Ok::<(), dense_dijkstra::GraphError>(())
    /// ```
    pub fn shortest_path(mut self) -> GraphResult<ShortestPath> {
        let start = self.start;
        let end = self.end;

        // Trivial case: the path is the start node itself.
        if start == end {
            return Ok(ShortestPath {
                path: vec![start],
                total_weight: 0.0,
                nodes_settled: 0,
            });
        }

        let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        frontier.push(FrontierEntry::new(start, 0.0));

        // Settled nodes have final tentative distances; frontier entries for
        // them are stale and skipped on pop.
        let mut settled = vec![false; self.nodes.len()];
        let mut nodes_settled = 0;

        while let Some(current) = frontier.pop() {
            let current_index = current.index;

            if settled[current_index] {
                continue;
            }
            settled[current_index] = true;
            nodes_settled += 1;

            if current_index == end {
                let path = reconstruct(&self, end);
                let total_weight = self.nodes[end].weight;

                log::debug!(
                    "shortest path found: {} -> {} via {} nodes, weight {}, {} settled",
                    start,
                    end,
                    path.len(),
                    total_weight,
                    nodes_settled
                );

                return Ok(ShortestPath {
                    path,
                    total_weight,
                    nodes_settled,
                });
            }

            let current_weight = self.nodes[current_index].weight;

            // Indexed loop: a self-loop edge targets the node being iterated.
            for e in 0..self.nodes[current_index].edges.len() {
                let edge = self.nodes[current_index].edges[e];
                let candidate = current_weight + edge.weight;

                if candidate < self.nodes[edge.target].weight {
                    log::trace!(
                        "relax {} -> {}: {} -> {}",
                        current_index,
                        edge.target,
                        self.nodes[edge.target].weight,
                        candidate
                    );
                    self.nodes[edge.target].weight = candidate;
                    self.nodes[edge.target].predecessor = Some(current_index);
                    frontier.push(FrontierEntry::new(edge.target, candidate));
                }
            }
        }

        // Frontier drained without settling the end node: only unreachable
        // nodes remain at infinite distance.
        log::debug!(
            "no path from {} to {}: frontier drained after {} settled",
            start,
            end,
            nodes_settled
        );
        Err(GraphError::PathNotFound { start, end })
    }
}

/// Walk predecessor links from the end node back to the origin, then reverse
/// into start-to-end order.
fn reconstruct(graph: &Graph, end: usize) -> Vec<usize> {
    let mut path = vec![end];
    let mut current = end;

    while let Some(prev) = graph.nodes[current].predecessor {
        path.push(prev);
        current = prev;
    }

    path.reverse();
    path
}
