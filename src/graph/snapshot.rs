//! Plain-data copies of a graph, for diffing and serialization.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{Direction, ListGraph, UnweightedGraph};

/// The vertices and edges of a graph at one point in time.
///
/// Produced by [`UnweightedGraph::snapshot`]. Edges are `(from, to)` pairs in
/// ascending order; an undirected edge appears once per direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot<V> {
    /// Direction mode of the source graph.
    pub direction: Direction,
    /// Every vertex, in the source graph's `vertices()` order.
    pub vertices: Vec<V>,
    /// Every recorded edge, sorted.
    pub edges: Vec<(V, V)>,
}

impl<V: Clone + Ord> GraphSnapshot<V> {
    /// Rebuilds an unbounded list graph holding the same vertices and edges.
    ///
    /// # Errors
    /// Never fails for list graphs; the `Result` mirrors `add_edge`.
    pub fn to_list_graph(&self) -> Result<ListGraph<V>> {
        ListGraph::from_edges(self.direction, self.edges.iter().cloned())
    }
}
