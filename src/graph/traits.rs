//! The capability interface shared by every graph representation.
//!
//! Traversals in [`crate::graph::algorithms`] are written against
//! [`UnweightedGraph`] only, so they work unchanged over [`MatrixGraph`],
//! [`ListGraph`], or a `&dyn UnweightedGraph<Vertex = V>`.
//!
//! [`MatrixGraph`]: crate::graph::MatrixGraph
//! [`ListGraph`]: crate::graph::ListGraph

use std::collections::BTreeSet;
use std::fmt;

use crate::error::Result;
use crate::graph::{Direction, GraphSnapshot};

/// An unweighted graph over caller-supplied vertex values.
///
/// Vertices come into existence only as edge endpoints; there is no way to
/// remove a vertex or an edge once recorded.
///
/// Implementors must answer `neighbors_of(v)` with `Ok` for every `v` that
/// `vertices()` returns. The provided `edge_count` and `snapshot` rely on it
/// and assert it in debug builds.
pub trait UnweightedGraph {
    /// The vertex identity type.
    type Vertex: Clone + Ord;

    /// Records an edge `from -> to`, inserting `from` and then `to` if absent.
    ///
    /// Undirected graphs also record `to -> from`.
    ///
    /// # Errors
    /// Returns [`GraphError::CapacityExceeded`] when a bounded representation
    /// cannot hold the new endpoints. The graph is left unchanged in that case.
    ///
    /// [`GraphError::CapacityExceeded`]: crate::GraphError::CapacityExceeded
    fn add_edge(&mut self, from: Self::Vertex, to: Self::Vertex) -> Result<()>;

    /// Returns true iff `vertex` has been inserted.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Returns every inserted vertex.
    ///
    /// The order is representation-defined; callers must not rely on it.
    fn vertices(&self) -> Vec<Self::Vertex>;

    /// Returns the vertices directly reachable from `vertex`.
    ///
    /// `vertex` itself is never part of the result.
    ///
    /// # Errors
    /// Returns [`GraphError::NoSuchVertex`] if `vertex` was never inserted.
    ///
    /// [`GraphError::NoSuchVertex`]: crate::GraphError::NoSuchVertex
    fn neighbors_of(&self, vertex: &Self::Vertex) -> Result<BTreeSet<Self::Vertex>>;

    /// The direction mode fixed at construction.
    fn direction(&self) -> Direction;

    /// A diagnostic, representation-specific text dump of the adjacency data.
    ///
    /// The format is not a stable interface.
    fn render(&self) -> String
    where
        Self::Vertex: fmt::Display;

    /// Number of inserted vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Number of recorded ordered pairs `(a, b)` with `a != b`.
    fn edge_count(&self) -> usize {
        self.vertices()
            .iter()
            .map(|v| listed_neighbors(self, v).len())
            .sum()
    }

    /// Copies vertices and edges into a plain, serializable value.
    fn snapshot(&self) -> GraphSnapshot<Self::Vertex> {
        let vertices = self.vertices();
        let mut edges = Vec::new();
        for v in &vertices {
            for n in listed_neighbors(self, v) {
                edges.push((v.clone(), n));
            }
        }
        edges.sort();
        GraphSnapshot {
            direction: self.direction(),
            vertices,
            edges,
        }
    }
}

/// Neighbors of a vertex taken from `vertices()`, which must resolve.
fn listed_neighbors<G>(graph: &G, vertex: &G::Vertex) -> BTreeSet<G::Vertex>
where
    G: UnweightedGraph + ?Sized,
{
    let neighbors = graph.neighbors_of(vertex);
    debug_assert!(
        neighbors.is_ok(),
        "neighbors_of failed for a vertex listed by vertices()"
    );
    neighbors.unwrap_or_default()
}
