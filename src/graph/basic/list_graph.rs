//! An unbounded graph backed by an ordered adjacency map.
//!
//! The map's key set is the vertex set: a vertex is inserted together with its
//! (initially empty) neighbor set, so "every vertex has an entry" holds by
//! construction.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::{GraphError, Result};
use crate::graph::{Direction, UnweightedGraph};

/// A graph storing each vertex's out-neighbors in a `BTreeSet`.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_edge` | \(O(\log n)\) | Map + set insertion |
/// | `contains_vertex` | \(O(\log n)\) | Map lookup |
/// | `neighbors_of` | \(O(\log n + d)\) | Clones the neighbor set |
/// | `vertices` | \(O(n)\) | Ascending order |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListGraph<V> {
    adjacency: BTreeMap<V, BTreeSet<V>>,
    direction: Direction,
}

impl<V: Clone + Ord> ListGraph<V> {
    /// Creates an empty graph.
    pub fn new(direction: Direction) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(directed = direction.is_directed(), "created list graph");
        Self {
            adjacency: BTreeMap::new(),
            direction,
        }
    }

    /// Creates a graph and inserts every edge of `edges` in order.
    ///
    /// # Errors
    /// Never fails; the `Result` keeps the signature aligned with
    /// [`MatrixGraph::from_edges`](crate::graph::MatrixGraph::from_edges).
    pub fn from_edges<I>(direction: Direction, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new(direction);
        for (from, to) in edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Returns true if no vertex has been inserted yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    fn insert_vertex(&mut self, vertex: &V) {
        if !self.adjacency.contains_key(vertex) {
            self.adjacency.insert(vertex.clone(), BTreeSet::new());
            #[cfg(feature = "tracing")]
            tracing::trace!(count = self.adjacency.len(), "list graph inserted vertex");
        }
    }
}

impl<V: Clone + Ord> Default for ListGraph<V> {
    fn default() -> Self {
        Self::new(Direction::default())
    }
}

impl<V: Clone + Ord> UnweightedGraph for ListGraph<V> {
    type Vertex = V;

    fn add_edge(&mut self, from: V, to: V) -> Result<()> {
        self.insert_vertex(&from);
        self.insert_vertex(&to);

        if !self.direction.is_directed() {
            self.adjacency.entry(to.clone()).or_default().insert(from.clone());
        }
        self.adjacency.entry(from).or_default().insert(to);
        Ok(())
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    fn neighbors_of(&self, vertex: &V) -> Result<BTreeSet<V>> {
        // A missing key is an error, not an empty neighbor set.
        let neighbors = self.adjacency.get(vertex).ok_or(GraphError::NoSuchVertex)?;
        Ok(neighbors.iter().filter(|n| *n != vertex).cloned().collect())
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn render(&self) -> String
    where
        V: fmt::Display,
    {
        self.to_string()
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(v, nbrs)| nbrs.len() - usize::from(nbrs.contains(v)))
            .sum()
    }
}

/// One line per vertex in ascending order: the vertex, then each stored
/// neighbor, all tab-terminated. A blank line ends the dump.
impl<V: fmt::Display> fmt::Display for ListGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, neighbors) in &self.adjacency {
            write!(f, "{vertex}\t")?;
            for n in neighbors {
                write!(f, "{n}\t")?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}
