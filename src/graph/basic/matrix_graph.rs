//! A fixed-capacity graph backed by a dense boolean adjacency matrix.
//!
//! Vertices occupy slots in insertion order; the matrix is stored row-major in a
//! single contiguous `Vec<bool>` of `capacity * capacity` cells so a row scan
//! walks adjacent memory. Cell `(i, j)` is true iff an edge from slot `i` to
//! slot `j` has been recorded. The diagonal is set at construction and never
//! read as an edge.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{GraphError, Result};
use crate::graph::{Direction, UnweightedGraph};

/// A graph with a fixed maximum vertex count and matrix-backed edges.
///
/// Intended for small graphs whose size is known up front.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `new` | \(O(c^2)\) | Allocates the full matrix |
/// | `add_edge` | \(O(c)\) | Linear scan per endpoint |
/// | `contains_vertex` | \(O(c)\) | Linear scan |
/// | `neighbors_of` | \(O(c)\) | Scan + one row |
/// | `edge_count` | \(O(n^2)\) | Scans the occupied block |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGraph<V> {
    vertices: Vec<V>,
    adjacency: Vec<bool>,
    capacity: usize,
    direction: Direction,
}

impl<V: Clone + Ord> MatrixGraph<V> {
    /// Creates an empty graph able to hold `capacity` distinct vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidCapacity`] if `capacity` is zero or if the
    /// `capacity * capacity` table cannot be allocated.
    pub fn new(capacity: usize, direction: Direction) -> Result<Self> {
        if capacity == 0 {
            return Err(GraphError::InvalidCapacity);
        }
        let cells = capacity
            .checked_mul(capacity)
            .ok_or(GraphError::InvalidCapacity)?;

        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(cells)
            .map_err(|_| GraphError::InvalidCapacity)?;
        adjacency.resize(cells, false);
        let mut vertices = Vec::new();
        vertices
            .try_reserve_exact(capacity)
            .map_err(|_| GraphError::InvalidCapacity)?;
        for i in 0..capacity {
            adjacency[i * capacity + i] = true;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(capacity, directed = direction.is_directed(), "created matrix graph");

        Ok(Self {
            vertices,
            adjacency,
            capacity,
            direction,
        })
    }

    /// Creates a graph and inserts every edge of `edges` in order.
    ///
    /// # Errors
    /// Fails like [`MatrixGraph::new`], or with the first error `add_edge` reports.
    pub fn from_edges<I>(capacity: usize, direction: Direction, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new(capacity, direction)?;
        for (from, to) in edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// The fixed maximum number of vertices.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if no vertex has been inserted yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if every slot is taken.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.vertices.len() == self.capacity
    }

    /// Slot of `vertex` among the inserted vertices, by linear scan.
    fn index_of(&self, vertex: &V) -> Option<usize> {
        self.vertices.iter().position(|v| v == vertex)
    }

    #[inline]
    fn cell(&self, row: usize, col: usize) -> bool {
        self.adjacency[row * self.capacity + col]
    }

    #[inline]
    fn set_cell(&mut self, row: usize, col: usize) {
        self.adjacency[row * self.capacity + col] = true;
    }

    /// Appends `vertex` at the next free slot. Caller checks capacity.
    fn push_vertex(&mut self, vertex: V) -> usize {
        let slot = self.vertices.len();
        self.vertices.push(vertex);
        #[cfg(feature = "tracing")]
        tracing::trace!(slot, capacity = self.capacity, "matrix graph inserted vertex");
        slot
    }
}

impl<V: Clone + Ord> UnweightedGraph for MatrixGraph<V> {
    type Vertex = V;

    fn add_edge(&mut self, from: V, to: V) -> Result<()> {
        let from_slot = self.index_of(&from);
        let to_missing = from != to && self.index_of(&to).is_none();
        let missing = usize::from(from_slot.is_none()) + usize::from(to_missing);

        // Reject before touching anything so a failed insertion leaves no partial vertex.
        if self.vertices.len() + missing > self.capacity {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                capacity = self.capacity,
                count = self.vertices.len(),
                missing,
                "matrix graph capacity exceeded"
            );
            return Err(GraphError::CapacityExceeded { capacity: self.capacity });
        }

        let from_slot = match from_slot {
            Some(slot) => slot,
            None => self.push_vertex(from),
        };
        let to_slot = match self.index_of(&to) {
            Some(slot) => slot,
            None => self.push_vertex(to),
        };

        self.set_cell(from_slot, to_slot);
        if !self.direction.is_directed() {
            self.set_cell(to_slot, from_slot);
        }
        Ok(())
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.index_of(vertex).is_some()
    }

    fn vertices(&self) -> Vec<V> {
        self.vertices.clone()
    }

    fn neighbors_of(&self, vertex: &V) -> Result<BTreeSet<V>> {
        let row = self.index_of(vertex).ok_or(GraphError::NoSuchVertex)?;
        Ok((0..self.vertices.len())
            .filter(|&col| col != row && self.cell(row, col))
            .map(|col| self.vertices[col].clone())
            .collect())
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
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        let n = self.vertices.len();
        (0..n)
            .map(|row| (0..n).filter(|&col| col != row && self.cell(row, col)).count())
            .sum()
    }
}

/// One line per inserted vertex: the vertex, then a `0`/`1` cell for every
/// inserted column, all tab-terminated. A blank line ends the dump.
impl<V: fmt::Display> fmt::Display for MatrixGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.vertices.len();
        for (row, vertex) in self.vertices.iter().enumerate() {
            write!(f, "{vertex}\t")?;
            for col in 0..n {
                write!(f, "{}\t", u8::from(self.adjacency[row * self.capacity + col]))?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(direction: Direction) -> MatrixGraph<i32> {
        MatrixGraph::from_edges(
            5,
            direction,
            [(1, 2), (2, 3), (2, 4), (3, 5), (4, 3), (5, 4)],
        )
        .unwrap()
    }

    #[test]
    fn zero_capacity_is_rejected_at_construction() {
        assert_eq!(
            MatrixGraph::<i32>::new(0, Direction::Directed).unwrap_err(),
            GraphError::InvalidCapacity
        );
    }

    #[test]
    fn oversized_capacity_is_rejected_instead_of_overflowing() {
        for capacity in [usize::MAX, usize::MAX / 2 + 1] {
            assert_eq!(
                MatrixGraph::<u8>::new(capacity, Direction::Directed).unwrap_err(),
                GraphError::InvalidCapacity,
                "capacity {capacity}"
            );
        }
    }

    #[test]
    fn vertices_keep_insertion_order() {
        let g = sample(Direction::Directed);
        assert_eq!(g.vertices(), vec![1, 2, 3, 4, 5]);
        assert_eq!(g.vertex_count(), 5);
        assert!(g.is_full());
        assert!(g.contains_vertex(&4));
        assert!(!g.contains_vertex(&6));
    }

    #[test]
    fn neighbors_follow_direction() {
        let g = sample(Direction::Directed);
        assert_eq!(g.neighbors_of(&2).unwrap(), BTreeSet::from([3, 4]));
        assert!(g.neighbors_of(&1).unwrap().contains(&2));
        assert!(!g.neighbors_of(&2).unwrap().contains(&1));
        assert_eq!(g.edge_count(), 6);

        let u = sample(Direction::Undirected);
        assert_eq!(u.neighbors_of(&2).unwrap(), BTreeSet::from([1, 3, 4]));
        assert_eq!(u.edge_count(), 12);
    }

    #[test]
    fn diagonal_is_never_a_neighbor() {
        let mut g = MatrixGraph::new(2, Direction::Directed).unwrap();
        g.add_edge('a', 'a').unwrap();
        assert_eq!(g.vertex_count(), 1);
        assert!(g.neighbors_of(&'a').unwrap().is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn unknown_vertex_lookup_fails() {
        let g = sample(Direction::Directed);
        assert_eq!(g.neighbors_of(&42).unwrap_err(), GraphError::NoSuchVertex);
    }

    #[test]
    fn overflow_leaves_graph_untouched() {
        let mut g = MatrixGraph::new(2, Direction::Directed).unwrap();
        g.add_edge(1, 2).unwrap();
        let before = g.clone();

        assert_eq!(
            g.add_edge(1, 3).unwrap_err(),
            GraphError::CapacityExceeded { capacity: 2 }
        );
        assert_eq!(g, before);

        // Both endpoints missing with one free slot: neither is inserted.
        let mut h = MatrixGraph::new(3, Direction::Directed).unwrap();
        h.add_edge(1, 2).unwrap();
        assert!(h.add_edge(3, 4).is_err());
        assert_eq!(h.vertex_count(), 2);
        assert!(!h.contains_vertex(&3));

        // Existing endpoints still accept new edges once full.
        g.add_edge(2, 1).unwrap();
        assert!(g.neighbors_of(&2).unwrap().contains(&1));
    }

    #[test]
    fn self_loop_on_last_free_slot_fits() {
        let mut g = MatrixGraph::new(2, Direction::Directed).unwrap();
        g.add_edge(1, 2).unwrap();
        assert!(g.add_edge(3, 3).is_err());

        let mut h = MatrixGraph::new(3, Direction::Directed).unwrap();
        h.add_edge(1, 2).unwrap();
        h.add_edge(3, 3).unwrap();
        assert_eq!(h.vertex_count(), 3);
    }

    #[test]
    fn render_dumps_occupied_block() {
        let g = MatrixGraph::from_edges(3, Direction::Directed, [(1, 2), (2, 3)]).unwrap();
        assert_eq!(
            g.render(),
            "1\t1\t1\t0\t\n2\t0\t1\t1\t\n3\t0\t0\t1\t\n\n"
        );
        let empty = MatrixGraph::<i32>::new(3, Direction::Directed).unwrap();
        assert_eq!(empty.render(), "\n");
    }
}
