//! Depth-first and breadth-first traversal over any [`UnweightedGraph`].
//!
//! Both traversals keep an explicit, owned frontier instead of recursing, so
//! stack usage does not grow with graph depth. Neighbors are pushed without a
//! visited check; duplicates are dropped when popped.
//!
//! The [`Dfs`] and [`Bfs`] iterators yield vertices in visitation order. That
//! order follows the neighbor-set iteration order and is not part of the
//! contract; [`dfs`] and [`bfs`] return only the reachable set.

use std::collections::{BTreeSet, VecDeque};

use crate::error::Result;
use crate::graph::UnweightedGraph;

/// An iterator for Depth-First Search (DFS).
///
/// Yields each reachable vertex once. The start vertex is validated on the
/// first call to `next`; an unknown start yields a single
/// `Err(GraphError::NoSuchVertex)`.
///
/// [`GraphError::NoSuchVertex`]: crate::GraphError::NoSuchVertex
pub struct Dfs<'g, G: UnweightedGraph + ?Sized> {
    graph: &'g G,
    visited: BTreeSet<G::Vertex>,
    stack: Vec<G::Vertex>,
}

impl<'g, G: UnweightedGraph + ?Sized> Dfs<'g, G> {
    /// Creates a new DFS iterator starting from `start`.
    pub fn new(graph: &'g G, start: G::Vertex) -> Self {
        Self {
            graph,
            visited: BTreeSet::new(),
            stack: vec![start],
        }
    }

    /// Vertices visited so far.
    pub fn visited(&self) -> &BTreeSet<G::Vertex> {
        &self.visited
    }
}

impl<G: UnweightedGraph + ?Sized> Iterator for Dfs<'_, G> {
    type Item = Result<G::Vertex>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(vertex) = self.stack.pop() {
            if self.visited.contains(&vertex) {
                continue;
            }
            let neighbors = match self.graph.neighbors_of(&vertex) {
                Ok(neighbors) => neighbors,
                Err(err) => {
                    self.stack.clear();
                    return Some(Err(err));
                }
            };
            self.visited.insert(vertex.clone());
            self.stack.extend(neighbors);
            return Some(Ok(vertex));
        }
        None
    }
}

/// An iterator for Breadth-First Search (BFS).
///
/// Same contract as [`Dfs`], with a first-in-first-out frontier.
pub struct Bfs<'g, G: UnweightedGraph + ?Sized> {
    graph: &'g G,
    visited: BTreeSet<G::Vertex>,
    queue: VecDeque<G::Vertex>,
}

impl<'g, G: UnweightedGraph + ?Sized> Bfs<'g, G> {
    /// Creates a new BFS iterator starting from `start`.
    pub fn new(graph: &'g G, start: G::Vertex) -> Self {
        Self {
            graph,
            visited: BTreeSet::new(),
            queue: VecDeque::from([start]),
        }
    }

    /// Vertices visited so far.
    pub fn visited(&self) -> &BTreeSet<G::Vertex> {
        &self.visited
    }
}

impl<G: UnweightedGraph + ?Sized> Iterator for Bfs<'_, G> {
    type Item = Result<G::Vertex>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(vertex) = self.queue.pop_front() {
            if self.visited.contains(&vertex) {
                continue;
            }
            let neighbors = match self.graph.neighbors_of(&vertex) {
                Ok(neighbors) => neighbors,
                Err(err) => {
                    self.queue.clear();
                    return Some(Err(err));
                }
            };
            self.visited.insert(vertex.clone());
            self.queue.extend(neighbors);
            return Some(Ok(vertex));
        }
        None
    }
}

/// Returns every vertex reachable from `start`, including `start`, using a
/// depth-first frontier.
///
/// # Errors
/// Returns [`GraphError::NoSuchVertex`](crate::GraphError::NoSuchVertex) if
/// `start` was never inserted.
pub fn dfs<G>(graph: &G, start: G::Vertex) -> Result<BTreeSet<G::Vertex>>
where
    G: UnweightedGraph + ?Sized,
{
    let reachable: BTreeSet<_> = Dfs::new(graph, start).collect::<Result<_>>()?;
    #[cfg(feature = "tracing")]
    tracing::debug!(visited = reachable.len(), "dfs complete");
    Ok(reachable)
}

/// Returns every vertex reachable from `start`, including `start`, using a
/// breadth-first frontier.
///
/// # Errors
/// Returns [`GraphError::NoSuchVertex`](crate::GraphError::NoSuchVertex) if
/// `start` was never inserted.
pub fn bfs<G>(graph: &G, start: G::Vertex) -> Result<BTreeSet<G::Vertex>>
where
    G: UnweightedGraph + ?Sized,
{
    let reachable: BTreeSet<_> = Bfs::new(graph, start).collect::<Result<_>>()?;
    #[cfg(feature = "tracing")]
    tracing::debug!(visited = reachable.len(), "bfs complete");
    Ok(reachable)
}
