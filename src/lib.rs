//! # `ugraph` - Unweighted Graphs
//!
//! Two storage representations for unweighted graphs behind one capability
//! trait, plus depth-first and breadth-first traversals that only ever see
//! that trait.
//!
//! ## Representations
//!
//! 1. **Matrix** (`MatrixGraph<V>`):
//!    - Fixed capacity chosen at construction
//!    - Dense row-major boolean table indexed by insertion slot
//!    - Linear-scan vertex lookup, suited to small graphs known up front
//!
//! 2. **List** (`ListGraph<V>`):
//!    - Unbounded
//!    - Ordered map from vertex to its set of out-neighbors
//!
//! Both are created `Directed` or `Undirected`; undirected graphs mirror every
//! inserted edge.
//!
//! ## Invariants
//!
//! - Vertices exist only as edge endpoints and are never removed.
//! - `neighbors_of(v)` never contains `v`, and fails for a vertex that was
//!   never inserted instead of returning an empty set.
//! - A matrix insertion that would exceed capacity fails without mutating
//!   the graph.
//! - `dfs(g, s)` and `bfs(g, s)` return the same set, which always holds `s`.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use ugraph::{bfs, dfs, Direction, ListGraph, MatrixGraph, UnweightedGraph};
//!
//! let edges = [(1, 2), (2, 3), (2, 4), (3, 5), (4, 3), (5, 4)];
//!
//! let matrix = MatrixGraph::from_edges(5, Direction::Directed, edges)?;
//! assert_eq!(matrix.neighbors_of(&2)?, BTreeSet::from([3, 4]));
//! assert_eq!(dfs(&matrix, 1)?, BTreeSet::from([1, 2, 3, 4, 5]));
//!
//! let list = ListGraph::from_edges(Direction::Directed, edges)?;
//! assert_eq!(bfs(&list, 4)?, BTreeSet::from([3, 4, 5]));
//! # Ok::<(), ugraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{
    bfs, dfs, Bfs, Dfs, Direction, GraphSnapshot, ListGraph, MatrixGraph, UnweightedGraph,
};

// Compile-time assertions: graphs can be shared across threads for read-only traversal.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MatrixGraph<u64>>();
    assert_send_sync::<ListGraph<u64>>();
    assert_send_sync::<GraphError>();
};
