//! Unweighted graphs and their traversals.
//!
//! Graph code is organized into:
//! - `basic`: the two storage representations (`MatrixGraph`, `ListGraph`)
//! - `algorithms`: DFS and BFS written against the `UnweightedGraph` trait
//!
//! The capability trait, the `Direction` setting and `GraphSnapshot` live at
//! this level and are re-exported here.

pub mod algorithms;
pub mod basic;
mod direction;
mod snapshot;
mod traits;

pub use algorithms::{bfs, dfs, Bfs, Dfs};
pub use basic::{ListGraph, MatrixGraph};
pub use direction::Direction;
pub use snapshot::GraphSnapshot;
pub use traits::UnweightedGraph;
