//! Basic graph implementations.
//!
//! This module contains the two storage strategies behind
//! [`UnweightedGraph`](crate::graph::UnweightedGraph): a dense, fixed-capacity
//! matrix and an unbounded ordered adjacency map.

pub mod list_graph;
pub mod matrix_graph;

pub use list_graph::ListGraph;
pub use matrix_graph::MatrixGraph;
