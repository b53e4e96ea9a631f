//! Edge directionality, chosen once when a graph is constructed.

use serde::{Deserialize, Serialize};

/// Whether inserted edges are one-way or mirrored.
///
/// A graph keeps the direction it was built with for its whole lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// `add_edge(a, b)` records only `a -> b`.
    #[default]
    Directed,
    /// `add_edge(a, b)` records both `a -> b` and `b -> a`.
    Undirected,
}

impl Direction {
    /// Returns true if the graph is directed.
    #[inline]
    pub fn is_directed(self) -> bool {
        matches!(self, Direction::Directed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_directed() {
        assert_eq!(Direction::default(), Direction::Directed);
        assert!(Direction::Directed.is_directed());
        assert!(!Direction::Undirected.is_directed());
    }
}
