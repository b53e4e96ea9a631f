//! Error type shared by both graph representations and the traversals.

use thiserror::Error;

/// Errors reported by graph construction, insertion and lookup.
///
/// All variants are usage errors: the library never retries or repairs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A matrix graph was constructed with a capacity of zero, or one whose
    /// `capacity * capacity` table size overflows `usize`.
    #[error("invalid matrix graph capacity")]
    InvalidCapacity,

    /// An insertion needed more distinct vertices than the matrix can hold.
    #[error("matrix graph is full: capacity of {capacity} vertices exceeded")]
    CapacityExceeded {
        /// The fixed capacity of the graph that rejected the insertion.
        capacity: usize,
    },

    /// A lookup named a vertex that was never inserted.
    #[error("no such vertex in graph")]
    NoSuchVertex,
}

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;
