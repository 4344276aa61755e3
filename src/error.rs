//! Error types for tour graph operations.
//!
//! Every variant here signals a caller bug (malformed input, an illegal edit,
//! or a broken do/undo pairing). A structurally broken tour is *not* an error:
//! [`TourGraph::to_path`](crate::graph::TourGraph::to_path) reports it with a
//! plain `false`.

use thiserror::Error;

/// Errors raised by the tour graph and its edit engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// A graph must hold at least one city.
    #[error("invalid graph size {size}: at least one city is required")]
    InvalidSize { size: usize },

    /// Bulk-load input is not a permutation of `1..=n`.
    #[error("invalid permutation: {0}")]
    InvalidPermutation(String),

    /// City id outside `[1, size]`.
    #[error("city {id} is out of range 1..={size}")]
    OutOfRange { id: usize, size: usize },

    /// Connecting a node that already has two neighbors.
    #[error("city {node} already has degree 2, cannot connect to {target}")]
    CapacityExceeded { node: usize, target: usize },

    /// Disconnecting an edge that does not exist on this endpoint.
    #[error("city {node} is not connected to {target}")]
    NotConnected { node: usize, target: usize },

    /// Undo requested on a node with no logged edits.
    #[error("city {node} has no edits to undo")]
    EmptyUndoLog { node: usize },

    /// The adjacency is not a single Hamiltonian cycle where one is required.
    #[error("graph does not hold a single tour over all cities")]
    NotATour,

    /// A distance matrix does not match the number of cities.
    #[error("distance matrix covers {actual} locations, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A new move was started before the previous one was committed or rolled back.
    #[error("a move is still pending: commit or roll back before trying another")]
    PendingMove,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TourError>;
