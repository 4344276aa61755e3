//! # u-tour
//!
//! Tour representation and transactional edit engine for TSP local search.
//! A tour is kept as a graph of degree-2 nodes; search strategies
//! speculatively disconnect and reconnect edges, probe whether the result is
//! still one Hamiltonian cycle, and either commit or roll back in O(1) per
//! edit.
//!
//! ## Modules
//!
//! - [`graph`] — Tour nodes, the tour graph, reversible edits, and transactions
//! - [`editor`] — `TourEditor` capability trait consumed by search strategies
//! - [`distance`] — Distance matrix
//! - [`constructive`] — Initial tours (random, nearest neighbor)
//! - [`local_search`] — 2-opt and Or-opt driven through the editor
//! - [`error`] — Error type and result alias

pub mod constructive;
pub mod distance;
pub mod editor;
pub mod error;
pub mod graph;
pub mod local_search;

pub use error::{Result, TourError};
