//! Tour representation and transactional edit engine.
//!
//! - [`TourNode`] — one city's two neighbor slots plus its undo log
//! - [`TourGraph`] — dense arena of nodes; bulk load/extract and validity probe
//! - [`EditableTourGraph`] — reversible connect/disconnect with commit
//! - [`Transaction`] — scoped move that rolls back in exact reverse order

mod editable;
mod node;
mod tour_graph;
mod transaction;

pub use editable::EditableTourGraph;
pub use node::{NodeId, Slot, TourNode};
pub use tour_graph::TourGraph;
pub use transaction::{Edit, Transaction};
