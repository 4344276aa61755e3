//! Capability interface shared by local-search strategies.
//!
//! Search algorithms (2-opt, Or-opt, Lin-Kernighan, Tabu, VNS, ...) decide
//! *which* edges to exchange; the editor applies the exchange, says whether
//! the result is still one tour, and keeps or discards it.

use crate::error::{Result, TourError};
use crate::graph::{Edit, EditableTourGraph};

/// Narrow tour-editing interface consumed by search strategies.
///
/// # Protocol
///
/// 1. [`load`](Self::load) a tour once.
/// 2. [`try_move`](Self::try_move) a candidate edge exchange; the result says
///    whether the adjacency is still a single Hamiltonian cycle.
/// 3. Exactly one of [`commit`](Self::commit) or [`rollback`](Self::rollback).
///
/// Starting another move before step 3 fails with [`TourError::PendingMove`].
///
/// # Examples
///
/// ```
/// use u_tour::editor::TourEditor;
/// use u_tour::graph::{Edit, EditableTourGraph};
///
/// let mut editor = EditableTourGraph::new(6).unwrap();
/// editor.load(&[1, 2, 3, 4, 5, 6]).unwrap();
///
/// // Wrong reconnection: splits the tour into two triangles.
/// let split = [
///     Edit::Disconnect(1, 2),
///     Edit::Disconnect(4, 5),
///     Edit::Connect(1, 5),
///     Edit::Connect(2, 4),
/// ];
/// assert!(!editor.try_move(&split).unwrap());
/// editor.rollback().unwrap();
///
/// // 2-opt reconnection: reverses 2..=4.
/// let two_opt = [
///     Edit::Disconnect(1, 2),
///     Edit::Disconnect(4, 5),
///     Edit::Connect(1, 4),
///     Edit::Connect(2, 5),
/// ];
/// assert!(editor.try_move(&two_opt).unwrap());
/// editor.commit();
/// assert_eq!(editor.tour(), Some(vec![1, 4, 3, 2, 5, 6]));
/// ```
pub trait TourEditor {
    /// Number of cities.
    fn size(&self) -> usize;

    /// Replaces the current tour; discards any undecided move.
    fn load(&mut self, tour: &[usize]) -> Result<()>;

    /// Applies `edits` (each on both endpoints) and probes the result.
    ///
    /// Returns `Ok(true)` if the adjacency is one tour. Either way the move
    /// stays applied until [`commit`](Self::commit) or
    /// [`rollback`](Self::rollback). If an edit fails, the edits already
    /// applied are undone and the error is returned with no move pending.
    fn try_move(&mut self, edits: &[Edit]) -> Result<bool>;

    /// Keeps the pending move.
    fn commit(&mut self);

    /// Discards the pending move. A no-op when nothing is pending.
    fn rollback(&mut self) -> Result<()>;

    /// Current tour starting at city 1, or `None` if the adjacency is broken.
    fn tour(&self) -> Option<Vec<usize>>;

    /// Neighbors of `city` as 1-based ids.
    fn neighbors(&self, city: usize) -> Result<[Option<usize>; 2]>;
}

impl TourEditor for EditableTourGraph {
    fn size(&self) -> usize {
        self.len()
    }

    fn load(&mut self, tour: &[usize]) -> Result<()> {
        self.from_path(tour)
    }

    fn try_move(&mut self, edits: &[Edit]) -> Result<bool> {
        self.open_move()?;
        for &edit in edits {
            if let Err(err) = self.apply_edge(edit) {
                self.rollback_to(0)?;
                return Err(err);
            }
        }
        let mut scratch = Vec::with_capacity(self.len());
        Ok(self.to_path(&mut scratch))
    }

    fn commit(&mut self) {
        EditableTourGraph::commit(self);
    }

    fn rollback(&mut self) -> Result<()> {
        self.rollback_to(0)
    }

    fn tour(&self) -> Option<Vec<usize>> {
        EditableTourGraph::tour(self)
    }

    fn neighbors(&self, city: usize) -> Result<[Option<usize>; 2]> {
        self.graph().neighbor_cities(city)
    }
}

/// Returns the tour held by `editor`, or [`TourError::NotATour`].
pub fn current_tour<E: TourEditor + ?Sized>(editor: &E) -> Result<Vec<usize>> {
    editor.tour().ok_or(TourError::NotATour)
}
