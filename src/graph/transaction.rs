//! Scoped move handle over an [`EditableTourGraph`].

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::editable::EditableTourGraph;
use super::tour_graph::TourGraph;

/// An undirected edge edit between two 1-based cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edit {
    /// Add edge `a-b`.
    Connect(usize, usize),
    /// Remove edge `a-b`.
    Disconnect(usize, usize),
}

/// One candidate move on an [`EditableTourGraph`].
///
/// Edge edits are applied to both endpoints through the logged `do_*`
/// operations and journaled in order. [`rollback`](Self::rollback) replays the
/// journal newest-first, so undo order always mirrors the edit. Dropping an
/// undecided transaction rolls it back.
///
/// # Examples
///
/// ```
/// use u_tour::graph::EditableTourGraph;
///
/// let mut graph = EditableTourGraph::new(5).unwrap();
/// graph.from_path(&[1, 2, 3, 4, 5]).unwrap();
///
/// let mut tx = graph.begin().unwrap();
/// tx.disconnect_edge(1, 2).unwrap();
/// tx.disconnect_edge(3, 4).unwrap();
/// tx.connect_edge(1, 3).unwrap();
/// tx.connect_edge(2, 4).unwrap();
/// assert!(tx.tour().is_some());
/// tx.commit();
///
/// assert!(graph.is_clean());
/// assert!(graph.graph().is_connected(1, 3).unwrap());
/// ```
#[derive(Debug)]
pub struct Transaction<'g> {
    graph: &'g mut EditableTourGraph,
    mark: usize,
    decided: bool,
}

impl<'g> Transaction<'g> {
    pub(crate) fn new(graph: &'g mut EditableTourGraph) -> Self {
        let mark = graph.journal_len();
        Self {
            graph,
            mark,
            decided: false,
        }
    }

    /// Removes edge `a-b` on both endpoints.
    ///
    /// If the second endpoint fails, the first is restored before the error
    /// is returned.
    pub fn disconnect_edge(&mut self, a: usize, b: usize) -> Result<()> {
        self.graph.disconnect_edge(a, b)
    }

    /// Adds edge `a-b` on both endpoints.
    pub fn connect_edge(&mut self, a: usize, b: usize) -> Result<()> {
        self.graph.connect_edge(a, b)
    }

    /// Applies `edit` on both endpoints.
    pub fn apply(&mut self, edit: Edit) -> Result<()> {
        self.graph.apply_edge(edit)
    }

    /// Read access for neighbor inspection mid-move.
    pub fn graph(&self) -> &TourGraph {
        self.graph.graph()
    }

    /// Per-endpoint edits applied so far, oldest first.
    pub fn edits(&self) -> &[Edit] {
        &self.graph.journal()[self.mark..]
    }

    /// Number of per-endpoint edits applied so far.
    pub fn len(&self) -> usize {
        self.graph.journal_len() - self.mark
    }

    /// `true` if nothing has been applied yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Structural probe; see [`TourGraph::to_path`].
    pub fn probe(&self, out: &mut Vec<usize>) -> bool {
        self.graph.to_path(out)
    }

    /// Allocating probe.
    pub fn tour(&self) -> Option<Vec<usize>> {
        self.graph.tour()
    }

    /// Keeps the move; the graph's undo logs are cleared.
    pub fn commit(mut self) {
        self.decided = true;
        self.graph.commit();
    }

    /// Undoes every edit of this move in reverse order.
    pub fn rollback(mut self) -> Result<()> {
        self.decided = true;
        self.graph.rollback_to(self.mark)
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if self.decided {
            return;
        }
        if let Err(err) = self.graph.rollback_to(self.mark) {
            log::error!("rollback of abandoned move failed: {}", err);
        }
    }
}
