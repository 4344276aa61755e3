//! Reversible edge edits on top of [`TourGraph`].
//!
//! # Edit protocol
//!
//! Every logged edit is per endpoint: removing the undirected edge `a-b`
//! takes `do_disconnect(a, b)` *and* `do_disconnect(b, a)`. Each call pushes
//! `(slot, previous value)` onto the mutated node's own undo log, so rollback
//! is a matter of popping those logs in exact reverse order. [`commit`] drops
//! all logs and makes the current adjacency the new baseline.
//!
//! [`Transaction`](super::Transaction) wraps this protocol so the reverse
//! ordering cannot be gotten wrong.
//!
//! [`commit`]: EditableTourGraph::commit

use crate::error::{Result, TourError};

use super::node::{NodeId, Slot, TourNode};
use super::transaction::{Edit, Transaction};
use super::tour_graph::TourGraph;

/// Tour graph with per-node undo logs.
///
/// # Examples
///
/// ```
/// use u_tour::graph::EditableTourGraph;
///
/// let mut graph = EditableTourGraph::new(4).unwrap();
/// graph.from_path(&[1, 2, 3, 4]).unwrap();
///
/// graph.do_disconnect(1, 2).unwrap();
/// graph.do_disconnect(2, 1).unwrap();
/// assert_eq!(graph.tour(), None);
///
/// graph.undo_disconnect(2, 1).unwrap();
/// graph.undo_disconnect(1, 2).unwrap();
/// assert_eq!(graph.tour(), Some(vec![1, 2, 3, 4]));
/// ```
#[derive(Debug, Clone)]
pub struct EditableTourGraph {
    graph: TourGraph,
    journal: Vec<Edit>,
    move_open: bool,
}

impl EditableTourGraph {
    /// Allocates `n` unlinked cities with empty undo logs.
    pub fn new(n: usize) -> Result<Self> {
        Ok(Self {
            graph: TourGraph::new(n)?,
            journal: Vec::new(),
            move_open: false,
        })
    }

    /// Read-only view of the underlying graph.
    pub fn graph(&self) -> &TourGraph {
        &self.graph
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    /// Always `false`: a graph holds at least one city.
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Node for a 1-based city id.
    pub fn node(&self, id: usize) -> Result<&TourNode> {
        self.graph.node(id)
    }

    /// Neighbor of city `id` in `slot`.
    pub fn neighbor(&self, id: usize, slot: Slot) -> Result<Option<NodeId>> {
        self.graph.neighbor(id, slot)
    }

    /// Loads `perm` and starts a fresh baseline with empty logs.
    pub fn from_path(&mut self, perm: &[usize]) -> Result<()> {
        self.graph.from_path(perm)?;
        self.commit();
        Ok(())
    }

    /// See [`TourGraph::to_path`].
    pub fn to_path(&self, out: &mut Vec<usize>) -> bool {
        self.graph.to_path(out)
    }

    /// See [`TourGraph::tour`].
    pub fn tour(&self) -> Option<Vec<usize>> {
        self.graph.tour()
    }

    /// Puts `b` into a free slot of `a` without logging.
    ///
    /// Only one endpoint is touched; the caller issues `connect(b, a)` too.
    pub fn connect(&mut self, a: usize, b: usize) -> Result<()> {
        self.graph.attach(a, b)?;
        Ok(())
    }

    /// Clears the slot of `a` pointing at `b` without logging.
    pub fn disconnect(&mut self, a: usize, b: usize) -> Result<()> {
        self.graph.detach(a, b)?;
        Ok(())
    }

    /// Logged form of [`connect`](Self::connect).
    pub fn do_connect(&mut self, a: usize, b: usize) -> Result<()> {
        let slot = self.graph.attach(a, b)?;
        self.graph.node_mut(a)?.log(slot, None);
        Ok(())
    }

    /// Logged form of [`disconnect`](Self::disconnect).
    pub fn do_disconnect(&mut self, a: usize, b: usize) -> Result<()> {
        let previous = self.graph.handle(b)?;
        let slot = self.graph.detach(a, b)?;
        self.graph.node_mut(a)?.log(slot, Some(previous));
        Ok(())
    }

    /// Reverts the newest logged edit on `a`, which must be a `do_connect(a, b)`.
    pub fn undo_connect(&mut self, a: usize, b: usize) -> Result<()> {
        let expected = Some(self.graph.handle(b)?);
        self.undo(a, expected)
    }

    /// Reverts the newest logged edit on `a`, which must be a `do_disconnect(a, b)`.
    pub fn undo_disconnect(&mut self, a: usize, b: usize) -> Result<()> {
        self.graph.handle(b)?;
        self.undo(a, None)
    }

    fn undo(&mut self, a: usize, expected: Option<NodeId>) -> Result<()> {
        let node = self.graph.node_mut(a)?;
        let (slot, previous) = node
            .pop_log()
            .ok_or(TourError::EmptyUndoLog { node: a })?;
        debug_assert_eq!(
            node.neighbor(slot),
            expected,
            "undo on city {} does not match the logged edit",
            a
        );
        node.set(slot, previous);
        Ok(())
    }

    /// Drops every undo log; the current adjacency becomes the baseline.
    pub fn commit(&mut self) {
        for node in self.graph.nodes_mut() {
            node.clear_log();
        }
        self.journal.clear();
        self.move_open = false;
    }

    /// Logged edits pending on city `id`.
    pub fn pending(&self, id: usize) -> Result<usize> {
        Ok(self.graph.node(id)?.pending())
    }

    /// `true` if no node has logged edits.
    pub fn is_clean(&self) -> bool {
        self.graph.nodes().all(|n| n.pending() == 0)
    }

    /// Opens a scoped move on this graph.
    ///
    /// Fails with [`TourError::PendingMove`] if a move started through
    /// [`TourEditor::try_move`](crate::editor::TourEditor::try_move) is still
    /// undecided.
    pub fn begin(&mut self) -> Result<Transaction<'_>> {
        if self.move_open {
            return Err(TourError::PendingMove);
        }
        Ok(Transaction::new(self))
    }

    pub(crate) fn open_move(&mut self) -> Result<()> {
        if self.move_open {
            return Err(TourError::PendingMove);
        }
        self.move_open = true;
        Ok(())
    }

    pub(crate) fn journal_len(&self) -> usize {
        self.journal.len()
    }

    pub(crate) fn journal(&self) -> &[Edit] {
        &self.journal
    }

    /// Removes edge `a-b` on both endpoints and journals it.
    pub(crate) fn disconnect_edge(&mut self, a: usize, b: usize) -> Result<()> {
        self.do_disconnect(a, b)?;
        if let Err(err) = self.do_disconnect(b, a) {
            self.undo_disconnect(a, b)?;
            return Err(err);
        }
        self.journal.push(Edit::Disconnect(a, b));
        self.journal.push(Edit::Disconnect(b, a));
        Ok(())
    }

    /// Adds edge `a-b` on both endpoints and journals it.
    pub(crate) fn connect_edge(&mut self, a: usize, b: usize) -> Result<()> {
        self.do_connect(a, b)?;
        if let Err(err) = self.do_connect(b, a) {
            self.undo_connect(a, b)?;
            return Err(err);
        }
        self.journal.push(Edit::Connect(a, b));
        self.journal.push(Edit::Connect(b, a));
        Ok(())
    }

    /// Applies one edge edit on both endpoints.
    pub(crate) fn apply_edge(&mut self, edit: Edit) -> Result<()> {
        match edit {
            Edit::Connect(a, b) => self.connect_edge(a, b),
            Edit::Disconnect(a, b) => self.disconnect_edge(a, b),
        }
    }

    /// Undoes journaled edits newest-first until `mark` entries remain.
    pub(crate) fn rollback_to(&mut self, mark: usize) -> Result<()> {
        while self.journal.len() > mark {
            let Some(edit) = self.journal.pop() else {
                break;
            };
            match edit {
                Edit::Connect(a, b) => self.undo_connect(a, b)?,
                Edit::Disconnect(a, b) => self.undo_disconnect(a, b)?,
            }
        }
        if mark == 0 {
            self.move_open = false;
        }
        Ok(())
    }
}
