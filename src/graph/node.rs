//! Per-city adjacency record.

use std::hash::{Hash, Hasher};

/// Compact handle to a node inside the [`TourGraph`](super::TourGraph) arena
/// that issued it.
///
/// Handles are plain indices: they are only meaningful for the graph they came
/// from and must not be carried across graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Handle for a 1-based city id. The caller checks the range.
    pub(crate) fn from_city(city: usize) -> Self {
        Self((city - 1) as u32)
    }

    /// 0-based arena index.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based city id.
    pub fn city(self) -> usize {
        self.0 as usize + 1
    }
}

/// One of the two neighbor slots of a node.
///
/// The tour is undirected, so neither slot means "predecessor" or
/// "successor"; they are simply the two incident edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    /// Both slots, in scan order.
    pub const ALL: [Slot; 2] = [Slot::First, Slot::Second];

    /// Array position of this slot (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }

    /// The opposite slot.
    pub fn other(self) -> Slot {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }
}

/// A single city's adjacency record: identity, two neighbor slots, and the
/// undo log of slot mutations since the last commit.
///
/// Two nodes compare equal iff their ids are equal.
#[derive(Debug, Clone)]
pub struct TourNode {
    id: NodeId,
    link: [Option<NodeId>; 2],
    undo: Vec<(Slot, Option<NodeId>)>,
}

impl TourNode {
    pub(crate) fn new(id: NodeId) -> Self {
        Self {
            id,
            link: [None, None],
            undo: Vec::new(),
        }
    }

    /// 1-based city id.
    pub fn id(&self) -> usize {
        self.id.city()
    }

    /// Arena handle of this node.
    pub fn handle(&self) -> NodeId {
        self.id
    }

    /// Neighbor in `slot`, or `None` if the slot is unset.
    pub fn neighbor(&self, slot: Slot) -> Option<NodeId> {
        self.link[slot.index()]
    }

    /// Both slots.
    pub fn neighbors(&self) -> [Option<NodeId>; 2] {
        self.link
    }

    /// Number of occupied slots.
    pub fn degree(&self) -> usize {
        self.link.iter().filter(|l| l.is_some()).count()
    }

    /// First unset slot, if any.
    pub fn free_slot(&self) -> Option<Slot> {
        Slot::ALL.into_iter().find(|s| self.link[s.index()].is_none())
    }

    /// First slot pointing at `target`, if any.
    pub fn slot_of(&self, target: NodeId) -> Option<Slot> {
        Slot::ALL
            .into_iter()
            .find(|s| self.link[s.index()] == Some(target))
    }

    /// Number of logged edits awaiting commit or undo.
    pub fn pending(&self) -> usize {
        self.undo.len()
    }

    pub(crate) fn set(&mut self, slot: Slot, value: Option<NodeId>) {
        self.link[slot.index()] = value;
    }

    pub(crate) fn clear_links(&mut self) {
        self.link = [None, None];
    }

    pub(crate) fn log(&mut self, slot: Slot, previous: Option<NodeId>) {
        self.undo.push((slot, previous));
    }

    pub(crate) fn pop_log(&mut self) -> Option<(Slot, Option<NodeId>)> {
        self.undo.pop()
    }

    pub(crate) fn clear_log(&mut self) {
        self.undo.clear();
    }
}

impl PartialEq for TourNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TourNode {}

impl Hash for TourNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
