//! Cyclic tour stored as an arena of degree-2 nodes.
//!
//! # Representation
//!
//! City `c` (1-based) lives at arena index `c - 1`. Each node keeps two
//! unordered neighbor slots, so a valid tour is a single cycle through all
//! `n` nodes where every node has both slots set.
//!
//! # Complexity
//!
//! Bulk load ([`TourGraph::from_path`]) and extraction ([`TourGraph::to_path`])
//! are O(n); lookups are O(1).

use crate::error::{Result, TourError};

use super::node::{NodeId, Slot, TourNode};

/// Fixed-capacity tour graph over cities `1..=n`.
///
/// # Examples
///
/// ```
/// use u_tour::graph::TourGraph;
///
/// let mut graph = TourGraph::new(4).unwrap();
/// graph.from_path(&[3, 1, 4, 2]).unwrap();
///
/// let mut out = Vec::new();
/// assert!(graph.to_path(&mut out));
/// assert_eq!(out[0], 1);
/// assert_eq!(out.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct TourGraph {
    nodes: Vec<TourNode>,
}

impl TourGraph {
    /// Allocates `n` unlinked nodes with ids `1..=n`.
    pub fn new(n: usize) -> Result<Self> {
        if n < 1 || n > u32::MAX as usize {
            return Err(TourError::InvalidSize { size: n });
        }
        let nodes = (1..=n)
            .map(|city| TourNode::new(NodeId::from_city(city)))
            .collect();
        Ok(Self { nodes })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a graph holds at least one city.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolves a 1-based city id to its handle.
    pub fn handle(&self, id: usize) -> Result<NodeId> {
        if id < 1 || id > self.nodes.len() {
            return Err(TourError::OutOfRange {
                id,
                size: self.nodes.len(),
            });
        }
        Ok(NodeId::from_city(id))
    }

    /// Node for a 1-based city id.
    pub fn node(&self, id: usize) -> Result<&TourNode> {
        let handle = self.handle(id)?;
        Ok(&self.nodes[handle.index()])
    }

    pub(crate) fn node_mut(&mut self, id: usize) -> Result<&mut TourNode> {
        let handle = self.handle(id)?;
        Ok(&mut self.nodes[handle.index()])
    }

    /// Neighbor of city `id` in `slot`, or `None` if unset.
    pub fn neighbor(&self, id: usize, slot: Slot) -> Result<Option<NodeId>> {
        Ok(self.node(id)?.neighbor(slot))
    }

    /// Both neighbors of city `id` as 1-based city ids.
    pub fn neighbor_cities(&self, id: usize) -> Result<[Option<usize>; 2]> {
        let [a, b] = self.node(id)?.neighbors();
        Ok([a.map(NodeId::city), b.map(NodeId::city)])
    }

    /// Number of occupied slots on city `id`.
    pub fn degree(&self, id: usize) -> Result<usize> {
        Ok(self.node(id)?.degree())
    }

    /// Whether city `a` has a slot pointing at city `b`.
    pub fn is_connected(&self, a: usize, b: usize) -> Result<bool> {
        let target = self.handle(b)?;
        Ok(self.node(a)?.slot_of(target).is_some())
    }

    /// Iterates over all nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = &TourNode> {
        self.nodes.iter()
    }

    pub(crate) fn nodes_mut(&mut self) -> impl Iterator<Item = &mut TourNode> {
        self.nodes.iter_mut()
    }

    /// Replaces the adjacency with the cycle described by `perm`.
    ///
    /// `perm` must contain every city `1..=n` exactly once. Consecutive cities,
    /// including the last and the first, become neighbors. The input is
    /// validated before any slot is touched. Undo logs are left alone.
    pub fn from_path(&mut self, perm: &[usize]) -> Result<()> {
        self.validate_permutation(perm)?;

        for node in self.nodes_mut() {
            node.clear_links();
        }
        let n = perm.len();
        for i in 0..n {
            let a = perm[i];
            let b = perm[(i + 1) % n];
            self.attach(a, b)?;
            self.attach(b, a)?;
        }

        log::debug!("loaded tour of {} cities", n);
        Ok(())
    }

    fn validate_permutation(&self, perm: &[usize]) -> Result<()> {
        let n = self.nodes.len();
        if perm.len() != n {
            return Err(TourError::InvalidPermutation(format!(
                "expected {} cities, got {}",
                n,
                perm.len()
            )));
        }
        let mut seen = vec![false; n];
        for &city in perm {
            if city < 1 || city > n {
                return Err(TourError::InvalidPermutation(format!(
                    "city {} is out of range 1..={}",
                    city, n
                )));
            }
            if seen[city - 1] {
                return Err(TourError::InvalidPermutation(format!(
                    "duplicate city {}",
                    city
                )));
            }
            seen[city - 1] = true;
        }
        Ok(())
    }

    /// Writes the tour into `out`, starting at city 1.
    ///
    /// Walks from city 1 through its first slot and then always leaves each
    /// node through the slot it did not arrive on. Succeeds only when every
    /// visited node has both slots set, `n` distinct cities are visited, and
    /// the walk closes back at city 1 on step `n`.
    ///
    /// A broken or fragmented adjacency returns `false`; the contents of `out`
    /// are then unspecified.
    pub fn to_path(&self, out: &mut Vec<usize>) -> bool {
        out.clear();
        let n = self.nodes.len();
        let start = &self.nodes[0];
        let (Some(first), Some(_)) = (start.neighbor(Slot::First), start.neighbor(Slot::Second))
        else {
            log::trace!("probe failed: city 1 is missing a neighbor");
            return false;
        };

        let mut seen = vec![false; n];
        seen[0] = true;
        out.push(start.id());

        let mut prev = start.handle();
        let mut current = first;
        for step in 1..=n {
            if current == start.handle() {
                if step == n && start.neighbor(Slot::Second) == Some(prev) {
                    return true;
                }
                if step == n {
                    log::trace!("probe failed: city 1 does not link back to {}", prev.city());
                    return false;
                }
                log::trace!("probe failed: cycle closed after {} of {} cities", step, n);
                return false;
            }
            if step == n {
                break;
            }
            if seen[current.index()] {
                log::trace!("probe failed: city {} revisited", current.city());
                return false;
            }
            seen[current.index()] = true;
            out.push(current.city());

            let node = &self.nodes[current.index()];
            let [Some(l0), Some(l1)] = node.neighbors() else {
                log::trace!("probe failed: city {} is missing a neighbor", node.id());
                return false;
            };
            let next = if l0 == prev {
                l1
            } else if l1 == prev {
                l0
            } else {
                log::trace!(
                    "probe failed: city {} does not link back to {}",
                    node.id(),
                    prev.city()
                );
                return false;
            };
            prev = current;
            current = next;
        }

        log::trace!("probe failed: walk did not return to city 1 after {} steps", n);
        false
    }

    /// Allocating form of [`to_path`](Self::to_path).
    pub fn tour(&self) -> Option<Vec<usize>> {
        let mut out = Vec::with_capacity(self.nodes.len());
        self.to_path(&mut out).then_some(out)
    }

    /// Puts `b` into the first free slot of `a`.
    pub(crate) fn attach(&mut self, a: usize, b: usize) -> Result<Slot> {
        let target = self.handle(b)?;
        let node = self.node_mut(a)?;
        let slot = node
            .free_slot()
            .ok_or(TourError::CapacityExceeded { node: a, target: b })?;
        node.set(slot, Some(target));
        Ok(slot)
    }

    /// Clears the first slot of `a` that points at `b`.
    pub(crate) fn detach(&mut self, a: usize, b: usize) -> Result<Slot> {
        let target = self.handle(b)?;
        let node = self.node_mut(a)?;
        let slot = node
            .slot_of(target)
            .ok_or(TourError::NotConnected { node: a, target: b })?;
        node.set(slot, None);
        Ok(slot)
    }
}
