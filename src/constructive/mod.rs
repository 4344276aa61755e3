//! Constructive heuristics for building initial tours.
//!
//! - [`random_tour`] — Uniformly shuffled permutation, O(n)
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor, O(n²)

mod nearest_neighbor;
mod random;

pub use nearest_neighbor::nearest_neighbor_tour;
pub use random::random_tour;
