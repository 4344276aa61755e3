//! Or-opt driven through the edit engine.
//!
//! # Algorithm
//!
//! Tries moving segments of 1, 2, or 3 consecutive cities to a different
//! position in the tour, inserted either as-is or reversed. With the segment
//! `s0..sl` between `p` and `q`, and a target edge `(x, y)`, the move is a
//! three-edge exchange:
//!
//! ```text
//! remove (p, s0) (sl, q) (x, y)
//! add    (p, q)  (x, s0) (sl, y)     forward
//!        (p, q)  (x, sl) (s0, y)     reversed
//! ```
//!
//! Positions are taken from the tour extracted after each committed move.
//!
//! # Complexity
//!
//! O(n²) per scan, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::editor::{current_tour, TourEditor};
use crate::error::Result;
use crate::graph::Edit;

use super::{check_dimensions, ImproveResult, LocalSearchConfig};

/// Improves the tour held by `editor` by relocating short segments.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::editor::TourEditor;
/// use u_tour::graph::EditableTourGraph;
/// use u_tour::local_search::{or_opt, LocalSearchConfig};
///
/// // City 2 sits between 4 and 5 on a line but is visited out of place.
/// let dm = DistanceMatrix::from_points(&[
///     (0.0, 0.0), (4.5, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (5.0, 0.0),
/// ]);
/// let mut editor = EditableTourGraph::new(6).unwrap();
/// editor.load(&[1, 2, 3, 4, 5, 6]).unwrap();
///
/// let before = dm.tour_length(&[1, 2, 3, 4, 5, 6]);
/// let result = or_opt(&mut editor, &dm, &LocalSearchConfig::default().with_seed(3)).unwrap();
/// assert!(result.length < before);
/// assert!((result.length - 10.0).abs() < 1e-10);
/// ```
pub fn or_opt<E: TourEditor + ?Sized>(
    editor: &mut E,
    distances: &DistanceMatrix,
    config: &LocalSearchConfig,
) -> Result<ImproveResult> {
    check_dimensions(editor, distances)?;
    let n = editor.size();
    let mut result = ImproveResult::default();
    let mut tour = current_tour(editor)?;

    if n >= 4 {
        let offset = config.rng().random_range(0..n);
        while result.passes < config.max_passes {
            result.passes += 1;
            if !relocate_one(editor, &tour, distances, config, offset, &mut result)? {
                break;
            }
            tour = current_tour(editor)?;
        }
    }

    result.finish(tour, distances);
    log::debug!(
        "or-opt finished: length={:.4}, accepted={}, rejected={}, passes={}",
        result.length,
        result.accepted,
        result.rejected,
        result.passes
    );
    Ok(result)
}

/// Scans for the first improving relocation and commits it.
///
/// Returns `true` if a move was committed.
fn relocate_one<E: TourEditor + ?Sized>(
    editor: &mut E,
    tour: &[usize],
    distances: &DistanceMatrix,
    config: &LocalSearchConfig,
    offset: usize,
    result: &mut ImproveResult,
) -> Result<bool> {
    let n = tour.len();
    let d = |a: usize, b: usize| distances.between(a, b);

    for seg_len in 1..=3 {
        // p, the segment, q, and a disjoint target edge need seg_len + 3 cities.
        if n < seg_len + 3 {
            continue;
        }
        for k in 0..n {
            let i = (k + offset) % n;
            let s0 = tour[i];
            let sl = tour[(i + seg_len - 1) % n];
            let p = tour[(i + n - 1) % n];
            let q = tour[(i + seg_len) % n];
            let removal_gain = d(p, s0) + d(sl, q) - d(p, q);

            for j in 0..n {
                // Position of x relative to the segment start; the segment
                // occupies 0..seg_len and p sits at n - 1.
                let rel = (j + n - i) % n;
                if rel < seg_len || rel == n - 1 {
                    continue;
                }
                let x = tour[j];
                let y = tour[(j + 1) % n];
                let base = d(x, y);
                let forward = d(x, s0) + d(sl, y) - base;
                let reversed = d(x, sl) + d(s0, y) - base;
                let (insert_cost, reverse) = if reversed < forward {
                    (reversed, true)
                } else {
                    (forward, false)
                };
                let delta = insert_cost - removal_gain;
                if delta >= -config.min_gain {
                    continue;
                }

                let (left, right) = if reverse { (sl, s0) } else { (s0, sl) };
                let edits = [
                    Edit::Disconnect(p, s0),
                    Edit::Disconnect(sl, q),
                    Edit::Disconnect(x, y),
                    Edit::Connect(p, q),
                    Edit::Connect(x, left),
                    Edit::Connect(right, y),
                ];
                if editor.try_move(&edits)? {
                    editor.commit();
                    result.accepted += 1;
                    log::debug!(
                        "or-opt: segment {s0}..{sl} moved between {x} and {y}, delta={delta:.4}"
                    );
                    return Ok(true);
                }
                editor.rollback()?;
                result.rejected += 1;
                log::trace!("or-opt: segment {s0}..{sl} between {x} and {y} splits the tour");
            }
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::random_tour;
    use crate::error::TourError;
    use crate::graph::EditableTourGraph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line(xs: &[f64]) -> DistanceMatrix {
        let points: Vec<(f64, f64)> = xs.iter().map(|&x| (x, 0.0)).collect();
        DistanceMatrix::from_points(&points)
    }

    fn editor(perm: &[usize]) -> EditableTourGraph {
        let mut e = EditableTourGraph::new(perm.len()).expect("valid size");
        e.load(perm).expect("valid permutation");
        e
    }

    fn config() -> LocalSearchConfig {
        LocalSearchConfig::default().with_seed(7)
    }

    #[test]
    fn test_or_opt_already_optimal() {
        let dm = line(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let mut e = editor(&[1, 2, 3, 4, 5]);
        let result = or_opt(&mut e, &dm, &config()).expect("valid tour");
        assert_eq!(result.accepted, 0);
        assert!((result.length - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_or_opt_relocates_single_city() {
        // City 3 belongs at the far end of the line.
        let dm = line(&[0.0, 1.0, 9.0, 2.0, 3.0, 4.0]);
        let mut e = editor(&[1, 2, 3, 4, 5, 6]);
        let result = or_opt(&mut e, &dm, &config()).expect("valid tour");
        assert!(result.accepted >= 1);
        assert!((result.length - 18.0).abs() < 1e-10);
        assert!(e.is_clean());
    }

    #[test]
    fn test_or_opt_relocates_segment() {
        // Cities 2 and 3 form a pair that belongs past city 6.
        let dm = line(&[0.0, 8.0, 9.0, 1.0, 2.0, 3.0, 4.0]);
        let mut e = editor(&[1, 2, 3, 4, 5, 6, 7]);
        let result = or_opt(&mut e, &dm, &config()).expect("valid tour");
        assert!((result.length - 18.0).abs() < 1e-10);
    }

    #[test]
    fn test_or_opt_never_worsens() {
        let points: Vec<(f64, f64)> = (0..15)
            .map(|i| ((i * 7 % 15) as f64, (i * 11 % 15) as f64))
            .collect();
        let dm = DistanceMatrix::from_points(&points);
        let mut rng = StdRng::seed_from_u64(21);
        let start = random_tour(15, &mut rng);
        let mut e = editor(&start);

        let result = or_opt(&mut e, &dm, &config()).expect("valid tour");
        assert!(result.length <= dm.tour_length(&start) + 1e-10);
        assert!((dm.tour_length(&result.tour) - result.length).abs() < 1e-9);
        let mut sorted = result.tour.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=15).collect::<Vec<_>>());
    }

    #[test]
    fn test_or_opt_respects_max_passes() {
        let dm = line(&[0.0, 1.0, 9.0, 2.0, 3.0, 4.0]);
        let mut e = editor(&[1, 2, 3, 4, 5, 6]);
        let result = or_opt(&mut e, &dm, &config().with_max_passes(1)).expect("valid tour");
        assert_eq!(result.passes, 1);
        assert!(result.accepted <= 1);
    }

    #[test]
    fn test_or_opt_dimension_mismatch() {
        let dm = line(&[0.0, 1.0, 2.0]);
        let mut e = editor(&[1, 2, 3, 4]);
        assert_eq!(
            or_opt(&mut e, &dm, &config()).unwrap_err(),
            TourError::DimensionMismatch {
                expected: 4,
                actual: 3
            }
        );
    }
}
