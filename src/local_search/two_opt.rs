//! 2-opt driven through the edit engine.
//!
//! # Algorithm
//!
//! For each tour edge `(a, sa)` and each other edge `(c, sc)` that shares no
//! city with it, compute the change from replacing both with `(a, c)` and
//! `(sa, sc)`:
//!
//! ```text
//! delta = d(a, c) + d(sa, sc) - d(a, sa) - d(c, sc)
//! ```
//!
//! Edges are read straight from the adjacency, which has no orientation, so
//! only half of the improving candidates reconnect into a single tour; the
//! other half split it in two. Each candidate is applied with
//! [`TourEditor::try_move`] and the structural probe decides: a tour is
//! committed, a split is rolled back.
//!
//! # Complexity
//!
//! O(n²) candidates per scan; each applied candidate costs an O(n) probe.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::editor::{current_tour, TourEditor};
use crate::error::{Result, TourError};
use crate::graph::Edit;

use super::{check_dimensions, ImproveResult, LocalSearchConfig};

/// Improves the tour held by `editor` with first-improvement 2-opt.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::editor::TourEditor;
/// use u_tour::graph::EditableTourGraph;
/// use u_tour::local_search::{two_opt, LocalSearchConfig};
///
/// // Unit square visited in a crossing order.
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let mut editor = EditableTourGraph::new(4).unwrap();
/// editor.load(&[1, 3, 2, 4]).unwrap();
///
/// let result = two_opt(&mut editor, &dm, &LocalSearchConfig::default().with_seed(1)).unwrap();
/// assert!((result.length - 4.0).abs() < 1e-10);
/// assert_eq!(result.accepted, 1);
/// ```
pub fn two_opt<E: TourEditor + ?Sized>(
    editor: &mut E,
    distances: &DistanceMatrix,
    config: &LocalSearchConfig,
) -> Result<ImproveResult> {
    check_dimensions(editor, distances)?;
    let n = editor.size();
    let mut result = ImproveResult::default();
    current_tour(editor)?;

    if n >= 4 {
        let offset = config.rng().random_range(0..n);
        while result.passes < config.max_passes {
            result.passes += 1;
            if !scan(editor, distances, config, offset, &mut result)? {
                break;
            }
        }
    }

    result.finish(current_tour(editor)?, distances);
    log::debug!(
        "2-opt finished: length={:.4}, accepted={}, rejected={}, passes={}",
        result.length,
        result.accepted,
        result.rejected,
        result.passes
    );
    Ok(result)
}

/// One sweep over all cities. Returns `true` if any move was committed.
fn scan<E: TourEditor + ?Sized>(
    editor: &mut E,
    distances: &DistanceMatrix,
    config: &LocalSearchConfig,
    offset: usize,
    result: &mut ImproveResult,
) -> Result<bool> {
    let n = editor.size();
    let mut improved = false;

    'cities: for k in 0..n {
        let a = (k + offset) % n + 1;
        for slot in 0..2 {
            let sa = editor.neighbors(a)?[slot].ok_or(TourError::NotATour)?;
            let removed_a = distances.between(a, sa);

            for c in 1..=n {
                if c == a || c == sa {
                    continue;
                }
                for sc in editor.neighbors(c)?.into_iter().flatten() {
                    if sc == a || sc == sa {
                        continue;
                    }
                    let delta = distances.between(a, c) + distances.between(sa, sc)
                        - removed_a
                        - distances.between(c, sc);
                    if delta >= -config.min_gain {
                        continue;
                    }

                    let edits = [
                        Edit::Disconnect(a, sa),
                        Edit::Disconnect(c, sc),
                        Edit::Connect(a, c),
                        Edit::Connect(sa, sc),
                    ];
                    if editor.try_move(&edits)? {
                        editor.commit();
                        result.accepted += 1;
                        improved = true;
                        log::debug!("2-opt: ({a},{sa}) ({c},{sc}) accepted, delta={delta:.4}");
                        continue 'cities;
                    }
                    editor.rollback()?;
                    result.rejected += 1;
                    log::trace!("2-opt: ({a},{sa}) ({c},{sc}) splits the tour");
                }
            }
        }
    }

    Ok(improved)
}
