//! Local search strategies built on the [`TourEditor`] interface.
//!
//! - [`two_opt`] — Orientation-free 2-opt; the probe rejects splitting moves
//! - [`or_opt`] — Segment relocation (1-3 cities), forward or reversed

mod config;
mod or_opt;
mod two_opt;

pub use config::LocalSearchConfig;
pub use or_opt::or_opt;
pub use two_opt::two_opt;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::editor::TourEditor;
use crate::error::{Result, TourError};

/// Outcome of a local search run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImproveResult {
    /// Final tour, starting at city 1.
    pub tour: Vec<usize>,
    /// Closed length of `tour`.
    pub length: f64,
    /// Moves that kept a single tour and were committed.
    pub accepted: usize,
    /// Moves that broke the tour and were rolled back.
    pub rejected: usize,
    /// Improvement scans performed.
    pub passes: usize,
}

impl ImproveResult {
    fn finish(&mut self, tour: Vec<usize>, distances: &DistanceMatrix) {
        self.length = distances.tour_length(&tour);
        self.tour = tour;
    }
}

fn check_dimensions<E: TourEditor + ?Sized>(editor: &E, distances: &DistanceMatrix) -> Result<()> {
    if distances.size() != editor.size() {
        return Err(TourError::DimensionMismatch {
            expected: editor.size(),
            actual: distances.size(),
        });
    }
    Ok(())
}
