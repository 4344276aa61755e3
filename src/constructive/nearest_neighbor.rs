//! Nearest-neighbor tour construction.
//!
//! Starting from a given city, always travel to the nearest unvisited city.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.
//!
//! # Reference
//!
//! The simplest TSP construction heuristic. Tours are typically 20-25% above
//! optimal, which makes it a cheap starting point for local search.

use crate::distance::DistanceMatrix;
use crate::error::{Result, TourError};

/// Builds a tour over cities `1..=distances.size()` using the
/// nearest-neighbor heuristic, starting at city `start`.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::constructive::nearest_neighbor_tour;
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (3.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let tour = nearest_neighbor_tour(&dm, 1).unwrap();
/// assert_eq!(tour, vec![1, 3, 4, 2]);
/// ```
pub fn nearest_neighbor_tour(distances: &DistanceMatrix, start: usize) -> Result<Vec<usize>> {
    let n = distances.size();
    if n < 1 {
        return Err(TourError::InvalidSize { size: n });
    }
    if start < 1 || start > n {
        return Err(TourError::OutOfRange { id: start, size: n });
    }

    let mut tour = Vec::with_capacity(n);
    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != start - 1).collect();
    let mut current = start - 1;
    tour.push(start);

    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        tour.push(next + 1);
        unvisited.retain(|&i| i != next);
        current = next;
    }

    Ok(tour)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> DistanceMatrix {
        DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)])
    }

    #[test]
    fn test_nn_visits_in_order() {
        let tour = nearest_neighbor_tour(&line(), 1).expect("valid start");
        assert_eq!(tour, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_nn_from_middle() {
        let tour = nearest_neighbor_tour(&line(), 3).expect("valid start");
        assert_eq!(tour.len(), 4);
        assert_eq!(tour[0], 3);
        let mut sorted = tour.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_nn_single_city() {
        let dm = DistanceMatrix::from_points(&[(0.0, 0.0)]);
        assert_eq!(nearest_neighbor_tour(&dm, 1).expect("valid"), vec![1]);
    }

    #[test]
    fn test_nn_rejects_bad_start() {
        assert_eq!(
            nearest_neighbor_tour(&line(), 5).unwrap_err(),
            TourError::OutOfRange { id: 5, size: 4 }
        );
        let empty = DistanceMatrix::new(0);
        assert_eq!(
            nearest_neighbor_tour(&empty, 1).unwrap_err(),
            TourError::InvalidSize { size: 0 }
        );
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (10.0, 0.0), (1.0, 0.0)]);
        assert_eq!(nearest_neighbor_tour(&dm, 1).expect("valid"), vec![1, 3, 2]);
    }
}
