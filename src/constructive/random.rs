//! Uniform random tours.

use rand::Rng;

/// Returns a uniformly random permutation of cities `1..=n`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tour::constructive::random_tour;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut tour = random_tour(6, &mut rng);
/// tour.sort_unstable();
/// assert_eq!(tour, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (1..=n).collect();

    // Fisher-Yates shuffle
    for i in (1..perm.len()).rev() {
        let j = rng.random_range(0..=i as u64) as usize;
        perm.swap(i, j);
    }

    perm
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_tour_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [1, 2, 10, 50] {
            let mut tour = random_tour(n, &mut rng);
            assert_eq!(tour.len(), n);
            tour.sort_unstable();
            assert_eq!(tour, (1..=n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_random_tour_is_seeded() {
        let a = random_tour(20, &mut StdRng::seed_from_u64(3));
        let b = random_tour(20, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_tour_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_tour(0, &mut rng).is_empty());
    }
}
