//! Local search configuration.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Configuration parameters for the edit-engine local searches.
///
/// # Examples
///
/// ```
/// use u_tour::local_search::LocalSearchConfig;
///
/// let config = LocalSearchConfig::default()
///     .with_max_passes(50)
///     .with_min_gain(1e-6)
///     .with_seed(42);
/// assert_eq!(config.max_passes, 50);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalSearchConfig {
    /// Maximum number of improvement scans.
    pub max_passes: usize,
    /// Smallest length reduction that counts as an improvement.
    pub min_gain: f64,
    /// Seed for the scan start offset (None for random).
    pub seed: Option<u64>,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            max_passes: 1000,
            min_gain: 1e-10,
            seed: None,
        }
    }
}

impl LocalSearchConfig {
    /// Sets the maximum number of improvement scans.
    pub fn with_max_passes(mut self, n: usize) -> Self {
        self.max_passes = n;
        self
    }

    /// Sets the minimum gain for accepting a move.
    pub fn with_min_gain(mut self, gain: f64) -> Self {
        self.min_gain = gain;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
