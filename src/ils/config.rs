//! Iterated local search configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constructive::StartingSolution;
use crate::local_search::LocalSearchConfig;

/// Configuration parameters for [`IlsRunner`](super::IlsRunner).
///
/// # Examples
///
/// ```
/// use u_selective_tsp::ils::IlsConfig;
///
/// let config = IlsConfig::default().with_strength(4, 16, 4).with_seed(7);
/// assert_eq!(config.min_strength, 4);
/// assert_eq!(config.max_strength, 16);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IlsConfig {
    /// Strength used at the start and after every improvement.
    pub min_strength: usize,
    /// Upper bound on the strength.
    pub max_strength: usize,
    /// Added to the strength after every non-improving iteration.
    pub strength_increment: usize,
    /// Random cycle positions sampled when picking a node to drop.
    pub removal_samples: usize,
    /// Random unselected nodes sampled when picking a node to add.
    pub addition_samples: usize,
    /// Descent applied after every perturbation.
    pub local_search: LocalSearchConfig,
    /// Starting solution.
    pub start: StartingSolution,
    /// Wall-clock budget.
    pub time_limit: Duration,
    /// Optional cap on perturbation iterations.
    pub max_iterations: Option<usize>,
    /// Random seed (None for OS entropy).
    pub seed: Option<u64>,
}

impl Default for IlsConfig {
    fn default() -> Self {
        Self {
            min_strength: 2,
            max_strength: 12,
            strength_increment: 2,
            removal_samples: 3,
            addition_samples: 3,
            local_search: LocalSearchConfig::default(),
            start: StartingSolution::Random,
            time_limit: Duration::from_secs(1),
            max_iterations: None,
            seed: None,
        }
    }
}

impl IlsConfig {
    /// Sets the strength schedule. `max` is raised to `min` if smaller.
    pub fn with_strength(mut self, min: usize, max: usize, increment: usize) -> Self {
        self.min_strength = min;
        self.max_strength = max.max(min);
        self.strength_increment = increment;
        self
    }

    /// Sets the pool sizes used to pick exchanged nodes.
    pub fn with_samples(mut self, removal: usize, addition: usize) -> Self {
        self.removal_samples = removal;
        self.addition_samples = addition;
        self
    }

    /// Sets the descent configuration.
    pub fn with_local_search(mut self, config: LocalSearchConfig) -> Self {
        self.local_search = config;
        self
    }

    /// Sets the starting solution.
    pub fn with_start(mut self, start: StartingSolution) -> Self {
        self.start = start;
        self
    }

    /// Sets the wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Caps the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
