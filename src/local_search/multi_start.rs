//! Multi-start local search.
//!
//! # Algorithm
//!
//! 1. Build a fresh starting solution
//! 2. Descend to a local optimum
//! 3. Keep it if it beats the best so far
//! 4. Repeat `starts` times and return the best

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::models::{Instance, SearchResult};
use crate::random::rng_from_seed;

use super::config::LocalSearchConfig;
use super::descent::Descent;

/// Configuration for multi-start local search.
///
/// # Examples
///
/// ```
/// use u_selective_tsp::local_search::MultiStartConfig;
///
/// let config = MultiStartConfig::default().with_starts(20).with_seed(3);
/// assert_eq!(config.starts, 20);
/// assert_eq!(config.seed, Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiStartConfig {
    /// Number of independent descents.
    pub starts: usize,
    /// Descent used for every start.
    pub local_search: LocalSearchConfig,
    /// Random seed (None for OS entropy).
    pub seed: Option<u64>,
}

impl Default for MultiStartConfig {
    fn default() -> Self {
        Self {
            starts: 200,
            local_search: LocalSearchConfig::default(),
            seed: None,
        }
    }
}

impl MultiStartConfig {
    /// Sets the number of starts.
    pub fn with_starts(mut self, starts: usize) -> Self {
        self.starts = starts;
        self
    }

    /// Sets the descent configuration.
    pub fn with_local_search(mut self, config: LocalSearchConfig) -> Self {
        self.local_search = config;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Multi-start local search runner.
pub struct MultiStartRunner;

impl MultiStartRunner {
    /// Runs `config.starts` descents and returns the best local optimum.
    ///
    /// With zero starts a single descent is still run so that a solution
    /// is always returned. `iterations` reports the number of descents.
    pub fn run(instance: &Instance, config: &MultiStartConfig) -> SearchResult {
        let started = Instant::now();
        let mut rng = rng_from_seed(config.seed);
        let descent = Descent::new(instance, config.local_search.clone());

        let mut best = descent.run(instance, &mut rng).best;
        let mut cost_history = vec![best.total_cost()];
        let mut runs = 1;

        while runs < config.starts {
            let candidate = descent.run(instance, &mut rng).best;
            if candidate.total_cost() < best.total_cost() {
                best = candidate;
            }
            cost_history.push(best.total_cost());
            runs += 1;
        }

        log::debug!("multi-start: {runs} descents, best cost {}", best.total_cost());
        SearchResult {
            best,
            iterations: runs,
            elapsed: started.elapsed(),
            cost_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scattered(n: usize) -> Instance {
        let points: Vec<(f64, f64, i64)> = (0..n)
            .map(|i| {
                (
                    ((i * 41) % 103) as f64,
                    ((i * 67) % 109) as f64,
                    ((i * 7) % 13) as i64,
                )
            })
            .collect();
        Instance::from_points(&points).expect("valid")
    }

    #[test]
    fn test_multi_start_history_monotone() {
        let inst = scattered(30);
        let config = MultiStartConfig::default().with_starts(8).with_seed(42);
        let result = MultiStartRunner::run(&inst, &config);
        assert_eq!(result.iterations, 8);
        assert_eq!(result.cost_history.len(), 8);
        for w in result.cost_history.windows(2) {
            assert!(w[1] <= w[0]);
        }
        assert_eq!(result.cost_history.last().copied(), Some(result.best_cost()));
        assert!(result.best.is_consistent(&inst));
    }

    #[test]
    fn test_multi_start_is_reproducible() {
        let inst = scattered(24);
        let config = MultiStartConfig::default().with_starts(4).with_seed(7);
        let a = MultiStartRunner::run(&inst, &config);
        let b = MultiStartRunner::run(&inst, &config);
        assert_eq!(a.best.cycle(), b.best.cycle());
    }

    #[test]
    fn test_zero_starts_still_returns_solution() {
        let inst = scattered(10);
        let config = MultiStartConfig::default().with_starts(0).with_seed(1);
        let result = MultiStartRunner::run(&inst, &config);
        assert_eq!(result.iterations, 1);
        assert!(result.best.is_complete(&inst));
    }
}
