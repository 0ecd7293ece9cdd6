//! Large neighbourhood search configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constructive::StartingSolution;
use crate::local_search::LocalSearchConfig;

/// Configuration parameters for [`LnsRunner`](super::LnsRunner).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_selective_tsp::lns::LnsConfig;
///
/// let config = LnsConfig::default()
///     .with_destroy_fraction(0.2)
///     .with_time_limit(Duration::from_millis(200))
///     .with_seed(42);
/// assert!((config.destroy_fraction - 0.2).abs() < 1e-10);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LnsConfig {
    /// Share of selected nodes removed by each destroy step.
    pub destroy_fraction: f64,
    /// Regret weight used by repair.
    pub weight_regret: f64,
    /// Best-insertion-cost weight used by repair.
    pub weight_objective: f64,
    /// Descend after every repair (LNS with LS) or not.
    pub use_local_search: bool,
    /// Descent used on the initial solution and, if enabled, after repair.
    pub local_search: LocalSearchConfig,
    /// Starting solution.
    pub start: StartingSolution,
    /// Wall-clock budget.
    pub time_limit: Duration,
    /// Optional cap on destroy/repair iterations.
    pub max_iterations: Option<usize>,
    /// Random seed (None for OS entropy).
    pub seed: Option<u64>,
}

impl Default for LnsConfig {
    fn default() -> Self {
        Self {
            destroy_fraction: 0.3,
            weight_regret: 0.5,
            weight_objective: 0.5,
            use_local_search: true,
            local_search: LocalSearchConfig::default(),
            start: StartingSolution::Random,
            time_limit: Duration::from_secs(1),
            max_iterations: None,
            seed: None,
        }
    }
}

impl LnsConfig {
    /// Sets the destroy fraction.
    pub fn with_destroy_fraction(mut self, fraction: f64) -> Self {
        self.destroy_fraction = fraction;
        self
    }

    /// Sets the repair weights.
    pub fn with_weights(mut self, weight_regret: f64, weight_objective: f64) -> Self {
        self.weight_regret = weight_regret;
        self.weight_objective = weight_objective;
        self
    }

    /// Enables or disables descent after repair.
    pub fn with_local_search(mut self, enabled: bool) -> Self {
        self.use_local_search = enabled;
        self
    }

    /// Sets the descent configuration.
    pub fn with_local_search_config(mut self, config: LocalSearchConfig) -> Self {
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

    /// Sets the iteration cap.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LnsConfig::default();
        assert!((config.destroy_fraction - 0.3).abs() < 1e-10);
        assert!((config.weight_regret - 0.5).abs() < 1e-10);
        assert!((config.weight_objective - 0.5).abs() < 1e-10);
        assert!(config.use_local_search);
        assert_eq!(config.max_iterations, None);
    }

    #[test]
    fn test_config_round_trip() {
        let config = LnsConfig::default()
            .with_local_search(false)
            .with_max_iterations(10)
            .with_time_limit(Duration::from_millis(250));
        let json = serde_json::to_string(&config).expect("serialize");
        let back: LnsConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }
}
