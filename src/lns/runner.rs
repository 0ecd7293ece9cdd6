//! Large neighbourhood search execution engine.
//!
//! # Algorithm
//!
//! 1. Build the starting solution and descend to a local optimum
//! 2. Until the deadline (or iteration cap):
//!    a. **Destroy**: copy `current`, remove a fraction of its nodes with a
//!    randomly chosen [`DestroyStrategy`]
//!    b. **Repair**: refill by weighted regret insertion
//!    c. **Improve** (optional): descend to a local optimum
//!    d. **Accept**: replace `current` only on strict improvement
//! 3. Return the best solution found
//!
//! # Reference
//!
//! Shaw, P. (1998). "Using Constraint Programming and Local Search Methods
//! to Solve Vehicle Routing Problems", *CP-98*, LNCS 1520, 417-431.

use std::time::Instant;

use crate::local_search::Descent;
use crate::models::{Instance, SearchResult};
use crate::random::rng_from_seed;

use super::config::LnsConfig;
use super::destroy::{removal_count, DestroyStrategy};
use super::repair::RegretRepair;

/// Large neighbourhood search runner.
pub struct LnsRunner;

impl LnsRunner {
    /// Executes LNS on the instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use u_selective_tsp::lns::{LnsConfig, LnsRunner};
    /// use u_selective_tsp::models::Instance;
    ///
    /// let points: Vec<(f64, f64, i64)> = (0..20)
    ///     .map(|i| ((i * 7 % 19) as f64, (i * 11 % 17) as f64, i % 5))
    ///     .collect();
    /// let inst = Instance::from_points(&points).unwrap();
    /// let config = LnsConfig::default()
    ///     .with_time_limit(Duration::from_secs(10))
    ///     .with_max_iterations(20)
    ///     .with_seed(42);
    /// let result = LnsRunner::run(&inst, &config);
    /// assert_eq!(result.iterations, 20);
    /// assert!(result.best.is_complete(&inst));
    /// ```
    pub fn run(instance: &Instance, config: &LnsConfig) -> SearchResult {
        let started = Instant::now();
        let deadline = started + config.time_limit;
        let mut rng = rng_from_seed(config.seed);
        let descent = Descent::new(instance, config.local_search.clone());
        let repair = RegretRepair::new(config.weight_regret, config.weight_objective);

        let mut current = config.start.build(instance, &mut rng);
        descent.improve(instance, &mut current, &mut rng);
        let mut best = current.clone();

        let mut cost_history = Vec::new();
        let mut iteration = 0;

        while Instant::now() < deadline && config.max_iterations.is_none_or(|m| iteration < m) {
            let mut candidate = current.clone();
            let strategy = DestroyStrategy::choose(&mut rng);
            let count = removal_count(candidate.len(), config.destroy_fraction);
            let removed = strategy.destroy(instance, &mut candidate, count, &mut rng);
            let inserted = repair.repair(instance, &mut candidate);
            if config.use_local_search {
                descent.improve(instance, &mut candidate, &mut rng);
            }
            log::trace!(
                "lns iteration {iteration}: {} removed {removed}, {} inserted {inserted}, cost {}",
                strategy.name(),
                repair.name(),
                candidate.total_cost()
            );

            if candidate.total_cost() < current.total_cost() {
                current = candidate;
                if current.total_cost() < best.total_cost() {
                    best = current.clone();
                    log::info!("lns iteration {iteration}: new best {}", best.total_cost());
                }
            }

            cost_history.push(best.total_cost());
            iteration += 1;
        }

        log::debug!(
            "lns finished: {iteration} iterations, best cost {}",
            best.total_cost()
        );
        SearchResult {
            best,
            iterations: iteration,
            elapsed: started.elapsed(),
            cost_history,
        }
    }
}
