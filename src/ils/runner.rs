//! Iterated local search execution engine.
//!
//! # Algorithm
//!
//! 1. Build the starting solution and descend; `current = best = ` result
//! 2. Until the deadline (or iteration cap):
//!    a. Perturb a copy of `current` with the current strength
//!    b. Descend to a new local optimum
//!    c. Accept it as `current` unconditionally
//!    d. Strength resets to the minimum if the new optimum beat the previous
//!    `current`, otherwise grows by the increment up to the maximum
//!    e. Update `best`
//!
//! # Reference
//!
//! Lourenço, H. R., Martin, O. C. & Stützle, T. (2003). "Iterated Local
//! Search", *Handbook of Metaheuristics*, 321-353.

use std::time::Instant;

use crate::local_search::Descent;
use crate::models::{Instance, SearchResult};
use crate::random::rng_from_seed;

use super::config::IlsConfig;
use super::perturb::perturb;

/// Iterated local search runner.
pub struct IlsRunner;

impl IlsRunner {
    /// Executes ILS on the instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use u_selective_tsp::ils::{IlsConfig, IlsRunner};
    /// use u_selective_tsp::models::Instance;
    ///
    /// let points: Vec<(f64, f64, i64)> = (0..20)
    ///     .map(|i| ((i * 7 % 19) as f64, (i * 11 % 17) as f64, i % 5))
    ///     .collect();
    /// let inst = Instance::from_points(&points).unwrap();
    /// let config = IlsConfig::default()
    ///     .with_time_limit(Duration::from_secs(10))
    ///     .with_max_iterations(25)
    ///     .with_seed(42);
    /// let result = IlsRunner::run(&inst, &config);
    /// assert_eq!(result.iterations, 25);
    /// assert!(result.best.is_complete(&inst));
    /// ```
    pub fn run(instance: &Instance, config: &IlsConfig) -> SearchResult {
        let started = Instant::now();
        let deadline = started + config.time_limit;
        let mut rng = rng_from_seed(config.seed);
        let descent = Descent::new(instance, config.local_search.clone());

        let mut current = config.start.build(instance, &mut rng);
        descent.improve(instance, &mut current, &mut rng);
        let mut best = current.clone();

        let max_strength = config.max_strength.max(config.min_strength);
        let mut strength = config.min_strength;
        let mut cost_history = Vec::new();
        let mut iteration = 0;

        while Instant::now() < deadline && config.max_iterations.is_none_or(|m| iteration < m) {
            let mut candidate = current.clone();
            perturb(
                instance,
                &mut candidate,
                strength,
                config.removal_samples,
                config.addition_samples,
                &mut rng,
            );
            descent.improve(instance, &mut candidate, &mut rng);
            log::trace!(
                "ils iteration {iteration}: strength {strength}, cost {}",
                candidate.total_cost()
            );

            if candidate.total_cost() < current.total_cost() {
                strength = config.min_strength;
            } else {
                strength = (strength + config.strength_increment).min(max_strength);
            }
            current = candidate;

            if current.total_cost() < best.total_cost() {
                best = current.clone();
                log::info!("ils iteration {iteration}: new best {}", best.total_cost());
            }

            cost_history.push(best.total_cost());
            iteration += 1;
        }

        log::debug!(
            "ils finished: {iteration} iterations, best cost {}",
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::constructive::StartingSolution;

    fn scattered(n: usize) -> Instance {
        let points: Vec<(f64, f64, i64)> = (0..n)
            .map(|i| {
                (
                    ((i * 53) % 127) as f64,
                    ((i * 29) % 113) as f64,
                    ((i * 11) % 23) as i64,
                )
            })
            .collect();
        Instance::from_points(&points).expect("valid")
    }

    fn capped(iterations: usize) -> IlsConfig {
        IlsConfig::default()
            .with_time_limit(Duration::from_secs(60))
            .with_max_iterations(iterations)
            .with_seed(42)
    }

    #[test]
    fn test_ils_history_monotone() {
        let inst = scattered(40);
        let result = IlsRunner::run(&inst, &capped(20));
        assert_eq!(result.iterations, 20);
        assert_eq!(result.cost_history.len(), 20);
        assert!(result.cost_history.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(result.cost_history.last().copied(), Some(result.best_cost()));
        assert!(result.best.is_complete(&inst));
        assert!(result.best.is_consistent(&inst));
    }

    #[test]
    fn test_zero_strength_keeps_first_optimum() {
        let inst = scattered(30);
        let first = IlsRunner::run(&inst, &capped(0));
        let config = capped(10).with_strength(0, 0, 2);
        let result = IlsRunner::run(&inst, &config);
        assert_eq!(result.best.cycle(), first.best.cycle());
        assert!(result.cost_history.iter().all(|&c| c == first.best_cost()));
    }

    #[test]
    fn test_ils_not_worse_than_first_optimum() {
        let inst = scattered(30);
        let config = capped(15).with_start(StartingSolution::GreedyCycle);
        let first = IlsRunner::run(&inst, &capped(0).with_start(StartingSolution::GreedyCycle));
        let result = IlsRunner::run(&inst, &config);
        assert!(result.best_cost() <= first.best_cost());
    }

    #[test]
    fn test_ils_respects_deadline() {
        let inst = scattered(20);
        let config = IlsConfig::default()
            .with_time_limit(Duration::from_millis(0))
            .with_seed(3);
        let result = IlsRunner::run(&inst, &config);
        assert_eq!(result.iterations, 0);
        assert!(result.cost_history.is_empty());
        assert!(result.best.is_complete(&inst));
    }
}
