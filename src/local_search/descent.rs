//! Configured descent engine shared by the multi-start, LNS and ILS runners.

use std::time::Instant;

use rand::Rng;

use crate::distance::CandidateTable;
use crate::models::{Instance, SearchResult, Solution};

use super::candidate::candidate_steepest_descent;
use super::config::{DescentStrategy, LocalSearchConfig};
use super::delta_cache::delta_cache_descent;
use super::greedy::greedy_descent;
use super::steepest::steepest_descent;

/// A local search engine bound to one instance.
///
/// Holds the configuration and, for candidate-restricted descent, the
/// candidate table, which is built once here and reused by every call.
///
/// # Examples
///
/// ```
/// use u_selective_tsp::local_search::{Descent, DescentStrategy, LocalSearchConfig};
/// use u_selective_tsp::models::Instance;
/// use u_selective_tsp::random::create_rng;
///
/// let inst = Instance::from_points(&[
///     (0.0, 0.0, 0), (0.0, 10.0, 0), (10.0, 10.0, 0), (10.0, 0.0, 0),
/// ]).unwrap();
/// let descent = Descent::new(&inst, LocalSearchConfig::default());
/// let result = descent.run(&inst, &mut create_rng(7));
/// assert_eq!(result.best_cost(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct Descent {
    config: LocalSearchConfig,
    candidates: Option<CandidateTable>,
}

impl Descent {
    /// Creates an engine for the instance.
    pub fn new(instance: &Instance, config: LocalSearchConfig) -> Self {
        let candidates = match config.strategy {
            DescentStrategy::CandidateSteepest => {
                Some(CandidateTable::build(instance, config.candidate_count))
            }
            _ => None,
        };
        Self { config, candidates }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &LocalSearchConfig {
        &self.config
    }

    /// Descends from `solution` to a local optimum in place.
    ///
    /// Returns the number of moves applied. The cost never increases.
    pub fn improve<R: Rng>(&self, instance: &Instance, solution: &mut Solution, rng: &mut R) -> usize {
        let kind = self.config.intra_kind;
        let before = solution.total_cost();
        let applied = match (self.config.strategy, &self.candidates) {
            (DescentStrategy::Greedy, _) => greedy_descent(instance, solution, kind, rng),
            (DescentStrategy::Steepest, _) => steepest_descent(instance, solution, kind),
            (DescentStrategy::CandidateSteepest, Some(table)) => {
                candidate_steepest_descent(instance, solution, kind, table)
            }
            (DescentStrategy::CandidateSteepest, None) => {
                let table = CandidateTable::build(instance, self.config.candidate_count);
                candidate_steepest_descent(instance, solution, kind, &table)
            }
            (DescentStrategy::DeltaCache, _) => delta_cache_descent(instance, solution, kind),
        };
        log::debug!(
            "{:?} descent: {applied} moves, cost {before} -> {}",
            self.config.strategy,
            solution.total_cost()
        );
        applied
    }

    /// Builds the configured starting solution and descends from it.
    pub fn run<R: Rng>(&self, instance: &Instance, rng: &mut R) -> SearchResult {
        let started = Instant::now();
        let mut best = self.config.start.build(instance, rng);
        let iterations = self.improve(instance, &mut best, rng);
        SearchResult {
            best,
            iterations,
            elapsed: started.elapsed(),
            cost_history: Vec::new(),
        }
    }
}
