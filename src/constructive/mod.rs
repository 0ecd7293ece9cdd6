//! Constructive heuristics for building starting solutions.
//!
//! - [`random_solution`]: Random subset in random order, O(n)
//! - [`nearest_neighbor_end`]: Append the cheapest next node, O(n²)
//! - [`nearest_neighbor_any`]: Insert anywhere in an open path, O(n³)
//! - [`greedy_cycle`]: Cheapest insertion into the cycle, O(n³)
//! - [`regret_cycle`]: 2-regret insertion, O(n³)
//! - [`weighted_regret_cycle`]: Weighted regret/objective insertion, O(n³)
//!
//! All heuristics select exactly `ceil(N / 2)` nodes.

mod greedy_cycle;
mod insertion;
mod nearest_neighbor;
mod random_cycle;
mod regret;

pub use greedy_cycle::greedy_cycle;
pub use insertion::{insertion_costs, regret_score, InsertionCosts};
pub use nearest_neighbor::{nearest_neighbor_any, nearest_neighbor_end};
pub use random_cycle::random_solution;
pub use regret::{extend_by_regret, regret_cycle, weighted_regret_cycle};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Instance, Solution};

/// How a search obtains its starting solution.
///
/// Greedy variants start from a node drawn uniformly at random.
///
/// # Examples
///
/// ```
/// use u_selective_tsp::constructive::StartingSolution;
/// use u_selective_tsp::models::Instance;
/// use u_selective_tsp::random::create_rng;
///
/// let inst = Instance::from_points(&[
///     (0.0, 0.0, 0), (0.0, 10.0, 0), (10.0, 10.0, 0), (10.0, 0.0, 0),
/// ]).unwrap();
/// let start = StartingSolution::WeightedRegret {
///     weight_regret: 0.5,
///     weight_objective: 0.5,
/// };
/// let sol = start.build(&inst, &mut create_rng(1));
/// assert_eq!(sol.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum StartingSolution {
    /// [`random_solution`].
    #[default]
    Random,
    /// [`nearest_neighbor_end`].
    NearestNeighborEnd,
    /// [`nearest_neighbor_any`].
    NearestNeighborAny,
    /// [`greedy_cycle`].
    GreedyCycle,
    /// [`regret_cycle`].
    Regret,
    /// [`weighted_regret_cycle`].
    WeightedRegret {
        /// Weight of the regret term.
        weight_regret: f64,
        /// Weight of the best-insertion-cost term.
        weight_objective: f64,
    },
}

impl StartingSolution {
    /// Builds a starting solution for the instance.
    pub fn build<R: Rng>(&self, instance: &Instance, rng: &mut R) -> Solution {
        let start = |rng: &mut R| rng.random_range(0..instance.len());
        match *self {
            Self::Random => random_solution(instance, rng),
            Self::NearestNeighborEnd => nearest_neighbor_end(instance, start(rng)),
            Self::NearestNeighborAny => nearest_neighbor_any(instance, start(rng)),
            Self::GreedyCycle => greedy_cycle(instance, start(rng)),
            Self::Regret => regret_cycle(instance, start(rng)),
            Self::WeightedRegret {
                weight_regret,
                weight_objective,
            } => weighted_regret_cycle(instance, start(rng), weight_regret, weight_objective),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_every_start_is_complete() {
        let points: Vec<(f64, f64, i64)> = (0..15)
            .map(|i| (((i * 31) % 23) as f64, ((i * 17) % 19) as f64, (i % 4) * 10))
            .collect();
        let inst = Instance::from_points(&points).expect("valid");
        let starts = [
            StartingSolution::Random,
            StartingSolution::NearestNeighborEnd,
            StartingSolution::NearestNeighborAny,
            StartingSolution::GreedyCycle,
            StartingSolution::Regret,
            StartingSolution::WeightedRegret {
                weight_regret: 0.5,
                weight_objective: 0.5,
            },
        ];
        let mut rng = create_rng(11);
        for start in starts {
            let sol = start.build(&inst, &mut rng);
            assert!(sol.is_complete(&inst), "{start:?}");
            assert!(sol.is_consistent(&inst), "{start:?}");
        }
    }

    #[test]
    fn test_starting_solution_serde() {
        let start = StartingSolution::WeightedRegret {
            weight_regret: 0.25,
            weight_objective: 0.75,
        };
        let json = serde_json::to_string(&start).expect("serialize");
        let back: StartingSolution = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, start);
    }
}
