//! Regret-based greedy cycle construction.
//!
//! For every unselected node the two cheapest insertion positions are
//! found. The node to insert next maximises
//!
//! ```text
//! score = weight_regret * (second - best) - weight_objective * best
//! ```
//!
//! and goes to its cheapest position. With weights `(1, 0)` this is the
//! classic 2-regret heuristic. The same loop serves as the repair step of
//! large neighbourhood search.
//!
//! # Reference
//!
//! Potvin, J.-Y. & Rousseau, J.-M. (1993). "A parallel route building
//! algorithm for the vehicle routing and scheduling problem with time
//! windows", *European Journal of Operational Research* 66(3), 331-340.

use crate::models::{Instance, Solution};

use super::insertion::{insertion_costs, regret_score};

/// Builds a cycle from `start` with the pure 2-regret rule.
pub fn regret_cycle(instance: &Instance, start: usize) -> Solution {
    weighted_regret_cycle(instance, start, 1.0, 0.0)
}

/// Builds a cycle from `start` with the weighted regret rule.
///
/// # Examples
///
/// ```
/// use u_selective_tsp::models::Instance;
/// use u_selective_tsp::constructive::weighted_regret_cycle;
///
/// let inst = Instance::from_points(&[
///     (0.0, 0.0, 0), (0.0, 10.0, 0), (10.0, 10.0, 0), (10.0, 0.0, 0),
///     (100.0, 0.0, 0), (100.0, 10.0, 0), (110.0, 10.0, 0), (110.0, 0.0, 0),
/// ]).unwrap();
/// let sol = weighted_regret_cycle(&inst, 0, 0.5, 0.5);
/// assert_eq!(sol.len(), 4);
/// assert_eq!(sol.total_cost(), 40);
/// ```
pub fn weighted_regret_cycle(
    instance: &Instance,
    start: usize,
    weight_regret: f64,
    weight_objective: f64,
) -> Solution {
    let mut solution = Solution::empty(instance);
    if solution.insert(instance, 0, start).is_none() {
        return solution;
    }
    extend_by_regret(instance, &mut solution, weight_regret, weight_objective);
    solution
}

/// Inserts unselected nodes by weighted regret until the cycle is complete.
///
/// Ties in score go to the smaller best cost, then the smaller node id.
/// Returns the number of nodes inserted; zero if the cycle was already
/// complete.
pub fn extend_by_regret(
    instance: &Instance,
    solution: &mut Solution,
    weight_regret: f64,
    weight_objective: f64,
) -> usize {
    let mut inserted = 0;
    while !solution.is_complete(instance) {
        let mut chosen: Option<(f64, usize, usize, i64)> = None;
        for node in solution.unselected(instance) {
            let costs = insertion_costs(instance, solution.cycle(), node);
            let score = regret_score(&costs, weight_regret, weight_objective);
            let better = match chosen {
                None => true,
                Some((s, _, _, b)) => score > s || (score == s && costs.best < b),
            };
            if better {
                chosen = Some((score, costs.node, costs.position, costs.best));
            }
        }

        let Some((_, node, position, _)) = chosen else {
            break;
        };
        if solution.insert(instance, position, node).is_none() {
            break;
        }
        inserted += 1;
    }
    inserted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clusters() -> Instance {
        Instance::from_points(&[
            (0.0, 0.0, 0),
            (0.0, 10.0, 0),
            (10.0, 10.0, 0),
            (10.0, 0.0, 0),
            (100.0, 0.0, 0),
            (100.0, 10.0, 0),
            (110.0, 10.0, 0),
            (110.0, 0.0, 0),
        ])
        .expect("valid")
    }

    #[test]
    fn test_regret_cycle_complete() {
        let inst = clusters();
        for start in 0..inst.len() {
            let sol = regret_cycle(&inst, start);
            assert!(sol.is_complete(&inst));
            assert!(sol.is_consistent(&inst));
        }
    }

    #[test]
    fn test_weighted_regret_prefers_cheap_cluster() {
        let inst = clusters();
        let sol = weighted_regret_cycle(&inst, 5, 0.5, 0.5);
        assert_eq!(sol.total_cost(), 40);
        assert!(sol.contains(5));
    }

    #[test]
    fn test_extend_on_complete_is_noop() {
        let inst = clusters();
        let mut sol = Solution::from_cycle(&inst, vec![0, 1, 2, 3]).expect("valid");
        let before = sol.clone();
        assert_eq!(extend_by_regret(&inst, &mut sol, 0.5, 0.5), 0);
        assert_eq!(sol, before);
    }

    #[test]
    fn test_extend_fills_partial() {
        let inst = clusters();
        let mut sol = Solution::from_cycle(&inst, vec![0, 2]).expect("valid");
        assert_eq!(extend_by_regret(&inst, &mut sol, 0.5, 0.5), 2);
        assert!(sol.is_complete(&inst));
        assert!(sol.is_consistent(&inst));
    }
}
