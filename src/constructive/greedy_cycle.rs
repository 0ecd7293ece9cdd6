//! Greedy-cycle (cheapest insertion) heuristic.

use crate::models::{Instance, Solution};

use super::insertion::insertion_costs;

/// Builds a cycle by cheapest insertion.
///
/// Starting from `start`, repeatedly inserts the unselected node whose
/// best insertion has the smallest objective increase, at that position,
/// until `ceil(N / 2)` nodes are selected.
///
/// # Complexity
///
/// O(n³) for n nodes.
///
/// # Examples
///
/// ```
/// use u_selective_tsp::models::Instance;
/// use u_selective_tsp::constructive::greedy_cycle;
///
/// let inst = Instance::from_points(&[
///     (0.0, 0.0, 0), (0.0, 10.0, 0), (10.0, 10.0, 0), (10.0, 0.0, 0),
///     (100.0, 0.0, 0), (100.0, 10.0, 0), (110.0, 10.0, 0), (110.0, 0.0, 0),
/// ]).unwrap();
/// let sol = greedy_cycle(&inst, 0);
/// assert_eq!(sol.total_cost(), 40);
/// ```
pub fn greedy_cycle(instance: &Instance, start: usize) -> Solution {
    let mut solution = Solution::empty(instance);
    if solution.insert(instance, 0, start).is_none() {
        return solution;
    }

    while !solution.is_complete(instance) {
        let best = solution
            .unselected(instance)
            .into_iter()
            .map(|node| insertion_costs(instance, solution.cycle(), node))
            .min_by_key(|c| c.best);

        match best {
            Some(c) => {
                solution.insert(instance, c.position, c.node);
            }
            None => break,
        }
    }

    log::trace!(
        "greedy cycle from {start}: {} nodes, cost {}",
        solution.len(),
        solution.total_cost()
    );
    solution
}
