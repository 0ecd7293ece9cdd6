//! Nearest-neighbour constructive heuristics.
//!
//! Both variants grow a path from a start node, always taking the
//! unselected node with the smallest objective increase (distance added
//! plus node cost), until `ceil(N / 2)` nodes are selected.
//!
//! # Complexity
//!
//! - [`nearest_neighbor_end`]: O(n²)
//! - [`nearest_neighbor_any`]: O(n³)

use crate::models::{Instance, Solution};
use crate::moves::insertion_delta;

/// Grows the tour by appending after the last node only.
///
/// The increase of a candidate `c` is measured on the closed cycle:
/// `d(last, c) + d(c, first) - d(last, first) + cost(c)`.
///
/// Returns an empty solution if `start` is out of range.
///
/// # Examples
///
/// ```
/// use u_selective_tsp::models::Instance;
/// use u_selective_tsp::constructive::nearest_neighbor_end;
///
/// let inst = Instance::from_points(&[
///     (0.0, 0.0, 0),
///     (10.0, 0.0, 0),  // far
///     (1.0, 0.0, 0),   // near
///     (50.0, 0.0, 0),
/// ]).unwrap();
/// let sol = nearest_neighbor_end(&inst, 0);
/// assert_eq!(sol.cycle(), &[0, 2]);
/// ```
pub fn nearest_neighbor_end(instance: &Instance, start: usize) -> Solution {
    let mut solution = Solution::empty(instance);
    if solution.insert(instance, 0, start).is_none() {
        return solution;
    }

    while !solution.is_complete(instance) {
        let end = solution.len();
        let mut best: Option<(usize, i64)> = None;
        for node in solution.unselected(instance) {
            let increase = insertion_delta(instance, solution.cycle(), end, node).total;
            if best.is_none_or(|b| increase < b.1) {
                best = Some((node, increase));
            }
        }

        match best {
            Some((node, _)) => {
                solution.insert(instance, end, node);
            }
            None => break,
        }
    }

    solution
}

/// Grows an open path, inserting at the front, the back, or between two
/// path neighbours, wherever the path grows least.
///
/// Unlike [`greedy_cycle`](super::greedy_cycle), the closing edge is
/// ignored while choosing: front and back insertions only pay one new
/// edge. The result is still returned as a closed cycle.
pub fn nearest_neighbor_any(instance: &Instance, start: usize) -> Solution {
    let mut path: Vec<usize> = Vec::with_capacity(instance.target_size());
    if start >= instance.len() {
        return Solution::empty(instance);
    }
    path.push(start);
    let mut selected = vec![false; instance.len()];
    selected[start] = true;

    while path.len() < instance.target_size() {
        let mut best: Option<(usize, usize, i64)> = None;
        for node in (0..instance.len()).filter(|&id| !selected[id]) {
            for pos in 0..=path.len() {
                let increase = path_insertion(instance, &path, pos, node) + instance.cost(node);
                if best.is_none_or(|b| increase < b.2) {
                    best = Some((node, pos, increase));
                }
            }
        }

        match best {
            Some((node, pos, _)) => {
                path.insert(pos, node);
                selected[node] = true;
            }
            None => break,
        }
    }

    let mut solution = Solution::empty(instance);
    for (pos, id) in path.into_iter().enumerate() {
        solution.insert(instance, pos, id);
    }
    solution
}

/// Distance added to an open path by inserting `node` before `pos`.
fn path_insertion(instance: &Instance, path: &[usize], pos: usize, node: usize) -> i64 {
    let d = |a: usize, b: usize| instance.distance(a, b);
    if pos == 0 {
        d(node, path[0])
    } else if pos == path.len() {
        d(path[pos - 1], node)
    } else {
        d(path[pos - 1], node) + d(node, path[pos]) - d(path[pos - 1], path[pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Instance {
        Instance::from_points(&[
            (0.0, 0.0, 0),
            (1.0, 0.0, 0),
            (2.0, 0.0, 0),
            (3.0, 0.0, 0),
            (100.0, 0.0, 0),
            (101.0, 0.0, 0),
        ])
        .expect("valid")
    }

    #[test]
    fn test_nn_end_visits_nearest() {
        let inst = line();
        let sol = nearest_neighbor_end(&inst, 0);
        assert_eq!(sol.cycle(), &[0, 1, 2]);
        assert_eq!(sol.total_cost(), 4);
        assert!(sol.is_consistent(&inst));
    }

    #[test]
    fn test_nn_end_accounts_for_cost() {
        let inst = Instance::from_points(&[
            (0.0, 0.0, 0),
            (1.0, 0.0, 100),
            (5.0, 0.0, 0),
            (60.0, 0.0, 0),
        ])
        .expect("valid");
        let sol = nearest_neighbor_end(&inst, 0);
        assert_eq!(sol.cycle(), &[0, 2]);
    }

    #[test]
    fn test_nn_any_can_prepend() {
        let inst = line();
        let sol = nearest_neighbor_any(&inst, 1);
        assert_eq!(sol.len(), 3);
        assert!(!sol.contains(4));
        assert!(!sol.contains(5));
        assert!(sol.is_consistent(&inst));
    }

    #[test]
    fn test_out_of_range_start() {
        let inst = line();
        assert!(nearest_neighbor_end(&inst, 99).is_empty());
        assert!(nearest_neighbor_any(&inst, 99).is_empty());
    }

    #[test]
    fn test_path_insertion() {
        let inst = line();
        assert_eq!(path_insertion(&inst, &[1, 2], 0, 0), 1);
        assert_eq!(path_insertion(&inst, &[1, 2], 2, 3), 1);
        assert_eq!(path_insertion(&inst, &[0, 2], 1, 1), 0);
    }
}
