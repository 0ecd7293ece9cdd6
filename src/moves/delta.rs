//! Delta-cost algebra.
//!
//! Every function here evaluates a move against the current solution in O(1)
//! without mutating it. Invalid moves (positions out of range, adjacent
//! edges for 2-opt, a "selected" node that is not in the cycle) yield `None`.
//!
//! # Edge exchange (2-opt)
//!
//! ```text
//! delta = d(c[i], c[j]) + d(c[i+1], c[j+1]) - d(c[i], c[i+1]) - d(c[j], c[j+1])
//! ```
//!
//! Reversal leaves every other edge length unchanged, which is what makes
//! the delta O(1) even though applying the move is O(segment).
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::models::{Instance, Solution};

use super::types::{DeltaResult, IntraMoveKind, Move};

/// Evaluates any move against the current solution.
///
/// # Examples
///
/// ```
/// use u_selective_tsp::models::{Instance, Solution};
/// use u_selective_tsp::moves::{delta, Move};
///
/// let inst = Instance::from_points(&[
///     (0.0, 0.0, 0), (0.0, 10.0, 0), (10.0, 10.0, 0), (10.0, 0.0, 0),
///     (50.0, 50.0, 0), (60.0, 60.0, 0), (70.0, 70.0, 0), (80.0, 80.0, 0),
/// ]).unwrap();
/// // Crossing tour 0 → 2 → 1 → 3.
/// let sol = Solution::from_cycle(&inst, vec![0, 2, 1, 3]).unwrap();
/// let d = delta(&inst, &sol, &Move::edge_exchange(0, 2)).unwrap();
/// assert_eq!(d.total, -8);
/// ```
pub fn delta(instance: &Instance, solution: &Solution, mv: &Move) -> Option<DeltaResult> {
    match *mv {
        Move::Intra { kind, i, j } => {
            intra_delta(instance, solution.cycle(), kind, i, j).map(DeltaResult::distance_only)
        }
        Move::Inter {
            selected,
            unselected,
        } => inter_delta(instance, solution, selected, unselected),
    }
}

/// Distance change of an intra-route move on a raw cycle.
pub fn intra_delta(
    instance: &Instance,
    cycle: &[usize],
    kind: IntraMoveKind,
    i: usize,
    j: usize,
) -> Option<i64> {
    match kind {
        IntraMoveKind::NodeExchange => node_exchange_delta(instance, cycle, i, j),
        IntraMoveKind::EdgeExchange => edge_exchange_delta(instance, cycle, i, j),
    }
}

/// Distance change from swapping the nodes at positions `i` and `j`.
///
/// Adjacent positions share an edge; that edge is counted once and only
/// the two outer edges change.
pub fn node_exchange_delta(instance: &Instance, cycle: &[usize], i: usize, j: usize) -> Option<i64> {
    let n = cycle.len();
    if n < 3 || i >= n || j >= n || i == j {
        return None;
    }
    let d = |a: usize, b: usize| instance.distance(a, b);

    // Orient an adjacent pair as first -> second.
    let adjacent = if (i + 1) % n == j {
        Some((i, j))
    } else if (j + 1) % n == i {
        Some((j, i))
    } else {
        None
    };

    if let Some((first, second)) = adjacent {
        let a = cycle[first];
        let b = cycle[second];
        let prev = cycle[(first + n - 1) % n];
        let next = cycle[(second + 1) % n];
        let old = d(prev, a) + d(a, b) + d(b, next);
        let new = d(prev, b) + d(b, a) + d(a, next);
        return Some(new - old);
    }

    let a = cycle[i];
    let b = cycle[j];
    let prev_a = cycle[(i + n - 1) % n];
    let next_a = cycle[(i + 1) % n];
    let prev_b = cycle[(j + n - 1) % n];
    let next_b = cycle[(j + 1) % n];

    let old = d(prev_a, a) + d(a, next_a) + d(prev_b, b) + d(b, next_b);
    let new = d(prev_a, b) + d(b, next_a) + d(prev_b, a) + d(a, next_b);
    Some(new - old)
}

/// Distance change from the 2-opt move removing edges after `i` and after `j`.
///
/// Positions may be given in either order; the edges must be distinct and
/// must not share a node.
pub fn edge_exchange_delta(instance: &Instance, cycle: &[usize], i: usize, j: usize) -> Option<i64> {
    let n = cycle.len();
    if n < 4 || i >= n || j >= n || i == j {
        return None;
    }
    if (i + 1) % n == j || (j + 1) % n == i {
        return None;
    }
    let d = |a: usize, b: usize| instance.distance(a, b);

    let a = cycle[i];
    let b = cycle[(i + 1) % n];
    let c = cycle[j];
    let e = cycle[(j + 1) % n];

    let old = d(a, b) + d(c, e);
    let new = d(a, c) + d(b, e);
    Some(new - old)
}

/// Cost change from putting `unselected` in place of `selected`.
///
/// ```text
/// delta = cost(in) - cost(out) + d(prev, in) + d(in, next) - d(prev, out) - d(out, next)
/// ```
///
/// Returns `None` if `selected` is not in the cycle or `unselected` already is.
pub fn inter_delta(
    instance: &Instance,
    solution: &Solution,
    selected: usize,
    unselected: usize,
) -> Option<DeltaResult> {
    if unselected >= instance.len() || solution.contains(unselected) {
        return None;
    }
    let pos = solution.position(selected)?;
    let cycle = solution.cycle();
    let n = cycle.len();

    let cost_delta = instance.cost(unselected) - instance.cost(selected);
    if n == 1 {
        return Some(DeltaResult {
            total: cost_delta,
            distance: 0,
        });
    }

    let prev = cycle[(pos + n - 1) % n];
    let next = cycle[(pos + 1) % n];
    let old = instance.distance(prev, selected) + instance.distance(selected, next);
    let new = instance.distance(prev, unselected) + instance.distance(unselected, next);
    let distance = new - old;

    Some(DeltaResult {
        total: cost_delta + distance,
        distance,
    })
}

/// Cost of inserting `node` between cycle positions `pos - 1` and `pos`.
///
/// `pos` ranges over `0..=len`; position `len` appends after the last node.
/// Includes the node's own cost.
pub fn insertion_delta(instance: &Instance, cycle: &[usize], pos: usize, node: usize) -> DeltaResult {
    let n = cycle.len();
    let distance = if n == 0 {
        0
    } else {
        let prev = cycle[(pos + n - 1) % n];
        let next = cycle[pos % n];
        instance.distance(prev, node) + instance.distance(node, next) - instance.distance(prev, next)
    };
    DeltaResult {
        total: distance + instance.cost(node),
        distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Instance {
        Instance::from_points(&[
            (0.0, 0.0, 1),
            (0.0, 10.0, 2),
            (10.0, 10.0, 3),
            (10.0, 0.0, 4),
            (5.0, 5.0, 100),
            (20.0, 0.0, 0),
            (30.0, 0.0, 0),
            (40.0, 0.0, 0),
        ])
        .expect("valid")
    }

    fn recomputed(inst: &Instance, cycle: &[usize]) -> i64 {
        inst.cycle_distance(cycle) + cycle.iter().map(|&c| inst.cost(c)).sum::<i64>()
    }

    #[test]
    fn test_edge_exchange_uncrosses() {
        let inst = square();
        let cycle = [0, 2, 1, 3];
        // Remove (0,2) and (1,3), add (0,1) and (2,3): 10 + 10 - 14 - 14
        assert_eq!(edge_exchange_delta(&inst, &cycle, 0, 2), Some(-8));
        assert_eq!(edge_exchange_delta(&inst, &cycle, 2, 0), Some(-8));
    }

    #[test]
    fn test_edge_exchange_rejects_adjacent() {
        let inst = square();
        let cycle = [0, 1, 2, 3];
        assert_eq!(edge_exchange_delta(&inst, &cycle, 0, 1), None);
        assert_eq!(edge_exchange_delta(&inst, &cycle, 3, 0), None);
        assert_eq!(edge_exchange_delta(&inst, &cycle, 1, 1), None);
        assert_eq!(edge_exchange_delta(&inst, &[0, 1, 2], 0, 2), None);
        assert_eq!(edge_exchange_delta(&inst, &cycle, 0, 9), None);
    }

    #[test]
    fn test_node_exchange_non_adjacent() {
        let inst = square();
        let cycle = [0, 1, 2, 3, 4];
        let d = node_exchange_delta(&inst, &cycle, 0, 2).expect("valid");
        let swapped = [2, 1, 0, 3, 4];
        assert_eq!(
            d,
            inst.cycle_distance(&swapped) - inst.cycle_distance(&cycle)
        );
    }

    #[test]
    fn test_node_exchange_adjacent_counts_shared_edge_once() {
        let inst = square();
        let cycle = [0, 1, 2, 3, 4];
        for (i, j, swapped) in [
            (1, 2, [0, 2, 1, 3, 4]),
            (2, 1, [0, 2, 1, 3, 4]),
            (4, 0, [4, 1, 2, 3, 0]),
            (0, 4, [4, 1, 2, 3, 0]),
        ] {
            let d = node_exchange_delta(&inst, &cycle, i, j).expect("valid");
            assert_eq!(
                d,
                inst.cycle_distance(&swapped) - inst.cycle_distance(&cycle),
                "swap ({i}, {j})"
            );
        }
    }

    #[test]
    fn test_node_exchange_degenerate() {
        let inst = square();
        assert_eq!(node_exchange_delta(&inst, &[0, 1], 0, 1), None);
        assert_eq!(node_exchange_delta(&inst, &[0, 1, 2], 0, 0), None);
        // Three nodes: swapping any pair only reverses the tour.
        assert_eq!(node_exchange_delta(&inst, &[0, 1, 2], 0, 2), Some(0));
    }

    #[test]
    fn test_inter_delta() {
        let inst = square();
        let sol = Solution::from_cycle(&inst, vec![0, 1, 2, 3]).expect("valid");
        let d = inter_delta(&inst, &sol, 1, 4).expect("valid");
        let after = [0, 4, 2, 3];
        assert_eq!(d.total, recomputed(&inst, &after) - recomputed(&inst, &[0, 1, 2, 3]));
        assert_eq!(d.node_cost(), 98);
    }

    #[test]
    fn test_inter_delta_invalid() {
        let inst = square();
        let sol = Solution::from_cycle(&inst, vec![0, 1, 2, 3]).expect("valid");
        // 5 is not selected
        assert!(inter_delta(&inst, &sol, 5, 6).is_none());
        // 2 is already selected
        assert!(inter_delta(&inst, &sol, 1, 2).is_none());
        // out of range
        assert!(inter_delta(&inst, &sol, 1, 99).is_none());
    }

    #[test]
    fn test_inter_delta_small_cycles() {
        let inst = square();
        let one = Solution::from_cycle(&inst, vec![0]).expect("valid");
        let d = inter_delta(&inst, &one, 0, 3).expect("valid");
        assert_eq!(d, DeltaResult { total: 3, distance: 0 });

        let two = Solution::from_cycle(&inst, vec![0, 1]).expect("valid");
        let d = inter_delta(&inst, &two, 0, 2).expect("valid");
        assert_eq!(d.total, recomputed(&inst, &[2, 1]) - recomputed(&inst, &[0, 1]));
    }

    #[test]
    fn test_insertion_delta() {
        let inst = square();
        assert_eq!(
            insertion_delta(&inst, &[], 0, 2),
            DeltaResult { total: 3, distance: 0 }
        );
        let d = insertion_delta(&inst, &[0], 1, 1);
        assert_eq!(d.distance, 20);
        let d = insertion_delta(&inst, &[0, 1, 2], 3, 3);
        assert_eq!(
            d.distance,
            inst.cycle_distance(&[0, 1, 2, 3]) - inst.cycle_distance(&[0, 1, 2])
        );
    }
}
