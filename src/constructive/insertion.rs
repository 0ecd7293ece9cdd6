//! Cheapest and second-cheapest insertion positions.

use crate::models::Instance;
use crate::moves::insertion_delta;

/// Best and second-best places to insert one node into a cycle.
///
/// Costs are marginal objective increases: distance increase plus the
/// node's own cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionCosts {
    /// Node being inserted.
    pub node: usize,
    /// Position (as accepted by [`Solution::insert`](crate::models::Solution::insert)) of the cheapest insertion.
    pub position: usize,
    /// Cheapest marginal cost.
    pub best: i64,
    /// Second-cheapest marginal cost, if the cycle offers two positions.
    pub second: Option<i64>,
}

impl InsertionCosts {
    /// `second - best`, or zero when there is only one position.
    pub fn regret(&self) -> i64 {
        self.second.map_or(0, |s| s - self.best)
    }
}

/// Evaluates every insertion position for `node` in `cycle`.
///
/// An empty cycle has the single position 0. Otherwise positions
/// `1..=len` are tried, i.e. after each cycle node in turn. Ties keep the
/// earliest position.
pub fn insertion_costs(instance: &Instance, cycle: &[usize], node: usize) -> InsertionCosts {
    if cycle.is_empty() {
        return InsertionCosts {
            node,
            position: 0,
            best: instance.cost(node),
            second: None,
        };
    }

    let mut best = i64::MAX;
    let mut second: Option<i64> = None;
    let mut position = 1;
    for pos in 1..=cycle.len() {
        let cost = insertion_delta(instance, cycle, pos, node).total;
        if cost < best {
            if best != i64::MAX {
                second = Some(best);
            }
            best = cost;
            position = pos;
        } else if second.is_none_or(|s| cost < s) {
            second = Some(cost);
        }
    }

    InsertionCosts {
        node,
        position,
        best,
        second,
    }
}

/// Weighted regret score: `weight_regret * regret - weight_objective * best`.
pub fn regret_score(costs: &InsertionCosts, weight_regret: f64, weight_objective: f64) -> f64 {
    weight_regret * costs.regret() as f64 - weight_objective * costs.best as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Instance {
        Instance::from_points(&[
            (0.0, 0.0, 0),
            (10.0, 0.0, 0),
            (20.0, 0.0, 0),
            (5.0, 1.0, 7),
            (30.0, 0.0, 0),
            (40.0, 0.0, 0),
        ])
        .expect("valid")
    }

    #[test]
    fn test_empty_cycle() {
        let inst = line();
        let c = insertion_costs(&inst, &[], 3);
        assert_eq!(c.position, 0);
        assert_eq!(c.best, 7);
        assert_eq!(c.regret(), 0);
    }

    #[test]
    fn test_single_node_cycle_has_one_position() {
        let inst = line();
        let c = insertion_costs(&inst, &[0], 1);
        assert_eq!(c.position, 1);
        assert_eq!(c.best, 20);
        assert_eq!(c.second, None);
    }

    #[test]
    fn test_best_and_second() {
        let inst = line();
        // Cycle 0 -> 1 -> 2 -> 0. Node 3 sits near edge (0, 1).
        let c = insertion_costs(&inst, &[0, 1, 2], 3);
        assert_eq!(c.position, 1);
        let after_0 = insertion_delta(&inst, &[0, 1, 2], 1, 3).total;
        assert_eq!(c.best, after_0);
        let others = [
            insertion_delta(&inst, &[0, 1, 2], 2, 3).total,
            insertion_delta(&inst, &[0, 1, 2], 3, 3).total,
        ];
        assert_eq!(c.second, others.iter().copied().min());
        assert!(c.regret() >= 0);
    }

    #[test]
    fn test_regret_score_weights() {
        let c = InsertionCosts {
            node: 0,
            position: 1,
            best: 10,
            second: Some(30),
        };
        assert!((regret_score(&c, 0.5, 0.5) - 5.0).abs() < 1e-10);
        assert!((regret_score(&c, 1.0, 0.0) - 20.0).abs() < 1e-10);
    }
}
