//! Repair operator for large neighbourhood search.
//!
//! Reinserts nodes with the weighted regret rule until the cycle again holds
//! `ceil(N / 2)` nodes. See
//! [`extend_by_regret`](crate::constructive::extend_by_regret) for the
//! scoring.
//!
//! # Reference
//!
//! Ropke, S. & Pisinger, D. (2006). "An Adaptive Large Neighborhood Search
//! Heuristic for the Pickup and Delivery Problem with Time Windows",
//! *Transportation Science* 40(4), 455-472.

use crate::constructive::extend_by_regret;
use crate::models::{Instance, Solution};

/// Weighted regret insertion.
///
/// # Examples
///
/// ```
/// use u_selective_tsp::lns::RegretRepair;
/// use u_selective_tsp::models::{Instance, Solution};
///
/// let inst = Instance::from_points(&[
///     (0.0, 0.0, 0), (1.0, 0.0, 0), (2.0, 0.0, 0), (3.0, 0.0, 0),
///     (4.0, 0.0, 0), (5.0, 0.0, 0),
/// ]).unwrap();
/// let mut sol = Solution::from_cycle(&inst, vec![0]).unwrap();
/// let inserted = RegretRepair::default().repair(&inst, &mut sol);
/// assert_eq!(inserted, 2);
/// assert_eq!(sol.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegretRepair {
    weight_regret: f64,
    weight_objective: f64,
}

impl Default for RegretRepair {
    fn default() -> Self {
        Self::new(0.5, 0.5)
    }
}

impl RegretRepair {
    /// Creates a repair operator with the given weights.
    pub fn new(weight_regret: f64, weight_objective: f64) -> Self {
        Self {
            weight_regret,
            weight_objective,
        }
    }

    /// Short identifier used in logs.
    pub fn name(&self) -> &str {
        "regret_repair"
    }

    /// Fills the cycle back up to the target size. Returns the number of
    /// nodes inserted.
    pub fn repair(&self, instance: &Instance, solution: &mut Solution) -> usize {
        extend_by_regret(
            instance,
            solution,
            self.weight_regret,
            self.weight_objective,
        )
    }
}
