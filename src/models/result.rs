//! Outcome of a search run.

use std::time::Duration;

use serde::Serialize;

use super::Solution;

/// Result of a descent, multi-start, LNS, or ILS run.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// Best solution found.
    pub best: Solution,
    /// Applied moves (descent), starts (multi-start), or outer iterations
    /// (LNS, ILS).
    pub iterations: usize,
    /// Wall-clock time spent.
    pub elapsed: Duration,
    /// Best cost after each outer iteration. Empty for a single descent.
    pub cost_history: Vec<i64>,
}

impl SearchResult {
    /// Total cost of the best solution.
    pub fn best_cost(&self) -> i64 {
        self.best.total_cost()
    }
}
