//! Candidate-restricted steepest descent.
//!
//! Instead of the full O(n²) neighbourhood, each pass only looks at moves
//! that would create an edge between a selected node `a` and one of its
//! candidates `b`:
//!
//! - `b` selected, edge exchange: the two 2-opt moves that make `(a, b)`
//!   an edge, breaking either the edges after `a` and after `b` or the
//!   edges before `a` and before `b`.
//! - `b` selected, node exchange: move `b` next to `a` by swapping it with
//!   `a`'s successor or predecessor.
//! - `b` unselected: substitute `b` for `a`'s successor or predecessor.
//!
//! # Complexity
//!
//! O(n·k) per pass for candidate lists of size k.

use crate::distance::CandidateTable;
use crate::models::{Instance, Solution};
use crate::moves::{self, DeltaResult, IntraMoveKind, Move};

/// Runs candidate-restricted steepest descent in place.
///
/// Returns the number of moves applied.
///
/// # Examples
///
/// ```
/// use u_selective_tsp::distance::CandidateTable;
/// use u_selective_tsp::models::{Instance, Solution};
/// use u_selective_tsp::local_search::candidate_steepest_descent;
/// use u_selective_tsp::moves::IntraMoveKind;
///
/// let inst = Instance::from_points(&[
///     (0.0, 0.0, 0), (0.0, 10.0, 0), (10.0, 10.0, 0), (10.0, 0.0, 0),
///     (50.0, 50.0, 0), (60.0, 60.0, 0), (70.0, 70.0, 0), (80.0, 80.0, 0),
/// ]).unwrap();
/// let table = CandidateTable::build(&inst, 3);
/// let mut sol = Solution::from_cycle(&inst, vec![0, 2, 1, 3]).unwrap();
/// candidate_steepest_descent(&inst, &mut sol, IntraMoveKind::EdgeExchange, &table);
/// assert_eq!(sol.total_cost(), 40);
/// ```
pub fn candidate_steepest_descent(
    instance: &Instance,
    solution: &mut Solution,
    kind: IntraMoveKind,
    candidates: &CandidateTable,
) -> usize {
    let mut applied = 0;
    while let Some((mv, d)) = best_candidate_move(instance, solution, kind, candidates) {
        solution.apply(instance, &mv);
        log::trace!("candidate steepest: {mv:?} delta {}", d.total);
        applied += 1;
    }
    applied
}

/// Finds the best improving move that introduces a candidate edge.
pub fn best_candidate_move(
    instance: &Instance,
    solution: &Solution,
    kind: IntraMoveKind,
    candidates: &CandidateTable,
) -> Option<(Move, DeltaResult)> {
    let n = solution.len();
    if n == 0 {
        return None;
    }
    let mut best: Option<(Move, DeltaResult)> = None;
    let mut consider = |mv: Move| {
        if let Some(d) = moves::delta(instance, solution, &mv) {
            if d.total < best.map_or(0, |(_, b)| b.total) {
                best = Some((mv, d));
            }
        }
    };

    for (i, &a) in solution.cycle().iter().enumerate() {
        let next = (i + 1) % n;
        let prev = (i + n - 1) % n;
        for &b in candidates.neighbors(a) {
            match solution.position(b) {
                Some(j) => match kind {
                    IntraMoveKind::EdgeExchange => {
                        consider(Move::edge_exchange(i, j));
                        consider(Move::edge_exchange(prev, (j + n - 1) % n));
                    }
                    IntraMoveKind::NodeExchange => {
                        consider(Move::node_exchange(next, j));
                        consider(Move::node_exchange(prev, j));
                    }
                },
                None => {
                    consider(Move::inter(solution.cycle()[next], b));
                    consider(Move::inter(solution.cycle()[prev], b));
                }
            }
        }
    }
    best
}
