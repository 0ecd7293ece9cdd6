//! Steepest (best-improvement) descent over the full neighbourhood.
//!
//! # Algorithm
//!
//! Every pass evaluates all intra moves of the configured kind and all
//! `|selected| * |unselected|` substitutions, then applies the single move
//! with the most negative delta. Ties keep the first move found; a delta of
//! zero never counts as an improvement, so plateaus terminate.
//!
//! # Complexity
//!
//! O(n²) per pass.

use crate::models::{Instance, Solution};
use crate::moves::{self, inter_moves, intra_moves, DeltaResult, IntraMoveKind, Move};

/// Runs steepest descent in place. Returns the number of moves applied.
///
/// # Examples
///
/// ```
/// use u_selective_tsp::models::{Instance, Solution};
/// use u_selective_tsp::local_search::steepest_descent;
/// use u_selective_tsp::moves::IntraMoveKind;
///
/// let inst = Instance::from_points(&[
///     (0.0, 0.0, 0), (0.0, 10.0, 0), (10.0, 10.0, 0), (10.0, 0.0, 0),
/// ]).unwrap();
/// // Diagonal pair: 14 + 14
/// let mut sol = Solution::from_cycle(&inst, vec![0, 2]).unwrap();
/// steepest_descent(&inst, &mut sol, IntraMoveKind::EdgeExchange);
/// assert_eq!(sol.total_cost(), 20);
/// ```
pub fn steepest_descent(instance: &Instance, solution: &mut Solution, kind: IntraMoveKind) -> usize {
    let mut applied = 0;
    while let Some((mv, d)) = best_move(instance, solution, kind) {
        solution.apply(instance, &mv);
        log::trace!("steepest: {mv:?} delta {}", d.total);
        applied += 1;
    }
    applied
}

/// Finds the best improving move in the full neighbourhood, if any.
pub fn best_move(
    instance: &Instance,
    solution: &Solution,
    kind: IntraMoveKind,
) -> Option<(Move, DeltaResult)> {
    let mut best: Option<(Move, DeltaResult)> = None;
    let candidates = intra_moves(solution.len(), kind)
        .into_iter()
        .chain(inter_moves(instance, solution));
    for mv in candidates {
        let Some(d) = moves::delta(instance, solution, &mv) else {
            continue;
        };
        if d.total < best.map_or(0, |(_, b)| b.total) {
            best = Some((mv, d));
        }
    }
    best
}
