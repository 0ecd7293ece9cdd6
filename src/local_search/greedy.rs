//! Greedy (first-improvement) descent.
//!
//! # Algorithm
//!
//! Each pass flips a coin to decide whether intra-route or inter-route
//! moves are tried first. Both neighbourhoods are scanned in a freshly
//! shuffled order and the first move with a negative delta is applied.
//! The search stops when neither neighbourhood holds an improving move.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Instance, Solution};
use crate::moves::{self, IntraMoveKind, Move};

/// Runs first-improvement descent in place. Returns the number of moves applied.
///
/// # Examples
///
/// ```
/// use u_selective_tsp::models::{Instance, Solution};
/// use u_selective_tsp::local_search::greedy_descent;
/// use u_selective_tsp::moves::IntraMoveKind;
/// use u_selective_tsp::random::create_rng;
///
/// let inst = Instance::from_points(&[
///     (0.0, 0.0, 0), (0.0, 10.0, 0), (10.0, 10.0, 0), (10.0, 0.0, 0),
///     (50.0, 50.0, 0), (60.0, 60.0, 0), (70.0, 70.0, 0), (80.0, 80.0, 0),
/// ]).unwrap();
/// let mut sol = Solution::from_cycle(&inst, vec![0, 2, 1, 3]).unwrap();
/// greedy_descent(&inst, &mut sol, IntraMoveKind::EdgeExchange, &mut create_rng(42));
/// assert_eq!(sol.total_cost(), 40);
/// ```
pub fn greedy_descent<R: Rng>(
    instance: &Instance,
    solution: &mut Solution,
    kind: IntraMoveKind,
    rng: &mut R,
) -> usize {
    let mut applied = 0;
    loop {
        let intra_first = rng.random_bool(0.5);
        let improved = if intra_first {
            try_intra(instance, solution, kind, rng) || try_inter(instance, solution, rng)
        } else {
            try_inter(instance, solution, rng) || try_intra(instance, solution, kind, rng)
        };
        if !improved {
            break;
        }
        applied += 1;
    }
    applied
}

/// Applies the first improving intra move over shuffled position pairs.
fn try_intra<R: Rng>(
    instance: &Instance,
    solution: &mut Solution,
    kind: IntraMoveKind,
    rng: &mut R,
) -> bool {
    let mut positions: Vec<usize> = (0..solution.len()).collect();
    positions.shuffle(rng);

    for (a, &p) in positions.iter().enumerate() {
        for &q in &positions[a + 1..] {
            let (i, j) = (p.min(q), p.max(q));
            let mv = match kind {
                IntraMoveKind::NodeExchange => Move::node_exchange(i, j),
                IntraMoveKind::EdgeExchange => Move::edge_exchange(i, j),
            };
            if let Some(d) = moves::delta(instance, solution, &mv) {
                if d.is_improving() {
                    solution.apply(instance, &mv);
                    log::trace!("greedy: {mv:?} delta {}", d.total);
                    return true;
                }
            }
        }
    }
    false
}

/// Applies the first improving substitution over shuffled selected and
/// unselected lists.
fn try_inter<R: Rng>(instance: &Instance, solution: &mut Solution, rng: &mut R) -> bool {
    let mut selected = solution.cycle().to_vec();
    let mut unselected = solution.unselected(instance);
    selected.shuffle(rng);
    unselected.shuffle(rng);

    for &s in &selected {
        for &u in &unselected {
            let mv = Move::inter(s, u);
            if let Some(d) = moves::delta(instance, solution, &mv) {
                if d.is_improving() {
                    solution.apply(instance, &mv);
                    log::trace!("greedy: {mv:?} delta {}", d.total);
                    return true;
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::random_solution;
    use crate::local_search::steepest_descent;
    use crate::random::create_rng;

    fn scattered(n: usize) -> Instance {
        let points: Vec<(f64, f64, i64)> = (0..n)
            .map(|i| {
                (
                    ((i * 73) % 211) as f64,
                    ((i * 151) % 199) as f64,
                    ((i * 29) % 41) as i64,
                )
            })
            .collect();
        Instance::from_points(&points).expect("valid")
    }

    #[test]
    fn test_greedy_never_worsens() {
        let inst = scattered(40);
        let mut rng = create_rng(5);
        for kind in [IntraMoveKind::EdgeExchange, IntraMoveKind::NodeExchange] {
            let mut sol = random_solution(&inst, &mut rng);
            let before = sol.total_cost();
            let applied = greedy_descent(&inst, &mut sol, kind, &mut rng);
            assert!(applied > 0);
            assert!(sol.total_cost() < before);
            assert!(sol.is_consistent(&inst));
            assert!(sol.is_complete(&inst));
        }
    }

    #[test]
    fn test_greedy_reaches_local_optimum() {
        let inst = scattered(30);
        let mut rng = create_rng(8);
        let mut sol = random_solution(&inst, &mut rng);
        greedy_descent(&inst, &mut sol, IntraMoveKind::EdgeExchange, &mut rng);
        // Steepest finds nothing left in the same neighbourhood.
        let cost = sol.total_cost();
        assert_eq!(steepest_descent(&inst, &mut sol, IntraMoveKind::EdgeExchange), 0);
        assert_eq!(sol.total_cost(), cost);
    }
}
