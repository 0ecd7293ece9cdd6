//! Neighborhood enumeration.

use crate::models::{Instance, Solution};

use super::types::{IntraMoveKind, Move};

/// Lists every intra move of the given kind on a cycle of length `n`.
///
/// - Node exchange: all position pairs `i < j`.
/// - Edge exchange: `i < j` with `j >= i + 2`, skipping the pair
///   `(0, n - 1)` whose edges share a node.
///
/// Cycles too small to support the move yield an empty list.
///
/// # Examples
///
/// ```
/// use u_selective_tsp::moves::{intra_moves, IntraMoveKind};
///
/// assert_eq!(intra_moves(5, IntraMoveKind::NodeExchange).len(), 10);
/// // n(n-3)/2 distinct 2-opt moves
/// assert_eq!(intra_moves(5, IntraMoveKind::EdgeExchange).len(), 5);
/// assert!(intra_moves(3, IntraMoveKind::EdgeExchange).is_empty());
/// ```
pub fn intra_moves(n: usize, kind: IntraMoveKind) -> Vec<Move> {
    let mut moves = Vec::new();
    match kind {
        IntraMoveKind::NodeExchange => {
            if n < 3 {
                return moves;
            }
            for i in 0..n {
                for j in (i + 1)..n {
                    moves.push(Move::node_exchange(i, j));
                }
            }
        }
        IntraMoveKind::EdgeExchange => {
            if n < 4 {
                return moves;
            }
            for i in 0..n {
                for j in (i + 2)..n {
                    if i == 0 && j == n - 1 {
                        continue;
                    }
                    moves.push(Move::edge_exchange(i, j));
                }
            }
        }
    }
    moves
}

/// Lists every substitution of an unselected node for a selected one.
///
/// The result has `|selected| * |unselected|` entries, ordered by cycle
/// position and then by node id.
pub fn inter_moves(instance: &Instance, solution: &Solution) -> Vec<Move> {
    let unselected = solution.unselected(instance);
    let mut moves = Vec::with_capacity(solution.len() * unselected.len());
    for &s in solution.cycle() {
        for &u in &unselected {
            moves.push(Move::inter(s, u));
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::delta;

    #[test]
    fn test_edge_exchange_listing_is_valid() {
        let inst = Instance::from_points(
            &(0..12)
                .map(|i| ((i * 7 % 11) as f64, (i * 3 % 5) as f64, 0))
                .collect::<Vec<_>>(),
        )
        .expect("valid");
        let sol = Solution::from_cycle(&inst, vec![0, 1, 2, 3, 4, 5]).expect("valid");
        let moves = intra_moves(6, IntraMoveKind::EdgeExchange);
        assert_eq!(moves.len(), 6 * 3 / 2);
        for mv in &moves {
            assert!(delta(&inst, &sol, mv).is_some(), "{mv:?} should be valid");
        }
    }

    #[test]
    fn test_node_exchange_listing() {
        let moves = intra_moves(4, IntraMoveKind::NodeExchange);
        assert_eq!(moves.len(), 6);
        assert!(intra_moves(2, IntraMoveKind::NodeExchange).is_empty());
    }

    #[test]
    fn test_inter_moves_cover_cross_product() {
        let inst = Instance::from_points(&[
            (0.0, 0.0, 0),
            (1.0, 0.0, 0),
            (2.0, 0.0, 0),
            (3.0, 0.0, 0),
            (4.0, 0.0, 0),
        ])
        .expect("valid");
        let sol = Solution::from_cycle(&inst, vec![4, 1]).expect("valid");
        let moves = inter_moves(&inst, &sol);
        assert_eq!(moves.len(), 2 * 3);
        assert_eq!(moves[0], Move::inter(4, 0));
        assert!(moves.iter().all(|m| match *m {
            Move::Inter {
                selected,
                unselected,
            } => sol.contains(selected) && !sol.contains(unselected),
            _ => false,
        }));
    }
}
