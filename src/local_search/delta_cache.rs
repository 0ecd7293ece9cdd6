//! Steepest descent driven by a cache of improving moves.
//!
//! # Algorithm
//!
//! A full scan seeds a list `LM` of improving moves sorted by delta. Each
//! round walks `LM` from the best entry:
//!
//! - **Edge exchange.** The entry records the two edges it removes. If
//!   either edge is gone from the cycle, the entry is dropped. If both are
//!   present but one runs forward and the other backward, the move would
//!   not produce the recorded edges, so it is kept and skipped. If both run
//!   the same way, the move is applied.
//! - **Node exchange and substitution.** The delta is recomputed from the
//!   current cycle; the entry is applied if still improving and dropped
//!   otherwise.
//!
//! After an edge exchange or substitution, moves that involve the newly
//! created edges are evaluated and merged into `LM`. Node exchanges skip
//! this step and trigger a fresh scan instead. When a whole walk applies
//! nothing, or `LM` runs dry, it is cleared and rebuilt by a full scan.
//! Only an empty full scan means a local optimum.
//!
//! # Reference
//!
//! Bentley, J.L. (1992). "Fast algorithms for geometric traveling salesman
//! problems", *ORSA Journal on Computing* 4(4), 387-411.

use crate::models::{Instance, Solution};
use crate::moves::{self, edge_exchange_delta, inter_moves, intra_moves, IntraMoveKind, Move};

/// An improving move remembered across rounds.
///
/// Entries refer to node ids, never to cycle positions, so they survive
/// unrelated changes elsewhere in the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachedMove {
    /// 2-opt removing edges `removed[0]` and `removed[1]`, each stored as
    /// `(tail, head)` in cycle direction at the time of discovery.
    EdgeExchange {
        /// Total delta at discovery.
        delta: i64,
        /// Edges the move removes.
        removed: [(usize, usize); 2],
    },
    /// Swap of two selected nodes.
    NodeExchange {
        /// Total delta at discovery.
        delta: i64,
        /// First node.
        a: usize,
        /// Second node.
        b: usize,
    },
    /// Substitution of `unselected` for `selected`.
    Inter {
        /// Total delta at discovery.
        delta: i64,
        /// Node leaving the cycle.
        selected: usize,
        /// Node entering the cycle.
        unselected: usize,
    },
}

impl CachedMove {
    /// Delta recorded when the move was found.
    pub fn delta(&self) -> i64 {
        match *self {
            Self::EdgeExchange { delta, .. }
            | Self::NodeExchange { delta, .. }
            | Self::Inter { delta, .. } => delta,
        }
    }
}

/// What the walk should do with a cached entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Check {
    Drop,
    Skip,
    Apply(Move),
}

/// Sorted list of improving moves.
#[derive(Debug, Default)]
struct MoveList {
    entries: Vec<CachedMove>,
}

impl MoveList {
    fn insert(&mut self, mv: CachedMove) {
        let at = self
            .entries
            .partition_point(|e| e.delta() <= mv.delta());
        self.entries.insert(at, mv);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Runs delta-cached steepest descent in place.
///
/// Returns the number of moves applied.
///
/// # Examples
///
/// ```
/// use u_selective_tsp::models::{Instance, Solution};
/// use u_selective_tsp::local_search::delta_cache_descent;
/// use u_selective_tsp::moves::IntraMoveKind;
///
/// let inst = Instance::from_points(&[
///     (0.0, 0.0, 0), (0.0, 10.0, 0), (10.0, 10.0, 0), (10.0, 0.0, 0),
///     (50.0, 50.0, 0), (60.0, 60.0, 0), (70.0, 70.0, 0), (80.0, 80.0, 0),
/// ]).unwrap();
/// let mut sol = Solution::from_cycle(&inst, vec![0, 2, 1, 3]).unwrap();
/// delta_cache_descent(&inst, &mut sol, IntraMoveKind::EdgeExchange);
/// assert_eq!(sol.total_cost(), 40);
/// ```
pub fn delta_cache_descent(instance: &Instance, solution: &mut Solution, kind: IntraMoveKind) -> usize {
    let mut lm = MoveList::default();
    let mut applied = 0;
    let mut scans = 0;
    loop {
        let mut moved = false;
        let mut idx = 0;
        while idx < lm.entries.len() {
            let entry = lm.entries[idx];
            match check(instance, solution, &entry) {
                Check::Drop => {
                    lm.entries.remove(idx);
                }
                Check::Skip => idx += 1,
                Check::Apply(mv) => {
                    lm.entries.remove(idx);
                    let Some(d) = solution.apply(instance, &mv) else {
                        continue;
                    };
                    log::trace!("delta cache: {mv:?} delta {}", d.total);
                    applied += 1;
                    moved = true;
                    match kind {
                        IntraMoveKind::EdgeExchange => add_new_edge_moves(instance, solution, &mv, &mut lm),
                        IntraMoveKind::NodeExchange => {
                            lm.clear();
                            full_scan(instance, solution, kind, &mut lm);
                            scans += 1;
                        }
                    }
                    break;
                }
            }
        }

        if !moved || lm.is_empty() {
            lm.clear();
            full_scan(instance, solution, kind, &mut lm);
            scans += 1;
            if lm.is_empty() {
                break;
            }
        }
    }

    log::debug!(
        "delta cache descent: {applied} moves, {scans} full scans, cost {}",
        solution.total_cost()
    );
    applied
}

/// Clears nothing; appends every improving move of the neighbourhood.
fn full_scan(instance: &Instance, solution: &Solution, kind: IntraMoveKind, lm: &mut MoveList) {
    let cycle = solution.cycle();
    for mv in intra_moves(solution.len(), kind)
        .into_iter()
        .chain(inter_moves(instance, solution))
    {
        if let Some(cached) = cache(instance, solution, &mv, cycle) {
            lm.insert(cached);
        }
    }
}

/// Evaluates a move and wraps it for the list if it improves.
fn cache(instance: &Instance, solution: &Solution, mv: &Move, cycle: &[usize]) -> Option<CachedMove> {
    let d = moves::delta(instance, solution, mv)?;
    if !d.is_improving() {
        return None;
    }
    let n = cycle.len();
    Some(match *mv {
        Move::Intra {
            kind: IntraMoveKind::EdgeExchange,
            i,
            j,
        } => CachedMove::EdgeExchange {
            delta: d.total,
            removed: [(cycle[i], cycle[(i + 1) % n]), (cycle[j], cycle[(j + 1) % n])],
        },
        Move::Intra {
            kind: IntraMoveKind::NodeExchange,
            i,
            j,
        } => CachedMove::NodeExchange {
            delta: d.total,
            a: cycle[i],
            b: cycle[j],
        },
        Move::Inter {
            selected,
            unselected,
        } => CachedMove::Inter {
            delta: d.total,
            selected,
            unselected,
        },
    })
}

/// Direction of the edge `(a, b)` in the current cycle.
///
/// `Some(true)` if `b` follows `a`, `Some(false)` if `a` follows `b`,
/// `None` if the edge is absent.
fn edge_direction(solution: &Solution, a: usize, b: usize) -> Option<bool> {
    if solution.successor(a) == Some(b) {
        Some(true)
    } else if solution.predecessor(a) == Some(b) {
        Some(false)
    } else {
        None
    }
}

fn check(instance: &Instance, solution: &Solution, entry: &CachedMove) -> Check {
    match *entry {
        CachedMove::EdgeExchange {
            removed: [(x1, y1), (x2, y2)],
            ..
        } => {
            let (Some(f1), Some(f2)) = (
                edge_direction(solution, x1, y1),
                edge_direction(solution, x2, y2),
            ) else {
                return Check::Drop;
            };
            if f1 != f2 {
                return Check::Skip;
            }
            // Both backward: break after y1 and after y2.
            let (p, q) = if f1 { (x1, x2) } else { (y1, y2) };
            match (solution.position(p), solution.position(q)) {
                (Some(i), Some(j)) => improving_or_drop(instance, solution, Move::edge_exchange(i, j)),
                _ => Check::Drop,
            }
        }
        CachedMove::NodeExchange { a, b, .. } => match (solution.position(a), solution.position(b)) {
            (Some(i), Some(j)) => improving_or_drop(instance, solution, Move::node_exchange(i, j)),
            _ => Check::Drop,
        },
        CachedMove::Inter {
            selected,
            unselected,
            ..
        } => improving_or_drop(instance, solution, Move::inter(selected, unselected)),
    }
}

fn improving_or_drop(instance: &Instance, solution: &Solution, mv: Move) -> Check {
    match moves::delta(instance, solution, &mv) {
        Some(d) if d.is_improving() => Check::Apply(mv),
        _ => Check::Drop,
    }
}

/// Merges moves that touch the edges created by `applied` into the list.
///
/// For each new edge: every 2-opt move pairing it with another cycle edge,
/// and every substitution of its endpoints.
fn add_new_edge_moves(instance: &Instance, solution: &Solution, applied: &Move, lm: &mut MoveList) {
    let cycle = solution.cycle();
    let n = cycle.len();
    if n == 0 {
        return;
    }

    // Tails of the new edges, as cycle positions.
    let mut tails: Vec<usize> = Vec::with_capacity(2);
    match *applied {
        Move::Intra {
            kind: IntraMoveKind::EdgeExchange,
            i,
            j,
        } => {
            // Whichever side was reversed, the edges after positions i and j
            // are the new ones.
            tails.push(i.min(j));
            tails.push(i.max(j));
        }
        Move::Inter { unselected, .. } => {
            if let Some(p) = solution.position(unselected) {
                tails.push((p + n - 1) % n);
                tails.push(p);
            }
        }
        Move::Intra { .. } => return,
    }

    let mut touched: Vec<usize> = Vec::with_capacity(4);
    for &t in &tails {
        let (a, b) = (cycle[t], cycle[(t + 1) % n]);
        for id in [a, b] {
            if !touched.contains(&id) {
                touched.push(id);
            }
        }
        for other in 0..n {
            if let Some(d) = edge_exchange_delta(instance, cycle, t, other) {
                if d < 0 {
                    let (lo, hi) = (t.min(other), t.max(other));
                    lm.insert(CachedMove::EdgeExchange {
                        delta: d,
                        removed: [(cycle[lo], cycle[(lo + 1) % n]), (cycle[hi], cycle[(hi + 1) % n])],
                    });
                }
            }
        }
    }

    let unselected = solution.unselected(instance);
    for &s in &touched {
        for &u in &unselected {
            if let Some(cached) = cache(instance, solution, &Move::inter(s, u), cycle) {
                lm.insert(cached);
            }
        }
    }
}
