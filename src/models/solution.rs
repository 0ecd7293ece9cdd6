//! Selective-TSP solution: an ordered cycle with cached costs.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::moves::{self, DeltaResult, IntraMoveKind, Move};

use super::{Instance, Node};

/// A closed cycle over a subset of nodes.
///
/// The cycle visits each selected node exactly once and returns to its
/// first node. Alongside the order it keeps a node-to-position index and
/// three cached totals:
///
/// - `total_distance`: sum of edge lengths around the cycle
/// - `node_cost`: sum of selected node costs
/// - `total_cost`: the two added together
///
/// All mutation goes through [`apply`](Self::apply),
/// [`insert`](Self::insert) and [`remove_nodes`](Self::remove_nodes), which
/// keep the caches equal to a from-scratch recomputation.
///
/// # Examples
///
/// ```
/// use u_selective_tsp::models::{Instance, Solution};
/// use u_selective_tsp::moves::Move;
///
/// let inst = Instance::from_points(&[
///     (0.0, 0.0, 1), (0.0, 10.0, 1), (10.0, 10.0, 1), (10.0, 0.0, 1),
///     (0.0, 20.0, 1), (20.0, 20.0, 1), (20.0, 0.0, 1), (30.0, 30.0, 1),
/// ]).unwrap();
/// let mut sol = Solution::from_cycle(&inst, vec![0, 2, 1, 3]).unwrap();
/// assert_eq!(sol.total_distance(), 48);
///
/// let d = sol.apply(&inst, &Move::edge_exchange(0, 2)).unwrap();
/// assert_eq!(d.total, -8);
/// assert_eq!(sol.total_cost(), 44);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    cycle: Vec<usize>,
    #[serde(skip)]
    positions: Vec<Option<usize>>,
    total_distance: i64,
    node_cost: i64,
    total_cost: i64,
}

impl Solution {
    /// An empty cycle for the given instance.
    pub fn empty(instance: &Instance) -> Self {
        Self {
            cycle: Vec::new(),
            positions: vec![None; instance.len()],
            total_distance: 0,
            node_cost: 0,
            total_cost: 0,
        }
    }

    /// Builds a solution from a node order.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeOutOfRange`] if an id is not in the instance
    /// - [`Error::DuplicateNode`] if an id appears twice
    /// - [`Error::CycleTooLong`] if more than `ceil(N / 2)` nodes are given
    pub fn from_cycle(instance: &Instance, cycle: Vec<usize>) -> Result<Self> {
        if cycle.len() > instance.target_size() {
            return Err(Error::CycleTooLong {
                len: cycle.len(),
                target: instance.target_size(),
            });
        }
        let mut positions = vec![None; instance.len()];
        for (pos, &id) in cycle.iter().enumerate() {
            if id >= instance.len() {
                return Err(Error::NodeOutOfRange {
                    id,
                    size: instance.len(),
                });
            }
            if positions[id].is_some() {
                return Err(Error::DuplicateNode { id });
            }
            positions[id] = Some(pos);
        }
        let mut sol = Self {
            cycle,
            positions,
            total_distance: 0,
            node_cost: 0,
            total_cost: 0,
        };
        sol.recompute(instance);
        Ok(sol)
    }

    /// The node ids in cycle order.
    pub fn cycle(&self) -> &[usize] {
        &self.cycle
    }

    /// Number of selected nodes.
    pub fn len(&self) -> usize {
        self.cycle.len()
    }

    /// Returns `true` if no node is selected.
    pub fn is_empty(&self) -> bool {
        self.cycle.is_empty()
    }

    /// Returns `true` once the cycle holds `ceil(N / 2)` nodes.
    pub fn is_complete(&self, instance: &Instance) -> bool {
        self.cycle.len() == instance.target_size()
    }

    /// Cached tour length.
    pub fn total_distance(&self) -> i64 {
        self.total_distance
    }

    /// Cached sum of selected node costs.
    pub fn node_cost(&self) -> i64 {
        self.node_cost
    }

    /// Cached objective: tour length plus node costs.
    pub fn total_cost(&self) -> i64 {
        self.total_cost
    }

    /// Returns `true` if the node is in the cycle.
    #[inline]
    pub fn contains(&self, id: usize) -> bool {
        self.position(id).is_some()
    }

    /// Cycle position of a node, or `None` if it is not selected.
    #[inline]
    pub fn position(&self, id: usize) -> Option<usize> {
        self.positions.get(id).copied().flatten()
    }

    /// The node after `id` in cycle order.
    pub fn successor(&self, id: usize) -> Option<usize> {
        let pos = self.position(id)?;
        Some(self.cycle[(pos + 1) % self.cycle.len()])
    }

    /// The node before `id` in cycle order.
    pub fn predecessor(&self, id: usize) -> Option<usize> {
        let pos = self.position(id)?;
        let n = self.cycle.len();
        Some(self.cycle[(pos + n - 1) % n])
    }

    /// The selected node records in cycle order.
    pub fn selected_nodes<'a>(&'a self, instance: &'a Instance) -> impl Iterator<Item = &'a Node> + 'a {
        self.cycle.iter().map(move |&id| instance.node(id))
    }

    /// Node ids not in the cycle, ascending.
    pub fn unselected(&self, instance: &Instance) -> Vec<usize> {
        (0..instance.len()).filter(|&id| !self.contains(id)).collect()
    }

    /// Applies a move and returns the delta it caused.
    ///
    /// Returns `None` and leaves the solution untouched if the move is not
    /// valid here. On success the cached totals shift by exactly the
    /// returned delta.
    pub fn apply(&mut self, instance: &Instance, mv: &Move) -> Option<DeltaResult> {
        let d = moves::delta(instance, self, mv)?;
        match *mv {
            Move::Intra {
                kind: IntraMoveKind::NodeExchange,
                i,
                j,
            } => {
                self.cycle.swap(i, j);
                self.positions[self.cycle[i]] = Some(i);
                self.positions[self.cycle[j]] = Some(j);
            }
            Move::Intra {
                kind: IntraMoveKind::EdgeExchange,
                i,
                j,
            } => self.reverse_between(i.min(j), i.max(j)),
            Move::Inter {
                selected,
                unselected,
            } => {
                if let Some(pos) = self.positions[selected].take() {
                    self.cycle[pos] = unselected;
                    self.positions[unselected] = Some(pos);
                }
            }
        }
        self.shift(d);
        Some(d)
    }

    /// Inserts a node before cycle position `pos` (`pos == len` appends).
    ///
    /// Returns `None` if the node is out of range or already selected, if
    /// `pos > len`, or if the cycle is already complete.
    pub fn insert(&mut self, instance: &Instance, pos: usize, id: usize) -> Option<DeltaResult> {
        if id >= instance.len()
            || self.contains(id)
            || pos > self.cycle.len()
            || self.cycle.len() >= instance.target_size()
        {
            return None;
        }
        let d = moves::insertion_delta(instance, &self.cycle, pos, id);
        self.cycle.insert(pos, id);
        for (p, &node) in self.cycle.iter().enumerate().skip(pos) {
            self.positions[node] = Some(p);
        }
        self.shift(d);
        Some(d)
    }

    /// Removes the given nodes and closes the cycle over the rest.
    ///
    /// Ids that are not selected are ignored. Relative order of the kept
    /// nodes is preserved. Returns the number of nodes removed.
    pub fn remove_nodes(&mut self, instance: &Instance, removed: &[usize]) -> usize {
        let before = self.cycle.len();
        for &id in removed {
            if let Some(slot) = self.positions.get_mut(id) {
                *slot = None;
            }
        }
        let positions = &self.positions;
        self.cycle.retain(|&id| positions[id].is_some());
        for (p, &node) in self.cycle.iter().enumerate() {
            self.positions[node] = Some(p);
        }
        self.recompute(instance);
        before - self.cycle.len()
    }

    /// Recomputes the cached totals from scratch.
    pub fn recompute(&mut self, instance: &Instance) {
        self.total_distance = instance.cycle_distance(&self.cycle);
        self.node_cost = self.cycle.iter().map(|&id| instance.cost(id)).sum();
        self.total_cost = self.total_distance + self.node_cost;
    }

    /// Checks the caches and position index against a full recomputation.
    pub fn is_consistent(&self, instance: &Instance) -> bool {
        let distance = instance.cycle_distance(&self.cycle);
        let node_cost: i64 = self.cycle.iter().map(|&id| instance.cost(id)).sum();
        let index_ok = self.positions.len() == instance.len()
            && self
                .cycle
                .iter()
                .enumerate()
                .all(|(p, &id)| self.positions[id] == Some(p))
            && self.positions.iter().flatten().count() == self.cycle.len();
        index_ok
            && distance == self.total_distance
            && node_cost == self.node_cost
            && self.total_cost == distance + node_cost
    }

    fn shift(&mut self, d: DeltaResult) {
        self.total_distance += d.distance;
        self.node_cost += d.node_cost();
        self.total_cost += d.total;
    }

    /// Reconnects edges after `lo` and after `hi` by reversing whichever
    /// side of the cycle is shorter. Both sides give the same edge set.
    fn reverse_between(&mut self, lo: usize, hi: usize) {
        let n = self.cycle.len();
        let inner = hi - lo;
        let (start, len) = if inner <= n - inner {
            (lo + 1, inner)
        } else {
            (hi + 1, n - inner)
        };
        for k in 0..len / 2 {
            let a = (start + k) % n;
            let b = (start + len - 1 - k) % n;
            self.cycle.swap(a, b);
            self.positions[self.cycle[a]] = Some(a);
            self.positions[self.cycle[b]] = Some(b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::seq::SliceRandom;
    use rand::Rng;

    use crate::moves::{inter_moves, intra_moves};
    use crate::random::create_rng;

    fn grid(n: usize) -> Instance {
        let points: Vec<(f64, f64, i64)> = (0..n)
            .map(|i| {
                (
                    ((i * 37) % 101) as f64,
                    ((i * 59) % 97) as f64,
                    ((i * 13) % 17) as i64,
                )
            })
            .collect();
        Instance::from_points(&points).expect("valid")
    }

    fn random_solution(inst: &Instance, seed: u64) -> Solution {
        let mut rng = create_rng(seed);
        let mut ids: Vec<usize> = (0..inst.len()).collect();
        ids.shuffle(&mut rng);
        ids.truncate(inst.target_size());
        Solution::from_cycle(inst, ids).expect("valid")
    }

    #[test]
    fn test_from_cycle_costs() {
        let inst = Instance::from_points(&[
            (0.0, 0.0, 1),
            (0.0, 10.0, 2),
            (10.0, 10.0, 3),
            (10.0, 0.0, 4),
            (50.0, 50.0, 5),
            (60.0, 60.0, 6),
            (70.0, 70.0, 7),
            (80.0, 80.0, 8),
        ])
        .expect("valid");
        let sol = Solution::from_cycle(&inst, vec![0, 1, 2, 3]).expect("valid");
        assert_eq!(sol.total_distance(), 40);
        assert_eq!(sol.node_cost(), 10);
        assert_eq!(sol.total_cost(), 50);
        assert_eq!(sol.successor(3), Some(0));
        assert_eq!(sol.predecessor(0), Some(3));
        assert_eq!(sol.unselected(&inst), vec![4, 5, 6, 7]);
        let costs: Vec<i64> = sol.selected_nodes(&inst).map(|n| n.cost()).collect();
        assert_eq!(costs, vec![1, 2, 3, 4]);
        assert!(sol.is_complete(&inst));
        assert!(sol.is_consistent(&inst));
    }

    #[test]
    fn test_from_cycle_rejects_invalid() {
        let inst = grid(6);
        assert_eq!(
            Solution::from_cycle(&inst, vec![0, 0]).unwrap_err(),
            Error::DuplicateNode { id: 0 }
        );
        assert_eq!(
            Solution::from_cycle(&inst, vec![0, 9]).unwrap_err(),
            Error::NodeOutOfRange { id: 9, size: 6 }
        );
        assert_eq!(
            Solution::from_cycle(&inst, vec![0, 1, 2, 3]).unwrap_err(),
            Error::CycleTooLong { len: 4, target: 3 }
        );
    }

    #[test]
    fn test_edge_exchange_is_self_inverse() {
        let inst = grid(30);
        let original = random_solution(&inst, 7);
        for mv in intra_moves(original.len(), IntraMoveKind::EdgeExchange) {
            let mut sol = original.clone();
            let d1 = sol.apply(&inst, &mv).expect("valid");
            let d2 = sol.apply(&inst, &mv).expect("valid");
            assert_eq!(d1.total, -d2.total);
            assert_eq!(sol.cycle(), original.cycle(), "{mv:?}");
            assert!(sol.is_consistent(&inst));
        }
    }

    #[test]
    fn test_inter_move_updates_index() {
        let inst = grid(10);
        let mut sol = Solution::from_cycle(&inst, vec![0, 1, 2]).expect("valid");
        let d = sol.apply(&inst, &Move::inter(1, 7)).expect("valid");
        assert_eq!(sol.cycle(), &[0, 7, 2]);
        assert!(!sol.contains(1));
        assert_eq!(sol.position(7), Some(1));
        assert_eq!(d.node_cost(), inst.cost(7) - inst.cost(1));
        assert!(sol.is_consistent(&inst));
        assert!(sol.apply(&inst, &Move::inter(1, 8)).is_none());
    }

    #[test]
    fn test_insert_and_remove() {
        let inst = grid(10);
        let mut sol = Solution::empty(&inst);
        assert!(sol.insert(&inst, 0, 3).is_some());
        assert!(sol.insert(&inst, 1, 5).is_some());
        assert!(sol.insert(&inst, 1, 8).is_some());
        assert_eq!(sol.cycle(), &[3, 8, 5]);
        assert!(sol.is_consistent(&inst));
        // already selected
        assert!(sol.insert(&inst, 0, 8).is_none());
        // position out of range
        assert!(sol.insert(&inst, 9, 1).is_none());

        assert_eq!(sol.remove_nodes(&inst, &[8, 4]), 1);
        assert_eq!(sol.cycle(), &[3, 5]);
        assert!(sol.is_consistent(&inst));
    }

    #[test]
    fn test_insert_stops_at_target() {
        let inst = grid(4);
        let mut sol = Solution::empty(&inst);
        assert!(sol.insert(&inst, 0, 0).is_some());
        assert!(sol.insert(&inst, 1, 1).is_some());
        assert!(sol.insert(&inst, 2, 2).is_none());
    }

    #[test]
    fn test_serializes_cycle_and_costs() {
        let inst = grid(6);
        let sol = Solution::from_cycle(&inst, vec![0, 1, 2]).expect("valid");
        let json = serde_json::to_value(&sol).expect("serialize");
        assert_eq!(json["cycle"], serde_json::json!([0, 1, 2]));
        assert_eq!(json["total_cost"], sol.total_cost());
        assert!(json.get("positions").is_none());
    }

    proptest! {
        #[test]
        fn prop_apply_matches_delta(seed in any::<u64>(), n in 8usize..40) {
            let inst = grid(n);
            let mut sol = random_solution(&inst, seed);
            let mut rng = create_rng(seed);
            let mut all = intra_moves(sol.len(), IntraMoveKind::EdgeExchange);
            all.extend(intra_moves(sol.len(), IntraMoveKind::NodeExchange));
            for _ in 0..50 {
                let mut candidates = all.clone();
                candidates.extend(inter_moves(&inst, &sol));
                let mv = candidates[rng.random_range(0..candidates.len())];
                let before = sol.total_cost();
                let predicted = moves::delta(&inst, &sol, &mv).expect("listed moves are valid");
                let applied = sol.apply(&inst, &mv).expect("valid");
                prop_assert_eq!(predicted, applied);
                prop_assert_eq!(sol.total_cost(), before + predicted.total);
                prop_assert!(sol.is_consistent(&inst));
            }
        }
    }
}
