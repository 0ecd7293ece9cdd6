//! Move descriptions and delta results.

use serde::{Deserialize, Serialize};

/// The family of intra-route moves used by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IntraMoveKind {
    /// Swap the nodes at two cycle positions.
    NodeExchange,
    /// 2-opt: remove two edges and reconnect by reversing the segment between them.
    #[default]
    EdgeExchange,
}

/// A candidate modification of a [`Solution`](crate::models::Solution).
///
/// A move is a pure description. Evaluating it never mutates anything;
/// applying it is a separate call to
/// [`Solution::apply`](crate::models::Solution::apply).
///
/// For [`IntraMoveKind::EdgeExchange`], `i` and `j` name the edges
/// `(cycle[i], cycle[i + 1])` and `(cycle[j], cycle[j + 1])` (indices taken
/// cyclically); the move replaces them with `(cycle[i], cycle[j])` and
/// `(cycle[i + 1], cycle[j + 1])`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Reorder selected nodes.
    Intra {
        /// Which intra family.
        kind: IntraMoveKind,
        /// First cycle position.
        i: usize,
        /// Second cycle position.
        j: usize,
    },
    /// Substitute an unselected node for a selected one, keeping its position.
    Inter {
        /// Node id currently in the cycle.
        selected: usize,
        /// Node id currently outside the cycle.
        unselected: usize,
    },
}

impl Move {
    /// Shorthand for an edge-exchange move.
    pub fn edge_exchange(i: usize, j: usize) -> Self {
        Self::Intra {
            kind: IntraMoveKind::EdgeExchange,
            i,
            j,
        }
    }

    /// Shorthand for a node-exchange move.
    pub fn node_exchange(i: usize, j: usize) -> Self {
        Self::Intra {
            kind: IntraMoveKind::NodeExchange,
            i,
            j,
        }
    }

    /// Shorthand for an inter-route substitution.
    pub fn inter(selected: usize, unselected: usize) -> Self {
        Self::Inter {
            selected,
            unselected,
        }
    }

    /// Returns `true` for intra-route moves.
    pub fn is_intra(&self) -> bool {
        matches!(self, Self::Intra { .. })
    }
}

/// The cost change a move would cause if applied now.
///
/// Negative `total` means the move improves the solution. `distance` is the
/// part of `total` due to edge lengths; the rest is the node-cost change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeltaResult {
    /// Change in total cost (distance + node costs).
    pub total: i64,
    /// Change in tour length.
    pub distance: i64,
}

impl DeltaResult {
    /// A delta that only affects tour length.
    pub fn distance_only(distance: i64) -> Self {
        Self {
            total: distance,
            distance,
        }
    }

    /// Change in the sum of selected node costs.
    pub fn node_cost(&self) -> i64 {
        self.total - self.distance
    }

    /// Returns `true` if applying the move strictly lowers the cost.
    pub fn is_improving(&self) -> bool {
        self.total < 0
    }
}
