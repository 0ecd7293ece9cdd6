//! Move algebra for the selective TSP.
//!
//! A [`Move`] is either an intra-route change (node exchange or 2-opt edge
//! exchange on cycle positions) or an inter-route substitution (swap a
//! selected node for an unselected one at the same position). Every move
//! has an O(1) [`delta`] that predicts the exact cost change of
//! [`Solution::apply`](crate::models::Solution::apply).
//!
//! - [`delta`]: evaluate a move without mutating
//! - [`intra_moves`], [`inter_moves`]: enumerate neighborhoods

mod delta;
mod listing;
mod types;

pub use delta::{
    delta, edge_exchange_delta, insertion_delta, inter_delta, intra_delta, node_exchange_delta,
};
pub use listing::{inter_moves, intra_moves};
pub use types::{DeltaResult, IntraMoveKind, Move};
