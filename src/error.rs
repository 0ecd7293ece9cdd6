//! Error types for instance and solution construction.
//!
//! Errors only arise at construction boundaries. Inside the search, an
//! invalid move is reported as `None` and "no improving move" is a normal
//! state, so the engines never return `Error`.

use thiserror::Error;

/// Errors raised while building an [`Instance`](crate::models::Instance) or a
/// [`Solution`](crate::models::Solution).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The instance has fewer than two nodes.
    #[error("instance needs at least 2 nodes, found {found}")]
    TooFewNodes {
        /// Number of nodes supplied.
        found: usize,
    },
    /// A node's id does not match its position in the node list.
    #[error("node at index {index} has id {id}; ids must equal their index")]
    NodeIdMismatch {
        /// Position in the node list.
        index: usize,
        /// Id carried by the node.
        id: usize,
    },
    /// A node has a negative visit cost.
    #[error("node {id} has negative cost {cost}")]
    NegativeCost {
        /// Node id.
        id: usize,
        /// Offending cost.
        cost: i64,
    },
    /// A node coordinate is NaN or infinite.
    #[error("node {id} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Node id.
        id: usize,
    },
    /// The supplied distance matrix does not match the node count.
    #[error("distance matrix has size {found}, expected {expected}")]
    MatrixSizeMismatch {
        /// Number of nodes.
        expected: usize,
        /// Matrix dimension.
        found: usize,
    },
    /// The supplied distance matrix has `d(i, j) != d(j, i)` for some pair.
    #[error("distance matrix is not symmetric")]
    AsymmetricMatrix,
    /// The supplied distance matrix has a non-zero diagonal entry.
    #[error("distance from node {id} to itself is {distance}, expected 0")]
    NonZeroDiagonal {
        /// Node id.
        id: usize,
        /// Offending entry.
        distance: i64,
    },
    /// The supplied distance matrix has a negative entry.
    #[error("distance from node {from} to node {to} is negative ({distance})")]
    NegativeDistance {
        /// Row.
        from: usize,
        /// Column.
        to: usize,
        /// Offending entry.
        distance: i64,
    },
    /// A cycle references a node id outside the instance.
    #[error("node id {id} is out of range for an instance of {size} nodes")]
    NodeOutOfRange {
        /// Offending id.
        id: usize,
        /// Instance size.
        size: usize,
    },
    /// A cycle visits the same node twice.
    #[error("node {id} appears more than once in the cycle")]
    DuplicateNode {
        /// Repeated id.
        id: usize,
    },
    /// A cycle selects more nodes than the instance allows.
    #[error("cycle has {len} nodes but at most {target} may be selected")]
    CycleTooLong {
        /// Cycle length.
        len: usize,
        /// Target selection size.
        target: usize,
    },
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
