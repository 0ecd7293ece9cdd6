//! Distance matrix and candidate lists.
//!
//! Provides a dense integer distance matrix (rounded Euclidean) and the
//! per-node candidate table used to restrict local search.

mod candidates;
mod matrix;

pub use candidates::CandidateTable;
pub use matrix::DistanceMatrix;
