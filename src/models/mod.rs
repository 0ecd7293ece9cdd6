//! Domain model types for the selective TSP.
//!
//! Provides nodes with visit costs, the immutable problem instance with
//! its distance matrix, the cycle-based solution with cached costs, and
//! the result record returned by every search engine.

mod instance;
mod node;
mod result;
mod solution;

pub use instance::Instance;
pub use node::Node;
pub use result::SearchResult;
pub use solution::Solution;
