//! Local search for the selective TSP.
//!
//! - [`greedy_descent`]: First improvement, randomized scan order
//! - [`steepest_descent`]: Best improvement over the full neighbourhood
//! - [`candidate_steepest_descent`]: Best improvement over candidate edges
//! - [`delta_cache_descent`]: Best improvement from a cache of improving moves
//! - [`Descent`]: Configured engine wrapping the four loops
//! - [`MultiStartRunner`]: Repeated descents from fresh starts
//!
//! Every loop applies a move only when its delta is strictly negative, so
//! none of them can increase the cost.

mod candidate;
mod config;
mod delta_cache;
mod descent;
mod greedy;
mod multi_start;
mod steepest;

pub use candidate::{best_candidate_move, candidate_steepest_descent};
pub use config::{DescentStrategy, LocalSearchConfig};
pub use delta_cache::{delta_cache_descent, CachedMove};
pub use descent::Descent;
pub use greedy::greedy_descent;
pub use multi_start::{MultiStartConfig, MultiStartRunner};
pub use steepest::{best_move, steepest_descent};
