//! # u-selective-tsp
//!
//! Selective travelling salesman optimization: pick `ceil(N / 2)` of `N`
//! weighted nodes and order them into a cycle minimizing tour length plus
//! node costs.
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (Node, Instance, Solution, SearchResult)
//! - [`distance`]: Rounded Euclidean distance matrix and candidate lists
//! - [`moves`]: Intra/inter moves and their O(1) cost deltas
//! - [`constructive`]: Starting solutions (random, nearest neighbour, greedy cycle, regret)
//! - [`local_search`]: Greedy, steepest, candidate and delta-cached descent; multi-start
//! - [`lns`]: Large neighbourhood search with destroy/repair
//! - [`ils`]: Iterated local search with adaptive perturbation
//!
//! ## Example
//!
//! ```
//! use u_selective_tsp::local_search::{Descent, DescentStrategy, LocalSearchConfig};
//! use u_selective_tsp::models::Instance;
//! use u_selective_tsp::random::create_rng;
//!
//! let points: Vec<(f64, f64, i64)> = (0..16)
//!     .map(|i| ((i * 3 % 11) as f64, (i * 5 % 13) as f64, i % 4))
//!     .collect();
//! let inst = Instance::from_points(&points).unwrap();
//! let config = LocalSearchConfig::default().with_strategy(DescentStrategy::DeltaCache);
//! let descent = Descent::new(&inst, config);
//! let result = descent.run(&inst, &mut create_rng(42));
//! assert_eq!(result.best.len(), inst.target_size());
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod ils;
pub mod lns;
pub mod local_search;
pub mod models;
pub mod moves;
pub mod random;

pub use error::{Error, Result};
