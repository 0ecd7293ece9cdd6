//! Iterated local search.
//!
//! Perturbs the current local optimum, descends again and always moves to
//! the new optimum. The perturbation strength adapts: it drops back to its
//! minimum after an improvement and grows on stagnation.

mod config;
mod perturb;
mod runner;

pub use config::IlsConfig;
pub use perturb::perturb;
pub use runner::IlsRunner;
