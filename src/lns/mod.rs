//! Large neighbourhood search (destroy and repair).
//!
//! Each iteration removes a share of the selected nodes, refills the cycle
//! with weighted regret insertion, optionally descends, and keeps the result
//! only if it is strictly cheaper than the current solution.

mod config;
mod destroy;
mod repair;
mod runner;

pub use config::LnsConfig;
pub use destroy::{
    removal_count, DestroyOperator, DestroyStrategy, MultiSubpathRemoval, ScatteredRemoval,
    SubpathRemoval,
};
pub use repair::RegretRepair;
pub use runner::LnsRunner;
