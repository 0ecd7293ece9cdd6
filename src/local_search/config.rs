//! Local search configuration.

use serde::{Deserialize, Serialize};

use crate::constructive::StartingSolution;
use crate::moves::IntraMoveKind;

/// Which descent loop to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DescentStrategy {
    /// First improvement over a randomized scan order.
    Greedy,
    /// Best improvement over the full neighbourhood.
    #[default]
    Steepest,
    /// Best improvement over moves that introduce a candidate edge.
    CandidateSteepest,
    /// Best improvement driven by a sorted list of cached improving moves.
    DeltaCache,
}

/// Configuration for a single descent.
///
/// # Examples
///
/// ```
/// use u_selective_tsp::local_search::{DescentStrategy, LocalSearchConfig};
/// use u_selective_tsp::moves::IntraMoveKind;
///
/// let config = LocalSearchConfig::default()
///     .with_strategy(DescentStrategy::CandidateSteepest)
///     .with_intra_kind(IntraMoveKind::NodeExchange)
///     .with_candidate_count(5);
/// assert_eq!(config.strategy, DescentStrategy::CandidateSteepest);
/// assert_eq!(config.candidate_count, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalSearchConfig {
    /// Descent loop.
    pub strategy: DescentStrategy,
    /// Intra-route move family.
    pub intra_kind: IntraMoveKind,
    /// Starting solution used by [`Descent::run`](super::Descent::run).
    pub start: StartingSolution,
    /// Candidate list size for [`DescentStrategy::CandidateSteepest`].
    pub candidate_count: usize,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            strategy: DescentStrategy::Steepest,
            intra_kind: IntraMoveKind::EdgeExchange,
            start: StartingSolution::Random,
            candidate_count: 10,
        }
    }
}

impl LocalSearchConfig {
    /// Sets the descent loop.
    pub fn with_strategy(mut self, strategy: DescentStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the intra-route move family.
    pub fn with_intra_kind(mut self, kind: IntraMoveKind) -> Self {
        self.intra_kind = kind;
        self
    }

    /// Sets the starting solution.
    pub fn with_start(mut self, start: StartingSolution) -> Self {
        self.start = start;
        self
    }

    /// Sets the candidate list size.
    pub fn with_candidate_count(mut self, k: usize) -> Self {
        self.candidate_count = k;
        self
    }
}
