//! MCTS configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// MCTS configuration parameters.
///
/// Fixed for the lifetime of an engine instance; nothing here is tuned
/// mid-search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSConfig {
    /// Wall-clock budget for one search. When set, it takes precedence over
    /// `iter_limit`. Checked at iteration boundaries only, so a search may
    /// overrun by at most one iteration.
    pub time_limit: Option<Duration>,

    /// Iteration budget, used only when no time limit is set.
    pub iter_limit: u32,

    /// UCT exploration constant (default 1.4, a √2-scale value).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Random seed for expansion and rollout RNG.
    /// Same seed produces deterministic searches.
    pub seed: u64,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            time_limit: None,
            iter_limit: 800,
            exploration_constant: 1.4,
            seed: 42,
        }
    }
}

impl MCTSConfig {
    /// Create a new config with a wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Create a new config with an iteration budget.
    pub fn with_iter_limit(mut self, iterations: u32) -> Self {
        self.iter_limit = iterations;
        self
    }

    /// Create a new config with a custom exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
