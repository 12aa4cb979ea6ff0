//! MCTS search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one MCTS search.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Completed iterations.
    pub iterations: u32,

    /// Nodes added to the tree.
    pub nodes_expanded: u32,

    /// Simulations (rollouts) performed.
    pub simulations: u32,

    /// Total moves played across all rollouts.
    pub rollout_moves: u64,

    /// Maximum tree depth reached.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Iterations per second.
    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.iterations as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Average rollout length in moves.
    #[must_use]
    pub fn avg_rollout_length(&self) -> f64 {
        if self.simulations == 0 {
            0.0
        } else {
            self.rollout_moves as f64 / self.simulations as f64
        }
    }
}
