//! Rollout move policies.
//!
//! The policy decides which move a simulation plays from a given set of
//! legal columns. It is trait-based so a caller can plug in something
//! smarter than uniform random without touching the search loop; the
//! default is uniform random, with no game-specific heuristic.

use crate::core::GameRng;

/// Policy for choosing a rollout move among legal columns.
pub trait RolloutPolicy: Send + Sync {
    /// Choose one of `legal`. Never called with an empty slice.
    fn choose(&self, legal: &[usize], rng: &mut GameRng) -> usize;
}

/// Uniform random rollout policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRollout;

impl RolloutPolicy for UniformRollout {
    fn choose(&self, legal: &[usize], rng: &mut GameRng) -> usize {
        *rng.choose(legal).expect("rollout policy given legal moves")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_picks_from_legal() {
        let mut rng = GameRng::new(42);
        let legal = [1usize, 3, 5];
        for _ in 0..50 {
            let col = UniformRollout.choose(&legal, &mut rng);
            assert!(legal.contains(&col));
        }
    }

    #[test]
    fn test_uniform_covers_all_moves() {
        let mut rng = GameRng::new(42);
        let legal = [0usize, 1, 2];
        let mut seen = [false; 3];
        for _ in 0..100 {
            seen[UniformRollout.choose(&legal, &mut rng)] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }
}
