//! Core MCTS search algorithm.
//!
//! One `search` call runs the four classic phases in a loop until the budget
//! runs out:
//!
//! 1. Selection: descend from the root via UCT while every move of the
//!    current node has been tried and it has children.
//! 2. Expansion: turn one untried move into a new child.
//! 3. Simulation: random playout from the new position to a terminal result.
//! 4. Backpropagation: walk the parent links back to the root, crediting the
//!    result to the player who moved into each node.
//!
//! The loop is single-threaded and synchronous; an iteration in flight always
//! completes before the budget is re-checked, so a time-limited search may
//! overrun by at most one rollout.

use std::time::Instant;

use tracing::{debug, trace};

use crate::core::{GameRng, GameResult, GameState};

use super::config::MCTSConfig;
use super::node::NodeId;
use super::policy::{RolloutPolicy, UniformRollout};
use super::stats::SearchStats;
use super::tree::MCTSTree;

/// Main MCTS search context.
///
/// Owns the tree, configuration, RNG and rollout policy. Each `search` call
/// builds a fresh tree from the caller's position and discards it on the
/// next call; nothing persists between calls except the RNG stream.
pub struct MCTSSearch {
    /// Search configuration.
    config: MCTSConfig,

    /// The search tree, rebuilt per call.
    tree: MCTSTree,

    /// RNG for expansion order and rollouts.
    rng: GameRng,

    /// Rollout move policy.
    rollout: Box<dyn RolloutPolicy>,

    /// Statistics for the most recent search.
    stats: SearchStats,
}

impl MCTSSearch {
    /// Create a new MCTS search context.
    pub fn new(config: MCTSConfig) -> Self {
        let rng = GameRng::new(config.seed);

        Self {
            config,
            tree: MCTSTree::new(GameState::new(crate::core::Player::Red)),
            rng,
            rollout: Box::new(UniformRollout),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom rollout policy.
    pub fn with_rollout<P: RolloutPolicy + 'static>(mut self, rollout: P) -> Self {
        self.rollout = Box::new(rollout);
        self
    }

    /// Choose a column for the player to move in `state`.
    ///
    /// The engine works on a private copy; the caller's state is never
    /// mutated. Returns `None` only when the position is already terminal.
    /// If the budget expires before a single iteration completes, falls back
    /// to a uniformly random legal column rather than failing.
    pub fn search(&mut self, state: &GameState) -> Option<usize> {
        let start = Instant::now();
        self.stats.reset();
        self.tree.reset(*state);

        let root = self.tree.root();
        if self.tree.get(root).state.is_terminal() {
            trace!("search called on a terminal position");
            return None;
        }

        loop {
            let done = match self.config.time_limit {
                Some(limit) => start.elapsed() >= limit,
                None => self.stats.iterations >= self.config.iter_limit,
            };
            if done {
                break;
            }

            self.iteration();
            self.stats.iterations += 1;
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            iterations = self.stats.iterations,
            nodes = self.tree.len(),
            max_depth = self.stats.max_depth,
            time_us = self.stats.time_us,
            "search complete"
        );

        match self.tree.most_visited_child(root) {
            Some(best) => self.tree.get(best).move_col,
            None => {
                // Budget exhausted before one iteration completed. The
                // position is not terminal, so a legal move exists.
                debug!("degenerate search, falling back to a random legal move");
                let legal = state.legal_moves();
                self.rng.choose(&legal).copied()
            }
        }
    }

    /// Single MCTS iteration: select, expand, simulate, backpropagate.
    fn iteration(&mut self) {
        let c_param = self.config.exploration_constant;

        // Selection: stop at the first node that still has untried moves or
        // has no children at all.
        let mut current = self.tree.root();
        while self.tree.get_mut(current).is_fully_expanded()
            && !self.tree.get(current).children.is_empty()
        {
            current = self
                .tree
                .best_child(current, c_param)
                .expect("fully expanded node with children has a best child");
        }

        // Expansion.
        if !self.tree.get_mut(current).is_fully_expanded() {
            current = self
                .tree
                .expand(current, &mut self.rng)
                .expect("node with untried moves can expand");
            self.stats.nodes_expanded += 1;

            let depth = self.tree.get(current).depth;
            if depth > self.stats.max_depth {
                self.stats.max_depth = depth;
            }
        }

        // Simulation from the focal node's position.
        let focal_state = self.tree.get(current).state;
        let result = self.simulate(focal_state);
        self.stats.simulations += 1;

        // Backpropagation.
        self.backpropagate(current, result);
    }

    /// Random playout on a throwaway copy of `state`, to a terminal result.
    fn simulate(&mut self, state: GameState) -> GameResult {
        let mut rng = self.rng.fork();
        let mut current = state;

        loop {
            if let Some(result) = current.winner_or_draw() {
                return result;
            }

            let legal = current.legal_moves();
            if legal.is_empty() {
                // Unreachable while winner_or_draw detects full boards, but
                // the contract is explicit: no moves and no line is a draw.
                return GameResult::Draw;
            }

            let col = self.rollout.choose(&legal, &mut rng);
            current
                .apply_move(col)
                .expect("rollout move came from legal_moves");
            self.stats.rollout_moves += 1;
        }
    }

    /// Walk parent links from `from` to the root inclusive, crediting the
    /// result to the player who made the move into each node.
    ///
    /// That player is `to_move.other()`, since `apply_move` already flipped
    /// the turn. The alternating attribution is what makes each node's UCT
    /// average meaningful from its own perspective.
    fn backpropagate(&mut self, from: NodeId, result: GameResult) {
        let mut id = from;
        while !id.is_none() {
            let node = self.tree.get_mut(id);
            node.visits += 1;
            let mover = node.state.to_move().other();
            node.wins += result.reward_for(mover);
            id = node.parent;
        }
    }

    /// Statistics for the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The most recent search tree.
    #[must_use]
    pub fn tree(&self) -> &MCTSTree {
        &self.tree
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }

    /// Visit count per root move from the most recent search, for
    /// diagnostics.
    pub fn move_visits(&self) -> Vec<(usize, u32)> {
        let root = self.tree.root();
        self.tree
            .get(root)
            .children
            .iter()
            .filter_map(|&child| {
                let node = self.tree.get(child);
                node.move_col.map(|col| (col, node.visits))
            })
            .collect()
    }
}
