//! # rust-connect4
//!
//! A Connect Four (6×7, gravity drop, four in a row) engine with a Monte
//! Carlo Tree Search AI.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: the board is a value owned by whoever holds
//!    authority over it. The engine only ever receives a copied snapshot and
//!    never mutates the caller's board.
//!
//! 2. **Seeded randomness**: expansion order and rollouts draw from one
//!    deterministic RNG per engine instance, so searches are reproducible.
//!
//! 3. **Fresh tree per call**: no state persists across `search` calls.
//!    Each call builds a tree, extracts the most-visited root child, and
//!    discards everything.
//!
//! ## Modules
//!
//! - `core`: board, players, game state, RNG
//! - `mcts`: the search engine (tree, selection, expansion, rollout,
//!   backpropagation)
//! - `error`: board-level error taxonomy

pub mod core;
pub mod error;
pub mod mcts;

// Re-export commonly used types
pub use crate::core::{Board, GameResult, GameRng, GameState, MoveList, Player, WinningLine};
pub use crate::core::{COLS, ROWS};

pub use crate::error::GameError;

pub use crate::mcts::{
    MCTSConfig, MCTSNode, MCTSSearch, MCTSTree, NodeId, RolloutPolicy, SearchStats, TreeStats,
    UniformRollout,
};
