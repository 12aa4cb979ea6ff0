//! Monte Carlo Tree Search for Connect Four.
//!
//! ## Overview
//!
//! Classic single-threaded UCT search:
//!
//! - **Arena tree**: nodes in a flat vector, parents referenced by index
//! - **Budgets**: wall-clock time or iteration count, time taking precedence
//! - **Seeded**: all randomness flows through one per-instance RNG
//! - **Pluggable rollouts**: uniform random by default
//!
//! ## Usage
//!
//! ```rust
//! use rust_connect4::{GameState, Player};
//! use rust_connect4::mcts::{MCTSConfig, MCTSSearch};
//!
//! let state = GameState::new(Player::Red);
//! let config = MCTSConfig::default().with_iter_limit(500);
//! let mut search = MCTSSearch::new(config);
//!
//! if let Some(col) = search.search(&state) {
//!     println!("Best column: {col}");
//! }
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::MCTSConfig;
pub use node::{MCTSNode, NodeId};
pub use policy::{RolloutPolicy, UniformRollout};
pub use search::MCTSSearch;
pub use stats::SearchStats;
pub use tree::{MCTSTree, TreeStats};
