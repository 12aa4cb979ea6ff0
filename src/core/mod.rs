//! Game model: board, players, state, and deterministic RNG.
//!
//! Everything here is pure with respect to the search engine: the board and
//! state types know the rules of the game (gravity, legality, four-in-a-row,
//! draw) and nothing about trees or budgets.

pub mod board;
pub mod player;
pub mod rng;
pub mod state;

pub use board::{Board, WinningLine, COLS, ROWS};
pub use player::{GameResult, Player};
pub use rng::GameRng;
pub use state::{GameState, MoveList};
