//! Error taxonomy for board-level operations.
//!
//! Illegal operations are rejected before any mutation: a `drop_piece` or
//! `apply_move` that returns an error leaves the board untouched. Inside the
//! search loop every applied move comes from `legal_moves()`, so these errors
//! indicate a bug in the caller, not a runtime condition to recover from.

use thiserror::Error;

/// Errors from board and game-state operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Column index outside `[0, COLS)`.
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    /// Drop attempted into a full column.
    #[error("column {0} is full")]
    IllegalMove(usize),
}
