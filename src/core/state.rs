//! Game state: board plus side to move.
//!
//! A `GameState` owns its board. Constructing one from a caller's grid copies
//! the grid, so the engine can never mutate the caller's authoritative board,
//! and cloning a state for a tree branch never aliases the original.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::GameError;

use super::board::{Board, COLS};
use super::player::{GameResult, Player};

/// Legal moves for a position. At most one entry per column.
pub type MoveList = SmallVec<[usize; COLS]>;

/// A board snapshot plus whose turn it is next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Player,
}

impl GameState {
    /// Empty board with `first_player` to move.
    #[must_use]
    pub const fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first_player,
        }
    }

    /// Build a state from a board snapshot, e.g. taken from a UI layer.
    #[must_use]
    pub const fn from_board(board: Board, to_move: Player) -> Self {
        Self { board, to_move }
    }

    /// The board.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move next.
    #[inline]
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Columns with at least one empty cell, in ascending order.
    ///
    /// The ascending order is load-bearing: expansion picks an untried move
    /// at random, and that randomness is meant to be the only source of
    /// variation between runs with the same seed.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        (0..COLS)
            .filter(|&col| self.board.get(0, col).is_none())
            .collect()
    }

    /// Drop the current player's piece into `col` and flip the turn.
    ///
    /// Returns the `(row, col)` the piece landed at. Rejects out-of-range and
    /// full columns before any mutation.
    pub fn apply_move(&mut self, col: usize) -> Result<(usize, usize), GameError> {
        let player = self.to_move;
        let row = self.board.drop_piece(col, player)?;
        self.to_move = player.other();
        Ok((row, col))
    }

    /// Outcome of the position, or `None` while the game continues.
    #[must_use]
    pub fn winner_or_draw(&self) -> Option<GameResult> {
        self.board.winner_or_draw()
    }

    /// Check if the position is terminal (won or drawn).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner_or_draw().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::ROWS;

    #[test]
    fn test_legal_moves_empty_board() {
        let state = GameState::new(Player::Red);
        let moves = state.legal_moves();
        assert_eq!(moves.as_slice(), &[0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_legal_moves_excludes_full_column() {
        let mut state = GameState::new(Player::Red);
        for _ in 0..ROWS {
            state.apply_move(2).unwrap();
        }
        let moves = state.legal_moves();
        assert_eq!(moves.as_slice(), &[0, 1, 3, 4, 5, 6]);
    }

    #[test]
    fn test_apply_move_flips_turn() {
        let mut state = GameState::new(Player::Red);
        assert_eq!(state.apply_move(0).unwrap(), (ROWS - 1, 0));
        assert_eq!(state.to_move(), Player::Yellow);
        assert_eq!(state.board().get(ROWS - 1, 0), Some(Player::Red));
    }

    #[test]
    fn test_apply_move_errors_leave_state_intact() {
        let mut state = GameState::new(Player::Yellow);
        for _ in 0..ROWS {
            state.apply_move(6).unwrap();
        }
        let before = state;

        assert_eq!(state.apply_move(6), Err(GameError::IllegalMove(6)));
        assert_eq!(state, before, "turn must not flip on a rejected move");
        assert_eq!(state.apply_move(7), Err(GameError::InvalidColumn(7)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = GameState::new(Player::Red);
        original.apply_move(3).unwrap();

        let mut copy = original;
        copy.apply_move(3).unwrap();

        assert_eq!(original.board().piece_count(), 1);
        assert_eq!(copy.board().piece_count(), 2);
        assert_eq!(original.to_move(), Player::Yellow);
        assert_eq!(copy.to_move(), Player::Red);
    }

    #[test]
    fn test_clone_same_moves_same_result() {
        let moves = [3, 3, 4, 4, 5, 5, 6];
        let mut a = GameState::new(Player::Red);
        let mut b = a;
        for col in moves {
            a.apply_move(col).unwrap();
            b.apply_move(col).unwrap();
        }
        assert_eq!(a, b);
        assert_eq!(a.winner_or_draw(), b.winner_or_draw());
        // Red played 3,4,5,6 on the bottom row.
        assert_eq!(a.winner_or_draw(), Some(GameResult::Winner(Player::Red)));
    }

    #[test]
    fn test_from_board_copies_snapshot() {
        let mut grid = Board::new();
        grid.drop_piece(0, Player::Red).unwrap();

        let mut state = GameState::from_board(grid, Player::Yellow);
        state.apply_move(0).unwrap();

        // The snapshot the state was built from is untouched.
        assert_eq!(grid.piece_count(), 1);
        assert_eq!(state.board().piece_count(), 2);
    }

    #[test]
    fn test_serialization() {
        let mut state = GameState::new(Player::Red);
        state.apply_move(3).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
