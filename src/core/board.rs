//! The 6×7 gravity-drop board.
//!
//! ## Layout
//!
//! Row 0 is the top of the board, row `ROWS - 1` the bottom. A dropped piece
//! lands at the lowest empty row of its column, so within any column the
//! filled cells are contiguous at the bottom and the empty cells contiguous
//! at the top.
//!
//! ## Cloning
//!
//! The board is a fixed 42-cell array and is `Copy`. MCTS clones a state on
//! every expansion and every rollout, so cheap duplication matters more here
//! than structural sharing would.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

use super::player::{GameResult, Player};

/// Number of rows (board height).
pub const ROWS: usize = 6;

/// Number of columns (board width).
pub const COLS: usize = 7;

/// Cells forming a winning line, as `(row, col)` pairs.
pub type WinningLine = [(usize, usize); 4];

/// A 6×7 grid of cells, row 0 at the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Player>; COLS]; ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; COLS]; ROWS],
        }
    }

    /// Build a board from a raw grid snapshot, e.g. one maintained by a UI.
    #[must_use]
    pub const fn from_grid(cells: [[Option<Player>; COLS]; ROWS]) -> Self {
        Self { cells }
    }

    /// The cell at `(row, col)`. Panics if out of bounds, like slice indexing.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[row][col]
    }

    /// Check if every cell is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        // Gravity means a board is full iff its top row is full.
        self.cells[0].iter().all(|c| c.is_some())
    }

    /// Check if no cell is filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells[ROWS - 1].iter().all(|c| c.is_none())
    }

    /// Count of filled cells.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.is_some())
            .count()
    }

    /// The lowest empty row of a column, scanning bottom to top.
    ///
    /// Returns `Ok(None)` when the column is full and `InvalidColumn` when
    /// `col` is outside `[0, COLS)`.
    pub fn lowest_empty_row(&self, col: usize) -> Result<Option<usize>, GameError> {
        if col >= COLS {
            return Err(GameError::InvalidColumn(col));
        }
        Ok((0..ROWS).rev().find(|&r| self.cells[r][col].is_none()))
    }

    /// Drop a piece into a column, returning the row it landed in.
    ///
    /// The check precedes the placement, so an `Err` leaves the board
    /// unchanged.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, GameError> {
        match self.lowest_empty_row(col)? {
            Some(row) => {
                self.cells[row][col] = Some(player);
                Ok(row)
            }
            None => Err(GameError::IllegalMove(col)),
        }
    }

    /// Find four in a row, returning the winner and the four cells.
    ///
    /// Scans all four directions (horizontal, vertical, both diagonals)
    /// exhaustively on every call. Rollouts mutate boards move by move and
    /// re-check after each one, so there is deliberately no cached win state.
    #[must_use]
    pub fn four_in_a_row(&self) -> Option<(Player, WinningLine)> {
        // Horizontal
        for r in 0..ROWS {
            for c in 0..COLS - 3 {
                if let Some(p) = self.line_at(r, c, 0, 1) {
                    return Some((p, [(r, c), (r, c + 1), (r, c + 2), (r, c + 3)]));
                }
            }
        }
        // Vertical
        for c in 0..COLS {
            for r in 0..ROWS - 3 {
                if let Some(p) = self.line_at(r, c, 1, 0) {
                    return Some((p, [(r, c), (r + 1, c), (r + 2, c), (r + 3, c)]));
                }
            }
        }
        // Diagonal down-right
        for r in 0..ROWS - 3 {
            for c in 0..COLS - 3 {
                if let Some(p) = self.line_at(r, c, 1, 1) {
                    return Some((p, [(r, c), (r + 1, c + 1), (r + 2, c + 2), (r + 3, c + 3)]));
                }
            }
        }
        // Diagonal up-right
        for r in 3..ROWS {
            for c in 0..COLS - 3 {
                if let Some(p) = self.line_at(r, c, -1, 1) {
                    return Some((p, [(r, c), (r - 1, c + 1), (r - 2, c + 2), (r - 3, c + 3)]));
                }
            }
        }
        None
    }

    /// The four cells of a winning line, if any. Front ends use this to
    /// highlight the line.
    #[must_use]
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.four_in_a_row().map(|(_, line)| line)
    }

    /// Game outcome: a winner, a draw on a full board, or `None` while the
    /// game continues.
    #[must_use]
    pub fn winner_or_draw(&self) -> Option<GameResult> {
        if let Some((winner, _)) = self.four_in_a_row() {
            return Some(GameResult::Winner(winner));
        }
        if self.is_full() {
            return Some(GameResult::Draw);
        }
        None
    }

    /// Check four cells starting at `(r, c)` stepping by `(dr, dc)`.
    fn line_at(&self, r: usize, c: usize, dr: isize, dc: isize) -> Option<Player> {
        let first = self.cells[r][c]?;
        for i in 1..4isize {
            let rr = (r as isize + dr * i) as usize;
            let cc = (c as isize + dc * i) as usize;
            if self.cells[rr][cc] != Some(first) {
                return None;
            }
        }
        Some(first)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                let ch = match cell {
                    Some(Player::Red) => 'R',
                    Some(Player::Yellow) => 'Y',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
