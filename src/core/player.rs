//! Player identification for a two-sided connection game.
//!
//! The two sides are symmetric: neither player carries any special rules, and
//! `other()` is a total, involutive mapping between them. Board cells hold
//! `Option<Player>`, with `None` for an empty cell.

use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// Red moves first by convention, but nothing in the engine assumes it;
/// `GameState` carries whose turn it is explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// The opposing player.
    ///
    /// ```
    /// use rust_connect4::Player;
    ///
    /// assert_eq!(Player::Red.other(), Player::Yellow);
    /// assert_eq!(Player::Red.other().other(), Player::Red);
    /// ```
    #[inline]
    #[must_use]
    pub const fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Yellow => write!(f, "Yellow"),
        }
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Four in a row for one player.
    Winner(Player),
    /// Full board with no line of four.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if p == player)
    }

    /// Reward from this result for a player: 1.0 win, 0.5 draw, 0.0 loss.
    #[must_use]
    pub fn reward_for(self, player: Player) -> f64 {
        match self {
            GameResult::Winner(p) if p == player => 1.0,
            GameResult::Winner(_) => 0.0,
            GameResult::Draw => 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_involutive() {
        assert_eq!(Player::Red.other(), Player::Yellow);
        assert_eq!(Player::Yellow.other(), Player::Red);
        assert_eq!(Player::Red.other().other(), Player::Red);
        assert_eq!(Player::Yellow.other().other(), Player::Yellow);
    }

    #[test]
    fn test_result_is_winner() {
        let result = GameResult::Winner(Player::Yellow);
        assert!(result.is_winner(Player::Yellow));
        assert!(!result.is_winner(Player::Red));
        assert!(!GameResult::Draw.is_winner(Player::Red));
    }

    #[test]
    fn test_result_rewards() {
        let win = GameResult::Winner(Player::Red);
        assert_eq!(win.reward_for(Player::Red), 1.0);
        assert_eq!(win.reward_for(Player::Yellow), 0.0);
        assert_eq!(GameResult::Draw.reward_for(Player::Red), 0.5);
        assert_eq!(GameResult::Draw.reward_for(Player::Yellow), 0.5);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Player::Red).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Player::Red);
    }
}
