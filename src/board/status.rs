//! Game-status classification.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, GameState};

/// Result of classifying a position for the side about to move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ok,
    Check,
    Checkmate,
    Stalemate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Ok => "ok",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        write!(f, "{s}")
    }
}

impl GameState {
    /// Classify the position for `to_move`: checkmate = in check with no
    /// legal move, stalemate = not in check with no legal move, check =
    /// in check with a legal move, otherwise ok.
    ///
    /// An externally constructed board with no king of the queried color
    /// reports `Ok`.
    #[must_use]
    pub fn status(&self, board: &Board, to_move: Color) -> GameStatus {
        let Some(king) = board.king_square(to_move) else {
            return GameStatus::Ok;
        };
        let in_check = self.is_attacked(board, king, to_move.opponent());
        let has_move = self.has_legal_move(board, to_move);
        match (in_check, has_move) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Ok,
        }
    }
}
