//! Shared helpers for board tests.

use crate::board::{Board, Square};

/// Build a board from display-order rows, panicking on bad codes.
pub(crate) fn board(rows: [[&str; 8]; 8]) -> Board {
    Board::from_rows(&rows).expect("valid test position")
}

/// Parse an algebraic square like "e4".
pub(crate) fn sq(notation: &str) -> Square {
    notation.parse().expect("valid square")
}

pub(crate) const EMPTY_ROW: [&str; 8] = ["", "", "", "", "", "", "", ""];
