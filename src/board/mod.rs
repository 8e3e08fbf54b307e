//! Chess board representation and game rules.
//!
//! Uses a plain 8x8 mailbox board together with an explicit [`GameState`]
//! record (side to move, castling flags, en-passant target, undo history).
//! Supports full chess rules including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use chessbot::board::{Board, Color, GameState};
//!
//! let board = Board::new();
//! let state = GameState::new();
//! let moves = state.legal_moves(&board, Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod apply;
mod attacks;
mod encoding;
mod error;
mod movegen;
pub mod prelude;
mod san;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{PieceCodeError, SquareError};
pub use state::{Board, GameState, StateSnapshot};
pub use status::GameStatus;
pub use types::{CastleFlags, Color, Move, Piece, Square};
