//! Convenience re-exports for typical callers.

pub use super::{Board, Color, GameState, GameStatus, Move, Piece, Square};
