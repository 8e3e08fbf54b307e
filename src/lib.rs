pub mod board;
pub mod search;

pub use board::{
    Board, CastleFlags, Color, GameState, GameStatus, Move, Piece, Square, StateSnapshot,
};
pub use search::{
    choose_bot_move, choose_random_move, choose_random_plus_move, BotConfig, SearchStats,
};
