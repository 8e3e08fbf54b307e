//! Move selection for the automated opponent.
//!
//! A fixed-depth minimax search with alpha-beta pruning and MVV-LVA move
//! ordering picks the bot's move; two much weaker random opponents are
//! kept alongside it as baselines. The whole search runs to completion
//! inside one blocking call: depth is the only cost control, and every
//! node works on private board/state copies, so nothing here ever mutates
//! the caller's game.

mod eval;
mod minimax;
mod ordering;
mod pst;

#[cfg(test)]
mod tests;

use log::debug;
use rand::seq::SliceRandom;

use crate::board::{Board, Color, GameState, Move};

pub use eval::evaluate;
pub use ordering::order_moves;

use minimax::{minimax, simulate, INFINITY};

/// Default search depth in plies. Cost grows exponentially with depth;
/// correctness does not change.
pub const DEFAULT_SEARCH_DEPTH: u32 = 3;

/// Bot configuration. Unset options fall back to documented defaults.
#[derive(Clone, Copy, Debug)]
pub struct BotConfig {
    /// Search depth in plies, clamped to at least 1
    pub search_depth: u32,
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

/// Node and cutoff counters for one root search.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub pruned: u64,
}

/// Pick the best move for `color` with a depth-limited alpha-beta search.
///
/// Root handling: every root move is searched as a minimizing child with
/// the running alpha and a fixed beta of +infinity; alpha tightens after
/// each improvement but beta is never narrowed, which is sufficient for
/// selecting the best child (not for an exact root value). Returns `None`
/// only when `color` has no legal move, which callers normally exclude by
/// checking the game status first.
#[must_use]
pub fn choose_bot_move(
    board: &Board,
    state: &GameState,
    color: Color,
    config: &BotConfig,
) -> Option<Move> {
    let depth = config.search_depth.max(1);

    let moves = state.legal_moves(board, color);
    if moves.is_empty() {
        return None;
    }
    let moves = order_moves(board, moves);
    debug!(
        "bot {color}: searching {} moves at depth {depth}",
        moves.len()
    );

    let mut stats = SearchStats::default();
    let mut best_move = None;
    let mut best_value = -INFINITY;
    let mut alpha = -INFINITY;
    let beta = INFINITY;

    for mv in moves {
        let (child_board, child_state) = simulate(board, state, mv);
        let value = minimax(
            &child_board,
            &child_state,
            depth - 1,
            alpha,
            beta,
            false,
            color,
            &mut stats,
        );
        if value > best_value {
            best_value = value;
            best_move = Some(mv);
            alpha = alpha.max(value);
        }
    }

    debug!(
        "bot {color}: {} nodes, {} cutoffs, chose {} valued {best_value}",
        stats.nodes,
        stats.pruned,
        best_move.map_or_else(|| "none".to_string(), |mv| mv.to_string()),
    );
    best_move
}

/// Baseline opponent: a uniformly random legal move.
#[must_use]
pub fn choose_random_move(board: &Board, state: &GameState, color: Color) -> Option<Move> {
    let moves = state.legal_moves(board, color);
    moves.choose(&mut rand::thread_rng()).copied()
}

/// Baseline opponent: a random capture if one exists, else a random move
/// toward one of the four center squares, else a random legal move.
#[must_use]
pub fn choose_random_plus_move(board: &Board, state: &GameState, color: Color) -> Option<Move> {
    let moves = state.legal_moves(board, color);
    if moves.is_empty() {
        return None;
    }
    let mut rng = rand::thread_rng();

    let captures: Vec<Move> = moves
        .iter()
        .filter(|mv| board.piece_at(mv.to).is_some())
        .copied()
        .collect();
    if let Some(mv) = captures.choose(&mut rng) {
        return Some(*mv);
    }

    const CENTER: [(usize, usize); 4] = [(3, 3), (3, 4), (4, 3), (4, 4)];
    let central: Vec<Move> = moves
        .iter()
        .filter(|mv| CENTER.contains(&(mv.to.rank(), mv.to.file())))
        .copied()
        .collect();
    if let Some(mv) = central.choose(&mut rng) {
        return Some(*mv);
    }

    moves.choose(&mut rng).copied()
}
