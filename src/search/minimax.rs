//! Depth-limited minimax with alpha-beta pruning.

use crate::board::{Board, Color, GameState, GameStatus, Move, Piece};

use super::eval::evaluate;
use super::ordering::order_moves;
use super::SearchStats;

/// Sentinel larger than any reachable evaluation.
pub(crate) const INFINITY: i32 = 1_000_000;

/// Terminal score for checkmate, before any leaf evaluation can apply.
pub(crate) const MATE_SCORE: i32 = 100_000;

/// Produce the child position for a move on private copies of board and
/// rule state, with full executor semantics (castling rook relocation,
/// en-passant removal, flag and target updates). A pawn reaching its
/// farthest rank is auto-queened: the bot path never prompts.
pub(crate) fn simulate(board: &Board, state: &GameState, mv: Move) -> (Board, GameState) {
    let mut child_board = board.clone();
    let mut child_state = state.scratch();
    child_state.apply_move_unchecked(&mut child_board, mv.from, mv.to);
    if let Some(sq) = child_board.promotion_square() {
        child_board.promote(sq, Piece::Queen);
    }
    (child_board, child_state)
}

/// Recursive alpha-beta node.
///
/// `perspective` is the searching side and never changes down the tree;
/// `maximizing` alternates. Terminal positions are scored relative to the
/// node's role: a checkmated maximizing node is -MATE_SCORE, a checkmated
/// minimizing node +MATE_SCORE, stalemate is 0.
#[allow(clippy::too_many_arguments)]
pub(crate) fn minimax(
    board: &Board,
    state: &GameState,
    depth: u32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    perspective: Color,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    let to_move = state.side_to_move();
    match state.status(board, to_move) {
        GameStatus::Checkmate => {
            return if maximizing { -MATE_SCORE } else { MATE_SCORE };
        }
        GameStatus::Stalemate => return 0,
        GameStatus::Ok | GameStatus::Check => {}
    }

    if depth == 0 {
        return evaluate(board, perspective);
    }

    let moves = state.legal_moves(board, to_move);
    if moves.is_empty() {
        // Unreachable when status above is accurate; kept as a defensive
        // fallback for callers that skip the status check.
        return evaluate(board, perspective);
    }
    let moves = order_moves(board, moves);

    if maximizing {
        let mut best = -INFINITY;
        let mut alpha = alpha;
        for mv in moves {
            let (child_board, child_state) = simulate(board, state, mv);
            let value = minimax(
                &child_board,
                &child_state,
                depth - 1,
                alpha,
                beta,
                false,
                perspective,
                stats,
            );
            best = best.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                stats.pruned += 1;
                break;
            }
        }
        best
    } else {
        let mut best = INFINITY;
        let mut beta = beta;
        for mv in moves {
            let (child_board, child_state) = simulate(board, state, mv);
            let value = minimax(
                &child_board,
                &child_state,
                depth - 1,
                alpha,
                beta,
                true,
                perspective,
                stats,
            );
            best = best.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                stats.pruned += 1;
                break;
            }
        }
        best
    }
}
