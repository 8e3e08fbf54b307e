//! Heuristic move ordering to improve alpha-beta pruning.

use crate::board::{Board, Move};

/// Sort candidate moves by descending heuristic score.
///
/// Captures score `10 x victim - attacker` (MVV-LVA); every move, capture
/// or not, additionally gets a small bonus for landing near the board
/// center. Tie order is not guaranteed. Ordering is a performance
/// heuristic only and never changes which moves are legal.
#[must_use]
pub fn order_moves(board: &Board, moves: Vec<Move>) -> Vec<Move> {
    let mut scored: Vec<(i32, Move)> = moves
        .into_iter()
        .map(|mv| (move_score(board, mv), mv))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, mv)| mv).collect()
}

fn move_score(board: &Board, mv: Move) -> i32 {
    let mut score = 0;

    if let Some((_, victim)) = board.piece_at(mv.to) {
        score += victim.value() * 10;
        if let Some((_, attacker)) = board.piece_at(mv.from) {
            score -= attacker.value();
        }
    }

    // Centrality: 2 x (7 - Manhattan distance from the board center),
    // kept in integer form.
    let rank = mv.to.rank() as i32;
    let file = mv.to.file() as i32;
    score += 14 - ((7 - 2 * rank).abs() + (7 - 2 * file).abs());

    score
}
