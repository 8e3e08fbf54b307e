//! Attack detection.

use super::{Board, Color, GameState, Piece, Square};

impl GameState {
    /// Is `target` attacked by any piece of `by` on this board?
    ///
    /// True iff some piece of `by` has `target` among its pseudo-legal
    /// destinations. Pawns are special-cased: they attack both forward
    /// diagonals regardless of what (if anything) stands on the target
    /// square. Attackers are not filtered for their own king safety; a
    /// pinned piece still attacks.
    ///
    /// Deliberately rescans the whole board per query. Legality filtering
    /// on top of this is quadratic per candidate move, which is accepted
    /// for an engine of this size.
    #[must_use]
    pub fn is_attacked(&self, board: &Board, target: Square, by: Color) -> bool {
        for (from, color, piece) in board.pieces() {
            if color != by {
                continue;
            }
            let hits = match piece {
                Piece::Pawn => pawn_attacks(from, target, by),
                _ => self.pseudo_legal_destinations(board, from).contains(&target),
            };
            if hits {
                return true;
            }
        }
        false
    }
}

fn pawn_attacks(from: Square, target: Square, color: Color) -> bool {
    let dir = color.pawn_direction();
    target.rank() as isize == from.rank() as isize + dir
        && from.file().abs_diff(target.file()) == 1
}
