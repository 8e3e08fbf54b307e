//! Move execution, undo, and rule-state bookkeeping.

use log::trace;

use super::state::{PriorFlags, UndoRecord};
use super::{Board, GameState, Piece, Square};

impl GameState {
    /// Apply a move, re-validating legality first.
    ///
    /// Fails closed: returns `false` and leaves board and state untouched
    /// on illegal input. On success the undo record is pushed, castling
    /// and en-passant bookkeeping runs, and the side to move flips.
    ///
    /// A pawn reaching its farthest rank stays a pawn; the caller detects
    /// it via [`Board::promotion_square`] and assigns the promoted piece
    /// with [`Board::promote`].
    pub fn apply_move(&mut self, board: &mut Board, from: Square, to: Square) -> bool {
        if !self.is_legal_move(board, from, to) {
            trace!("rejected illegal move {}{}", from, to);
            return false;
        }
        let record = self.execute(board, from, to);
        self.history.push(record);
        true
    }

    /// Non-validating, non-recording executor used by the search on its
    /// private board/state copies. The move must already be legal.
    pub(crate) fn apply_move_unchecked(&mut self, board: &mut Board, from: Square, to: Square) {
        let _ = self.execute(board, from, to);
    }

    /// Reverse the most recently applied move exactly, including castling
    /// relocation, the en-passant victim, and caller-assigned promotions.
    /// No-op on an empty history.
    pub fn undo_move(&mut self, board: &mut Board) {
        let Some(record) = self.history.pop() else {
            return;
        };
        let prior = match record {
            UndoRecord::Normal {
                from,
                to,
                moved,
                captured,
                prior,
            } => {
                board.remove_piece(to);
                board.set_piece(from, moved.0, moved.1);
                if let Some((c, p)) = captured {
                    board.set_piece(to, c, p);
                }
                prior
            }
            UndoRecord::Castle {
                color,
                from,
                to,
                prior,
            } => {
                board.remove_piece(to);
                board.set_piece(from, color, Piece::King);
                let rank = from.rank();
                let (rook_home, rook_castled) = rook_files(from, to);
                board.remove_piece(Square(rank, rook_castled));
                board.set_piece(Square(rank, rook_home), color, Piece::Rook);
                prior
            }
            UndoRecord::EnPassant {
                color,
                from,
                to,
                victim,
                prior,
            } => {
                board.remove_piece(to);
                board.set_piece(from, color, Piece::Pawn);
                board.set_piece(victim, color.opponent(), Piece::Pawn);
                prior
            }
        };
        self.en_passant_target = prior.en_passant;
        self.castling = prior.castling;
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Single mutation path shared by the checked and unchecked entry
    /// points. Assumes the move is legal.
    fn execute(&mut self, board: &mut Board, from: Square, to: Square) -> UndoRecord {
        let (color, piece) = board
            .piece_at(from)
            .expect("execute: start square is empty");
        let prior = PriorFlags {
            en_passant: self.en_passant_target,
            castling: self.castling,
        };

        let record = if piece == Piece::King && from.file().abs_diff(to.file()) == 2 {
            board.remove_piece(from);
            board.set_piece(to, color, Piece::King);
            let rank = from.rank();
            let (rook_home, rook_castled) = rook_files(from, to);
            let rook = board
                .remove_piece(Square(rank, rook_home))
                .expect("execute: castling without rook");
            board.set_piece(Square(rank, rook_castled), rook.0, rook.1);
            UndoRecord::Castle {
                color,
                from,
                to,
                prior,
            }
        } else if piece == Piece::Pawn && Some(to) == self.en_passant_target {
            board.remove_piece(from);
            board.set_piece(to, color, Piece::Pawn);
            // The captured pawn sits behind the target, on the mover's rank.
            let victim = Square(from.rank(), to.file());
            board.remove_piece(victim);
            UndoRecord::EnPassant {
                color,
                from,
                to,
                victim,
                prior,
            }
        } else {
            let captured = board.remove_piece(to);
            board.remove_piece(from);
            board.set_piece(to, color, piece);
            UndoRecord::Normal {
                from,
                to,
                moved: (color, piece),
                captured,
                prior,
            }
        };

        if piece == Piece::King {
            self.castling.mark_king_moved(color);
        } else if piece == Piece::Rook {
            if from == Square(color.back_rank(), 0) {
                self.castling.mark_rook_moved(color, false);
            } else if from == Square(color.back_rank(), 7) {
                self.castling.mark_rook_moved(color, true);
            }
        }

        self.en_passant_target =
            if piece == Piece::Pawn && from.rank().abs_diff(to.rank()) == 2 {
                Some(Square((from.rank() + to.rank()) / 2, from.file()))
            } else {
                None
            };

        self.side_to_move = self.side_to_move.opponent();
        record
    }
}

/// Home and castled rook files for a two-file king move.
const fn rook_files(from: Square, to: Square) -> (usize, usize) {
    if to.file() > from.file() {
        (7, 5)
    } else {
        (0, 3)
    }
}
