//! Simplified algebraic notation for move labels.

use super::{Board, Piece, Square};

impl Board {
    /// Human-readable label for a move, computed on the board *before*
    /// the move is applied.
    ///
    /// Returns notation like `"e4"`, `"exd5"`, `"Nf3"`, `"Qxd5"`,
    /// `"O-O"`, `"O-O-O"`. Castling ignores the destination square
    /// entirely; pawn moves omit the piece letter. This is the display
    /// dialect only: no disambiguation and no check/checkmate suffixes,
    /// and an en-passant capture (empty destination) prints as a quiet
    /// pawn move. An empty start square yields `"???"`.
    #[must_use]
    pub fn algebraic_notation(&self, from: Square, to: Square) -> String {
        let Some((_, piece)) = self.piece_at(from) else {
            return "???".to_string();
        };

        if piece == Piece::King && from.file().abs_diff(to.file()) == 2 {
            return if to.file() > from.file() {
                "O-O".to_string()
            } else {
                "O-O-O".to_string()
            };
        }

        let capture = self.piece_at(to).is_some();
        if piece == Piece::Pawn {
            if capture {
                let from_file = (b'a' + from.file() as u8) as char;
                format!("{from_file}x{to}")
            } else {
                to.to_string()
            }
        } else {
            let x = if capture { "x" } else { "" };
            format!("{}{}{}", piece.letter(), x, to)
        }
    }
}
