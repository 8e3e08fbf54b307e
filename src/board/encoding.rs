//! Wire/interop representation of a board.
//!
//! The exchange format is an 8x8 matrix in display order: row 0 is
//! Black's back rank (rank 8), row 7 is White's. A piece is a two-symbol
//! code, color letter first (`"wP"`, `"bK"`); the empty-square sentinel
//! is `""`.

use super::error::PieceCodeError;
use super::{Board, Color, Piece, Square};

impl Board {
    /// Build a board from the 8x8 wire matrix.
    ///
    /// # Errors
    /// Returns [`PieceCodeError`] for any cell that is neither empty nor
    /// a valid two-symbol piece code.
    pub fn from_rows<S: AsRef<str>>(rows: &[[S; 8]; 8]) -> Result<Self, PieceCodeError> {
        let mut board = Board::empty();
        for (row, cells) in rows.iter().enumerate() {
            let rank = 7 - row;
            for (file, cell) in cells.iter().enumerate() {
                let code = cell.as_ref();
                if code.is_empty() {
                    continue;
                }
                let (color, piece) = decode_piece(code)?;
                board.set_piece(Square(rank, file), color, piece);
            }
        }
        Ok(board)
    }

    /// Export the board as the 8x8 wire matrix.
    #[must_use]
    pub fn to_rows(&self) -> [[String; 8]; 8] {
        std::array::from_fn(|row| {
            let rank = 7 - row;
            std::array::from_fn(|file| match self.piece_at(Square(rank, file)) {
                Some((color, piece)) => encode_piece(color, piece),
                None => String::new(),
            })
        })
    }
}

fn encode_piece(color: Color, piece: Piece) -> String {
    let mut code = String::with_capacity(2);
    code.push(color.letter());
    code.push(piece.letter());
    code
}

fn decode_piece(code: &str) -> Result<(Color, Piece), PieceCodeError> {
    let mut chars = code.chars();
    let (Some(color_ch), Some(piece_ch), None) = (chars.next(), chars.next(), chars.next())
    else {
        return Err(PieceCodeError::InvalidLength {
            code: code.to_string(),
        });
    };
    let color = Color::from_letter(color_ch).ok_or(PieceCodeError::InvalidColor {
        symbol: color_ch,
    })?;
    let piece = Piece::from_letter(piece_ch).ok_or(PieceCodeError::InvalidKind {
        symbol: piece_ch,
    })?;
    Ok((color, piece))
}
