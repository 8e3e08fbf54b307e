use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastleFlags, Color, Piece, Square};

/// The 8x8 board: a plain value holding at most one piece per square.
///
/// The board carries no rule state of its own; side to move, castling
/// flags, the en-passant target, and the undo history live in
/// [`GameState`]. Cloning the board is how the legality filter and the
/// search obtain scratch positions.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    /// Standard starting position
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Color::White, *piece);
            board.set_piece(Square(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
            board.set_piece(Square(7, file), Color::Black, *piece);
        }
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Get the piece on a square, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.rank()][sq.file()]
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.rank()][sq.file()].is_none()
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.rank()][sq.file()] = Some((color, piece));
    }

    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.rank()][sq.file()].take()
    }

    /// Locate this color's king. `None` only on externally constructed
    /// boards; normal play always has exactly one king per color.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, c, p)| c == color && p == Piece::King)
            .map(|(sq, _, _)| sq)
    }

    /// Iterate over every occupied square
    pub(crate) fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        (0..8).flat_map(move |rank| {
            (0..8).filter_map(move |file| {
                self.squares[rank][file]
                    .map(|(color, piece)| (Square(rank, file), color, piece))
            })
        })
    }

    /// A pawn standing on its farthest rank, waiting for the caller to
    /// pick its promotion piece.
    ///
    /// The executor never chooses the promoted piece itself: interactive
    /// play prompts the user, the bot path assigns a queen. Both do so via
    /// [`Board::promote`].
    #[must_use]
    pub fn promotion_square(&self) -> Option<Square> {
        for color in Color::BOTH {
            let rank = color.pawn_promotion_rank();
            for file in 0..8 {
                if self.squares[rank][file] == Some((color, Piece::Pawn)) {
                    return Some(Square(rank, file));
                }
            }
        }
        None
    }

    /// Replace a pawn that reached its farthest rank with `piece`.
    ///
    /// Does nothing if the square does not hold a pawn.
    pub fn promote(&mut self, sq: Square, piece: Piece) {
        if let Some((color, Piece::Pawn)) = self.piece_at(sq) {
            self.set_piece(sq, color, piece);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                match self.squares[rank][file] {
                    Some((color, piece)) => write!(f, " {}", piece.symbol(color))?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

/// Rule-state flags saved before a move so the move can be exactly
/// inverted.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PriorFlags {
    pub(crate) en_passant: Option<Square>,
    pub(crate) castling: CastleFlags,
}

/// One entry of the undo stack, with enough fields to invert the move.
///
/// `Normal` records the moved piece so that undoing still restores the
/// pawn after the caller has assigned a promotion piece at the
/// destination.
#[derive(Clone, Debug)]
pub(crate) enum UndoRecord {
    Normal {
        from: Square,
        to: Square,
        moved: (Color, Piece),
        captured: Option<(Color, Piece)>,
        prior: PriorFlags,
    },
    Castle {
        color: Color,
        from: Square,
        to: Square,
        prior: PriorFlags,
    },
    EnPassant {
        color: Color,
        from: Square,
        to: Square,
        victim: Square,
        prior: PriorFlags,
    },
}

/// Mutable rule state of a game in progress.
///
/// Owned exclusively by the active game session; every core operation
/// takes the board it applies to as an explicit argument. The search
/// never touches the caller's state: it works on private copies.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastleFlags,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) history: Vec<UndoRecord>,
}

impl GameState {
    /// Fresh state for a new game: White to move, all castling open, no
    /// en-passant target, empty history
    #[must_use]
    pub fn new() -> Self {
        GameState {
            side_to_move: Color::White,
            castling: CastleFlags::new(),
            en_passant_target: None,
            history: Vec::new(),
        }
    }

    /// The color whose turn it is
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Square a pawn may capture onto this ply, set only on the ply
    /// immediately after a two-square pawn advance
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Current castling eligibility flags
    #[inline]
    #[must_use]
    pub fn castle_flags(&self) -> CastleFlags {
        self.castling
    }

    /// Number of applied moves on the undo stack
    #[inline]
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Copy of the rule flags without the undo history, for the search's
    /// private per-node states
    pub(crate) fn scratch(&self) -> GameState {
        GameState {
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant_target: self.en_passant_target,
            history: Vec::new(),
        }
    }

    /// Capture the full rule state for later [`GameState::restore_state`].
    ///
    /// The snapshot is independent of whichever board matrix is currently
    /// displayed; replay rewinds by restoring snapshots instead of keeping
    /// a redo stack.
    #[must_use]
    pub fn capture_state(&self) -> StateSnapshot {
        StateSnapshot {
            side_to_move: self.side_to_move,
            en_passant_target: self.en_passant_target,
            castling: self.castling,
            history_len: self.history.len(),
        }
    }

    /// Reinstate a previously captured snapshot, truncating the undo
    /// history to the saved length
    pub fn restore_state(&mut self, snapshot: &StateSnapshot) {
        self.side_to_move = snapshot.side_to_move;
        self.en_passant_target = snapshot.en_passant_target;
        self.castling = snapshot.castling;
        self.history.truncate(snapshot.history_len);
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

/// Full rule-state snapshot used for replay and rewind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateSnapshot {
    pub(crate) side_to_move: Color,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling: CastleFlags,
    pub(crate) history_len: usize,
}
