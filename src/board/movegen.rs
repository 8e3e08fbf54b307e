//! Pseudo-legal move generation and the king-safety legality filter.

use super::{Board, Color, GameState, Move, Piece, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl GameState {
    /// Every destination satisfying the basic movement rules for the piece
    /// on `from`, ignoring whether the mover's own king ends up attacked.
    ///
    /// A destination occupied by a same-color piece is always rejected.
    /// Castling destinations appear here when the flags and the squares
    /// between king and rook allow it; whether the king crosses an
    /// attacked square is the legality filter's business.
    #[must_use]
    pub fn pseudo_legal_destinations(&self, board: &Board, from: Square) -> Vec<Square> {
        let mut out = Vec::new();
        let Some((color, piece)) = board.piece_at(from) else {
            return out;
        };
        match piece {
            Piece::Pawn => self.pawn_destinations(board, from, color, &mut out),
            Piece::Knight => leaper_destinations(board, from, color, &KNIGHT_OFFSETS, &mut out),
            Piece::Bishop => slider_destinations(board, from, color, &BISHOP_DIRECTIONS, &mut out),
            Piece::Rook => slider_destinations(board, from, color, &ROOK_DIRECTIONS, &mut out),
            Piece::Queen => {
                slider_destinations(board, from, color, &ROOK_DIRECTIONS, &mut out);
                slider_destinations(board, from, color, &BISHOP_DIRECTIONS, &mut out);
            }
            Piece::King => {
                leaper_destinations(board, from, color, &KING_OFFSETS, &mut out);
                self.castle_destinations(board, from, color, &mut out);
            }
        }
        out
    }

    fn pawn_destinations(&self, board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
        let dir = color.pawn_direction();
        if let Some(one) = from.offset(dir, 0) {
            if board.is_empty(one) {
                out.push(one);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if board.is_empty(two) {
                            out.push(two);
                        }
                    }
                }
            }
        }
        for dc in [-1, 1] {
            if let Some(diag) = from.offset(dir, dc) {
                match board.piece_at(diag) {
                    Some((c, _)) if c != color => out.push(diag),
                    None if Some(diag) == self.en_passant_target => out.push(diag),
                    _ => {}
                }
            }
        }
    }

    fn castle_destinations(
        &self,
        board: &Board,
        from: Square,
        color: Color,
        out: &mut Vec<Square>,
    ) {
        let rank = color.back_rank();
        if from != Square(rank, 4) {
            return;
        }
        if self.castling.may_castle(color, true)
            && board.piece_at(Square(rank, 7)) == Some((color, Piece::Rook))
            && board.is_empty(Square(rank, 5))
            && board.is_empty(Square(rank, 6))
        {
            out.push(Square(rank, 6));
        }
        if self.castling.may_castle(color, false)
            && board.piece_at(Square(rank, 0)) == Some((color, Piece::Rook))
            && board.is_empty(Square(rank, 1))
            && board.is_empty(Square(rank, 2))
            && board.is_empty(Square(rank, 3))
        {
            out.push(Square(rank, 2));
        }
    }

    /// Pure legality query: pseudo-legal and passes the king-safety filter.
    /// Never mutates the board.
    #[must_use]
    pub fn is_legal_move(&self, board: &Board, from: Square, to: Square) -> bool {
        let Some((color, _)) = board.piece_at(from) else {
            return false;
        };
        if !self.pseudo_legal_destinations(board, from).contains(&to) {
            return false;
        }
        self.passes_king_safety(board, from, to, color)
    }

    /// All legal moves for `color`, in generation order.
    #[must_use]
    pub fn legal_moves(&self, board: &Board, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for (from, c, _) in board.pieces() {
            if c != color {
                continue;
            }
            for to in self.pseudo_legal_destinations(board, from) {
                if self.passes_king_safety(board, from, to, color) {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }

    /// Short-circuit variant of [`GameState::legal_moves`] used by the
    /// status evaluator.
    #[must_use]
    pub fn has_legal_move(&self, board: &Board, color: Color) -> bool {
        for (from, c, _) in board.pieces() {
            if c != color {
                continue;
            }
            for to in self.pseudo_legal_destinations(board, from) {
                if self.passes_king_safety(board, from, to, color) {
                    return true;
                }
            }
        }
        false
    }

    /// King-safety filter for an already pseudo-legal move.
    ///
    /// The move is applied to a scratch board as a plain relocation (the
    /// en-passant victim stays put and the castling rook does not move on
    /// the scratch copy), then the mover's king is tested for attack. A
    /// castling move is additionally rejected if any column the king
    /// crosses, start and end inclusive, is attacked on the pre-move
    /// board.
    fn passes_king_safety(&self, board: &Board, from: Square, to: Square, color: Color) -> bool {
        let mut scratch = board.clone();
        if let Some((c, p)) = scratch.remove_piece(from) {
            scratch.set_piece(to, c, p);
        }
        if let Some(king) = scratch.king_square(color) {
            if self.is_attacked(&scratch, king, color.opponent()) {
                return false;
            }
        }

        if board.piece_at(from).map(|(_, p)| p) == Some(Piece::King)
            && from.file().abs_diff(to.file()) == 2
        {
            let (lo, hi) = if to.file() > from.file() {
                (from.file(), to.file())
            } else {
                (to.file(), from.file())
            };
            for file in lo..=hi {
                if self.is_attacked(board, Square(from.rank(), file), color.opponent()) {
                    return false;
                }
            }
        }
        true
    }
}

fn leaper_destinations(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(isize, isize)],
    out: &mut Vec<Square>,
) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                Some((c, _)) if c == color => {}
                _ => out.push(to),
            }
        }
    }
}

fn slider_destinations(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(isize, isize)],
    out: &mut Vec<Square>,
) {
    for &(dr, dc) in directions {
        let mut sq = from;
        while let Some(next) = sq.offset(dr, dc) {
            match board.piece_at(next) {
                None => {
                    out.push(next);
                    sq = next;
                }
                Some((c, _)) => {
                    if c != color {
                        out.push(next);
                    }
                    break;
                }
            }
        }
    }
}
