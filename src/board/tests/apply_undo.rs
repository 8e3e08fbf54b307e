//! Executor and undo round-trip tests.

use rand::prelude::*;

use super::util::{board, sq, EMPTY_ROW};
use crate::board::{Board, Color, GameState, Piece};

#[test]
fn test_apply_undo_restores_exactly() {
    let mut board = Board::new();
    let mut state = GameState::new();
    let before_board = board.clone();
    let before_snapshot = state.capture_state();

    assert!(state.apply_move(&mut board, sq("g1"), sq("f3")));
    assert_ne!(board, before_board);

    state.undo_move(&mut board);
    assert_eq!(board, before_board);
    assert_eq!(state.capture_state(), before_snapshot);
}

#[test]
fn test_capture_round_trip() {
    let mut board = Board::new();
    let mut state = GameState::new();
    assert!(state.apply_move(&mut board, sq("e2"), sq("e4")));
    assert!(state.apply_move(&mut board, sq("d7"), sq("d5")));

    let before_board = board.clone();
    let before_snapshot = state.capture_state();

    assert!(state.apply_move(&mut board, sq("e4"), sq("d5")));
    assert_eq!(board.piece_at(sq("d5")), Some((Color::White, Piece::Pawn)));

    state.undo_move(&mut board);
    assert_eq!(board, before_board);
    assert_eq!(state.capture_state(), before_snapshot);
}

#[test]
fn test_castle_kingside_relocates_both_pieces() {
    let rows = [
        ["bR", "", "", "", "bK", "", "", "bR"],
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        ["wR", "", "", "", "wK", "", "", "wR"],
    ];
    let mut board = board(rows);
    let mut state = GameState::new();
    let before_board = board.clone();
    let before_snapshot = state.capture_state();

    assert!(state.apply_move(&mut board, sq("e1"), sq("g1")));
    assert_eq!(board.piece_at(sq("g1")), Some((Color::White, Piece::King)));
    assert_eq!(board.piece_at(sq("f1")), Some((Color::White, Piece::Rook)));
    assert!(board.piece_at(sq("e1")).is_none());
    assert!(board.piece_at(sq("h1")).is_none());
    assert!(state.castle_flags().king_has_moved(Color::White));

    state.undo_move(&mut board);
    assert_eq!(board, before_board);
    assert_eq!(state.capture_state(), before_snapshot);
    assert!(!state.castle_flags().king_has_moved(Color::White));
}

#[test]
fn test_castle_queenside_relocates_both_pieces() {
    let rows = [
        ["bR", "", "", "", "bK", "", "", "bR"],
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        ["wR", "", "", "", "wK", "", "", "wR"],
    ];
    let mut board = board(rows);
    let mut state = GameState::new();

    assert!(state.apply_move(&mut board, sq("e1"), sq("c1")));
    assert_eq!(board.piece_at(sq("c1")), Some((Color::White, Piece::King)));
    assert_eq!(board.piece_at(sq("d1")), Some((Color::White, Piece::Rook)));
    assert!(board.piece_at(sq("a1")).is_none());

    state.undo_move(&mut board);
    assert_eq!(board.piece_at(sq("e1")), Some((Color::White, Piece::King)));
    assert_eq!(board.piece_at(sq("a1")), Some((Color::White, Piece::Rook)));
}

#[test]
fn test_en_passant_round_trip() {
    let mut board = Board::new();
    let mut state = GameState::new();
    assert!(state.apply_move(&mut board, sq("e2"), sq("e4")));
    assert!(state.apply_move(&mut board, sq("a7"), sq("a6")));
    assert!(state.apply_move(&mut board, sq("e4"), sq("e5")));
    assert!(state.apply_move(&mut board, sq("d7"), sq("d5")));

    let before_board = board.clone();
    let before_snapshot = state.capture_state();

    assert!(state.apply_move(&mut board, sq("e5"), sq("d6")));
    assert!(board.piece_at(sq("d5")).is_none());

    state.undo_move(&mut board);
    assert_eq!(board, before_board);
    assert_eq!(state.capture_state(), before_snapshot);
    assert_eq!(
        board.piece_at(sq("d5")),
        Some((Color::Black, Piece::Pawn)),
        "en-passant victim restored to its own square"
    );
}

#[test]
fn test_promotion_signaled_and_undone() {
    let rows = [
        ["", "", "", "", "", "", "", "bK"],
        ["wP", "", "", "", "", "", "", ""],
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        ["", "", "", "", "", "", "", "wK"],
    ];
    let mut board = board(rows);
    let mut state = GameState::new();
    let before_board = board.clone();
    let before_snapshot = state.capture_state();

    assert!(board.promotion_square().is_none());
    assert!(state.apply_move(&mut board, sq("a7"), sq("a8")));

    // Executor leaves the pawn in place; the caller assigns the piece.
    assert_eq!(board.promotion_square(), Some(sq("a8")));
    board.promote(sq("a8"), Piece::Queen);
    assert_eq!(board.piece_at(sq("a8")), Some((Color::White, Piece::Queen)));
    assert!(board.promotion_square().is_none());

    state.undo_move(&mut board);
    assert_eq!(board, before_board, "undo restores the pawn, not the queen");
    assert_eq!(state.capture_state(), before_snapshot);
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut board = Board::new();
    let mut state = GameState::new();
    let before_board = board.clone();
    let before_snapshot = state.capture_state();

    state.undo_move(&mut board);
    assert_eq!(board, before_board);
    assert_eq!(state.capture_state(), before_snapshot);
}

#[test]
fn test_illegal_apply_leaves_everything_unchanged() {
    let mut board = Board::new();
    let mut state = GameState::new();
    let before_board = board.clone();
    let before_snapshot = state.capture_state();

    assert!(!state.apply_move(&mut board, sq("e2"), sq("e5")));
    assert!(!state.apply_move(&mut board, sq("d1"), sq("d5")));
    assert!(!state.apply_move(&mut board, sq("e4"), sq("e5")));

    assert_eq!(board, before_board);
    assert_eq!(state.capture_state(), before_snapshot);
}

#[test]
fn test_snapshot_restore_truncates_history() {
    let mut board = Board::new();
    let mut state = GameState::new();

    assert!(state.apply_move(&mut board, sq("e2"), sq("e4")));
    let snapshot = state.capture_state();
    let side_then = state.side_to_move();
    let ep_then = state.en_passant_target();

    assert!(state.apply_move(&mut board, sq("e7"), sq("e5")));
    assert!(state.apply_move(&mut board, sq("g1"), sq("f3")));
    assert_eq!(state.history_len(), 3);

    state.restore_state(&snapshot);
    assert_eq!(state.history_len(), 1);
    assert_eq!(state.side_to_move(), side_then);
    assert_eq!(state.en_passant_target(), ep_then);
}

#[test]
fn test_random_playout_round_trip() {
    let mut board = Board::new();
    let mut state = GameState::new();
    let initial_board = board.clone();
    let initial_snapshot = state.capture_state();

    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut applied = 0usize;

    for _ in 0..120 {
        let color = state.side_to_move();
        let moves = state.legal_moves(&board, color);
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        assert!(state.apply_move(&mut board, mv.from, mv.to));
        applied += 1;
    }

    for _ in 0..applied {
        state.undo_move(&mut board);
    }
    assert_eq!(board, initial_board);
    assert_eq!(state.capture_state(), initial_snapshot);
}
