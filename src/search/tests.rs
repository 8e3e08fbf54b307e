//! Search, evaluation, and move-ordering tests.

use crate::board::{Board, Color, GameState, Move, Square};

use super::minimax::{minimax, simulate, INFINITY, MATE_SCORE};
use super::{
    choose_bot_move, choose_random_move, choose_random_plus_move, evaluate, order_moves,
    BotConfig, SearchStats,
};

fn board(rows: [[&str; 8]; 8]) -> Board {
    Board::from_rows(&rows).expect("valid test position")
}

fn sq(notation: &str) -> Square {
    notation.parse().expect("valid square")
}

const EMPTY_ROW: [&str; 8] = ["", "", "", "", "", "", "", ""];

/// White knight on c3 can take the black queen on d5; no other capture
/// exists anywhere on the board.
fn queen_capture_rows() -> [[&'static str; 8]; 8] {
    [
        ["", "", "", "", "bK", "", "", ""],
        EMPTY_ROW,
        EMPTY_ROW,
        ["", "", "", "bQ", "", "", "", ""],
        EMPTY_ROW,
        ["", "", "wN", "", "", "", "", ""],
        EMPTY_ROW,
        ["", "", "", "", "wK", "", "", ""],
    ]
}

/// White rook on e1 mates on e8 against the pawn-boxed king.
fn mate_in_one_rows() -> [[&'static str; 8]; 8] {
    [
        ["", "", "", "", "", "", "bK", ""],
        ["", "", "", "", "", "bP", "bP", "bP"],
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        ["", "", "", "", "wR", "", "wK", ""],
    ]
}

#[test]
fn test_initial_evaluation_matches_table_quirk() {
    // Everything cancels between the colors except the king table, which
    // is deliberately read unmirrored: +50 for White on the start position.
    let board = Board::new();
    assert_eq!(evaluate(&board, Color::White), 50);
    assert_eq!(evaluate(&board, Color::Black), -50);
}

#[test]
fn test_evaluation_is_antisymmetric() {
    let mut board = Board::new();
    let mut state = GameState::new();
    for (from, to) in [("e2", "e4"), ("d7", "d5"), ("e4", "d5")] {
        assert!(state.apply_move(&mut board, sq(from), sq(to)));
    }
    assert_eq!(
        evaluate(&board, Color::White),
        -evaluate(&board, Color::Black)
    );
    assert!(
        evaluate(&board, Color::White) > 0,
        "White is a pawn up and should be better"
    );
}

#[test]
fn test_ordering_puts_queen_capture_first() {
    let board = board(queen_capture_rows());
    let state = GameState::new();
    let moves = state.legal_moves(&board, Color::White);
    let ordered = order_moves(&board, moves);
    assert_eq!(ordered[0], Move::new(sq("c3"), sq("d5")));
}

#[test]
fn test_ordering_is_a_permutation() {
    let board = Board::new();
    let state = GameState::new();
    let moves = state.legal_moves(&board, Color::White);
    let mut before: Vec<String> = moves.iter().map(Move::to_string).collect();
    let mut after: Vec<String> = order_moves(&board, moves)
        .iter()
        .map(Move::to_string)
        .collect();
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn test_depth_one_bot_takes_the_queen() {
    let board = board(queen_capture_rows());
    let state = GameState::new();
    let config = BotConfig { search_depth: 1 };
    let best = choose_bot_move(&board, &state, Color::White, &config);
    assert_eq!(best, Some(Move::new(sq("c3"), sq("d5"))));
}

#[test]
fn test_bot_finds_mate_in_one() {
    let board = board(mate_in_one_rows());
    let state = GameState::new();
    for depth in [1, 2] {
        let config = BotConfig { search_depth: depth };
        let best = choose_bot_move(&board, &state, Color::White, &config);
        assert_eq!(
            best,
            Some(Move::new(sq("e1"), sq("e8"))),
            "depth {depth} must find the back-rank mate"
        );
    }
}

#[test]
fn test_bot_returns_none_without_legal_moves() {
    // The mated side has nothing to play.
    let rows = [
        ["", "", "", "", "wR", "", "bK", ""],
        ["", "", "", "", "", "bP", "bP", "bP"],
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        ["", "", "", "", "", "", "wK", ""],
    ];
    let board = board(rows);
    let state = GameState::new();
    let config = BotConfig::default();
    assert_eq!(choose_bot_move(&board, &state, Color::Black, &config), None);
    assert_eq!(choose_random_move(&board, &state, Color::Black), None);
    assert_eq!(choose_random_plus_move(&board, &state, Color::Black), None);
}

#[test]
fn test_minimax_scores_immediate_mate_against_minimizer() {
    let board = board(mate_in_one_rows());
    let state = GameState::new();
    let mut stats = SearchStats::default();

    let (child_board, child_state) =
        simulate(&board, &state, Move::new(sq("e1"), sq("e8")));
    let value = minimax(
        &child_board,
        &child_state,
        2,
        -INFINITY,
        INFINITY,
        false,
        Color::White,
        &mut stats,
    );
    assert_eq!(value, MATE_SCORE);
    assert_eq!(stats.nodes, 1, "terminal node must not expand children");
}

#[test]
fn test_minimax_scores_stalemate_as_zero() {
    let rows = [
        ["bK", "", "", "", "", "", "", ""],
        ["", "", "wQ", "", "", "", "", ""],
        ["", "wK", "", "", "", "", "", ""],
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
    ];
    let board = board(rows);
    let mut state = GameState::new();
    // Black to move in the scratch state the search would hold.
    state.side_to_move = Color::Black;
    let mut stats = SearchStats::default();
    let value = minimax(
        &board,
        &state,
        3,
        -INFINITY,
        INFINITY,
        false,
        Color::White,
        &mut stats,
    );
    assert_eq!(value, 0);
}

#[test]
fn test_search_counts_visited_nodes() {
    let board = Board::new();
    let state = GameState::new();
    let mut stats = SearchStats::default();
    let value = minimax(
        &board,
        &state,
        2,
        -INFINITY,
        INFINITY,
        true,
        Color::White,
        &mut stats,
    );
    assert!(stats.nodes > 20, "a depth-2 tree visits many nodes");
    assert!(value.abs() < MATE_SCORE);
}

#[test]
fn test_simulate_auto_queens() {
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
    let board = board(rows);
    let state = GameState::new();
    let (child_board, child_state) =
        simulate(&board, &state, Move::new(sq("a7"), sq("a8")));
    assert_eq!(
        child_board.piece_at(sq("a8")),
        Some((Color::White, crate::board::Piece::Queen))
    );
    assert_eq!(child_state.side_to_move(), Color::Black);
    // The caller's board and state are untouched.
    assert_eq!(
        board.piece_at(sq("a7")),
        Some((Color::White, crate::board::Piece::Pawn))
    );
    assert_eq!(state.side_to_move(), Color::White);
}

#[test]
fn test_random_bots_return_legal_moves() {
    let board = Board::new();
    let state = GameState::new();
    for _ in 0..20 {
        let mv = choose_random_move(&board, &state, Color::White).expect("moves exist");
        assert!(state.is_legal_move(&board, mv.from, mv.to));
        let mv = choose_random_plus_move(&board, &state, Color::White).expect("moves exist");
        assert!(state.is_legal_move(&board, mv.from, mv.to));
    }
}

#[test]
fn test_random_plus_prefers_the_only_capture() {
    let board = board(queen_capture_rows());
    let state = GameState::new();
    for _ in 0..10 {
        assert_eq!(
            choose_random_plus_move(&board, &state, Color::White),
            Some(Move::new(sq("c3"), sq("d5")))
        );
    }
}

#[test]
fn test_default_config_depth() {
    assert_eq!(BotConfig::default().search_depth, 3);
}
