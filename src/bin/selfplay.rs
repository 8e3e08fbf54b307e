use std::env;

use chessbot::board::{Board, GameState, GameStatus, Piece};
use chessbot::search::{choose_bot_move, BotConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u32 = args.get(1).and_then(|v| v.parse().ok()).unwrap_or(2);
    let max_plies: usize = args.get(2).and_then(|v| v.parse().ok()).unwrap_or(80);

    let config = BotConfig {
        search_depth: depth,
    };
    let mut board = Board::new();
    let mut state = GameState::new();

    println!("selfplay at depth {depth}, up to {max_plies} plies");

    for ply in 0..max_plies {
        let color = state.side_to_move();
        let status = state.status(&board, color);
        if matches!(status, GameStatus::Checkmate | GameStatus::Stalemate) {
            break;
        }

        let Some(mv) = choose_bot_move(&board, &state, color, &config) else {
            break;
        };
        let label = board.algebraic_notation(mv.from, mv.to);
        state.apply_move(&mut board, mv.from, mv.to);
        if let Some(sq) = board.promotion_square() {
            board.promote(sq, Piece::Queen);
        }

        if ply % 2 == 0 {
            print!("{}. {label}", ply / 2 + 1);
        } else {
            println!(" {label}");
        }
    }
    println!();

    let to_move = state.side_to_move();
    println!("{board}");
    println!(
        "after {} plies: {} ({} to move)",
        state.history_len(),
        state.status(&board, to_move),
        to_move
    );
}
