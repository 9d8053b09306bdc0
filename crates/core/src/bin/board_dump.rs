//! Prints the layout facts of a game given as SAN moves

use chessboard_core::{
    check_indicator_of, last_move_of, square_label_margins, BoardView, GameRecord,
};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let flipped = args.iter().any(|a| a == "--flipped");
    let moves = args.iter().filter(|a| *a != "--flipped").map(String::as_str);

    let mut game = GameRecord::new();
    if let Err(e) = game.play_all(moves) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    println!("FEN: {}", game.fen());
    println!();

    match last_move_of(&game) {
        Some(last) => {
            for label in last.squares() {
                match square_label_margins(label, flipped) {
                    Ok(margins) => println!("  last move {}: {}", label, margins),
                    Err(e) => {
                        eprintln!("{}", e);
                        std::process::exit(1);
                    }
                }
            }
        }
        None => println!("  no moves played"),
    }

    match check_indicator_of(&game) {
        Some(check) if check.is_mate => println!("  checkmate on {}", check.square),
        Some(check) => println!("  check on {}", check.square),
        None => {}
    }

    if let Some(outcome) = game.outcome() {
        println!("  {} ({})", outcome, outcome.result_tag());
    }

    println!();
    match BoardView::build(&game, flipped) {
        Ok(view) => {
            for piece in &view.pieces {
                println!("  {} {:<3} {}", piece.code, piece.label, piece.style);
            }
        }
        Err(e) => {
            eprintln!("Failed to build board view: {}", e);
            std::process::exit(1);
        }
    }

    println!();
    println!("{}", game.pgn());
}
