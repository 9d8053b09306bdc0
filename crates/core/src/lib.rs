//! Chessboard Core Library
//!
//! Layout facts for rendering a chessboard from a `shakmaty` game: where each
//! square sits, which squares the last move touched and which king, if any,
//! is in check.

pub mod coordinates;
pub mod error;
pub mod game;
pub mod indicators;
pub mod view;

pub use coordinates::{
    axis_positions, board_positions, file_label, rank_label, square_color,
    square_label_margins, square_label_to_position, square_position_margins, AxisIndex,
    Margins, SquareColor, SquarePosition, AXIS_SIZE, SQUARE_PERCENT,
};
pub use error::{Error, Result};
pub use game::{
    Action, DecisiveReason, DrawClaim, DrawReason, GameRecord, MoveRecord, Outcome, Pgn,
    PiecePlacement, RulesEngine,
};
pub use indicators::{
    check_indicator, check_indicator_of, last_move_of, last_move_squares, CheckIndicator,
    LastMove,
};
pub use view::{BoardView, OutcomeView};
