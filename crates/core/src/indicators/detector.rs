//! Indicator queries over a game snapshot
//!
//! Nothing here is cached: each call reads the snapshot it is given, so
//! results must be recomputed after every move.

use shakmaty::{Color, Role};
use tracing::warn;

use super::types::{CheckIndicator, LastMove};
use crate::game::{MoveRecord, PiecePlacement, RulesEngine};

/// Origin and destination of the last move, `None` before the first move.
pub fn last_move_squares(history: &[MoveRecord]) -> Option<LastMove> {
    history.last().map(|last| LastMove {
        from: last.from.clone(),
        to: last.to.clone(),
    })
}

/// Marks the king of `side_to_move` when it is in check or mated.
///
/// The side in check is always the side to move. A snapshot without that
/// king yields `None` and a warning.
pub fn check_indicator(
    is_check: bool,
    is_checkmate: bool,
    side_to_move: Color,
    pieces: &[PiecePlacement],
) -> Option<CheckIndicator> {
    if !is_check && !is_checkmate {
        return None;
    }

    let king = pieces
        .iter()
        .find(|p| p.role == Role::King && p.color == side_to_move);

    match king {
        Some(king) => Some(CheckIndicator {
            square: king.square.clone(),
            is_mate: is_checkmate,
        }),
        None => {
            warn!(
                side = ?side_to_move,
                is_checkmate,
                "side to move is in check but has no king on the board"
            );
            None
        }
    }
}

pub fn last_move_of<E: RulesEngine + ?Sized>(engine: &E) -> Option<LastMove> {
    last_move_squares(&engine.history())
}

pub fn check_indicator_of<E: RulesEngine + ?Sized>(engine: &E) -> Option<CheckIndicator> {
    check_indicator(
        engine.is_check(),
        engine.is_checkmate(),
        engine.turn(),
        &engine.pieces(),
    )
}
