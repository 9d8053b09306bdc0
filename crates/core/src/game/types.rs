//! Rules-engine facing types

use serde::{Deserialize, Serialize};
use shakmaty::{Color, Role};

use super::outcome::Outcome;

/// One played move, as listed in the game history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Origin square label; the king's square for castling
    pub from: String,
    /// Destination square label; the king's target for castling
    pub to: String,
    /// The move in SAN, with a check or mate suffix
    pub san: String,
}

/// A piece standing on a square of the current position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiecePlacement {
    pub square: String,
    pub role: Role,
    pub color: Color,
}

/// Read-only view of the rules engine the indicators depend on.
///
/// Every method reflects the current position only; callers query again
/// after each move instead of holding on to results.
pub trait RulesEngine {
    /// Moves in play order
    fn history(&self) -> Vec<MoveRecord>;

    fn is_check(&self) -> bool;

    fn is_checkmate(&self) -> bool;

    /// Side to move
    fn turn(&self) -> Color;

    /// How the game ended, `None` while it is still going
    fn outcome(&self) -> Option<Outcome>;

    /// Every occupied square of the board
    fn pieces(&self) -> Vec<PiecePlacement>;
}
