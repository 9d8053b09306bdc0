//! How a game ended

use std::fmt;

use shakmaty::Color;

/// Grounds on which a draw may be claimed by the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawClaim {
    /// The current position, or one reachable with a single move, has
    /// occurred at least three times. Positions may repeat in any order.
    Repetition { count: usize, claimed_by: Color },
    /// At least 100 plies without a capture or pawn move.
    FiftyMoveRule { halfmoves: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecisiveReason {
    Checkmate,
    Resigned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    /// The side to move has no legal move and is not in check.
    Stalemate,
    InsufficientMaterial,
    MutualAgreement,
    Claimed(DrawClaim),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Decisive { winner: Color, reason: DecisiveReason },
    Draw { reason: DrawReason },
}

impl Outcome {
    /// PGN result token
    pub fn result_tag(&self) -> &'static str {
        match self {
            Outcome::Decisive { winner: Color::White, .. } => "1-0",
            Outcome::Decisive { winner: Color::Black, .. } => "0-1",
            Outcome::Draw { .. } => "1/2-1/2",
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::Decisive { winner, .. } => Some(*winner),
            Outcome::Draw { .. } => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Decisive { winner, reason } => {
                let side = if *winner == Color::White { "White" } else { "Black" };
                match reason {
                    DecisiveReason::Checkmate => write!(f, "{} wins by checkmate", side),
                    DecisiveReason::Resigned => write!(f, "{} wins by resignation", side),
                }
            }
            Outcome::Draw { reason } => match reason {
                DrawReason::Stalemate => write!(f, "Draw by stalemate"),
                DrawReason::InsufficientMaterial => write!(f, "Draw by insufficient material"),
                DrawReason::MutualAgreement => write!(f, "Draw by agreement"),
                DrawReason::Claimed(DrawClaim::Repetition { count, .. }) => {
                    write!(f, "Draw by repetition ({} times)", count)
                }
                DrawReason::Claimed(DrawClaim::FiftyMoveRule { .. }) => {
                    write!(f, "Draw by the fifty-move rule")
                }
            },
        }
    }
}
