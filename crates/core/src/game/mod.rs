//! Game state read by the indicators: the rules-engine seam and a
//! `shakmaty`-backed game record implementing it

mod outcome;
mod pgn;
mod record;
mod types;

pub use outcome::*;
pub use pgn::Pgn;
pub use record::{Action, GameRecord};
pub use types::*;
