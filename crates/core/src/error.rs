//! Error types for chessboard-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid axis index {0}, expected 0..=7")]
    InvalidIndex(i8),

    #[error("Invalid square label: {0:?}")]
    InvalidLabel(String),

    #[error("Invalid start position: {0}")]
    Fen(String),

    #[error("Illegal move: {0}")]
    IllegalMove(String),

    #[error("Action not valid in the current game state: {0}")]
    InvalidAction(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
