//! Render-ready snapshot of a board
//!
//! Everything a render pass needs, positioned on the same margin grid:
//! squares, piece sprites, last-move highlights and the check marker.

use serde::Serialize;
use shakmaty::{Color, Role};

use crate::coordinates::{
    axis_positions, board_positions, file_label, rank_label, square_color,
    square_label_to_position, square_position_margins, SquareColor,
};
use crate::error::Result;
use crate::game::RulesEngine;
use crate::indicators::{check_indicator, last_move_squares};

#[derive(Debug, Clone, Serialize)]
pub struct SquareView {
    pub label: String,
    pub color: SquareColor,
    pub style: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PieceView {
    pub label: String,
    /// Sprite code such as "wK" or "bP"
    pub code: String,
    pub style: String,
}

/// A last-move square, shaded after the square underneath
#[derive(Debug, Clone, Serialize)]
pub struct HighlightView {
    pub label: String,
    pub color: SquareColor,
    pub style: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckView {
    pub label: String,
    pub is_mate: bool,
    pub style: String,
}

/// Game result as shown next to the board
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeView {
    /// "1-0", "0-1" or "1/2-1/2"
    pub result: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub flipped: bool,
    /// Rank labels from the top row down
    pub rank_labels: Vec<char>,
    /// File labels from left to right
    pub file_labels: Vec<char>,
    pub squares: Vec<SquareView>,
    pub pieces: Vec<PieceView>,
    /// Origin then destination, empty before the first move
    pub last_move: Vec<HighlightView>,
    pub check: Option<CheckView>,
    pub outcome: Option<OutcomeView>,
}

impl BoardView {
    pub fn build<E: RulesEngine + ?Sized>(engine: &E, flipped: bool) -> Result<Self> {
        // Margins mirror ranks only, so files always read a to h.
        let rank_labels = axis_positions(!flipped)
            .into_iter()
            .map(rank_label)
            .collect::<Result<Vec<_>>>()?;
        let file_labels = axis_positions(false)
            .into_iter()
            .map(file_label)
            .collect::<Result<Vec<_>>>()?;

        let squares = board_positions()
            .into_iter()
            .map(|pos| SquareView {
                label: pos.label(),
                color: square_color(pos),
                style: square_position_margins(pos, flipped).style(),
            })
            .collect();

        let placements = engine.pieces();

        let pieces = placements
            .iter()
            .map(|placement| -> Result<PieceView> {
                Ok(PieceView {
                    label: placement.square.clone(),
                    code: piece_code(placement.color, placement.role),
                    style: label_style(&placement.square, flipped)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let last_move = match last_move_squares(&engine.history()) {
            Some(last) => last
                .squares()
                .into_iter()
                .map(|label| -> Result<HighlightView> {
                    let pos = square_label_to_position(label)?;
                    Ok(HighlightView {
                        label: label.to_string(),
                        color: square_color(pos),
                        style: square_position_margins(pos, flipped).style(),
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        let check = match check_indicator(
            engine.is_check(),
            engine.is_checkmate(),
            engine.turn(),
            &placements,
        ) {
            Some(indicator) => Some(CheckView {
                style: label_style(&indicator.square, flipped)?,
                label: indicator.square,
                is_mate: indicator.is_mate,
            }),
            None => None,
        };

        let outcome = engine.outcome().map(|outcome| OutcomeView {
            result: outcome.result_tag().to_string(),
            description: outcome.to_string(),
        });

        Ok(Self {
            flipped,
            rank_labels,
            file_labels,
            squares,
            pieces,
            last_move,
            check,
            outcome,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn label_style(label: &str, flipped: bool) -> Result<String> {
    let pos = square_label_to_position(label)?;
    Ok(square_position_margins(pos, flipped).style())
}

/// Side letter followed by the upper-case piece letter
pub fn piece_code(color: Color, role: Role) -> String {
    let side = match color {
        Color::White => 'w',
        Color::Black => 'b',
    };
    let piece = match role {
        Role::Pawn => 'P',
        Role::Knight => 'N',
        Role::Bishop => 'B',
        Role::Rook => 'R',
        Role::Queen => 'Q',
        Role::King => 'K',
    };
    format!("{}{}", side, piece)
}
