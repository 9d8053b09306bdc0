//! Coordinate value types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shakmaty::{File, Rank, Square};

use crate::error::{Error, Result};

/// Number of files and of ranks on the board
pub const AXIS_SIZE: i8 = 8;

/// Side length of one square, in percent of the board
pub const SQUARE_PERCENT: f32 = 100.0 / AXIS_SIZE as f32;

/// Zero-based file (a..h) or rank (1..8) index
pub type AxisIndex = i8;

pub(crate) fn check_index(index: AxisIndex) -> Result<AxisIndex> {
    if (0..AXIS_SIZE).contains(&index) {
        Ok(index)
    } else {
        Err(Error::InvalidIndex(index))
    }
}

/// One of the 64 board cells, always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SquarePosition {
    file: AxisIndex,
    rank: AxisIndex,
}

impl SquarePosition {
    pub fn new(file: AxisIndex, rank: AxisIndex) -> Result<Self> {
        Ok(Self {
            file: check_index(file)?,
            rank: check_index(rank)?,
        })
    }

    /// Debug-asserts that both indices are in range.
    pub(crate) const fn from_indices_unchecked(file: AxisIndex, rank: AxisIndex) -> Self {
        debug_assert!(file >= 0 && file < AXIS_SIZE);
        debug_assert!(rank >= 0 && rank < AXIS_SIZE);
        Self { file, rank }
    }

    pub fn file(self) -> AxisIndex {
        self.file
    }

    pub fn rank(self) -> AxisIndex {
        self.rank
    }

    /// Two-character label such as "c4"
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SquarePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file as u8) as char;
        let rank = (b'1' + self.rank as u8) as char;
        write!(f, "{}{}", file, rank)
    }
}

impl FromStr for SquarePosition {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self> {
        super::square_label_to_position(label)
    }
}

impl From<Square> for SquarePosition {
    fn from(square: Square) -> Self {
        Self::from_indices_unchecked(square.file() as AxisIndex, square.rank() as AxisIndex)
    }
}

impl From<SquarePosition> for Square {
    fn from(pos: SquarePosition) -> Self {
        Square::from_coords(File::new(pos.file as u32), Rank::new(pos.rank as u32))
    }
}

/// Colour of a board square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SquareColor {
    Light,
    Dark,
}

impl SquareColor {
    pub fn is_light(self) -> bool {
        self == SquareColor::Light
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SquareColor::Light => "light",
            SquareColor::Dark => "dark",
        }
    }
}

/// Offset of a square from the top-left corner of the board, in percent.
///
/// Displays as the inline style `top: {top}%; left: {left}%`, which every
/// overlay (pieces, highlights, check marker) is positioned with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margins {
    pub top: f32,
    pub left: f32,
}

impl Margins {
    pub fn style(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Margins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "top: {}%; left: {}%", self.top, self.left)
    }
}
