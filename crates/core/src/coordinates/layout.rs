//! Axis enumeration, square colours, label conversion and display margins

use super::types::{check_index, AxisIndex, Margins, SquareColor, SquarePosition, AXIS_SIZE, SQUARE_PERCENT};
use crate::error::{Error, Result};

const RANK_LABELS: [char; AXIS_SIZE as usize] = ['1', '2', '3', '4', '5', '6', '7', '8'];
const FILE_LABELS: [char; AXIS_SIZE as usize] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Axis indices `0..=7`, or `7..=0` when `reversed`.
///
/// Drives the row and column order of a render pass, e.g. rank 8 first on
/// an unflipped board.
pub fn axis_positions(reversed: bool) -> [AxisIndex; AXIS_SIZE as usize] {
    let mut indexes: [AxisIndex; AXIS_SIZE as usize] = std::array::from_fn(|i| i as AxisIndex);
    if reversed {
        indexes.reverse();
    }
    indexes
}

/// All 64 squares, rank by rank from a1 to h8.
///
/// The order does not depend on orientation; flipping is applied when
/// computing margins.
pub fn board_positions() -> Vec<SquarePosition> {
    (0..AXIS_SIZE)
        .flat_map(|rank| {
            (0..AXIS_SIZE).map(move |file| SquarePosition::from_indices_unchecked(file, rank))
        })
        .collect()
}

/// a1 is dark, colours alternate along both axes
pub fn square_color(pos: SquarePosition) -> SquareColor {
    if (pos.rank() + pos.file()) % 2 == 0 {
        SquareColor::Dark
    } else {
        SquareColor::Light
    }
}

pub fn rank_label(index: AxisIndex) -> Result<char> {
    Ok(RANK_LABELS[check_index(index)? as usize])
}

pub fn file_label(index: AxisIndex) -> Result<char> {
    Ok(FILE_LABELS[check_index(index)? as usize])
}

/// Decodes a label such as "c4".
///
/// Anything other than a file letter a-h followed by a rank digit 1-8 is
/// rejected with [`Error::InvalidLabel`].
pub fn square_label_to_position(label: &str) -> Result<SquarePosition> {
    let invalid = || Error::InvalidLabel(label.to_string());

    let &[file_byte, rank_byte] = label.as_bytes() else {
        return Err(invalid());
    };

    let file = AxisIndex::try_from(i16::from(file_byte) - i16::from(b'a')).map_err(|_| invalid())?;
    let rank = AxisIndex::try_from(i16::from(rank_byte) - i16::from(b'1')).map_err(|_| invalid())?;

    SquarePosition::new(file, rank).map_err(|_| invalid())
}

/// Display offset of a square.
///
/// Rank 0 sits at the bottom of an unflipped board, so the vertical axis is
/// inverted unless `flipped`.
pub fn square_position_margins(pos: SquarePosition, flipped: bool) -> Margins {
    let rank_offset = f32::from(pos.rank()) * SQUARE_PERCENT;

    let top = if flipped {
        rank_offset
    } else {
        100.0 - SQUARE_PERCENT - rank_offset
    };

    Margins {
        top,
        left: f32::from(pos.file()) * SQUARE_PERCENT,
    }
}

pub fn square_label_margins(label: &str, flipped: bool) -> Result<Margins> {
    let pos = square_label_to_position(label)?;
    Ok(square_position_margins(pos, flipped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::Square;

    #[test]
    fn test_axis_positions() {
        assert_eq!(axis_positions(false), [0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(axis_positions(true), [7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_board_positions_order() {
        let positions = board_positions();
        assert_eq!(positions.len(), 64);
        assert_eq!(positions[0].label(), "a1");
        assert_eq!(positions[1].label(), "b1");
        assert_eq!(positions[8].label(), "a2");
        assert_eq!(positions[63].label(), "h8");
    }

    #[test]
    fn test_square_colors_alternate() {
        assert_eq!(square_color(SquarePosition::new(0, 0).unwrap()), SquareColor::Dark);

        for pos in board_positions() {
            if pos.file() < 7 {
                let right = SquarePosition::new(pos.file() + 1, pos.rank()).unwrap();
                assert_ne!(square_color(pos), square_color(right), "{} vs {}", pos, right);
            }
        }
    }

    #[test]
    fn test_square_colors_match_shakmaty() {
        for square in Square::ALL {
            let pos = SquarePosition::from(square);
            assert_eq!(square_color(pos).is_light(), square.is_light(), "{}", square);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(rank_label(0).unwrap(), '1');
        assert_eq!(rank_label(7).unwrap(), '8');
        assert_eq!(file_label(0).unwrap(), 'a');
        assert_eq!(file_label(7).unwrap(), 'h');
    }

    #[test]
    fn test_labels_reject_invalid_index() {
        assert!(matches!(rank_label(8), Err(Error::InvalidIndex(8))));
        assert!(matches!(file_label(-1), Err(Error::InvalidIndex(-1))));
    }

    #[test]
    fn test_label_round_trip() {
        for pos in board_positions() {
            let label = format!(
                "{}{}",
                file_label(pos.file()).unwrap(),
                rank_label(pos.rank()).unwrap()
            );
            assert_eq!(square_label_to_position(&label).unwrap(), pos);
        }
    }

    #[test]
    fn test_label_to_position_rejects_garbage() {
        for label in ["", "a", "a9", "i1", "A1", "a0", "e44", "é4"] {
            assert!(
                matches!(square_label_to_position(label), Err(Error::InvalidLabel(_))),
                "{:?} should be rejected",
                label
            );
        }
    }

    #[test]
    fn test_margins_a1() {
        let a1 = SquarePosition::new(0, 0).unwrap();
        assert_eq!(square_position_margins(a1, false).to_string(), "top: 87.5%; left: 0%");
        assert_eq!(square_position_margins(a1, true).to_string(), "top: 0%; left: 0%");
    }

    #[test]
    fn test_label_margins() {
        let c4 = square_label_margins("c4", false).unwrap();
        assert_eq!(c4, Margins { top: 37.5, left: 25.0 });
        assert_eq!(c4.to_string(), "top: 37.5%; left: 25%");

        let h8 = square_label_margins("h8", false).unwrap();
        assert_eq!(h8.to_string(), "top: 0%; left: 87.5%");
    }

    #[test]
    fn test_flipped_keeps_files() {
        let flipped = square_label_margins("h8", true).unwrap();
        assert_eq!(flipped, Margins { top: 87.5, left: 87.5 });
    }
}
