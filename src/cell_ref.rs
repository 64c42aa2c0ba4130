//! Utilities for parsing and formatting grid cell labels.
//!
//! A cell label is a row letter followed by a 1-based column number
//! ("A1" through "E8" on the default 5×8 grid). Labels are bijective with
//! [`GridCoord`] inside grid bounds.

use crate::types::GridCoord;

/// Number of rows in the storage grid (rows "A" through "E").
pub const GRID_ROWS: u32 = 5;
/// Number of columns in the storage grid (columns 1 through 8).
pub const GRID_COLS: u32 = 8;

/// Parse a cell label like "A1" into a 0-indexed coordinate.
///
/// Accepts exactly one row letter within the grid's row range followed by
/// one or more digits; column 0 has no coordinate and fails to parse.
/// The upper column bound is not checked here; bounds are enforced where
/// cells are materialized (see [`crate::position::decode_cells`]).
pub fn parse_cell_label(label: &str) -> Option<GridCoord> {
    let trimmed = label.trim();
    let mut chars = trimmed.chars();

    let letter = chars.next()?;
    if !letter.is_ascii_uppercase() {
        return None;
    }
    let row = letter as u32 - 'A' as u32;
    if row >= GRID_ROWS {
        return None;
    }

    let mut col: u32 = 0;
    let mut saw_digit = false;
    for ch in chars {
        if !ch.is_ascii_digit() {
            return None;
        }
        col = col.saturating_mul(10).saturating_add(ch as u32 - '0' as u32);
        saw_digit = true;
    }
    if !saw_digit {
        return None;
    }

    Some(GridCoord {
        row,
        col: col.checked_sub(1)?,
    })
}

/// Format a 0-indexed coordinate as a cell label ("A1").
pub fn format_cell_label(coord: GridCoord) -> String {
    let offset = u8::try_from(coord.row % 26).unwrap_or(0);
    let letter = char::from(b'A'.saturating_add(offset));
    format!("{}{}", letter, coord.col + 1)
}

/// Whether a coordinate lies inside the grid.
pub fn in_bounds(coord: GridCoord) -> bool {
    coord.row < GRID_ROWS && coord.col < GRID_COLS
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        assert_eq!(parse_cell_label("A1"), Some(GridCoord { row: 0, col: 0 }));
        assert_eq!(parse_cell_label("E8"), Some(GridCoord { row: 4, col: 7 }));
        assert_eq!(parse_cell_label("C12"), Some(GridCoord { row: 2, col: 11 }));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_cell_label(" B3 "), Some(GridCoord { row: 1, col: 2 }));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_cell_label(""), None);
        assert_eq!(parse_cell_label("A"), None);
        assert_eq!(parse_cell_label("1A"), None);
        assert_eq!(parse_cell_label("a1"), None);
        assert_eq!(parse_cell_label("AA1"), None);
        assert_eq!(parse_cell_label("F1"), None); // row beyond the grid
        assert_eq!(parse_cell_label("A1-A3"), None);
    }

    #[test]
    fn test_parse_rejects_column_zero() {
        // "A0" must not alias onto A1's coordinate.
        assert_eq!(parse_cell_label("A0"), None);
        assert_eq!(parse_cell_label("E0"), None);
        assert_eq!(parse_cell_label("A00"), None);
    }

    #[test]
    fn test_roundtrip_in_bounds() {
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let coord = GridCoord { row, col };
                assert_eq!(parse_cell_label(&format_cell_label(coord)), Some(coord));
            }
        }
    }

    #[test]
    fn test_in_bounds() {
        assert!(in_bounds(GridCoord { row: 0, col: 0 }));
        assert!(in_bounds(GridCoord { row: 4, col: 7 }));
        assert!(!in_bounds(GridCoord { row: 5, col: 0 }));
        assert!(!in_bounds(GridCoord { row: 0, col: 8 }));
    }
}
