//! Encoding and decoding of grid position specs.
//!
//! A position spec is the compact textual form stored on an item:
//! a single cell label ("A1"), a contiguous same-row or same-column range
//! ("A1-A3"), or a comma-joined list of labels ("A1,B2"). Decoding is
//! deliberately lenient — a malformed spec degrades to an opaque label
//! that occupies no cells rather than failing hard.

use crate::cell_ref::{format_cell_label, in_bounds, parse_cell_label};
use crate::types::GridCoord;

/// Decode a position spec into an ordered list of unique cell labels.
///
/// Comma-joined specs decode part by part with duplicates dropped
/// (first occurrence wins). A range whose endpoints share a row or column
/// expands to every intervening label inclusive, regardless of endpoint
/// order; a diagonal range degrades to just its two endpoints. A range
/// with a malformed endpoint, or a bare label, decodes to itself whole.
pub fn decode_spec(spec: &str) -> Vec<String> {
    let trimmed = spec.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut labels: Vec<String> = Vec::new();
    for part in trimmed.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        for label in decode_part(part) {
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
    }
    labels
}

/// Decode one comma-free part: a bare label or a "start-end" range.
fn decode_part(part: &str) -> Vec<String> {
    let Some((start, end)) = part.split_once('-') else {
        return vec![part.to_string()];
    };

    let (Some(a), Some(b)) = (parse_cell_label(start), parse_cell_label(end)) else {
        // Malformed endpoint: keep the whole part as one opaque label.
        return vec![part.to_string()];
    };

    if a.row == b.row {
        let (lo, hi) = (a.col.min(b.col), a.col.max(b.col));
        (lo..=hi)
            .map(|col| format_cell_label(GridCoord { row: a.row, col }))
            .collect()
    } else if a.col == b.col {
        let (lo, hi) = (a.row.min(b.row), a.row.max(b.row));
        (lo..=hi)
            .map(|row| format_cell_label(GridCoord { row, col: a.col }))
            .collect()
    } else {
        // Diagonal range: only the two endpoints. Kept for compatibility
        // with stored position strings.
        vec![start.trim().to_string(), end.trim().to_string()]
    }
}

/// Encode a list of cell labels into the compact spec form.
///
/// Labels are sorted by (row, col); a single contiguous run along one row
/// or one column is emitted as "first-last", anything else as the
/// comma-joined sorted list.
pub fn encode_spec(labels: &[String]) -> String {
    if labels.is_empty() {
        return String::new();
    }
    if let [only] = labels {
        return only.clone();
    }

    let mut sorted: Vec<&String> = labels.iter().collect();
    sorted.sort_by_key(|label| sort_key(label.as_str()));

    let coords: Option<Vec<GridCoord>> = sorted
        .iter()
        .map(|label| parse_cell_label(label.as_str()))
        .collect();

    if let Some(coords) = coords {
        if is_contiguous_run(&coords) {
            if let (Some(first), Some(last)) = (sorted.first(), sorted.last()) {
                return format!("{first}-{last}");
            }
        }
    }

    sorted
        .iter()
        .map(|label| label.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Sort key for labels: (row, col) for parseable labels, with anything
/// unparseable ordered after them.
fn sort_key(label: &str) -> (u32, u32, String) {
    match parse_cell_label(label) {
        Some(coord) => (coord.row, coord.col, String::new()),
        None => (u32::MAX, u32::MAX, label.to_string()),
    }
}

/// Whether sorted coordinates form one gapless run along a single row or
/// a single column.
fn is_contiguous_run(coords: &[GridCoord]) -> bool {
    let (Some(first), Some(last)) = (coords.first(), coords.last()) else {
        return false;
    };

    if first.row == last.row {
        coords
            .windows(2)
            .all(|w| matches!(w, [a, b] if b.row == a.row && b.col == a.col + 1))
    } else if first.col == last.col {
        coords
            .windows(2)
            .all(|w| matches!(w, [a, b] if b.col == a.col && b.row == a.row + 1))
    } else {
        false
    }
}

/// Decode a spec into in-bounds coordinates, silently dropping labels
/// that are malformed or fall outside the grid. This is the path used to
/// populate the grid view.
pub fn decode_cells(spec: &str) -> Vec<GridCoord> {
    decode_spec(spec)
        .iter()
        .filter_map(|label| parse_cell_label(label))
        .filter(|coord| in_bounds(*coord))
        .collect()
}

/// Whether two position specs claim any cell label in common.
pub fn specs_conflict(a: &str, b: &str) -> bool {
    let labels_a = decode_spec(a);
    let labels_b = decode_spec(b);
    labels_a.iter().any(|label| labels_b.contains(label))
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

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_decode_row_range() {
        assert_eq!(decode_spec("A1-A3"), labels(&["A1", "A2", "A3"]));
    }

    #[test]
    fn test_decode_column_range() {
        assert_eq!(decode_spec("A2-C2"), labels(&["A2", "B2", "C2"]));
    }

    #[test]
    fn test_decode_reversed_range_normalizes() {
        assert_eq!(decode_spec("A3-A1"), labels(&["A1", "A2", "A3"]));
    }

    #[test]
    fn test_decode_diagonal_degrades_to_endpoints() {
        assert_eq!(decode_spec("A1-B2"), labels(&["A1", "B2"]));
    }

    #[test]
    fn test_decode_comma_list() {
        assert_eq!(decode_spec("A1,B2,E8"), labels(&["A1", "B2", "E8"]));
    }

    #[test]
    fn test_decode_opaque_fallback() {
        assert_eq!(decode_spec("garage shelf"), labels(&["garage shelf"]));
        assert_eq!(decode_spec("A1-xx"), labels(&["A1-xx"]));
    }

    #[test]
    fn test_encode_contiguous_run() {
        assert_eq!(encode_spec(&labels(&["A1", "A2", "A3"])), "A1-A3");
        assert_eq!(encode_spec(&labels(&["A2", "B2", "C2"])), "A2-C2");
    }

    #[test]
    fn test_encode_non_contiguous() {
        assert_eq!(encode_spec(&labels(&["A1", "B2"])), "A1,B2");
        assert_eq!(encode_spec(&labels(&["A1", "A3"])), "A1,A3");
    }

    #[test]
    fn test_conflict() {
        assert!(specs_conflict("A1-A3", "A2"));
        assert!(!specs_conflict("A1-A3", "B1"));
    }

    #[test]
    fn test_decode_cells_drops_out_of_bounds() {
        // A9 parses but lies beyond the 8-column grid.
        assert_eq!(
            decode_cells("A8,A9"),
            vec![GridCoord { row: 0, col: 7 }]
        );
        assert!(decode_cells("not a label").is_empty());
    }
}
