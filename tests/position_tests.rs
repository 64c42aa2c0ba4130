//! Position codec tests: label parsing, spec decode/encode round-trips,
//! and conflict detection.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use test_case::test_case;

use gridkeep::cell_ref::{format_cell_label, parse_cell_label, GRID_COLS, GRID_ROWS};
use gridkeep::position::{decode_cells, decode_spec, encode_spec, specs_conflict};
use gridkeep::GridCoord;

fn labels(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| (*s).to_string()).collect()
}

// ================================================================
// Label <-> coordinate bijectivity
// ================================================================

#[test]
fn test_label_bijective_over_full_grid() {
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            let coord = GridCoord { row, col };
            let label = format_cell_label(coord);
            assert_eq!(parse_cell_label(&label), Some(coord), "label {label}");
        }
    }
}

#[test_case("A1", 0, 0)]
#[test_case("B5", 1, 4)]
#[test_case("E8", 4, 7)]
fn test_parse_label(label: &str, row: u32, col: u32) {
    assert_eq!(parse_cell_label(label), Some(GridCoord { row, col }));
}

#[test_case(""; "empty")]
#[test_case("8A"; "digits first")]
#[test_case("F1"; "row letter beyond grid")]
#[test_case("A 1"; "interior whitespace")]
#[test_case("A1,B2"; "spec not label")]
#[test_case("A0"; "column zero")]
fn test_parse_label_rejects(label: &str) {
    assert_eq!(parse_cell_label(label), None);
}

// ================================================================
// Spec decoding
// ================================================================

#[test]
fn test_decode_single_label() {
    assert_eq!(decode_spec("A1"), labels(&["A1"]));
}

#[test]
fn test_decode_row_range() {
    assert_eq!(decode_spec("A1-A3"), labels(&["A1", "A2", "A3"]));
}

#[test]
fn test_decode_column_range() {
    assert_eq!(decode_spec("B3-E3"), labels(&["B3", "C3", "D3", "E3"]));
}

#[test]
fn test_decode_range_direction_independent() {
    assert_eq!(decode_spec("A3-A1"), decode_spec("A1-A3"));
}

#[test]
fn test_decode_diagonal_degrades_to_endpoints() {
    // Documented compatibility quirk: a diagonal range keeps only its
    // two endpoints.
    assert_eq!(decode_spec("A1-B2"), labels(&["A1", "B2"]));
}

#[test]
fn test_decode_comma_list() {
    assert_eq!(decode_spec("A1,B2"), labels(&["A1", "B2"]));
    assert_eq!(decode_spec("A1, B2, A1"), labels(&["A1", "B2"]));
}

#[test]
fn test_decode_comma_list_of_ranges() {
    assert_eq!(decode_spec("A1-A2,C4"), labels(&["A1", "A2", "C4"]));
}

#[test]
fn test_decode_empty() {
    assert!(decode_spec("").is_empty());
    assert!(decode_spec("   ").is_empty());
}

#[test]
fn test_decode_malformed_is_opaque_not_an_error() {
    assert_eq!(decode_spec("top shelf"), labels(&["top shelf"]));
    assert_eq!(decode_spec("A1-shelf"), labels(&["A1-shelf"]));
}

// ================================================================
// Spec encoding
// ================================================================

#[test_case(&["A1"], "A1"; "single label")]
#[test_case(&["A1", "A2", "A3"], "A1-A3"; "row run")]
#[test_case(&["A2", "B2", "C2"], "A2-C2"; "column run")]
#[test_case(&["A1", "B2"], "A1,B2"; "diagonal pair")]
#[test_case(&["A1", "A3"], "A1,A3"; "gap in row")]
#[test_case(&[], ""; "empty set")]
fn test_encode(input: &[&str], expected: &str) {
    assert_eq!(encode_spec(&labels(input)), expected);
}

#[test]
fn test_encode_sorts_before_joining() {
    assert_eq!(encode_spec(&labels(&["A3", "A1", "A2"])), "A1-A3");
    assert_eq!(encode_spec(&labels(&["B2", "A1"])), "A1,B2");
}

#[test]
fn test_roundtrip_contiguous_runs() {
    for spec in ["A1-A8", "A1-E1", "C2-C6", "B4"] {
        let decoded = decode_spec(spec);
        assert_eq!(encode_spec(&decoded), spec, "spec {spec}");
        assert_eq!(decode_spec(&encode_spec(&decoded)), decoded);
    }
}

// ================================================================
// Grid population path
// ================================================================

#[test]
fn test_decode_cells_in_bounds() {
    assert_eq!(
        decode_cells("A1-A3"),
        vec![
            GridCoord { row: 0, col: 0 },
            GridCoord { row: 0, col: 1 },
            GridCoord { row: 0, col: 2 },
        ]
    );
}

#[test]
fn test_decode_cells_drops_out_of_bounds_silently() {
    // A12 matches the label shape but lies beyond the 8-column grid.
    assert_eq!(decode_cells("A8,A12"), vec![GridCoord { row: 0, col: 7 }]);
    assert!(decode_cells("somewhere in the attic").is_empty());
}

#[test]
fn test_column_zero_is_opaque_and_occupies_nothing() {
    // "A0" has no coordinate and must not alias onto A1's.
    assert_eq!(decode_spec("A0"), labels(&["A0"]));
    assert!(decode_cells("A0").is_empty());
    assert!(!specs_conflict("A0", "A1"));
    assert!(specs_conflict("A0", "A0"));
}

// ================================================================
// Conflict detection
// ================================================================

#[test_case("A1-A3", "A2", true; "range contains cell")]
#[test_case("A1-A3", "B1", false; "adjacent row")]
#[test_case("A1,B2", "B2-B4", true; "list overlaps range")]
#[test_case("A1", "A1", true; "identical")]
#[test_case("", "A1", false; "empty never conflicts")]
fn test_conflict(a: &str, b: &str, expected: bool) {
    assert_eq!(specs_conflict(a, b), expected);
    assert_eq!(specs_conflict(b, a), expected);
}
