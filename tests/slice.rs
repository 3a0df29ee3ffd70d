// tests/slice.rs

mod common;

use censo_nir::engine::slice::{is_blank_row, slice_rows};
use censo_nir::row;

use common::grid;

#[test]
fn empty_range_is_empty() {
    let g = grid(&[&["a"], &["b"], &["c"]]);
    assert!(slice_rows(&g, 2, 2).is_empty());
    assert!(slice_rows(&g, 3, 1).is_empty());
}

#[test]
fn blank_rows_dropped_partial_rows_kept() {
    let g = grid(&[&["h"], &["", "  ", ""], &["", "A", ""], &[]]);
    let rows = slice_rows(&g, 0, 4);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], row!["", "A", ""].as_slice());
}

#[test]
fn bounds_are_clamped() {
    let g = grid(&[&["a"], &["b"]]);
    assert_eq!(slice_rows(&g, 1, 99).len(), 1);
    assert!(slice_rows(&g, 5, 9).is_empty());
}

#[test]
fn blank_row_detection() {
    assert!(is_blank_row(&[]));
    assert!(is_blank_row(&row!["", " \t"]));
    assert!(!is_blank_row(&row!["", "0"]));
}
