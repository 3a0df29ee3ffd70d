// src/engine/slice.rs
use crate::core::{Grid, text::is_blank};

/// Rows `[start, end)` with fully blank rows dropped. Bounds are clamped; an empty
/// result is a valid "no data" outcome.
pub fn slice_rows(grid: &Grid, start: usize, end: usize) -> Vec<&[String]> {
    let end = end.min(grid.len());
    if start >= end {
        return Vec::new();
    }
    grid.rows()[start..end]
        .iter()
        .filter(|r| !is_blank_row(r))
        .map(|r| r.as_slice())
        .collect()
}

pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|c| is_blank(c))
}
