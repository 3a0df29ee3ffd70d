// src/specs/shaping.rs
//! Turn a section's sliced rows into a rectangular table with named columns.
//!
//! Three strategies, chosen per section in config:
//! - `HeaderFirst`: first row is the header (cut to the schema width).
//! - `Positional`: no header; cells map onto the schema's columns by position.
//! - `Adaptive`: look for a plausible header in the first rows of the block; if there
//!   is none, fall back to positional with synthesized `Col1..ColN` names.
//!
//! Every output row has exactly `columns.len()` cells. Short rows are padded with `""`.

use std::collections::HashSet;

use serde::Deserialize;

use crate::config::consts::ADAPTIVE_HEADER_WINDOW;
use crate::core::{normalize, text::is_blank};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shaping {
    HeaderFirst,
    Positional,
    Adaptive,
}

/// Canonical columns of a section plus the header spellings that map onto them.
#[derive(Clone, Copy, Debug)]
pub struct Schema {
    pub columns: &'static [&'static str],
    /// `(sheet header, canonical column)`, compared normalized.
    pub renames: &'static [(&'static str, &'static str)],
}

impl Schema {
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Canonical name for a header cell, or the trimmed header itself when unknown.
    pub fn rename(&self, header: &str) -> String {
        let key = normalize(header);
        self.renames
            .iter()
            .find(|(from, _)| normalize(from) == key)
            .map(|(_, to)| s!(*to))
            .unwrap_or_else(|| s!(header.trim()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Shaped {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Shaped {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        let key = normalize(name);
        self.columns.iter().position(|c| normalize(c) == key)
    }

    /// Project every row onto the canonical columns: by name when the shaped table has
    /// that column, otherwise by the canonical position unless a by-name match already
    /// owns it. Unresolved columns read as `""`.
    pub fn project(&self, canonical: &[&str]) -> Vec<Vec<&str>> {
        let width = self.columns.len();
        let by_name: Vec<Option<usize>> = canonical.iter().map(|name| self.column_index(name)).collect();
        let index: Vec<Option<usize>> = by_name
            .iter()
            .enumerate()
            .map(|(pos, named)| {
                named.or((pos < width && !by_name.contains(&Some(pos))).then_some(pos))
            })
            .collect();

        self.rows
            .iter()
            .map(|row| {
                index
                    .iter()
                    .map(|ix| ix.and_then(|i| row.get(i)).map(|c| c.as_str()).unwrap_or(""))
                    .collect()
            })
            .collect()
    }
}

pub fn shape(rows: &[&[String]], shaping: Shaping, schema: &Schema) -> Shaped {
    match shaping {
        Shaping::HeaderFirst => header_first(rows, schema),
        Shaping::Positional => positional(rows, schema),
        Shaping::Adaptive => adaptive(rows, schema),
    }
}

/// First row = header (at most `schema.width()` leading cells), the rest = data.
/// A block without at least one data row yields an empty table.
pub fn header_first(rows: &[&[String]], schema: &Schema) -> Shaped {
    let Some((head, data)) = rows.split_first() else { return Shaped::default() };
    if data.is_empty() {
        return Shaped::default();
    }

    let width = schema.width();
    let names: Vec<String> = (0..width)
        .map(|i| match head.get(i) {
            Some(h) if !is_blank(h) => schema.rename(h),
            _ => synth_name(i),
        })
        .collect();

    Shaped {
        columns: dedupe_columns(names),
        rows: data.iter().map(|r| fit(r, width)).collect(),
    }
}

/// No header: each row's first N cells are the schema's N columns.
pub fn positional(rows: &[&[String]], schema: &Schema) -> Shaped {
    let width = schema.width();
    Shaped {
        columns: schema.columns.iter().map(|c| s!(*c)).collect(),
        rows: rows.iter().map(|r| fit(r, width)).collect(),
    }
}

/// Header if one of the first rows looks like one and has data under it, else
/// positional with `Col1..ColN`, N being the widest row of the block.
pub fn adaptive(rows: &[&[String]], schema: &Schema) -> Shaped {
    let window = rows.len().min(ADAPTIVE_HEADER_WINDOW);
    let header_at = (0..window).find(|&i| i + 1 < rows.len() && is_plausible_header(rows[i]));

    match header_at {
        Some(i) => {
            let head = rows[i];
            let width = head.iter().rposition(|c| !is_blank(c)).map(|p| p + 1).unwrap_or(0);
            let names = (0..width)
                .map(|j| if is_blank(&head[j]) { synth_name(j) } else { schema.rename(&head[j]) })
                .collect();
            logd!("Shape: adaptive header at block row {i} ({width} columns)");
            Shaped {
                columns: dedupe_columns(names),
                rows: rows[i + 1..].iter().map(|r| fit(r, width)).collect(),
            }
        }
        None => {
            let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
            Shaped {
                columns: (0..width).map(synth_name).collect(),
                rows: rows.iter().map(|r| fit(r, width)).collect(),
            }
        }
    }
}

/// At least two non-blank cells, none of them numeric.
pub fn is_plausible_header(row: &[String]) -> bool {
    let filled: Vec<&str> = row.iter().map(|c| c.trim()).filter(|c| !c.is_empty()).collect();
    filled.len() >= 2 && filled.iter().all(|c| c.parse::<f64>().is_err())
}

/// Later columns whose normalized name collides with an earlier one get `_1`, `_2`, …
pub fn dedupe_columns(names: Vec<String>) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::with_capacity(names.len());
    let mut out = Vec::with_capacity(names.len());

    for name in names {
        let mut candidate = name.clone();
        let mut n = 0usize;
        while !taken.insert(normalize(&candidate)) {
            n += 1;
            candidate = join!(&name, "_", &n.to_string());
        }
        out.push(candidate);
    }
    out
}

fn synth_name(i: usize) -> String {
    format!("Col{}", i + 1)
}

/// Truncate or pad with `""` to exactly `width` cells.
fn fit(row: &[String], width: usize) -> Vec<String> {
    (0..width).map(|i| row.get(i).cloned().unwrap_or_default()).collect()
}
