// src/specs/mod.rs
//! # Section “specs” module
//!
//! One spec per logical table of the census sheet. Each spec encodes *what the
//! section looks like*: its canonical columns, the header spellings seen across
//! revisions of the sheet, the titles used to find it, and which rows count as data.
//!
//! ## What lives here
//! - **Fixed-schema records** (`AltasRow`, `VagasRow`, `CirurgiaRow`, `TransferenciaRow`).
//! - **Shaping** of sliced rows into named columns (`shaping`).
//! - **Row policies**: which rows are dropped, how counts are coerced, how totals add up.
//!
//! ## What does **not** live here
//! - Finding sections or slicing the grid (`engine`).
//! - Fetching or caching the sheet (`core::net`, `store`).
//! - Drawing anything (`gui`, `cli`).
//!
//! ## Typical call chain
//! ```text
//! engine::run → locate_all → section_ranges → slice_rows
//!            ↘ specs::build::<AltasRow>(rows, shaping) → Vec<AltasRow>
//! ```
//!
//! ## Conventions & invariants
//! - Builders never fail: short rows are padded, junk counts become 0, duplicate
//!   header names are suffixed.
//! - Every record of a section has the same columns, so [`StructuredTable`] rows are
//!   always `columns.len()` wide.

use std::fmt;

use crate::engine::types::SectionKind;
use shaping::{Schema, Shaping};

pub mod altas;
pub mod cirurgias;
pub mod shaping;
pub mod transferencias;
pub mod vagas;

pub use altas::AltasRow;
pub use cirurgias::CirurgiaRow;
pub use transferencias::TransferenciaRow;
pub use vagas::VagasRow;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Int(i64),
}

impl Value {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{n}"),
        }
    }
}

/// A record type with a fixed column set.
pub trait SectionRecord: Sized {
    const KIND: SectionKind;
    const SCHEMA: Schema;

    /// `fields` is aligned with `SCHEMA.columns`.
    fn from_fields(fields: &[&str]) -> Self;

    /// Whether the row carries data worth showing.
    fn keep(&self) -> bool;

    /// Display values, aligned with `SCHEMA.columns`.
    fn values(&self) -> Vec<Value>;
}

/// Shape the sliced rows of one section and extract its records.
pub fn build<R: SectionRecord>(rows: &[&[String]], shaping: Shaping) -> Vec<R> {
    let shaped = shaping::shape(rows, shaping, &R::SCHEMA);
    let records: Vec<R> = shaped
        .project(R::SCHEMA.columns)
        .iter()
        .map(|fields| R::from_fields(fields))
        .filter(R::keep)
        .collect();
    logd!("Build: {} {:?} → {} of {} row(s) kept", R::KIND, shaping, records.len(), shaped.rows.len());
    records
}

/// Uniform display form of one section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StructuredTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl StructuredTable {
    pub fn from_records<R: SectionRecord>(records: &[R]) -> Self {
        Self {
            columns: R::SCHEMA.columns.iter().map(|c| s!(*c)).collect(),
            rows: records.iter().map(|r| r.values()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Cells as text, for CSV/TSV output.
    pub fn text_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| r.iter().map(|v| v.to_string()).collect())
            .collect()
    }
}

/// Trimmed text field.
pub(crate) fn text(field: &str) -> String {
    s!(field.trim())
}
