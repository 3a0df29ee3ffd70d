// src/specs/altas.rs
//! ALTAS: discharges per hospital and sector.
//!
//! The title cell "ALTAS HOSPITAL" is the first cell of the section's own header row:
//!
//! ```text
//! ALTAS HOSPITAL | SETOR | ALTAS DO DIA (ATÉ 19H) | ALTAS PREVISTAS 24H
//! Hosp A         | UTI   | 3                      | 5
//! ```
//!
//! Shaped header-first; rows without a hospital or a sector are dropped.

use crate::config::options::SectionRule;
use crate::core::to_int;
use crate::engine::types::{SectionKind, TitleCandidate};

use super::shaping::{Schema, Shaping};
use super::{SectionRecord, Value, text};

pub const COLUMNS: &[&str] = &["HOSPITAL", "SETOR", "REALIZADAS_ATÉ_19H", "PREVISTAS_24H"];

pub const RENAMES: &[(&str, &str)] = &[
    ("ALTAS HOSPITAL", "HOSPITAL"),
    ("SETOR", "SETOR"),
    ("ALTAS DO DIA (ATÉ 19H)", "REALIZADAS_ATÉ_19H"),
    ("ALTAS PREVISTAS 24H", "PREVISTAS_24H"),
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AltasRow {
    pub hospital: String,
    pub setor: String,
    pub realizadas_ate_19h: i64,
    pub previstas_24h: i64,
}

impl SectionRecord for AltasRow {
    const KIND: SectionKind = SectionKind::Altas;
    const SCHEMA: Schema = Schema { columns: COLUMNS, renames: RENAMES };

    fn from_fields(f: &[&str]) -> Self {
        Self {
            hospital: text(f[0]),
            setor: text(f[1]),
            realizadas_ate_19h: to_int(f[2]),
            previstas_24h: to_int(f[3]),
        }
    }

    fn keep(&self) -> bool {
        !self.hospital.is_empty() && !self.setor.is_empty()
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.hospital.clone()),
            Value::Text(self.setor.clone()),
            Value::Int(self.realizadas_ate_19h),
            Value::Int(self.previstas_24h),
        ]
    }
}

pub fn default_rule() -> SectionRule {
    SectionRule {
        candidates: vec![
            TitleCandidate::exact("ALTAS HOSPITAL"),
            TitleCandidate::substring("ALTAS HOSPITAL"),
        ],
        shaping: Shaping::HeaderFirst,
        title_in_header: true,
    }
}

/// `(realizadas até 19h, previstas 24h)`, saturating.
pub fn totals(rows: &[AltasRow]) -> (i64, i64) {
    rows.iter().fold((0i64, 0i64), |(r, p), row| {
        (r.saturating_add(row.realizadas_ate_19h), p.saturating_add(row.previstas_24h))
    })
}
