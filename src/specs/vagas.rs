// src/specs/vagas.rs
//! VAGAS RESERVADAS: reserved beds per hospital and sector. No header row; the
//! title sits alone above the data.

use crate::config::options::SectionRule;
use crate::core::to_int;
use crate::engine::types::{SectionKind, TitleCandidate};

use super::shaping::{Schema, Shaping};
use super::{SectionRecord, Value, text};

pub const COLUMNS: &[&str] = &["HOSPITAL", "SETOR", "VAGAS_RESERVADAS"];

pub const RENAMES: &[(&str, &str)] = &[
    ("UNIDADE", "HOSPITAL"),
    ("HOSPITAL", "HOSPITAL"),
    ("SETOR", "SETOR"),
    ("VAGAS RESERVADAS", "VAGAS_RESERVADAS"),
    ("VAGAS", "VAGAS_RESERVADAS"),
    ("QTD", "VAGAS_RESERVADAS"),
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VagasRow {
    pub hospital: String,
    pub setor: String,
    pub vagas_reservadas: i64,
}

impl SectionRecord for VagasRow {
    const KIND: SectionKind = SectionKind::Vagas;
    const SCHEMA: Schema = Schema { columns: COLUMNS, renames: RENAMES };

    fn from_fields(f: &[&str]) -> Self {
        Self {
            hospital: text(f[0]),
            setor: text(f[1]),
            vagas_reservadas: to_int(f[2]),
        }
    }

    fn keep(&self) -> bool {
        !self.hospital.is_empty() || !self.setor.is_empty() || self.vagas_reservadas != 0
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.hospital.clone()),
            Value::Text(self.setor.clone()),
            Value::Int(self.vagas_reservadas),
        ]
    }
}

pub fn default_rule() -> SectionRule {
    SectionRule {
        candidates: vec![
            TitleCandidate::exact("VAGAS RESERVADAS"),
            TitleCandidate::substring("VAGAS RESERVADAS"),
            TitleCandidate::substring("RESERVADAS"),
        ],
        shaping: Shaping::Positional,
        title_in_header: false,
    }
}

pub fn total(rows: &[VagasRow]) -> i64 {
    rows.iter().fold(0i64, |a, r| a.saturating_add(r.vagas_reservadas))
}
