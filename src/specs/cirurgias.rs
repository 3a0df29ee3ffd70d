// src/specs/cirurgias.rs
//! CIRURGIAS PROGRAMADAS (next day): scheduled surgeries per hospital and specialty.
//!
//! The title has been seen as "CIRURGIAS PROGRAMADAS - PROXIMO DIA",
//! "CIRURGIAS PROGRAMADAS (PRÓXIMO DIA)" and plain "CIRURGIAS PROGRAMADAS", hence the
//! looser fallbacks. A bare shared-word match on the long title would also hit
//! "ALTAS DO DIA" through "DIA", so the last resort only shares "CIRURGIAS".

use crate::config::options::SectionRule;
use crate::core::to_int;
use crate::engine::types::{SectionKind, TitleCandidate};

use super::shaping::{Schema, Shaping};
use super::{SectionRecord, Value, text};

pub const COLUMNS: &[&str] = &["HOSPITAL", "ESPECIALIDADE", "QUANTIDADE"];

pub const RENAMES: &[(&str, &str)] = &[
    ("UNIDADE", "HOSPITAL"),
    ("CLINICA", "ESPECIALIDADE"),
    ("QTD", "QUANTIDADE"),
    ("QTDE", "QUANTIDADE"),
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CirurgiaRow {
    pub hospital: String,
    pub especialidade: String,
    pub quantidade: i64,
}

impl SectionRecord for CirurgiaRow {
    const KIND: SectionKind = SectionKind::Cirurgias;
    const SCHEMA: Schema = Schema { columns: COLUMNS, renames: RENAMES };

    fn from_fields(f: &[&str]) -> Self {
        Self {
            hospital: text(f[0]),
            especialidade: text(f[1]),
            quantidade: to_int(f[2]),
        }
    }

    fn keep(&self) -> bool {
        !self.hospital.is_empty() || !self.especialidade.is_empty() || self.quantidade != 0
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.hospital.clone()),
            Value::Text(self.especialidade.clone()),
            Value::Int(self.quantidade),
        ]
    }
}

pub fn default_rule() -> SectionRule {
    SectionRule {
        candidates: vec![
            TitleCandidate::exact("CIRURGIAS PROGRAMADAS - PROXIMO DIA"),
            TitleCandidate::substring("CIRURGIAS PROGRAMADAS"),
            TitleCandidate::shared_word("CIRURGIAS"),
        ],
        shaping: Shaping::Positional,
        title_in_header: false,
    }
}

pub fn total(rows: &[CirurgiaRow]) -> i64 {
    rows.iter().fold(0i64, |a, r| a.saturating_add(r.quantidade))
}
