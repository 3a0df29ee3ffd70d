// src/specs/transferencias.rs
//! TRANSFERÊNCIAS/SAÍDAS: description/value pairs, usually closed by a `TOTAL` row.

use crate::config::options::SectionRule;
use crate::core::{normalize, to_int};
use crate::engine::types::{SectionKind, TitleCandidate};

use super::shaping::{Schema, Shaping};
use super::{SectionRecord, Value, text};

pub const COLUMNS: &[&str] = &["DESCRICAO", "VALOR"];

pub const RENAMES: &[(&str, &str)] = &[
    ("DESCRIÇÃO", "DESCRICAO"),
    ("TIPO", "DESCRICAO"),
    ("QTD", "VALOR"),
    ("QUANTIDADE", "VALOR"),
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransferenciaRow {
    pub descricao: String,
    pub valor: i64,
}

impl TransferenciaRow {
    pub fn is_total(&self) -> bool {
        normalize(&self.descricao) == "TOTAL"
    }
}

impl SectionRecord for TransferenciaRow {
    const KIND: SectionKind = SectionKind::Transferencias;
    const SCHEMA: Schema = Schema { columns: COLUMNS, renames: RENAMES };

    fn from_fields(f: &[&str]) -> Self {
        Self {
            descricao: text(f[0]),
            valor: to_int(f[1]),
        }
    }

    fn keep(&self) -> bool {
        !self.descricao.is_empty() || self.valor != 0
    }

    fn values(&self) -> Vec<Value> {
        vec![Value::Text(self.descricao.clone()), Value::Int(self.valor)]
    }
}

pub fn default_rule() -> SectionRule {
    SectionRule {
        candidates: vec![
            TitleCandidate::exact("TRANSFERÊNCIAS/SAÍDAS"),
            TitleCandidate::substring("TRANSFERENCIAS"),
            TitleCandidate::substring("SAIDAS"),
        ],
        shaping: Shaping::Positional,
        title_in_header: false,
    }
}

/// The sheet's own `TOTAL` row when present (first one wins), else the saturating sum of all rows.
pub fn total(rows: &[TransferenciaRow]) -> i64 {
    match rows.iter().find(|r| r.is_total()) {
        Some(t) => t.valor,
        None => rows.iter().fold(0i64, |a, r| a.saturating_add(r.valor)),
    }
}
