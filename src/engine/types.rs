// src/engine/types.rs
use std::fmt;
use std::ops::Range;

use serde::Deserialize;

/// The four logical tables embedded in the census sheet, in canonical display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    Altas,
    Vagas,
    Cirurgias,
    Transferencias,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Altas,
        SectionKind::Vagas,
        SectionKind::Cirurgias,
        SectionKind::Transferencias,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Altas => "ALTAS",
            SectionKind::Vagas => "VAGAS RESERVADAS",
            SectionKind::Cirurgias => "CIRURGIAS PROGRAMADAS",
            SectionKind::Transferencias => "TRANSFERÊNCIAS/SAÍDAS",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// How a candidate title is compared against a (normalized, non-blank) cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Cell equals the candidate.
    #[default]
    Exact,
    /// Cell contains the candidate.
    Substring,
    /// Cell and candidate share at least one word.
    SharedWord,
    /// `Substring` or `SharedWord`.
    Fuzzy,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TitleCandidate {
    pub title: String,
    #[serde(default)]
    pub strategy: MatchStrategy,
}

impl TitleCandidate {
    pub fn new(title: impl Into<String>, strategy: MatchStrategy) -> Self {
        Self { title: title.into(), strategy }
    }
    pub fn exact(title: impl Into<String>) -> Self {
        Self::new(title, MatchStrategy::Exact)
    }
    pub fn substring(title: impl Into<String>) -> Self {
        Self::new(title, MatchStrategy::Substring)
    }
    pub fn shared_word(title: impl Into<String>) -> Self {
        Self::new(title, MatchStrategy::SharedWord)
    }
    pub fn fuzzy(title: impl Into<String>) -> Self {
        Self::new(title, MatchStrategy::Fuzzy)
    }
}

/// Where a section title was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionMarker {
    pub kind: SectionKind,
    pub row: usize,
    /// The candidate title that resolved it.
    pub matched: String,
}

/// Rows `[start, end)` of the grid that belong to one section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionRange {
    pub kind: SectionKind,
    pub rows: Range<usize>,
}
