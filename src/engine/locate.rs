// src/engine/locate.rs
//! Section Locator: find where each named section starts inside the grid.
//!
//! Titles drift between edits of the sheet (accents, punctuation, a trailing
//! "(PRÓXIMO DIA)"), so each section carries an ordered list of candidates, each with
//! its own match strategy. Scanning is row-major and the first hit wins.

use crate::config::options::SectionsConfig;
use crate::core::{Grid, normalize, text};
use crate::error::SectionNotFound;

use super::types::*;

/// Normalized candidate, prepared once per scan.
struct Needle {
    text: String,
    words: Vec<String>,
    strategy: MatchStrategy,
}

impl Needle {
    fn new(c: &TitleCandidate) -> Self {
        Self {
            text: normalize(&c.title),
            words: text::words(&c.title),
            strategy: c.strategy,
        }
    }

    fn matches(&self, cell: &str) -> bool {
        let cell = normalize(cell);
        if cell.is_empty() || self.text.is_empty() {
            return false;
        }
        match self.strategy {
            MatchStrategy::Exact => cell == self.text,
            MatchStrategy::Substring => cell.contains(&self.text),
            MatchStrategy::SharedWord => self.shares_word(&cell),
            MatchStrategy::Fuzzy => cell.contains(&self.text) || self.shares_word(&cell),
        }
    }

    fn shares_word(&self, cell: &str) -> bool {
        let cell_words = text::words(cell);
        self.words.iter().any(|w| cell_words.contains(w))
    }
}

/// Does `cell` match the candidate under its strategy? Blank cells never match.
pub fn cell_matches(cell: &str, candidate: &TitleCandidate) -> bool {
    Needle::new(candidate).matches(cell)
}

/// Row of the first cell (row-major) matching one candidate.
pub fn find_title(grid: &Grid, candidate: &TitleCandidate) -> Option<usize> {
    let needle = Needle::new(candidate);
    grid.rows()
        .iter()
        .position(|row| row.iter().any(|cell| needle.matches(cell)))
}

/// Try candidates in priority order; the first one that resolves wins even if a
/// later candidate would match an earlier row.
pub fn find_section(grid: &Grid, candidates: &[TitleCandidate]) -> Option<usize> {
    find_section_with(grid, candidates).map(|(row, _)| row)
}

fn find_section_with<'c>(grid: &Grid, candidates: &'c [TitleCandidate]) -> Option<(usize, &'c TitleCandidate)> {
    candidates
        .iter()
        .find_map(|c| find_title(grid, c).map(|row| (row, c)))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Located {
    /// Resolved markers, sorted by row.
    pub markers: Vec<SectionMarker>,
    /// Sections that no candidate resolved, in canonical order.
    pub missing: Vec<SectionNotFound>,
}

pub fn locate_all(grid: &Grid, sections: &SectionsConfig) -> Located {
    let mut located = Located::default();

    for kind in SectionKind::ALL {
        let rule = sections.rule(kind);
        match find_section_with(grid, &rule.candidates) {
            Some((row, cand)) => {
                logd!("Locate: {kind} at row {row} via {:?} {:?}", cand.strategy, cand.title);
                located.markers.push(SectionMarker { kind, row, matched: cand.title.clone() });
            }
            None => {
                logw!("Locate: {kind} not found after {} candidate(s)", rule.candidates.len());
                located.missing.push(SectionNotFound { section: kind });
            }
        }
    }

    // Stable: two sections on the same row keep canonical order.
    located.markers.sort_by_key(|m| m.row);
    located
}

/// Row range of each located section: from its marker (or the row after it) up to the
/// next marker, the last one running to the end of the grid.
pub fn section_ranges(markers: &[SectionMarker], sections: &SectionsConfig, grid_len: usize) -> Vec<SectionRange> {
    let mut sorted: Vec<&SectionMarker> = markers.iter().collect();
    sorted.sort_by_key(|m| m.row);

    sorted
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let start = if sections.rule(m.kind).title_in_header { m.row } else { m.row + 1 };
            let end = sorted.get(i + 1).map(|next| next.row).unwrap_or(grid_len);
            SectionRange { kind: m.kind, rows: start..end.max(start) }
        })
        .collect()
}
