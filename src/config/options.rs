// src/config/options.rs
use std::time::Duration;

use serde::Deserialize;

use super::consts::*;
use crate::engine::types::{SectionKind, TitleCandidate};
use crate::specs::{altas, cirurgias, shaping::Shaping, transferencias, vagas};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub refresh: RefreshOptions,
    pub sections: SectionsConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceOptions {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            url: default_csv_url(),
            timeout_secs: FETCH_TIMEOUT_SECS,
        }
    }
}

/// Refresh interval and cache window are independent: a manual refresh inside the
/// cache window still hits the network because it invalidates first.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RefreshOptions {
    pub interval_secs: u64,
    pub cache_ttl_secs: u64,
}

impl Default for RefreshOptions {
    fn default() -> Self {
        Self {
            interval_secs: REFRESH_SECS,
            cache_ttl_secs: CACHE_TTL_SECS,
        }
    }
}

impl RefreshOptions {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

/// How one section is found and shaped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionRule {
    /// Tried in order; the first candidate that resolves wins.
    pub candidates: Vec<TitleCandidate>,
    pub shaping: Shaping,
    /// The title cell heads the section's own header row, so the block starts at the
    /// marker row instead of the row after it.
    pub title_in_header: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionsConfig {
    pub altas: SectionRule,
    pub vagas: SectionRule,
    pub cirurgias: SectionRule,
    pub transferencias: SectionRule,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            altas: altas::default_rule(),
            vagas: vagas::default_rule(),
            cirurgias: cirurgias::default_rule(),
            transferencias: transferencias::default_rule(),
        }
    }
}

impl SectionsConfig {
    pub fn rule(&self, kind: SectionKind) -> &SectionRule {
        match kind {
            SectionKind::Altas => &self.altas,
            SectionKind::Vagas => &self.vagas,
            SectionKind::Cirurgias => &self.cirurgias,
            SectionKind::Transferencias => &self.transferencias,
        }
    }

    pub fn rule_mut(&mut self, kind: SectionKind) -> &mut SectionRule {
        match kind {
            SectionKind::Altas => &mut self.altas,
            SectionKind::Vagas => &mut self.vagas,
            SectionKind::Cirurgias => &mut self.cirurgias,
            SectionKind::Transferencias => &mut self.transferencias,
        }
    }
}
