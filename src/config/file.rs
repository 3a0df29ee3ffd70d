// src/config/file.rs
//! `censo.toml`: every key is optional and only overrides what it names.
//!
//! ```toml
//! [source]
//! url = "https://docs.google.com/spreadsheets/d/<id>/gviz/tq?tqx=out:csv&sheet=Folha1"
//! timeout_secs = 20
//!
//! [refresh]
//! interval_secs = 120
//!
//! [sections.vagas]
//! candidates = [
//!   { title = "VAGAS RESERVADAS", strategy = "exact" },
//!   { title = "RESERVADAS", strategy = "substring" },
//! ]
//! shaping = "adaptive"
//! ```
use std::{fs, path::Path};

use serde::Deserialize;

use super::options::{AppOptions, RefreshOptions, SectionRule, SectionsConfig, SourceOptions};
use crate::engine::types::{SectionKind, TitleCandidate};
use crate::error::ConfigError;
use crate::specs::shaping::Shaping;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub source: Option<SourceOptions>,
    pub refresh: Option<RefreshOptions>,
    pub sections: SectionsFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionsFile {
    pub altas: Option<RuleOverride>,
    pub vagas: Option<RuleOverride>,
    pub cirurgias: Option<RuleOverride>,
    pub transferencias: Option<RuleOverride>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleOverride {
    pub candidates: Option<Vec<TitleCandidate>>,
    pub shaping: Option<Shaping>,
    pub title_in_header: Option<bool>,
}

impl RuleOverride {
    fn apply(self, rule: &mut SectionRule) {
        if let Some(c) = self.candidates {
            rule.candidates = c;
        }
        if let Some(s) = self.shaping {
            rule.shaping = s;
        }
        if let Some(t) = self.title_in_header {
            rule.title_in_header = t;
        }
    }
}

impl SectionsFile {
    fn apply(self, cfg: &mut SectionsConfig) {
        let pairs = [
            (SectionKind::Altas, self.altas),
            (SectionKind::Vagas, self.vagas),
            (SectionKind::Cirurgias, self.cirurgias),
            (SectionKind::Transferencias, self.transferencias),
        ];
        for (kind, ov) in pairs {
            if let Some(ov) = ov {
                ov.apply(cfg.rule_mut(kind));
            }
        }
    }
}

impl ConfigFile {
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    pub fn into_options(self) -> AppOptions {
        let mut opts = AppOptions::default();
        if let Some(src) = self.source {
            opts.source = src;
        }
        if let Some(r) = self.refresh {
            opts.refresh = r;
        }
        self.sections.apply(&mut opts.sections);
        opts
    }
}

/// Load options from `path`. When `required` is false a missing file means defaults.
pub fn load_from(path: &Path, required: bool) -> Result<AppOptions, ConfigError> {
    if !required && !path.exists() {
        logd!("Config: {} not found, using defaults", path.display());
        return Ok(AppOptions::default());
    }
    let text = fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    let opts = ConfigFile::parse(&text, path)?.into_options();
    logf!("Config: loaded {}", path.display());
    Ok(opts)
}
