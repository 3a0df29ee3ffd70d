// src/config/mod.rs
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub mod consts;
pub mod file;
pub mod options;

pub use options::{AppOptions, RefreshOptions, SectionRule, SectionsConfig, SourceOptions};

/// Explicit path → must exist. No path → `censo.toml` in the working directory if present.
pub fn load(path: Option<&Path>) -> Result<AppOptions, ConfigError> {
    match path {
        Some(p) => file::load_from(p, true),
        None => file::load_from(&PathBuf::from(consts::CONFIG_FILE), false),
    }
}
