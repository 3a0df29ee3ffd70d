// src/error.rs
//! Error taxonomy.
//!
//! Only [`FetchError`] and [`SectionNotFound`] ever reach a user. Row and cell level
//! anomalies (short rows, junk numbers, duplicate header names) are absorbed where they
//! happen and have no error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::engine::types::SectionKind;

/// The sheet could not be fetched or decoded. Fatal for the current refresh cycle.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// A section title could not be located after exhausting every candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("section not found: {section}")]
pub struct SectionNotFound {
    pub section: SectionKind,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
