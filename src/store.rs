// src/store.rs
//! In-memory cache of the last fetched grid.
//!
//! One entry, replaced wholesale on every successful fetch. A failed fetch leaves the
//! previous entry in place and propagates the error. `invalidate()` backs the
//! "refresh now" control.
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::core::Grid;
use crate::error::FetchError;

#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub fetched_at: Instant,
    pub grid: Arc<Grid>,
}

#[derive(Clone, Debug)]
pub struct GridCache {
    ttl: Duration,
    entry: Option<CacheEntry>,
}

impl GridCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    pub fn entry(&self) -> Option<&CacheEntry> {
        self.entry.as_ref()
    }

    pub fn is_fresh_at(&self, now: Instant) -> bool {
        self.age_at(now).is_some_and(|age| age < self.ttl)
    }

    pub fn age_at(&self, now: Instant) -> Option<Duration> {
        self.entry.as_ref().map(|e| now.saturating_duration_since(e.fetched_at))
    }

    pub fn invalidate(&mut self) {
        if self.entry.take().is_some() {
            logd!("Cache: invalidated");
        }
    }

    pub fn get_or_fetch<F>(&mut self, fetch: F) -> Result<Arc<Grid>, FetchError>
    where
        F: FnOnce() -> Result<Grid, FetchError>,
    {
        self.get_or_fetch_at(Instant::now(), fetch)
    }

    /// Cached grid if younger than the TTL, otherwise `fetch()` and replace the entry.
    pub fn get_or_fetch_at<F>(&mut self, now: Instant, fetch: F) -> Result<Arc<Grid>, FetchError>
    where
        F: FnOnce() -> Result<Grid, FetchError>,
    {
        if self.is_fresh_at(now) {
            if let Some(e) = &self.entry {
                logd!("Cache: hit (age {:?})", now.saturating_duration_since(e.fetched_at));
                return Ok(Arc::clone(&e.grid));
            }
        }

        let grid = Arc::new(fetch()?);
        self.entry = Some(CacheEntry { fetched_at: now, grid: Arc::clone(&grid) });
        Ok(grid)
    }
}
