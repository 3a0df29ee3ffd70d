// src/core/net.rs

// Blocking HTTPS GET of the published sheet export.

use std::time::Duration;

use crate::config::consts::USER_AGENT;
use crate::config::options::SourceOptions;
use crate::core::grid::Grid;
use crate::error::FetchError;

pub fn fetch_text(url: &str, timeout: Duration) -> Result<String, FetchError> {
    let request_err = |source| FetchError::Request { url: s!(url), source };

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(request_err)?;

    let resp = client.get(url).send().map_err(request_err)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
    }
    resp.text().map_err(request_err)
}

/// One fetch of the sheet, decoded to a [`Grid`]. No retries; the next trigger retries.
pub fn fetch_grid(source: &SourceOptions) -> Result<Grid, FetchError> {
    logd!("Fetch: GET {} (timeout {}s)", source.url, source.timeout_secs);
    let text = fetch_text(&source.url, Duration::from_secs(source.timeout_secs))?;
    let grid = Grid::from_csv(&text)?;
    logf!("Fetch: {} bytes → {} rows", text.len(), grid.len());
    Ok(grid)
}
