// src/config/consts.rs

// Source sheet
pub const SHEET_ID: &str = "1wA--gbvOmHWcUvMBTldVC8HriI3IXfQoEvQEskCKGDk";
pub const SHEET_NAME: &str = "Folha1";
pub const FETCH_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("censo_nir/", env!("CARGO_PKG_VERSION"));

// Refresh
pub const REFRESH_SECS: u64 = 60;
pub const CACHE_TTL_SECS: u64 = 30;

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";
pub const CONFIG_FILE: &str = "censo.toml";

// Shaping
pub const ADAPTIVE_HEADER_WINDOW: usize = 3;

// GUI
pub const APP_TITLE: &str = "Painel NIR - Censo Diário";
pub const WINDOW_W: f32 = 1280.0;
pub const WINDOW_H: f32 = 800.0;

pub fn default_csv_url() -> String {
    format!("https://docs.google.com/spreadsheets/d/{SHEET_ID}/gviz/tq?tqx=out:csv&sheet={SHEET_NAME}")
}
