// src/engine/mod.rs
#[allow(clippy::module_inception)]
pub mod engine;
pub mod locate;
pub mod slice;
pub mod types;

pub use engine::{Censo, Summary, refresh, refresh_with, run};
pub use locate::{find_section, find_title, locate_all, section_ranges};
pub use slice::slice_rows;
