// src/core/mod.rs

pub mod coerce;
pub mod grid;
pub mod net;
pub mod text;

pub use coerce::{coerce_int, to_int};
pub use grid::Grid;
pub use text::normalize;
