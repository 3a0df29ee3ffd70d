// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod specs;

pub mod gui;
pub mod progress;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;
