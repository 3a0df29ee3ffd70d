// src/gui/components/mod.rs
pub mod cards;
pub mod section_table;
pub mod top_bar;
pub mod warnings;
