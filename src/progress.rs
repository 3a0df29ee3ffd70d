// src/progress.rs
use crate::engine::types::SectionKind;

/// Lightweight progress reporting for a refresh cycle.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once when the cycle starts.
    fn begin(&mut self) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A section was located and built.
    fn section_done(&mut self, _kind: SectionKind, _rows: usize) {}

    /// A section's title could not be found.
    fn section_missing(&mut self, _kind: SectionKind) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
