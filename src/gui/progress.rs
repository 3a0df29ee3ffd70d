// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::engine::types::SectionKind;
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    found: usize,
    missing: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, found: 0, missing: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self) {
        self.found = 0;
        self.missing = 0;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn section_done(&mut self, kind: SectionKind, rows: usize) {
        self.found += 1;
        self.set_status(format!("{}: {} linha(s)", kind.title(), rows));
    }
    fn section_missing(&mut self, _kind: SectionKind) {
        self.missing += 1;
    }
    fn finish(&mut self) {
        if self.found + self.missing == 0 {
            return; // fetch failed; keep the error text from log()
        }
        if self.missing == 0 {
            self.set_status(format!("Pronto ({} seções)", self.found));
        } else {
            self.set_status(format!("Pronto ({} seções, {} ausente(s))", self.found, self.missing));
        }
    }
}
