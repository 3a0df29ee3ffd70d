// src/gui/components/warnings.rs
use eframe::egui::{self, Color32, RichText};

use crate::engine::Censo;

const WARN: Color32 = Color32::from_rgb(0xF0, 0xB4, 0x29);
const ERR: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

/// One line per section whose title was not found. Draws nothing when all were found.
pub fn draw(ui: &mut egui::Ui, censo: &Censo) {
    if censo.missing.is_empty() {
        return;
    }
    egui::Frame::group(ui.style()).show(ui, |ui| {
        for m in &censo.missing {
            ui.label(RichText::new(format!("⚠ Seção não encontrada: {}", m.section.title())).color(WARN));
        }
    });
    ui.add_space(6.0);
}

pub fn draw_error(ui: &mut egui::Ui, err: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(RichText::new("Dados indisponíveis").strong().color(ERR));
        ui.label(RichText::new(err).small());
    });
}
