// src/gui/components/cards.rs
use eframe::egui::{self, RichText};

use crate::engine::Summary;

const CARD_W: f32 = 180.0;

pub fn draw(ui: &mut egui::Ui, sum: &Summary) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 10.0;
        card(ui, "Altas realizadas (até 19h)", sum.altas_realizadas);
        card(ui, "Altas previstas (24h)", sum.altas_previstas);
        card(ui, "Vagas reservadas", sum.vagas_reservadas);
        card(ui, "Cirurgias programadas", sum.cirurgias);
        card(ui, "Transferências/Saídas", sum.transferencias);
    });
}

fn card(ui: &mut egui::Ui, label: &str, value: i64) {
    egui::Frame::group(ui.style()).inner_margin(egui::Margin::same(10)).show(ui, |ui| {
        ui.set_min_width(CARD_W);
        ui.vertical(|ui| {
            ui.label(RichText::new(label).small().weak());
            ui.label(RichText::new(value.to_string()).size(26.0).strong());
        });
    });
}
