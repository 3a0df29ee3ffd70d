// src/gui/components/section_table.rs
//
// One section: title with a row-count pill, then its table.
// Tables sit inside the dashboard's outer scroll area, so they never scroll themselves.

use eframe::egui::{self, Align, Color32, CornerRadius, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::engine::types::SectionKind;
use crate::specs::StructuredTable;

const ROW_H: f32 = 20.0;
const HEADER_H: f32 = 24.0;

pub fn draw(ui: &mut egui::Ui, kind: SectionKind, table: &StructuredTable, missing: bool) {
    header(ui, kind, table.len());

    if missing {
        ui.label(RichText::new("Seção não encontrada na planilha.").weak());
        return;
    }
    if table.is_empty() {
        ui.label(RichText::new("Sem dados para exibir.").weak());
        return;
    }

    // Numeric-ness is per column; every row of a section has the same shape.
    let numeric: Vec<bool> = table
        .rows
        .first()
        .map(|r| r.iter().map(|v| v.is_numeric()).collect())
        .unwrap_or_default();

    ui.push_id(("section", kind), |ui| {
        let mut builder = TableBuilder::new(ui)
            .id_salt(("section_table", kind))
            .striped(true)
            .vscroll(false)
            .cell_layout(Layout::left_to_right(Align::Center));
        for ci in 0..table.ncols() {
            let col = if numeric.get(ci).copied().unwrap_or(false) {
                Column::initial(140.0).at_least(60.0).resizable(true)
            } else {
                Column::initial(220.0).at_least(80.0).resizable(true).clip(true)
            };
            builder = builder.column(col);
        }

        builder
            .header(HEADER_H, |mut header| {
                for name in &table.columns {
                    header.col(|ui| {
                        ui.label(RichText::new(name).strong());
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_H, table.len(), |mut row| {
                    let Some(data) = table.rows.get(row.index()) else { return };
                    for (ci, v) in data.iter().enumerate() {
                        let is_num = numeric.get(ci).copied().unwrap_or(false);
                        row.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            if is_num {
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    ui.label(v.to_string());
                                });
                            } else {
                                ui.label(v.to_string());
                            }
                        });
                    }
                });
            });
    });
}

fn header(ui: &mut egui::Ui, kind: SectionKind, rows: usize) {
    ui.horizontal(|ui| {
        ui.heading(kind.title());
        egui::Frame::new()
            .fill(ui.visuals().selection.bg_fill.linear_multiply(0.4))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(egui::Margin::symmetric(8, 2))
            .show(ui, |ui| {
                ui.label(RichText::new(format!("{rows} linha(s)")).small().color(Color32::WHITE));
            });
    });
    ui.separator();
}
