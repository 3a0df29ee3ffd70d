// src/gui/components/top_bar.rs
//
// Title, last update time, status line and the manual refresh button.

use eframe::egui::{self, Align, Layout, RichText, widgets::Spinner};

use crate::config::consts::APP_TITLE;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading(APP_TITLE);

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let btn = ui.add_enabled(!app.running, egui::Button::new("Atualizar agora"));
            if btn.clicked() {
                app.refresh_requested = true;
            }
            if app.running {
                ui.add(Spinner::new());
            }

            let updated = match &app.last_update {
                Some(t) => format!("Atualizado às {}", t.format("%H:%M:%S")),
                None => s!("Ainda não atualizado"),
            };
            ui.label(RichText::new(updated).weak());
        });
    });

    ui.horizontal(|ui| {
        ui.label(RichText::new(app.status_text()).small());
        ui.label(
            RichText::new(format!("· atualização automática a cada {}s", app.opts.refresh.interval_secs))
                .small()
                .weak(),
        );
    });
}
