// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use censo_nir::{config, gui};
use eframe::egui::ViewportBuilder;

use censo_nir::config::consts::{APP_TITLE, WINDOW_H, WINDOW_W};

fn main() {
    censo_nir::log::init(::log::LevelFilter::Debug, false);

    let opts = match config::load(None) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([WINDOW_W, WINDOW_H]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, opts) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
