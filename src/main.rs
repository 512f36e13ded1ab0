#![warn(clippy::all, rust_2018_idioms)]

use eframe_sketch::SketchApp;
use eframe_sketch::config::{WINDOW_SIZE, WINDOW_TITLE};

fn main() -> eframe::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(|cc| Ok(Box::new(SketchApp::new(cc)))),
    )
}
