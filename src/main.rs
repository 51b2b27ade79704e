mod app;
mod color;
mod data;
mod state;
mod ui;

use app::PizzaDashApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pizza Sales Dashboard",
        options,
        Box::new(|_cc| {
            // Load once at startup; a missing or malformed file is fatal.
            let table = data::loader::load().inspect_err(|e| {
                log::error!("failed to load dataset: {e}");
            })?;
            log::info!(
                "loaded {} rows across {} columns",
                table.len(),
                table.columns.len()
            );
            Ok(Box::new(PizzaDashApp::new(table)))
        }),
    )
}
