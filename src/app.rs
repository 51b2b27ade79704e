use eframe::egui;

use crate::data::model::Table;
use crate::state::AppState;
use crate::ui::{panels, pie, scatter, summary};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// The dashboard is a single scrollable page; every frame re-renders all
/// sections from the current state.
pub struct PizzaDashApp {
    pub state: AppState,
}

impl PizzaDashApp {
    pub fn new(table: &'static Table) -> Self {
        Self {
            state: AppState::new(table),
        }
    }
}

impl eframe::App for PizzaDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut egui::Ui| {
                    ui.heading("Pizza Sales Dashboard");
                    ui.separator();

                    panels::filter_section(ui, &mut self.state);
                    ui.add_space(12.0);
                    scatter::scatter_section(ui, &mut self.state);
                    ui.add_space(12.0);
                    pie::pie_section(ui, &mut self.state);
                    ui.add_space(12.0);
                    summary::summary_section(ui, &mut self.state);
                    ui.add_space(12.0);
                    panels::legend_section(ui);
                });
        });
    }
}
