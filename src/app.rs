use eframe::egui::{self, Ui};

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct VolterraApp {
    pub state: AppState,
}

impl eframe::App for VolterraApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: model parameters ----
        egui::SidePanel::left("parameters_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: time chart over phase chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui: &mut Ui| {
                    ui.heading("Open a workbook to view cycles  (File → Open…)");
                });
                return;
            }

            let plot_height =
                ((ui.available_height() - ui.spacing().item_spacing.y) / 2.0).max(0.0);
            plot::time_plot(ui, &self.state, plot_height);
            plot::phase_plot(ui, &self.state, plot_height);
        });
    }
}
