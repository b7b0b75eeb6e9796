use eframe::egui::{self, Color32, RichText, Ui};

use crate::color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – model parameters
// ---------------------------------------------------------------------------

/// Render the left parameters panel.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Model parameters");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No workbook loaded.");
            return;
        }
    };

    egui::Grid::new("parameters")
        .num_columns(2)
        .spacing([24.0, 4.0])
        .show(ui, |ui: &mut Ui| {
            for (label, value) in dataset.parameters.display_fields() {
                ui.strong(label);
                ui.monospace(value);
                ui.end_row();
            }
        });

    ui.add_space(8.0);
    ui.strong("Cycles");
    ui.separator();
    for (i, cycle) in dataset.cycles.iter().enumerate() {
        ui.horizontal(|ui: &mut Ui| {
            let swatch = RichText::new("■").color(color::CYCLES[i]);
            ui.label(swatch);
            ui.label(format!("Cycle {}: {} rows", i + 1, cycle.len()));
        });
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if state.loading {
            ui.spinner();
        }

        if let Some(ds) = &state.dataset {
            ui.label(format!("{} — {} samples", ds.source_name, ds.total_samples()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open population workbook")
        .add_filter("Excel workbook", &["xlsx"])
        .pick_file();

    // Cancelled dialog is a no-op.
    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} with {} samples across {} cycles",
                    dataset.source_name,
                    dataset.total_samples(),
                    dataset.cycles.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load workbook: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}
