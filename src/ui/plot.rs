use eframe::egui::Ui;
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints};

use crate::color;
use crate::data::model::Sample;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Time chart (upper half of the central panel)
// ---------------------------------------------------------------------------

/// Population vs. time for cycle 1.
///
/// Only the first cycle is plotted here; cycles 2 and 3 feed the phase chart
/// alone. That asymmetry is inherited product behavior, kept on purpose.
pub fn time_plot(ui: &mut Ui, state: &AppState, height: f32) {
    let Some(dataset) = &state.dataset else {
        return;
    };
    let cycle = &dataset.cycles[0];

    Plot::new("time_plot")
        .height(height)
        .legend(Legend::default().position(Corner::RightTop))
        .x_axis_label("Time")
        .y_axis_label("Population")
        .x_axis_formatter(|mark, _range| format!("{:.1}", mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(series_points(&cycle.prey))
                    .name("Prey")
                    .color(color::PREY)
                    .width(2.0),
            );
            plot_ui.line(
                Line::new(series_points(&cycle.predator))
                    .name("Predator")
                    .color(color::PREDATOR)
                    .width(2.0),
            );
        });
}

// ---------------------------------------------------------------------------
// Phase chart (lower half of the central panel)
// ---------------------------------------------------------------------------

/// Prey vs. predator trajectory, one line per cycle.
pub fn phase_plot(ui: &mut Ui, state: &AppState, height: f32) {
    if state.dataset.is_none() {
        return;
    }

    Plot::new("phase_plot")
        .height(height)
        .legend(Legend::default().position(Corner::RightTop))
        .x_axis_label("Prey (x)")
        .y_axis_label("Predator (y)")
        .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .show(ui, |plot_ui| {
            for (i, points) in state.phase.iter().enumerate() {
                let line_points: PlotPoints = points.iter().copied().collect();
                plot_ui.line(
                    Line::new(line_points)
                        .name(format!("Cycle {}", i + 1))
                        .color(color::CYCLES[i])
                        .width(2.0),
                );
            }
        });
}

fn series_points(series: &[Sample]) -> PlotPoints {
    series.iter().map(|s| [s.time, s.value]).collect()
}
