mod app;
mod color;
mod data;
mod state;
mod ui;

use app::VolterraApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Volterra – Predator-Prey Viewer",
        options,
        Box::new(|cc| {
            // Light visuals keep the black cycle trace visible.
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(VolterraApp::default()))
        }),
    )
}
