//! Sick-Leave Explorer - gender and age hypotheses over sick-leave CSV data
//!
//! A Rust application for loading sick-leave exports and comparing groups
//! with histograms and two-sample t-tests.

mod charts;
mod gui;

use eframe::egui;
use gui::ExplorerApp;
use sick_leave_explorer::logging;

fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_drag_and_drop(true)
            .with_title("Sick-Leave Explorer"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Sick-Leave Explorer",
        options,
        Box::new(|cc| Ok(Box::new(ExplorerApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the window: {e}"))
}
