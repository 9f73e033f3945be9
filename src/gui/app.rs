//! Sick-Leave Explorer Main Application
//! Main window with control panel and report viewer.

use crate::gui::{ControlPanel, ControlPanelAction, ReportViewer};
use egui::SidePanel;
use sick_leave_explorer::analysis::DashboardState;
use sick_leave_explorer::data::{DataLoader, Dataset, LoaderError};
use tracing::info;

/// Main application window.
pub struct ExplorerApp {
    state: DashboardState,
    control_panel: ControlPanel,
}

impl ExplorerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            state: DashboardState::default(),
            control_panel: ControlPanel::new(),
        }
    }

    /// Handle CSV file selection
    fn handle_browse_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            info!(path = %path.display(), "loading file");
            self.apply_load(DataLoader::load_file(&path));
        }
    }

    /// Load the first file dropped onto the window
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };

        let result = if let Some(bytes) = &file.bytes {
            DataLoader::load_bytes(bytes, &file.name)
        } else if let Some(path) = &file.path {
            DataLoader::load_file(path)
        } else {
            return;
        };
        self.apply_load(result);
    }

    fn apply_load(&mut self, result: Result<Dataset, LoaderError>) {
        match &result {
            Ok(dataset) => self.control_panel.set_status(&format!(
                "File successfully uploaded: {} rows loaded",
                dataset.len()
            )),
            Err(e) => self.control_panel.set_status(&format!("Error: {}", e)),
        }
        self.state.apply_load(result);
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // Left panel first so control changes show in the same frame
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui, &mut self.state);

                    match action {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Report
        egui::CentralPanel::default().show(ctx, |ui| {
            ReportViewer::show(ui, &self.state);
        });
    }
}
