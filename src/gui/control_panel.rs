//! Control Panel Widget
//! Left side panel with the data source and every analysis control.

use egui::{Color32, ComboBox, RichText, Slider};
use sick_leave_explorer::analysis::DashboardState;
use sick_leave_explorer::data::Gender;

/// Left side control panel with file selection and analysis controls.
pub struct ControlPanel {
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the control panel. Slider changes are written straight into `state`.
    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut DashboardState) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🩺 Sick-Leave Explorer")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Gender and age hypotheses")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== CSV File Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let name = state
                        .dataset()
                        .map(|d| d.source_name().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(name).size(12.0).color(
                        if state.dataset().is_some() {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = ControlPanelAction::BrowseCsv;
                        }
                    });
                });

                if let Some(dataset) = state.dataset() {
                    ui.label(
                        RichText::new(format!(
                            "{} rows, decoded as {}",
                            dataset.len(),
                            dataset.encoding()
                        ))
                        .size(11.0)
                        .color(Color32::GRAY),
                    );
                }
                ui.label(
                    RichText::new("or drop a CSV file onto the window")
                        .size(10.0)
                        .color(Color32::GRAY),
                );
            });

        ui.add_space(8.0);
        ui.checkbox(&mut state.controls.show_raw_data, "Show raw data");

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        let days_range = state.config.days_range.clone();
        let age_range = state.age_range();

        ui.add_enabled_ui(state.dataset().is_some(), |ui| {
            // ===== Gender Section =====
            ui.label(RichText::new("⚤ Gender Analysis").size(14.0).strong());
            ui.add_space(5.0);
            ui.add(
                Slider::new(&mut state.controls.gender_min_days, days_range.clone())
                    .text("Sick days more than"),
            );

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            // ===== Age Section =====
            ui.label(RichText::new("📅 Age Analysis").size(14.0).strong());
            ui.add_space(5.0);
            ui.add(
                Slider::new(&mut state.controls.age_min_days, days_range)
                    .text("Sick days more than"),
            );
            if let Some(age_range) = age_range {
                ui.add(Slider::new(&mut state.controls.age_cutoff, age_range).text("Age cutoff"));
            }

            ui.horizontal(|ui| {
                ui.label("Gender:");
                let selected = match state.controls.age_gender_filter {
                    Some(gender) => gender.display_name(),
                    None => "All",
                };
                ComboBox::from_id_salt("age_gender_filter")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut state.controls.age_gender_filter, None, "All");
                        for gender in [Gender::Male, Gender::Female] {
                            ui.selectable_value(
                                &mut state.controls.age_gender_filter,
                                Some(gender),
                                gender.display_name(),
                            );
                        }
                    });
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        let status_color = if state.load_error().is_some() {
            Color32::from_rgb(220, 53, 69)
        } else if state.dataset().is_some() {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
}
