//! Chart Plotter Module
//! Histogram bar charts and group tables drawn with egui_plot.

use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Plot};
use sick_leave_explorer::analysis::{Comparison, GroupView};
use sick_leave_explorer::data::Dataset;

pub const MEN_COLOR: Color32 = Color32::from_rgb(0, 191, 255);
pub const WOMEN_COLOR: Color32 = Color32::from_rgb(169, 234, 68);
pub const OLDER_COLOR: Color32 = Color32::from_rgb(0, 191, 33);
pub const YOUNGER_COLOR: Color32 = Color32::from_rgb(169, 234, 255);

pub const NOTICE_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

const PLOT_HEIGHT: f32 = 260.0;
const RAW_ROW_HEIGHT: f32 = 18.0;

/// Draws the dashboard's charts and tables.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Histogram of one group's sick days. `y_max` is shared by both charts of a comparison.
    pub fn draw_histogram(ui: &mut egui::Ui, id: &str, group: &GroupView, color: Color32, y_max: usize) {
        ui.label(RichText::new(&group.label).size(14.0).strong());

        let histogram = match &group.histogram {
            Ok(histogram) => histogram,
            Err(e) => {
                ui.add_sized(
                    [ui.available_width(), PLOT_HEIGHT],
                    egui::Label::new(RichText::new(e.to_string()).color(NOTICE_COLOR)),
                );
                return;
            }
        };

        let bars: Vec<Bar> = histogram
            .buckets()
            .map(|(left, right, count)| {
                Bar::new((left + right) / 2.0, count as f64)
                    .width(right - left)
                    .fill(color)
                    .stroke(egui::Stroke::new(1.0, Color32::BLACK))
            })
            .collect();

        Plot::new(id)
            .height(PLOT_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label("Number of days")
            .y_axis_label("Frequency")
            .include_y(0.0)
            .include_y(y_max as f64)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(color).name(&group.label));
            });
    }

    /// Draw statistics table
    pub fn draw_stats_table(ui: &mut egui::Ui, id: &str, comparison: &Comparison) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new(ui.make_persistent_id(id))
                    .striped(true)
                    .min_col_width(55.0)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        for header in ["Group", "N", "Of", "Share", "Mean", "Median", "Std"] {
                            ui.label(RichText::new(header).strong().size(11.0));
                        }
                        ui.end_row();

                        for group in [&comparison.first, &comparison.second] {
                            ui.label(RichText::new(&group.label).size(11.0));
                            ui.label(RichText::new(group.count.to_string()).size(11.0));
                            ui.label(RichText::new(group.population.to_string()).size(11.0));
                            ui.label(
                                RichText::new(Self::format_optional(
                                    group.share().map(|s| s * 100.0),
                                    "%",
                                ))
                                .size(11.0),
                            );

                            match &group.stats {
                                Ok(stats) => {
                                    ui.label(RichText::new(format!("{:.3}", stats.mean)).size(11.0));
                                    ui.label(RichText::new(format!("{:.3}", stats.median)).size(11.0));
                                    ui.label(
                                        RichText::new(Self::format_optional(stats.std, "")).size(11.0),
                                    );
                                }
                                Err(_) => {
                                    for _ in 0..3 {
                                        ui.label(RichText::new("-").size(11.0));
                                    }
                                }
                            }
                            ui.end_row();
                        }
                    });
            });
    }

    /// Raw records, virtualised so large files stay responsive.
    pub fn draw_raw_data(ui: &mut egui::Ui, dataset: &Dataset) {
        let records = dataset.records();

        egui::Grid::new("raw_data_header")
            .min_col_width(120.0)
            .show(ui, |ui| {
                for header in ["#", "Sick days", "Age", "Gender"] {
                    ui.label(RichText::new(header).strong());
                }
                ui.end_row();
            });

        egui::ScrollArea::vertical()
            .id_salt("raw_data")
            .max_height(300.0)
            .auto_shrink([false, true])
            .show_rows(ui, RAW_ROW_HEIGHT, records.len(), |ui, row_range| {
                egui::Grid::new("raw_data_rows")
                    .striped(true)
                    .min_col_width(120.0)
                    .start_row(row_range.start)
                    .show(ui, |ui| {
                        for i in row_range {
                            let record = &records[i];
                            ui.label(i.to_string());
                            ui.label(record.sick_days.to_string());
                            ui.label(record.age.to_string());
                            ui.label(record.gender.source_label());
                            ui.end_row();
                        }
                    });
            });
    }

    fn format_optional(value: Option<f64>, suffix: &str) -> String {
        value
            .map(|v| format!("{:.3}{}", v, suffix))
            .unwrap_or_else(|| "-".to_string())
    }
}
