//! Report Viewer Widget
//! Central scrollable panel: raw data, histograms, percentage comparison and
//! t-test narrative for both analyses.

use crate::charts::{
    ChartPlotter, MEN_COLOR, NOTICE_COLOR, OLDER_COLOR, WOMEN_COLOR, YOUNGER_COLOR,
};
use egui::{Color32, RichText, ScrollArea};
use sick_leave_explorer::analysis::{Comparison, DashboardState};

const SECTION_SPACING: f32 = 15.0;

/// Draws the report for the current dashboard state.
pub struct ReportViewer;

impl ReportViewer {
    pub fn show(ui: &mut egui::Ui, state: &DashboardState) {
        let (Some(dataset), Some(report)) = (state.dataset(), state.report()) else {
            ui.centered_and_justified(|ui| {
                let text = state.load_error().unwrap_or("No Data");
                ui.label(RichText::new(text).size(20.0));
            });
            return;
        };

        let headroom = state.config.histogram_headroom;

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if state.controls.show_raw_data {
                    ui.heading("Raw data");
                    ChartPlotter::draw_raw_data(ui, dataset);
                    ui.add_space(SECTION_SPACING);
                    ui.separator();
                }

                Self::draw_comparison(ui, "gender", &report.gender, (MEN_COLOR, WOMEN_COLOR), headroom);
                ui.add_space(SECTION_SPACING);
                ui.separator();
                Self::draw_comparison(ui, "age", &report.age, (OLDER_COLOR, YOUNGER_COLOR), headroom);
            });
    }

    fn draw_comparison(
        ui: &mut egui::Ui,
        id: &str,
        comparison: &Comparison,
        colors: (Color32, Color32),
        headroom: usize,
    ) {
        ui.heading(&comparison.title);
        ui.add_space(8.0);

        let y_max = comparison.y_axis_max(headroom);
        ui.columns(2, |columns| {
            ChartPlotter::draw_histogram(
                &mut columns[0],
                &format!("{id}_first"),
                &comparison.first,
                colors.0,
                y_max,
            );
            ChartPlotter::draw_histogram(
                &mut columns[1],
                &format!("{id}_second"),
                &comparison.second,
                colors.1,
                y_max,
            );
        });

        ui.add_space(8.0);
        ChartPlotter::draw_stats_table(ui, &format!("{id}_stats"), comparison);

        ui.add_space(10.0);
        ui.label(RichText::new("Share of sick-leave takers").size(14.0).strong());
        let sentence = comparison.percent_sentence();
        if comparison.percent_difference.is_ok() {
            ui.label(sentence);
        } else {
            ui.label(RichText::new(sentence).color(NOTICE_COLOR));
        }

        ui.add_space(10.0);
        ui.label(RichText::new("Two-sample t-test").size(14.0).strong());
        ui.monospace(format!(
            "H0: {}\nH1: {}",
            comparison.hypotheses.null, comparison.hypotheses.alternative
        ));

        match &comparison.t_test {
            Ok(result) => {
                ui.monospace(format!(
                    "{}:\nt-statistic: {:.2}\np-value: {:.4}",
                    comparison.test_label, result.t_statistic, result.p_value
                ));
                let accepted = comparison.accepted_hypothesis().unwrap_or_default();
                let significant = comparison.decision().is_some_and(|d| d.is_significant());
                ui.monospace(format!(
                    "Significance level: {}",
                    comparison.significance_level
                ));
                ui.label(
                    RichText::new(format!("Accepted hypothesis: {accepted}")).color(if significant {
                        NOTICE_COLOR
                    } else {
                        Color32::from_rgb(40, 167, 69)
                    }),
                );
            }
            Err(e) => {
                ui.label(RichText::new(format!("Test not run: {e}")).color(NOTICE_COLOR));
            }
        }
    }
}
