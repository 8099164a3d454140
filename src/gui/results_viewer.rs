//! Results Viewer Widget
//! Central panel showing the circle plot above the results table.

use crate::charts::CirclePlotter;
use crate::config::AppConfig;
use crate::thermal::ExpansionReport;
use egui::RichText;

const SECTION_SPACING: f32 = 15.0;

/// Renders the latest expansion report.
#[derive(Default)]
pub struct ResultsViewer;

impl ResultsViewer {
    pub fn new() -> Self {
        Self
    }

    /// Draw the plot and table for a report
    pub fn show(&mut self, ui: &mut egui::Ui, report: &ExpansionReport, config: &AppConfig) {
        if report.rows.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("Expanded Diameters").size(18.0).strong());
                });
                ui.add_space(8.0);

                CirclePlotter::draw_legend(ui);
                ui.add_space(8.0);

                CirclePlotter::draw_circle_plot(ui, report, config);
                ui.add_space(SECTION_SPACING);

                ui.label(RichText::new("Actual Dimensions").size(14.0).strong());
                ui.add_space(5.0);
                CirclePlotter::draw_results_table(ui, &report.rows);
            });
    }
}
