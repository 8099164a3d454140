//! Circle Plotter Module
//! Draws the expanded components as concentric circles using egui_plot,
//! plus the color legend and the results table.

use crate::config::AppConfig;
use crate::model::ComponentKind;
use crate::thermal::{ExpansionReport, TableRow};
use egui::RichText;
use egui_plot::{Line, Plot, PlotBounds, PlotPoints};
use std::f64::consts::TAU;

/// Table column headings
const TABLE_HEADERS: [&str; 4] = [
    "Component",
    "Temp (°C)",
    "Outer Diameter (mm)",
    "Inner Diameter (mm)",
];

/// Draws report contents onto egui surfaces.
pub struct CirclePlotter;

impl CirclePlotter {
    /// Closed polyline approximating a circle centered at the origin.
    /// The first point is repeated at the end.
    pub fn circle_points(radius: f64, segments: usize) -> Vec<[f64; 2]> {
        let segments = segments.max(3);
        (0..=segments)
            .map(|i| {
                let t = if i == segments {
                    0.0
                } else {
                    TAU * i as f64 / segments as f64
                };
                [radius * t.cos(), radius * t.sin()]
            })
            .collect()
    }

    /// Draw the color legend (swatch + component name)
    pub fn draw_legend(ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for kind in ComponentKind::ALL {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
                ui.painter().circle_stroke(
                    rect.center(),
                    6.0,
                    egui::Stroke::new(2.0, kind.color()),
                );
                ui.label(RichText::new(kind.name()).size(13.0));
                ui.add_space(12.0);
            }
        });
    }

    /// Draw the concentric circles with a fixed square window of
    /// `[-bound, bound]` on both axes. Axes, grid and interaction are disabled.
    pub fn draw_circle_plot(ui: &mut egui::Ui, report: &ExpansionReport, config: &AppConfig) {
        let bound = report.viewport_bound;

        Plot::new("expansion_circles")
            .width(config.plot_size)
            .height(config.plot_size)
            .view_aspect(1.0)
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                for circle in &report.circles {
                    let points: PlotPoints =
                        Self::circle_points(circle.radius, config.circle_segments).into();
                    plot_ui.line(
                        Line::new(points)
                            .color(circle.color)
                            .width(config.circle_stroke_width)
                            .name(circle.kind.name()),
                    );
                }

                plot_ui.set_plot_bounds(PlotBounds::from_min_max([-bound, -bound], [bound, bound]));
            });
    }

    /// Draw the results table, one row per component
    pub fn draw_results_table(ui: &mut egui::Ui, rows: &[TableRow]) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("results_table")
                    .striped(true)
                    .min_col_width(90.0)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for header in TABLE_HEADERS {
                            ui.label(RichText::new(header).strong().size(12.0));
                        }
                        ui.end_row();

                        for row in rows {
                            let [name, temperature, outer, inner] = row.cells();
                            ui.label(RichText::new(name).size(12.0).color(row.kind.color()));
                            for cell in [temperature, outer, inner] {
                                ui.label(RichText::new(cell).size(12.0).monospace());
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}
