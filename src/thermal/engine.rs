//! Update Engine
//! Recomputes the expanded dimensions of every component and produces the
//! report the plot and table are drawn from.

use crate::model::{ComponentKind, ComponentRegistry};
use crate::thermal::ExpansionCalculator;
use egui::Color32;
use log::debug;

/// Half-width of the visible window relative to the largest expanded outer diameter.
pub const VIEWPORT_SCALE: f64 = 0.6;

/// One row of the results table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub kind: ComponentKind,
    pub temperature: f64,
    pub new_outer_diameter: f64,
    pub new_inner_diameter: f64,
}

impl TableRow {
    /// Formatted cells: name, temperature (1 dp), outer and inner diameter (2 dp).
    pub fn cells(&self) -> [String; 4] {
        [
            self.kind.name().to_string(),
            format!("{:.1}", self.temperature),
            format!("{:.2}", self.new_outer_diameter),
            format!("{:.2}", self.new_inner_diameter),
        ]
    }
}

/// An unfilled circle centered at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleSpec {
    pub kind: ComponentKind,
    pub radius: f64,
    pub color: Color32,
}

/// Everything one update pass produces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpansionReport {
    pub rows: Vec<TableRow>,
    pub circles: Vec<CircleSpec>,
    pub max_outer_diameter: f64,
    pub viewport_bound: f64,
}

impl ExpansionReport {
    /// Run one update pass over the registry, in registry order.
    pub fn compute(registry: &ComponentRegistry) -> Self {
        let mut report = Self::default();

        for component in registry.iter() {
            let expanded = ExpansionCalculator::expand_component(component);

            report.max_outer_diameter = report.max_outer_diameter.max(expanded.outer_diameter);

            // Outer then inner, same color
            for diameter in [expanded.outer_diameter, expanded.inner_diameter] {
                report.circles.push(CircleSpec {
                    kind: component.kind(),
                    radius: diameter / 2.0,
                    color: component.color(),
                });
            }

            report.rows.push(TableRow {
                kind: component.kind(),
                temperature: component.temperature,
                new_outer_diameter: expanded.outer_diameter,
                new_inner_diameter: expanded.inner_diameter,
            });
        }

        report.viewport_bound = report.max_outer_diameter * VIEWPORT_SCALE;
        report
    }
}

/// Owns the latest report and schedules recomputation when inputs change.
#[derive(Debug)]
pub struct UpdateEngine {
    report: ExpansionReport,
    dirty: bool,
    passes: u64,
}

impl Default for UpdateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateEngine {
    /// Starts dirty so the first refresh performs the initial pass.
    pub fn new() -> Self {
        Self {
            report: ExpansionReport::default(),
            dirty: true,
            passes: 0,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Recompute if any input changed since the last pass.
    /// Returns true when a new report was produced and a redraw is needed.
    pub fn refresh(&mut self, registry: &ComponentRegistry) -> bool {
        if !self.dirty {
            return false;
        }

        // Replacing the report drops every previous shape and row
        self.report = ExpansionReport::compute(registry);
        self.dirty = false;
        self.passes += 1;

        debug!(
            "Update pass {}: max outer diameter {:.4}, viewport bound {:.4}",
            self.passes, self.report.max_outer_diameter, self.report.viewport_bound
        );
        true
    }

    pub fn report(&self) -> &ExpansionReport {
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;
    use rstest::{fixture, rstest};

    #[fixture]
    fn registry() -> ComponentRegistry {
        ComponentRegistry::new()
    }

    #[rstest]
    fn defaults_produce_three_identical_rows(registry: ComponentRegistry) {
        let report = ExpansionReport::compute(&registry);

        assert_eq!(report.rows.len(), 3);
        for row in &report.rows {
            let cells = row.cells();
            assert_eq!(cells[1], "25.0");
            assert_eq!(cells[2], "100.00");
            assert_eq!(cells[3], "90.00");
        }
        assert_eq!(report.max_outer_diameter, 100.0);
        assert_eq!(report.viewport_bound, 60.0);
    }

    #[rstest]
    fn rows_follow_registry_order(registry: ComponentRegistry) {
        let report = ExpansionReport::compute(&registry);

        let names: Vec<&str> = report.rows.iter().map(|r| r.kind.name()).collect();
        assert_eq!(names, vec!["Sleeve", "Solder", "Backing Tube"]);
    }

    #[rstest]
    fn heated_component_row_cells(mut registry: ComponentRegistry) {
        registry.set_field(ComponentKind::Solder, Field::Temperature, 125.0);

        let report = ExpansionReport::compute(&registry);

        let expected = ["Solder", "125.0", "100.10", "90.09"].map(String::from);
        assert_eq!(report.rows[1].cells(), expected);
    }

    #[rstest]
    fn two_circles_per_component_in_component_color(registry: ComponentRegistry) {
        let report = ExpansionReport::compute(&registry);

        assert_eq!(report.circles.len(), 6);
        for (pair, kind) in report.circles.chunks(2).zip(ComponentKind::ALL) {
            assert_eq!(pair[0].kind, kind);
            assert_eq!(pair[1].kind, kind);
            assert_eq!(pair[0].color, kind.color());
            assert_eq!(pair[1].color, kind.color());
            assert_eq!(pair[0].radius, 50.0);
            assert_eq!(pair[1].radius, 45.0);
        }
    }

    #[rstest]
    #[case(ComponentKind::Sleeve)]
    #[case(ComponentKind::Solder)]
    #[case(ComponentKind::BackingTube)]
    fn viewport_tracks_largest_outer_diameter(
        mut registry: ComponentRegistry,
        #[case] largest: ComponentKind,
    ) {
        registry.set_field(largest, Field::OuterDiameter, 140.0);
        registry.set_field(largest, Field::Temperature, 250.0);

        let report = ExpansionReport::compute(&registry);

        let expected = report
            .rows
            .iter()
            .map(|r| r.new_outer_diameter)
            .fold(f64::MIN, f64::max);
        let largest_row = &report.rows[largest.index()];
        assert_eq!(report.max_outer_diameter, expected);
        assert_eq!(report.max_outer_diameter, largest_row.new_outer_diameter);
        assert_eq!(report.viewport_bound, 0.6 * report.max_outer_diameter);
    }

    #[rstest]
    fn all_negative_outer_diameters_leave_max_at_zero(mut registry: ComponentRegistry) {
        for kind in ComponentKind::ALL {
            registry.set_field(kind, Field::OuterDiameter, -10.0);
        }

        let report = ExpansionReport::compute(&registry);

        assert_eq!(report.max_outer_diameter, 0.0);
        assert_eq!(report.viewport_bound, 0.0);
    }

    #[rstest]
    fn engine_runs_initial_pass_once(registry: ComponentRegistry) {
        let mut engine = UpdateEngine::new();
        assert!(engine.dirty);

        assert!(engine.refresh(&registry));
        assert!(!engine.refresh(&registry));

        assert_eq!(engine.passes, 1);
        assert_eq!(engine.report().rows.len(), 3);
    }

    #[rstest]
    fn engine_picks_up_changes_after_mark_dirty(mut registry: ComponentRegistry) {
        let mut engine = UpdateEngine::new();
        engine.refresh(&registry);

        registry.set_field(ComponentKind::BackingTube, Field::OuterDiameter, 200.0);
        engine.mark_dirty();

        assert!(engine.refresh(&registry));
        assert_eq!(engine.report().rows.len(), 3);
        assert_eq!(engine.report().max_outer_diameter, 200.0);
        assert_eq!(engine.report().viewport_bound, 120.0);
        assert_eq!(engine.passes, 2);
    }
}
