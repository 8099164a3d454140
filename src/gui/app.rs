//! Thermal Expansion Main Application
//! Main window with control panel and results viewer.

use crate::config::AppConfig;
use crate::gui::{ControlPanel, ControlPanelAction, ResultsViewer};
use crate::model::ComponentRegistry;
use crate::thermal::UpdateEngine;
use egui::SidePanel;
use log::{debug, info};

/// Main application window. Owns all UI and model state.
pub struct ThermalApp {
    config: AppConfig,
    registry: ComponentRegistry,
    engine: UpdateEngine,
    control_panel: ControlPanel,
    results_viewer: ResultsViewer,
}

impl ThermalApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        let registry = ComponentRegistry::new();
        info!("Starting '{}' with {} components", config.title, registry.len());

        Self {
            control_panel: ControlPanel::new(&registry),
            results_viewer: ResultsViewer::new(),
            engine: UpdateEngine::new(),
            registry,
            config,
        }
    }

    /// React to a control panel action
    fn handle_action(&mut self, action: ControlPanelAction) {
        match action {
            ControlPanelAction::FieldChanged { kind, field, value } => {
                debug!("{} {} changed to {}", kind, field, value);
                self.engine.mark_dirty();
            }
            ControlPanelAction::None => {}
        }
    }
}

impl eframe::App for ThermalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(self.config.panel_width)
            .max_width(self.config.panel_max_width)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui, &mut self.registry, &self.config);
                    self.handle_action(action);
                });
            });

        // Recompute once per tick, before the outputs are drawn
        if self.engine.refresh(&self.registry) {
            ctx.request_repaint();
        }

        // Central panel - Results Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.results_viewer.show(ui, self.engine.report(), &self.config);
        });
    }
}
