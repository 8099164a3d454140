//! Thermal Expansion Calculator
//!
//! Visualizes the diameters of three concentric cylindrical components after
//! linear thermal expansion, with a table of the computed dimensions.

mod charts;
mod config;
mod gui;
mod model;
mod thermal;

use anyhow::anyhow;
use config::AppConfig;
use eframe::egui;
use gui::ThermalApp;

fn main() -> anyhow::Result<()> {
    env_logger::init(); // Log to stderr, filtered by RUST_LOG

    let config = AppConfig::default();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size)
            .with_title(&config.title),
        ..Default::default()
    };

    // Run the application
    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(ThermalApp::new(cc, config)))),
    )
    .map_err(|err| anyhow!("Failed to run '{}': {}", title, err))
}
