//! GUI module - User interface components

mod app;
mod control_panel;
mod numeric_entry;
mod results_viewer;

pub use app::ThermalApp;
pub use control_panel::{ControlPanel, ControlPanelAction};
pub use numeric_entry::NumericEntry;
pub use results_viewer::ResultsViewer;
