//! Application configuration.
//! Compiled-in defaults; nothing is read from or written to disk.

use crate::thermal::REFERENCE_TEMPERATURE;
use std::ops::RangeInclusive;

pub const APP_TITLE: &str = "Thermal Expansion Calculator v1.1";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Minimum width of the left input panel
    pub panel_width: f32,
    /// Maximum width the left input panel can be resized to
    pub panel_max_width: f32,
    /// Range of the temperature slider (°C)
    pub temperature_range: RangeInclusive<f64>,
    /// Side length of the square plot
    pub plot_size: f32,
    pub circle_stroke_width: f32,
    /// Polyline segments per circle
    pub circle_segments: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: APP_TITLE.to_string(),
            window_size: [1100.0, 760.0],
            min_window_size: [900.0, 640.0],
            panel_width: 340.0,
            panel_max_width: 380.0,
            temperature_range: REFERENCE_TEMPERATURE..=250.0,
            plot_size: 480.0,
            circle_stroke_width: 2.0,
            circle_segments: 256,
        }
    }
}
