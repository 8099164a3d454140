//! Thermal module - Expansion model and update pass

mod calculator;
mod engine;

pub use calculator::{ExpansionCalculator, REFERENCE_TEMPERATURE};
pub use engine::{ExpansionReport, TableRow, UpdateEngine};
