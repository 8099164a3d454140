//! Charts module - Circle plot and results table rendering

mod plotter;

pub use plotter::CirclePlotter;
