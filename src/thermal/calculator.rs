//! Expansion Calculator Module
//! Linear isotropic thermal expansion of component diameters.

use crate::model::Component;

/// Temperature (°C) at which entered diameters are exact.
pub const REFERENCE_TEMPERATURE: f64 = 25.0;

/// Diameters of a component after expansion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpandedDimensions {
    pub outer_diameter: f64,
    pub inner_diameter: f64,
}

/// Applies the expansion model to components.
pub struct ExpansionCalculator;

impl ExpansionCalculator {
    /// Scale factor `1 + cte * (temperature - REFERENCE_TEMPERATURE)`.
    pub fn expansion_factor(cte: f64, temperature: f64) -> f64 {
        1.0 + cte * (temperature - REFERENCE_TEMPERATURE)
    }

    /// Expand a single dimension.
    pub fn expand(dimension: f64, cte: f64, temperature: f64) -> f64 {
        dimension * Self::expansion_factor(cte, temperature)
    }

    /// Expand both diameters of a component by the same factor.
    pub fn expand_component(component: &Component) -> ExpandedDimensions {
        ExpandedDimensions {
            outer_diameter: Self::expand(
                component.outer_diameter,
                component.cte,
                component.temperature,
            ),
            inner_diameter: Self::expand(
                component.inner_diameter,
                component.cte,
                component.temperature,
            ),
        }
    }
}
