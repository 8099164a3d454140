//! Component Model
//! A single cylindrical part and the editable fields it carries.

use egui::Color32;
use std::fmt;

/// Default reference outer diameter (mm)
pub const DEFAULT_OUTER_DIAMETER: f64 = 100.0;
/// Default reference inner diameter (mm)
pub const DEFAULT_INNER_DIAMETER: f64 = 90.0;
/// Default coefficient of thermal expansion (1/°C)
pub const DEFAULT_CTE: f64 = 1e-5;
/// Default temperature (°C)
pub const DEFAULT_TEMPERATURE: f64 = 25.0;

/// The fixed set of components, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Sleeve,
    Solder,
    BackingTube,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 3] = [
        ComponentKind::Sleeve,
        ComponentKind::Solder,
        ComponentKind::BackingTube,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::Sleeve => "Sleeve",
            ComponentKind::Solder => "Solder",
            ComponentKind::BackingTube => "Backing Tube",
        }
    }

    /// Stroke color used for both circles of this component.
    pub fn color(self) -> Color32 {
        match self {
            ComponentKind::Sleeve => Color32::from_rgb(255, 165, 0), // Orange
            ComponentKind::Solder => Color32::from_rgb(0, 128, 0),   // Green
            ComponentKind::BackingTube => Color32::from_rgb(0, 0, 255), // Blue
        }
    }

    /// Position in the registry.
    pub fn index(self) -> usize {
        match self {
            ComponentKind::Sleeve => 0,
            ComponentKind::Solder => 1,
            ComponentKind::BackingTube => 2,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four user-editable fields of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    OuterDiameter,
    InnerDiameter,
    Cte,
    Temperature,
}

impl Field {
    /// Fields edited through a text entry (temperature uses a slider).
    pub const TEXT_ENTRY: [Field; 3] = [Field::OuterDiameter, Field::InnerDiameter, Field::Cte];

    pub fn label(self) -> &'static str {
        match self {
            Field::OuterDiameter => "Outer Diameter (mm):",
            Field::InnerDiameter => "Inner Diameter (mm):",
            Field::Cte => "CTE (1/°C):",
            Field::Temperature => "Temperature (°C):",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::OuterDiameter => "outer_diameter",
            Field::InnerDiameter => "inner_diameter",
            Field::Cte => "cte",
            Field::Temperature => "temperature",
        };
        f.write_str(name)
    }
}

/// One physical cylindrical part with its reference (unexpanded) dimensions.
///
/// No relationship between the diameters is enforced; inner may exceed outer
/// and negative values are stored as entered.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    kind: ComponentKind,
    pub outer_diameter: f64,
    pub inner_diameter: f64,
    pub cte: f64,
    pub temperature: f64,
}

impl Component {
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            outer_diameter: DEFAULT_OUTER_DIAMETER,
            inner_diameter: DEFAULT_INNER_DIAMETER,
            cte: DEFAULT_CTE,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn color(&self) -> Color32 {
        self.kind.color()
    }

    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::OuterDiameter => self.outer_diameter,
            Field::InnerDiameter => self.inner_diameter,
            Field::Cte => self.cte,
            Field::Temperature => self.temperature,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut f64 {
        match field {
            Field::OuterDiameter => &mut self.outer_diameter,
            Field::InnerDiameter => &mut self.inner_diameter,
            Field::Cte => &mut self.cte,
            Field::Temperature => &mut self.temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn new_component_has_defaults() {
        let component = Component::new(ComponentKind::Solder);

        assert_eq!(component.outer_diameter, 100.0);
        assert_eq!(component.inner_diameter, 90.0);
        assert_eq!(component.cte, 1e-5);
        assert_eq!(component.temperature, 25.0);
        assert_eq!(component.kind().name(), "Solder");
    }

    #[rstest]
    #[case(ComponentKind::Sleeve, "Sleeve", Color32::from_rgb(255, 165, 0))]
    #[case(ComponentKind::Solder, "Solder", Color32::from_rgb(0, 128, 0))]
    #[case(ComponentKind::BackingTube, "Backing Tube", Color32::from_rgb(0, 0, 255))]
    fn kind_metadata(#[case] kind: ComponentKind, #[case] name: &str, #[case] color: Color32) {
        assert_eq!(kind.name(), name);
        assert_eq!(kind.to_string(), name);
        assert_eq!(kind.color(), color);
    }

    #[test]
    fn kind_index_matches_order() {
        for (idx, kind) in ComponentKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), idx);
        }
    }

    #[rstest]
    #[case(Field::OuterDiameter)]
    #[case(Field::InnerDiameter)]
    #[case(Field::Cte)]
    #[case(Field::Temperature)]
    fn field_accessors_agree(#[case] field: Field) {
        let mut component = Component::new(ComponentKind::Sleeve);

        *component.get_mut(field) = -3.5;

        assert_eq!(component.get(field), -3.5);
    }
}
