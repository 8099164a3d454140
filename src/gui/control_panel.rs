//! Control Panel Widget
//! Left side panel with the inputs for every component.

use crate::config::AppConfig;
use crate::gui::NumericEntry;
use crate::model::{ComponentKind, ComponentRegistry, Field};
use egui::{Color32, RichText};

const LABEL_WIDTH: f32 = 150.0;
const ENTRY_WIDTH: f32 = 110.0;

/// Left side control panel with one group per component.
pub struct ControlPanel {
    /// Text entries indexed by component, then by `Field::TEXT_ENTRY` position
    entries: [[NumericEntry; 3]; 3],
}

impl ControlPanel {
    pub fn new(registry: &ComponentRegistry) -> Self {
        Self {
            entries: ComponentKind::ALL.map(|kind| {
                Field::TEXT_ENTRY.map(|field| NumericEntry::new(registry.field(kind, field)))
            }),
        }
    }

    /// Draw the control panel
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        registry: &mut ComponentRegistry,
        config: &AppConfig,
    ) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🌡 Thermal Expansion")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(RichText::new(&config.title).size(11.0).color(Color32::GRAY));
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        for kind in ComponentKind::ALL {
            let heading = RichText::new(kind.name()).size(14.0).strong();
            ui.label(heading.color(kind.color()));
            ui.add_space(4.0);

            egui::Frame::none()
                .fill(ui.visuals().widgets.noninteractive.bg_fill)
                .rounding(5.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    egui::Grid::new(("component_inputs", kind.index()))
                        .num_columns(2)
                        .spacing([8.0, 6.0])
                        .show(ui, |ui| {
                            for (pos, field) in Field::TEXT_ENTRY.into_iter().enumerate() {
                                ui.add_sized(
                                    [LABEL_WIDTH, 20.0],
                                    egui::Label::new(field.label()),
                                );
                                let entry = &mut self.entries[kind.index()][pos];
                                if let Some(value) = entry.show(ui, ENTRY_WIDTH) {
                                    if registry.set_field(kind, field, value) {
                                        action = ControlPanelAction::FieldChanged {
                                            kind,
                                            field,
                                            value,
                                        };
                                    }
                                }
                                ui.end_row();
                            }

                            ui.add_sized(
                                [LABEL_WIDTH, 20.0],
                                egui::Label::new(Field::Temperature.label()),
                            );
                            ui.horizontal(|ui| {
                                let mut temperature = registry.field(kind, Field::Temperature);
                                let response = ui.add(
                                    egui::Slider::new(
                                        &mut temperature,
                                        config.temperature_range.clone(),
                                    )
                                    .show_value(false),
                                );
                                ui.label(
                                    RichText::new(format!("{:.2}", temperature)).monospace(),
                                );

                                if response.changed()
                                    && registry.set_field(kind, Field::Temperature, temperature)
                                {
                                    action = ControlPanelAction::FieldChanged {
                                        kind,
                                        field: Field::Temperature,
                                        value: temperature,
                                    };
                                }
                            });
                            ui.end_row();
                        });
                });

            ui.add_space(10.0);
        }

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    FieldChanged {
        kind: ComponentKind,
        field: Field,
        value: f64,
    },
}
