//! Component Registry
//! Owns the canonical state of the three fixed components.

use crate::model::{Component, ComponentKind, Field};

/// Fixed-size, ordered registry: Sleeve, Solder, Backing Tube.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRegistry {
    components: [Component; 3],
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self {
            components: ComponentKind::ALL.map(Component::new),
        }
    }

    /// Components in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn get(&self, kind: ComponentKind) -> &Component {
        &self.components[kind.index()]
    }

    pub fn get_mut(&mut self, kind: ComponentKind) -> &mut Component {
        &mut self.components[kind.index()]
    }

    pub fn field(&self, kind: ComponentKind, field: Field) -> f64 {
        self.get(kind).get(field)
    }

    /// Write a field value. Returns true when the stored value changed.
    pub fn set_field(&mut self, kind: ComponentKind, field: Field, value: f64) -> bool {
        let slot = self.get_mut(kind).get_mut(field);
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }
}
