//! Model module - Component registry

mod component;
mod registry;

pub use component::{Component, ComponentKind, Field};
pub use registry::ComponentRegistry;
