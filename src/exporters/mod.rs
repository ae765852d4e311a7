//! Exporter implementations

pub mod json;
pub mod memory;
pub mod text;

pub use json::JsonExporter;
pub use memory::{InMemoryExporter, SharedBuffer};
pub use text::TextExporter;

pub use crate::core::Exporter;
