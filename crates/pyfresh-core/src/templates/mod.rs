//! Built-in project templates.
//!
//! Templates are data, not code: each is an ordered list of [`NodeSpec`]
//! blueprints owned by the static registry. The renderer consumes them
//! through [`registry::get`]; nothing here performs I/O.

mod content;
pub mod registry;
pub mod types;

pub use types::{FileContent, NodeSpec, TemplateDescriptor, TemplateKind};
