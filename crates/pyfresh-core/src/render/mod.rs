//! Template rendering.
//!
//! Turns a template descriptor plus an effective configuration into a
//! [`RenderPlan`]: the concrete, ordered list of paths and final contents.
//! Pure except for reading the clock for the `{{date}}` token; nothing here
//! touches the file system.

pub mod errors;
pub mod operations;
pub mod placeholders;
pub mod types;

pub use errors::RenderError;
pub use operations::render;
pub use types::{NodeKind, PlanEntry, RenderPlan};
