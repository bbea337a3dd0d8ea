//! pyfresh-core: Core library for Python project generation
//!
//! This library resolves configuration from built-in defaults, an optional
//! config file, and CLI overrides, renders a named template into a concrete
//! plan, and materializes that plan to disk (or a dry-run preview). It is
//! used by the pyfresh CLI and can be embedded as a library.
//!
//! # Main Entry Points
//!
//! - [`project::generate`] - run one full generation
//! - [`config`] - document loading and resolution
//! - [`templates`] - the built-in template registry
//! - [`render`] - placeholder substitution and render plans

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod project;
pub mod render;
pub mod templates;

// Re-export commonly used types at crate root for convenience
pub use config::types::{ConfigDocument, EffectiveConfig, Overrides, ToolKind};
pub use config::{ConfigError, defaults, loading, resolve};
pub use errors::{PyfreshError, PyfreshResult};
pub use project::types::{GenerateOutcome, GenerateRequest, MaterializeResult, PreviewEntry};
pub use project::{GenerateError, ProjectError, generate};
pub use render::types::{NodeKind, PlanEntry, RenderPlan};
pub use render::{RenderError, render};
pub use templates::{TemplateDescriptor, TemplateKind, registry};

// Re-export logging initialization
pub use logging::init_logging;
