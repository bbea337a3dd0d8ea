//! # Configuration System
//!
//! TOML configuration for the pyfresh engine.
//!
//! ## Sources and precedence
//!
//! Configuration is resolved per field from (highest priority first):
//! 1. **CLI overrides** - command-line flags
//! 2. **Config document** - the file passed via `--config`, plus
//!    `PYFRESH_AUTHOR_NAME` / `PYFRESH_AUTHOR_EMAIL` environment overrides
//! 3. **Built-in defaults** - the factory configuration in [`defaults`]
//!
//! ## Example config file
//!
//! ```toml
//! [author]
//! name = "Jane Doe"
//! email = "jane@example.com"
//!
//! [templates.standard]
//! dependencies = ["click>=8.0.0"]
//!
//! [templates.standard.dev_dependencies]
//! poetry = ["ruff^0.4.0"]
//! uv = ["ruff>=0.4.0"]
//! ```
//!
//! Loading performs all I/O ([`loading::load`]); resolution is pure
//! ([`resolve::resolve`]).

pub mod defaults;
pub mod errors;
pub mod loading;
pub mod resolve;
pub mod types;
pub mod validation;

// Public API exports
pub use errors::ConfigError;
pub use types::{AuthorSection, ConfigDocument, EffectiveConfig, Overrides, TemplateSection, ToolKind};
