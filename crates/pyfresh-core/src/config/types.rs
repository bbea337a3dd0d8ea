//! Configuration type definitions.
//!
//! [`ConfigDocument`] mirrors the TOML config file schema. [`Overrides`]
//! carries the CLI's partial configuration. [`EffectiveConfig`] is the fully
//! resolved record for one generation run; it is created once by the
//! resolver and never mutated afterwards.
//!
//! # Example Configuration
//!
//! ```toml
//! python_version = ">=3.12"
//!
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

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::templates::TemplateKind;

/// The supported dependency management tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Poetry,
    Uv,
}

impl ToolKind {
    /// Parse a tool name (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "poetry" => Some(Self::Poetry),
            "uv" => Some(Self::Uv),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Poetry => "poetry",
            Self::Uv => "uv",
        }
    }

    /// Shell command that installs the generated project's dependencies.
    pub fn install_command(&self) -> &'static str {
        match self {
            Self::Poetry => "poetry install",
            Self::Uv => "uv sync",
        }
    }

    /// Shell command that runs the generated package as a module.
    pub fn run_command(&self, package_name: &str) -> String {
        match self {
            Self::Poetry => format!("poetry run python -m {package_name}"),
            Self::Uv => format!("uv run python -m {package_name}"),
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration document loaded from a TOML config file.
///
/// All sections are optional; an absent config file is represented by
/// `ConfigDocument::default()`. Read-only once loaded, never persisted back.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigDocument {
    /// Python version requirement for generated projects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python_version: Option<String>,

    /// Global author information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorSection>,

    /// Per-template additions, keyed by template name.
    #[serde(default)]
    pub templates: BTreeMap<String, TemplateSection>,
}

/// The `[author]` section of a config document.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AuthorSection {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

/// One `[templates.<name>]` section of a config document.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TemplateSection {
    /// Project description used when the CLI supplies none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Version-qualified dependency specifiers, e.g. `"click>=8.0.0"`.
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Dev dependency specifiers, keyed by tool name.
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, Vec<String>>,
}

/// CLI-supplied overrides: a partial effective configuration.
///
/// `template` and `tool` stay strings here; the resolver owns the
/// string-to-enum boundary so that unknown names surface as resolver errors.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub project_name: String,
    pub author: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub template: Option<String>,
    pub tool: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub force: bool,
    pub dry_run: bool,
}

/// The fully resolved configuration for one generation run.
///
/// Created once per invocation by the resolver; copy-on-change only.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveConfig {
    /// Validated project name (directory name under `output_dir`).
    pub project_name: String,
    /// Python package name derived from the project name.
    pub package_name: String,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub description: Option<String>,
    pub template: TemplateKind,
    pub tool: ToolKind,
    /// Python version requirement, e.g. `">=3.11"`.
    pub python_version: String,
    /// Merged, de-duplicated dependency specifiers in resolution order.
    pub dependencies: Vec<String>,
    /// Merged dev dependency specifiers for the selected tool.
    pub dev_dependencies: Vec<String>,
    pub output_dir: PathBuf,
    pub force: bool,
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_kind_parse() {
        assert_eq!(ToolKind::parse("poetry"), Some(ToolKind::Poetry));
        assert_eq!(ToolKind::parse("UV"), Some(ToolKind::Uv));
        assert_eq!(ToolKind::parse("pip"), None);
    }

    #[test]
    fn test_tool_commands() {
        assert_eq!(ToolKind::Poetry.install_command(), "poetry install");
        assert_eq!(ToolKind::Uv.install_command(), "uv sync");
        assert_eq!(
            ToolKind::Poetry.run_command("my_pkg"),
            "poetry run python -m my_pkg"
        );
        assert_eq!(ToolKind::Uv.run_command("my_pkg"), "uv run python -m my_pkg");
    }

    #[test]
    fn test_document_deserialize() {
        let document: ConfigDocument = toml::from_str(
            r#"
python_version = ">=3.12"

[author]
name = "Jane Doe"
email = "jane@example.com"

[templates.standard]
dependencies = ["click>=8.0.0"]

[templates.standard.dev_dependencies]
poetry = ["ruff^0.4.0"]
"#,
        )
        .unwrap();

        assert_eq!(document.python_version.as_deref(), Some(">=3.12"));
        let author = document.author.unwrap();
        assert_eq!(author.name.as_deref(), Some("Jane Doe"));
        let standard = &document.templates["standard"];
        assert_eq!(standard.dependencies, vec!["click>=8.0.0"]);
        assert_eq!(standard.dev_dependencies["poetry"], vec!["ruff^0.4.0"]);
    }

    #[test]
    fn test_empty_document_deserialize() {
        let document: ConfigDocument = toml::from_str("").unwrap();
        assert_eq!(document, ConfigDocument::default());
        assert!(document.templates.is_empty());
    }

    #[test]
    fn test_document_serialization_roundtrip() {
        let mut document = ConfigDocument::default();
        document.author = Some(AuthorSection {
            name: Some("Jane".to_string()),
            email: None,
        });
        let toml_str = toml::to_string(&document).unwrap();
        let parsed: ConfigDocument = toml::from_str(&toml_str).unwrap();
        assert_eq!(document, parsed);
    }
}
