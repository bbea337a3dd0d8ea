//! Template type definitions.
//!
//! A template is pure data: an ordered list of node blueprints whose paths
//! and contents carry `{{token}}` placeholders. Adding a template means
//! adding a new descriptor to the registry, never new rendering code.

use std::fmt;

/// The built-in template set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Standard,
    Minimal,
    Cli,
    Web,
}

impl TemplateKind {
    /// Parse a template name (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "minimal" => Some(Self::Minimal),
            "cli" => Some(Self::Cli),
            "web" => Some(Self::Web),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Minimal => "minimal",
            Self::Cli => "cli",
            Self::Web => "web",
        }
    }

    /// All supported template kinds, in registry order.
    pub fn all() -> &'static [Self] {
        &[Self::Standard, Self::Minimal, Self::Cli, Self::Web]
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content template of a file node.
///
/// Most files share one body across tools. The project manifest is the
/// exception: poetry and uv manifests differ in overall syntax, not just in
/// the dependency block, so it carries one body per tool. Every variant is
/// itself a placeholder-token template.
#[derive(Debug, Clone, Copy)]
pub enum FileContent {
    Fixed(&'static str),
    PerTool {
        poetry: &'static str,
        uv: &'static str,
    },
}

/// One blueprint entry of a template: a directory or a file.
///
/// Paths are relative to the project root, `/`-separated, and may contain
/// placeholder tokens (e.g. `src/{{package_name}}`).
#[derive(Debug, Clone, Copy)]
pub enum NodeSpec {
    Directory { path: &'static str },
    File { path: &'static str, content: FileContent },
}

/// A named template: an ordered set of node blueprints.
///
/// Directories are listed before any file beneath them; the renderer
/// preserves this order, which the materializer relies on.
#[derive(Debug)]
pub struct TemplateDescriptor {
    pub kind: TemplateKind,
    pub description: &'static str,
    pub nodes: &'static [NodeSpec],
}
