//! Template registry: the four built-in templates as static data.
//!
//! Descriptors are constructed once at process start and never modified,
//! so concurrent lookups from library embedders are safe.

use super::content;
use super::types::{FileContent, NodeSpec, TemplateDescriptor, TemplateKind};

const PYPROJECT: FileContent = FileContent::PerTool {
    poetry: content::PYPROJECT_POETRY,
    uv: content::PYPROJECT_UV,
};

const MAKEFILE: FileContent = FileContent::PerTool {
    poetry: content::MAKEFILE_POETRY,
    uv: content::MAKEFILE_UV,
};

static STANDARD: TemplateDescriptor = TemplateDescriptor {
    kind: TemplateKind::Standard,
    description: "Standard Python project with common tools",
    nodes: &[
        NodeSpec::Directory { path: "src/{{package_name}}" },
        NodeSpec::Directory { path: "tests" },
        NodeSpec::File { path: ".gitignore", content: FileContent::Fixed(content::GITIGNORE) },
        NodeSpec::File { path: "README.md", content: FileContent::Fixed(content::README) },
        NodeSpec::File { path: "Makefile", content: MAKEFILE },
        NodeSpec::File {
            path: "src/{{package_name}}/main.py",
            content: FileContent::Fixed(content::MAIN_PY),
        },
        NodeSpec::File {
            path: "tests/test_main.py",
            content: FileContent::Fixed(content::TEST_MAIN_PY),
        },
        NodeSpec::File { path: "pyproject.toml", content: PYPROJECT },
    ],
};

static MINIMAL: TemplateDescriptor = TemplateDescriptor {
    kind: TemplateKind::Minimal,
    description: "Minimal Python project structure",
    nodes: &[
        NodeSpec::Directory { path: "src/{{package_name}}" },
        NodeSpec::Directory { path: "tests" },
        NodeSpec::File { path: ".gitignore", content: FileContent::Fixed(content::GITIGNORE) },
        NodeSpec::File { path: "README.md", content: FileContent::Fixed(content::README) },
        NodeSpec::File {
            path: "src/{{package_name}}/main.py",
            content: FileContent::Fixed(content::MAIN_PY),
        },
        NodeSpec::File { path: "pyproject.toml", content: PYPROJECT },
    ],
};

static CLI: TemplateDescriptor = TemplateDescriptor {
    kind: TemplateKind::Cli,
    description: "CLI application template",
    nodes: &[
        NodeSpec::Directory { path: "src/{{package_name}}" },
        NodeSpec::Directory { path: "tests" },
        NodeSpec::File { path: ".gitignore", content: FileContent::Fixed(content::GITIGNORE) },
        NodeSpec::File { path: "README.md", content: FileContent::Fixed(content::README) },
        NodeSpec::File { path: "Makefile", content: MAKEFILE },
        NodeSpec::File {
            path: "src/{{package_name}}/cli.py",
            content: FileContent::Fixed(content::CLI_PY),
        },
        NodeSpec::File {
            path: "tests/test_main.py",
            content: FileContent::Fixed(content::TEST_CLI_PY),
        },
        NodeSpec::File { path: "pyproject.toml", content: PYPROJECT },
    ],
};

static WEB: TemplateDescriptor = TemplateDescriptor {
    kind: TemplateKind::Web,
    description: "Web application template",
    nodes: &[
        NodeSpec::Directory { path: "src/{{package_name}}" },
        NodeSpec::Directory { path: "tests" },
        NodeSpec::File { path: ".gitignore", content: FileContent::Fixed(content::GITIGNORE) },
        NodeSpec::File { path: "README.md", content: FileContent::Fixed(content::README) },
        NodeSpec::File { path: "Makefile", content: MAKEFILE },
        NodeSpec::File {
            path: "src/{{package_name}}/app.py",
            content: FileContent::Fixed(content::APP_PY),
        },
        NodeSpec::File {
            path: "tests/test_main.py",
            content: FileContent::Fixed(content::TEST_APP_PY),
        },
        NodeSpec::File { path: "pyproject.toml", content: PYPROJECT },
    ],
};

/// Get the descriptor for a template kind.
///
/// Infallible: the string-to-kind boundary already rejected unknown names,
/// so every `TemplateKind` has a registered descriptor.
pub fn get(kind: TemplateKind) -> &'static TemplateDescriptor {
    match kind {
        TemplateKind::Standard => &STANDARD,
        TemplateKind::Minimal => &MINIMAL,
        TemplateKind::Cli => &CLI,
        TemplateKind::Web => &WEB,
    }
}

/// All registered descriptors, in registry order.
pub fn all() -> impl Iterator<Item = &'static TemplateDescriptor> {
    TemplateKind::all().iter().map(|kind| get(*kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_descriptor() {
        for kind in TemplateKind::all() {
            let descriptor = get(*kind);
            assert_eq!(descriptor.kind, *kind);
            assert!(!descriptor.nodes.is_empty());
        }
    }

    #[test]
    fn test_directories_precede_contained_files() {
        for descriptor in all() {
            let mut seen_dirs: Vec<&str> = Vec::new();
            for node in descriptor.nodes {
                match *node {
                    NodeSpec::Directory { path } => seen_dirs.push(path),
                    NodeSpec::File { path, .. } => {
                        if let Some((parent, _)) = path.rsplit_once('/') {
                            assert!(
                                seen_dirs.iter().any(|d| *d == parent),
                                "{}: file '{}' listed before its directory",
                                descriptor.kind,
                                path
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_every_template_ships_a_manifest() {
        for descriptor in all() {
            assert!(
                descriptor.nodes.iter().any(|node| matches!(
                    node,
                    NodeSpec::File { path, .. } if *path == "pyproject.toml"
                )),
                "{} has no pyproject.toml",
                descriptor.kind
            );
        }
    }

    #[test]
    fn test_minimal_has_no_makefile() {
        let minimal = get(TemplateKind::Minimal);
        assert!(
            !minimal
                .nodes
                .iter()
                .any(|node| matches!(node, NodeSpec::File { path, .. } if *path == "Makefile"))
        );
    }
}
