//! Built-in factory defaults.
//!
//! The single source of truth for author, python version, and per-template
//! dependency defaults. Initialized once per process and never written
//! afterwards; the resolver treats it as the lowest-precedence source.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::config::types::{AuthorSection, ConfigDocument, TemplateSection};
use crate::templates::TemplateKind;

pub const DEFAULT_AUTHOR_NAME: &str = "Your Name";
pub const DEFAULT_AUTHOR_EMAIL: &str = "your.email@example.com";
pub const DEFAULT_PYTHON_VERSION: &str = ">=3.11";

/// Project description used when no source supplies one.
pub const DEFAULT_DESCRIPTION: &str = "A Python project generated with pyfresh";

static DEFAULTS: LazyLock<ConfigDocument> = LazyLock::new(build_default_document);

/// The process-wide factory configuration document.
pub fn default_document() -> &'static ConfigDocument {
    &DEFAULTS
}

fn section(
    description: &str,
    dependencies: &[&str],
    poetry_dev: &[&str],
    uv_dev: &[&str],
) -> TemplateSection {
    let owned = |specs: &[&str]| specs.iter().map(|s| (*s).to_string()).collect::<Vec<_>>();

    let mut dev_dependencies = BTreeMap::new();
    dev_dependencies.insert("poetry".to_string(), owned(poetry_dev));
    dev_dependencies.insert("uv".to_string(), owned(uv_dev));

    TemplateSection {
        description: Some(description.to_string()),
        dependencies: owned(dependencies),
        dev_dependencies,
    }
}

fn build_default_document() -> ConfigDocument {
    let mut templates = BTreeMap::new();

    templates.insert(
        TemplateKind::Standard.as_str().to_string(),
        section(
            "Standard Python project with common tools",
            &["pandas>=2.3.1,<3.0.0"],
            &["pytest^7.4.0", "black^24.0.0", "mypy^1.8.0"],
            &["pytest>=7.4.0", "black>=24.0.0", "mypy>=1.8.0"],
        ),
    );
    templates.insert(
        TemplateKind::Minimal.as_str().to_string(),
        section(
            "Minimal Python project structure",
            &[],
            &["pytest^7.4.0"],
            &["pytest>=7.4.0"],
        ),
    );
    templates.insert(
        TemplateKind::Cli.as_str().to_string(),
        section(
            "CLI application template",
            &["click>=8.0.0"],
            &["pytest^7.4.0", "black^24.0.0"],
            &["pytest>=7.4.0", "black>=24.0.0"],
        ),
    );
    templates.insert(
        TemplateKind::Web.as_str().to_string(),
        section(
            "Web application template",
            &["fastapi>=0.100.0", "uvicorn>=0.20.0"],
            &["pytest^7.4.0", "black^24.0.0", "httpx^0.24.0"],
            &["pytest>=7.4.0", "black>=24.0.0", "httpx>=0.24.0"],
        ),
    );

    ConfigDocument {
        python_version: Some(DEFAULT_PYTHON_VERSION.to_string()),
        author: Some(AuthorSection {
            name: Some(DEFAULT_AUTHOR_NAME.to_string()),
            email: Some(DEFAULT_AUTHOR_EMAIL.to_string()),
        }),
        templates,
    }
}
