//! Project name validation.
//!
//! The project name becomes a directory name under the output directory, so
//! it must be a single safe path component. Rendered template paths reuse
//! [`is_safe_component`] for the same invariant.

use crate::config::errors::ConfigError;

/// Whether a string is usable as a single path component.
pub fn is_safe_component(component: &str) -> bool {
    !component.is_empty()
        && component != "."
        && component != ".."
        && !component.contains('/')
        && !component.contains('\\')
}

/// Normalize a raw project name: trim and map spaces to underscores.
pub fn normalize_project_name(raw: &str) -> String {
    raw.trim().replace(' ', "_")
}

/// Derive the Python package name from a validated project name.
pub fn package_name(project_name: &str) -> String {
    project_name.to_lowercase().replace('-', "_")
}

/// Validate a normalized project name.
pub fn validate_project_name(name: &str) -> Result<(), ConfigError> {
    let reason = if name.is_empty() {
        "cannot be empty"
    } else if name == "." || name == ".." {
        "must not be '.' or '..'"
    } else if name.contains('/') || name.contains('\\') {
        "must not contain path separators"
    } else {
        return Ok(());
    };

    Err(ConfigError::InvalidProjectName {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}
