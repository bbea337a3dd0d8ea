//! Configuration resolution.
//!
//! Merges the built-in defaults, the loaded document, and the CLI overrides
//! into one [`EffectiveConfig`]. Precedence per field, highest wins:
//!
//! 1. explicit CLI override
//! 2. value from the loaded document (matching template section; the global
//!    `[author]` section for author fields)
//! 3. built-in default for the selected template
//! 4. global built-in default
//!
//! Resolution is pure: no I/O, no environment reads, inputs unmutated.

use std::path::PathBuf;

use crate::config::defaults::{DEFAULT_DESCRIPTION, DEFAULT_PYTHON_VERSION};
use crate::config::errors::ConfigError;
use crate::config::types::{ConfigDocument, EffectiveConfig, Overrides, TemplateSection, ToolKind};
use crate::config::validation;
use crate::templates::TemplateKind;

/// Resolve the effective configuration for one generation run.
///
/// # Errors
///
/// Fails with [`ConfigError::InvalidTemplate`], [`ConfigError::InvalidTool`],
/// or [`ConfigError::InvalidProjectName`] before any rendering or I/O is
/// attempted.
pub fn resolve(
    defaults: &ConfigDocument,
    document: &ConfigDocument,
    overrides: &Overrides,
) -> Result<EffectiveConfig, ConfigError> {
    let template_name = overrides.template.as_deref().unwrap_or("standard");
    let template =
        TemplateKind::parse(template_name).ok_or_else(|| ConfigError::InvalidTemplate {
            name: template_name.to_string(),
        })?;

    let tool_name = overrides.tool.as_deref().unwrap_or("poetry");
    let tool = ToolKind::parse(tool_name).ok_or_else(|| ConfigError::InvalidTool {
        name: tool_name.to_string(),
    })?;

    let project_name = validation::normalize_project_name(&overrides.project_name);
    validation::validate_project_name(&project_name)?;
    let package_name = validation::package_name(&project_name);

    let default_section = defaults.templates.get(template.as_str());
    let document_section = document.templates.get(template.as_str());

    let author_name = overrides
        .author
        .clone()
        .or_else(|| document.author.as_ref().and_then(|a| a.name.clone()))
        .or_else(|| defaults.author.as_ref().and_then(|a| a.name.clone()));

    let author_email = overrides
        .email
        .clone()
        .or_else(|| document.author.as_ref().and_then(|a| a.email.clone()))
        .or_else(|| defaults.author.as_ref().and_then(|a| a.email.clone()));

    let description = overrides
        .description
        .clone()
        .or_else(|| document_section.and_then(|s| s.description.clone()))
        .or_else(|| default_section.and_then(|s| s.description.clone()))
        .or_else(|| Some(DEFAULT_DESCRIPTION.to_string()));

    let python_version = document
        .python_version
        .clone()
        .or_else(|| defaults.python_version.clone())
        .unwrap_or_else(|| DEFAULT_PYTHON_VERSION.to_string());

    let dependencies = merge_specifiers(
        dependency_list(default_section),
        dependency_list(document_section),
    );

    let dev_dependencies = merge_specifiers(
        dev_dependency_list(default_section, tool),
        dev_dependency_list(document_section, tool),
    );

    Ok(EffectiveConfig {
        project_name,
        package_name,
        author_name,
        author_email,
        description,
        template,
        tool,
        python_version,
        dependencies,
        dev_dependencies,
        output_dir: overrides
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(".")),
        force: overrides.force,
        dry_run: overrides.dry_run,
    })
}

fn dependency_list(section: Option<&TemplateSection>) -> &[String] {
    section.map(|s| s.dependencies.as_slice()).unwrap_or(&[])
}

fn dev_dependency_list(section: Option<&TemplateSection>, tool: ToolKind) -> &[String] {
    section
        .and_then(|s| s.dev_dependencies.get(tool.as_str()))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Concatenate specifier lists, dropping later entries whose package name
/// (case-insensitive, version qualifier ignored) already appeared.
pub fn merge_specifiers(base: &[String], additions: &[String]) -> Vec<String> {
    let mut merged = Vec::with_capacity(base.len() + additions.len());
    let mut seen: Vec<String> = Vec::new();

    for spec in base.iter().chain(additions) {
        let name = specifier_name(spec).to_lowercase();
        if !seen.contains(&name) {
            seen.push(name);
            merged.push(spec.clone());
        }
    }

    merged
}

/// Split a specifier into (package name, version qualifier).
///
/// `"click>=8.0.0"` -> `("click", ">=8.0.0")`; a bare name has an empty
/// qualifier.
pub fn split_specifier(spec: &str) -> (&str, &str) {
    match spec.find(|c: char| "<>=!~^[(@".contains(c) || c.is_whitespace()) {
        Some(index) => {
            let (name, qualifier) = spec.split_at(index);
            (name.trim(), qualifier.trim())
        }
        None => (spec.trim(), ""),
    }
}

fn specifier_name(spec: &str) -> &str {
    split_specifier(spec).0
}
