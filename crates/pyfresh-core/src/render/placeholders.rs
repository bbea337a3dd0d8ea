//! Placeholder tokens and substitution.
//!
//! The token set is a closed enum mapped explicitly to [`EffectiveConfig`]
//! fields. Anything else inside `{{...}}` is an error - a template typo must
//! never ship as literal `{{token}}` text in a generated project.

use crate::config::resolve::split_specifier;
use crate::config::types::{EffectiveConfig, ToolKind};
use crate::render::errors::RenderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    ProjectName,
    PackageName,
    AuthorName,
    AuthorEmail,
    Description,
    PythonVersion,
    Dependencies,
    DevDependencies,
    InstallCommand,
    RunCommand,
    Date,
}

impl Placeholder {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "project_name" => Some(Self::ProjectName),
            "package_name" => Some(Self::PackageName),
            "author_name" => Some(Self::AuthorName),
            "author_email" => Some(Self::AuthorEmail),
            "description" => Some(Self::Description),
            "python_version" => Some(Self::PythonVersion),
            "dependencies" => Some(Self::Dependencies),
            "dev_dependencies" => Some(Self::DevDependencies),
            "install_command" => Some(Self::InstallCommand),
            "run_command" => Some(Self::RunCommand),
            "date" => Some(Self::Date),
            _ => None,
        }
    }

    fn expand(&self, config: &EffectiveConfig) -> String {
        match self {
            Self::ProjectName => config.project_name.clone(),
            Self::PackageName => config.package_name.clone(),
            Self::AuthorName => config.author_name.clone().unwrap_or_default(),
            Self::AuthorEmail => config.author_email.clone().unwrap_or_default(),
            Self::Description => config.description.clone().unwrap_or_default(),
            Self::PythonVersion => config.python_version.clone(),
            Self::Dependencies => dependency_block(&config.dependencies, config.tool),
            Self::DevDependencies => dependency_block(&config.dev_dependencies, config.tool),
            Self::InstallCommand => config.tool.install_command().to_string(),
            Self::RunCommand => config.tool.run_command(&config.package_name),
            Self::Date => chrono::Local::now().format("%Y-%m-%d").to_string(),
        }
    }
}

/// Render a specifier list as a tool-appropriate manifest block.
///
/// One specifier per line in stored order; an empty list renders as an
/// empty block. Poetry manifests want `name = "requirement"` entries, uv
/// manifests want quoted array elements.
fn dependency_block(specifiers: &[String], tool: ToolKind) -> String {
    let lines: Vec<String> = specifiers
        .iter()
        .map(|spec| match tool {
            ToolKind::Poetry => {
                let (name, qualifier) = split_specifier(spec);
                let requirement = if qualifier.is_empty() { "*" } else { qualifier };
                format!("{name} = \"{requirement}\"")
            }
            ToolKind::Uv => format!("    \"{spec}\","),
        })
        .collect();

    lines.join("\n")
}

/// Substitute every `{{token}}` in `template` from `config`.
///
/// `location` names the template node for error messages.
pub fn substitute(
    template: &str,
    config: &EffectiveConfig,
    location: &str,
) -> Result<String, RenderError> {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find("}}") {
            Some(end) => {
                let token = &after[..end];
                let placeholder =
                    Placeholder::parse(token).ok_or_else(|| RenderError::UnknownPlaceholder {
                        token: token.to_string(),
                        location: location.to_string(),
                    })?;
                output.push_str(&placeholder.expand(config));
                rest = &after[end + 2..];
            }
            // Unterminated braces are literal text, not a token
            None => {
                output.push_str("{{");
                rest = after;
            }
        }
    }

    output.push_str(rest);
    Ok(output)
}
