//! Template rendering: descriptor + effective configuration -> render plan.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::types::{EffectiveConfig, ToolKind};
use crate::config::validation::is_safe_component;
use crate::render::errors::RenderError;
use crate::render::placeholders::substitute;
use crate::render::types::{NodeKind, PlanEntry, RenderPlan};
use crate::templates::{FileContent, NodeSpec, TemplateDescriptor};

/// Render a template into a concrete plan.
///
/// Entry order is exactly the descriptor's node order, so dry-run previews
/// are deterministic and directories precede the files they contain.
///
/// # Errors
///
/// Fails with [`RenderError::UnknownPlaceholder`] on an unrecognized token
/// and [`RenderError::UnsafePath`] when a substituted path escapes the
/// project root. No file is written on any failure.
pub fn render(
    config: &EffectiveConfig,
    template: &TemplateDescriptor,
) -> Result<RenderPlan, RenderError> {
    debug!(
        event = "core.render.started",
        template = %template.kind,
        nodes = template.nodes.len()
    );

    let mut entries = Vec::with_capacity(template.nodes.len());

    for node in template.nodes {
        match *node {
            NodeSpec::Directory { path } => {
                let rendered = render_path(path, config)?;
                entries.push(PlanEntry {
                    path: rendered,
                    kind: NodeKind::Directory,
                    content: None,
                });
            }
            NodeSpec::File { path, content } => {
                let rendered = render_path(path, config)?;
                let body = select_body(content, config.tool);
                entries.push(PlanEntry {
                    path: rendered,
                    kind: NodeKind::File,
                    content: Some(substitute(body, config, path)?),
                });
            }
        }
    }

    info!(
        event = "core.render.completed",
        template = %template.kind,
        entries = entries.len()
    );

    Ok(RenderPlan { entries })
}

fn select_body(content: FileContent, tool: ToolKind) -> &'static str {
    match content {
        FileContent::Fixed(body) => body,
        FileContent::PerTool { poetry, uv } => match tool {
            ToolKind::Poetry => poetry,
            ToolKind::Uv => uv,
        },
    }
}

/// Substitute a node path and enforce the relative-path safety invariant.
///
/// The check runs after substitution: a placeholder expanding to `..` or an
/// empty segment must fail even though the declared path was safe.
fn render_path(path: &'static str, config: &EffectiveConfig) -> Result<PathBuf, RenderError> {
    let rendered = substitute(path, config, path)?;

    if rendered.is_empty()
        || rendered.starts_with('/')
        || !rendered.split('/').all(is_safe_component)
    {
        return Err(RenderError::UnsafePath { path: rendered });
    }

    Ok(PathBuf::from(rendered))
}
