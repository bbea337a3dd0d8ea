//! End-to-end project generation.
//!
//! The single entry point the CLI calls: load the config document, resolve
//! the effective configuration, render the selected template, materialize
//! the plan. Strictly sequential; every component failure propagates
//! immediately and aborts the remaining steps.

use tracing::info;

use crate::config::{defaults, loading, resolve};
use crate::project::errors::GenerateError;
use crate::project::materialize::materialize;
use crate::project::types::{GenerateOutcome, GenerateRequest};
use crate::render::operations::render;
use crate::templates::registry;

/// Run one full generation.
pub fn generate(request: &GenerateRequest) -> Result<GenerateOutcome, GenerateError> {
    info!(
        event = "core.generate.started",
        project = %request.overrides.project_name
    );

    let document = loading::load(request.config_path.as_deref())?;
    let config = resolve::resolve(defaults::default_document(), &document, &request.overrides)?;

    let descriptor = registry::get(config.template);
    let plan = render(&config, descriptor)?;

    let result = materialize(
        &plan,
        &config.output_dir,
        &config.project_name,
        config.force,
        config.dry_run,
    )?;

    info!(
        event = "core.generate.completed",
        project = %config.project_name,
        template = %config.template,
        tool = %config.tool,
        dry_run = config.dry_run
    );

    Ok(GenerateOutcome { config, result })
}
