//! Render plan materialization.
//!
//! Writes a render plan beneath `output_dir/project_name`, or produces a
//! preview without touching the file system at all. Never writes outside
//! the target root, never rolls back - a partial tree is a caller-visible
//! outcome, reported through the error's `written` list.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::project::errors::ProjectError;
use crate::project::types::{MaterializeResult, PreviewEntry};
use crate::render::types::{NodeKind, RenderPlan};

/// Materialize a render plan.
///
/// State machine per invocation:
/// 1. compute target root;
/// 2. dry run: return the preview, terminal success;
/// 3. root exists non-empty without `force`: [`ProjectError::AlreadyExists`],
///    checked before any write;
/// 4. create the root, then entries strictly in plan order; with `force`,
///    conflicting existing entries are overwritten.
///
/// # Errors
///
/// A failed write aborts the remaining plan with
/// [`ProjectError::Materialization`] carrying every path already written.
pub fn materialize(
    plan: &RenderPlan,
    output_dir: &Path,
    project_name: &str,
    force: bool,
    dry_run: bool,
) -> Result<MaterializeResult, ProjectError> {
    let root = output_dir.join(project_name);

    if dry_run {
        info!(
            event = "core.project.preview_completed",
            root = %root.display(),
            entries = plan.len()
        );
        return Ok(MaterializeResult::Preview {
            root,
            entries: plan
                .entries
                .iter()
                .map(|entry| PreviewEntry {
                    path: entry.path.clone(),
                    kind: entry.kind,
                })
                .collect(),
        });
    }

    if !force && root.exists() && is_occupied(&root)? {
        return Err(ProjectError::AlreadyExists { path: root });
    }

    info!(
        event = "core.project.materialize_started",
        root = %root.display(),
        entries = plan.len(),
        force = force
    );

    let mut written: Vec<PathBuf> = Vec::new();

    if root.is_file() {
        // Only reachable with force: a file stands where the root must go
        fs::remove_file(&root).map_err(|e| write_failure(&root, &e, &written))?;
    }
    fs::create_dir_all(&root).map_err(|e| write_failure(&root, &e, &written))?;

    for entry in &plan.entries {
        let target = root.join(&entry.path);

        match entry.kind {
            NodeKind::Directory => {
                if target.is_file() {
                    fs::remove_file(&target).map_err(|e| write_failure(&target, &e, &written))?;
                }
                fs::create_dir_all(&target).map_err(|e| write_failure(&target, &e, &written))?;
            }
            NodeKind::File => {
                if target.is_dir() {
                    fs::remove_dir_all(&target)
                        .map_err(|e| write_failure(&target, &e, &written))?;
                }
                fs::write(&target, entry.content.as_deref().unwrap_or(""))
                    .map_err(|e| write_failure(&target, &e, &written))?;
            }
        }

        written.push(target);
    }

    info!(
        event = "core.project.materialize_completed",
        root = %root.display(),
        created = written.len()
    );

    Ok(MaterializeResult::Written { root, created: written })
}

fn is_occupied(root: &Path) -> Result<bool, ProjectError> {
    if root.is_file() {
        return Ok(true);
    }

    let mut entries = fs::read_dir(root).map_err(|e| write_failure(root, &e, &[]))?;
    Ok(entries.next().is_some())
}

fn write_failure(path: &Path, source: &std::io::Error, written: &[PathBuf]) -> ProjectError {
    error!(
        event = "core.project.write_failed",
        path = %path.display(),
        error = %source,
        written = written.len()
    );
    ProjectError::Materialization {
        path: path.to_path_buf(),
        message: source.to_string(),
        written: written.to_vec(),
    }
}
