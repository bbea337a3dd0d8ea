//! Git repository initialization for generated projects.
//!
//! Shells out to the `git` CLI so the user's installation and config are
//! inherited with zero git plumbing here. Whether a failure matters is the
//! caller's call - generation has already succeeded by the time this runs.

use std::path::Path;

use tracing::{info, warn};

use crate::project::errors::ProjectError;

/// Initialize a git repository in a freshly generated project root.
pub fn init_repository(dir: &Path) -> Result<(), ProjectError> {
    info!(event = "core.git.init_started", path = %dir.display());

    let output = std::process::Command::new("git")
        .current_dir(dir)
        .arg("init")
        .output()
        .map_err(|e| {
            warn!(event = "core.git.unavailable", error = %e);
            ProjectError::GitInitFailed {
                message: format!("Failed to execute git: {e}"),
            }
        })?;

    if output.status.success() {
        info!(event = "core.git.init_completed", path = %dir.display());
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        warn!(event = "core.git.init_failed", error = %stderr);
        Err(ProjectError::GitInitFailed {
            message: stderr.trim().to_string(),
        })
    }
}
