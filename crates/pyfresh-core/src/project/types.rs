//! Project generation types.

use std::path::PathBuf;

use crate::config::types::{EffectiveConfig, Overrides};
use crate::render::types::NodeKind;

/// Input for one end-to-end generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Optional path to an external config file (`--config`).
    pub config_path: Option<PathBuf>,
    /// CLI-supplied partial configuration.
    pub overrides: Overrides,
}

/// One line of a dry-run preview.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewEntry {
    /// Path relative to the project root.
    pub path: PathBuf,
    pub kind: NodeKind,
}

/// Outcome of materializing a render plan.
#[derive(Debug, Clone, PartialEq)]
pub enum MaterializeResult {
    /// Dry run: what would be created, in plan order. Nothing touched disk.
    Preview {
        root: PathBuf,
        entries: Vec<PreviewEntry>,
    },
    /// Real run: everything created on disk, in creation order.
    Written { root: PathBuf, created: Vec<PathBuf> },
}

impl MaterializeResult {
    /// The computed target root, in either mode.
    pub fn root(&self) -> &PathBuf {
        match self {
            Self::Preview { root, .. } => root,
            Self::Written { root, .. } => root,
        }
    }
}

/// Result of a full generate run: the resolved configuration alongside the
/// materialization outcome, so callers can report what was decided.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub config: EffectiveConfig,
    pub result: MaterializeResult,
}
