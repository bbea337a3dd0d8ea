use std::path::PathBuf;

use crate::errors::PyfreshError;

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("Project directory '{path}' already exists. Use --force to overwrite.")]
    AlreadyExists { path: PathBuf },

    #[error("Materialization failed at '{path}': {message}")]
    Materialization {
        path: PathBuf,
        message: String,
        /// Paths already committed to disk before the failure, in creation
        /// order, so the caller can decide whether to clean up.
        written: Vec<PathBuf>,
    },

    #[error("Failed to initialize git repository: {message}")]
    GitInitFailed { message: String },
}

impl PyfreshError for ProjectError {
    fn error_code(&self) -> &'static str {
        match self {
            ProjectError::AlreadyExists { .. } => "PROJECT_ALREADY_EXISTS",
            ProjectError::Materialization { .. } => "MATERIALIZATION_FAILED",
            ProjectError::GitInitFailed { .. } => "GIT_INIT_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ProjectError::AlreadyExists { .. })
    }
}

/// Error for the end-to-end generate flow.
///
/// Wraps the component errors; no component's failure is caught or
/// downgraded on the way through.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: crate::config::errors::ConfigError,
    },

    #[error("Render error: {source}")]
    Render {
        #[from]
        source: crate::render::errors::RenderError,
    },

    #[error("Project error: {source}")]
    Project {
        #[from]
        source: ProjectError,
    },
}

impl PyfreshError for GenerateError {
    fn error_code(&self) -> &'static str {
        match self {
            GenerateError::Config { source } => source.error_code(),
            GenerateError::Render { source } => source.error_code(),
            GenerateError::Project { source } => source.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            GenerateError::Config { source } => source.is_user_error(),
            GenerateError::Render { source } => source.is_user_error(),
            GenerateError::Project { source } => source.is_user_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_display() {
        let error = ProjectError::AlreadyExists {
            path: PathBuf::from("./demo"),
        };
        assert_eq!(
            error.to_string(),
            "Project directory './demo' already exists. Use --force to overwrite."
        );
        assert_eq!(error.error_code(), "PROJECT_ALREADY_EXISTS");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_materialization_error_carries_written_paths() {
        let error = ProjectError::Materialization {
            path: PathBuf::from("demo/pyproject.toml"),
            message: "disk full".to_string(),
            written: vec![PathBuf::from("demo/src"), PathBuf::from("demo/README.md")],
        };
        assert_eq!(error.error_code(), "MATERIALIZATION_FAILED");
        assert!(!error.is_user_error());

        if let ProjectError::Materialization { written, .. } = &error {
            assert_eq!(written.len(), 2);
        } else {
            unreachable!();
        }
    }

    #[test]
    fn test_generate_error_delegates_code() {
        let error = GenerateError::from(ProjectError::AlreadyExists {
            path: PathBuf::from("demo"),
        });
        assert_eq!(error.error_code(), "PROJECT_ALREADY_EXISTS");
        assert!(error.is_user_error());
    }
}
