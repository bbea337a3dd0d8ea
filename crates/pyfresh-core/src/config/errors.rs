use crate::errors::PyfreshError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("Invalid config file shape: {message}")]
    Schema { message: String },

    #[error("Invalid template '{name}'. Supported templates: standard, minimal, cli, web")]
    InvalidTemplate { name: String },

    #[error("Invalid tool '{name}'. Supported tools: poetry, uv")]
    InvalidTool { name: String },

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },
}

impl PyfreshError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Parse { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::Schema { .. } => "CONFIG_SCHEMA_ERROR",
            ConfigError::InvalidTemplate { .. } => "INVALID_TEMPLATE",
            ConfigError::InvalidTool { .. } => "INVALID_TOOL",
            ConfigError::InvalidProjectName { .. } => "INVALID_PROJECT_NAME",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_template_display() {
        let error = ConfigError::InvalidTemplate {
            name: "unknown".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid template 'unknown'. Supported templates: standard, minimal, cli, web"
        );
        assert_eq!(error.error_code(), "INVALID_TEMPLATE");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_invalid_project_name_display() {
        let error = ConfigError::InvalidProjectName {
            name: "..".to_string(),
            reason: "must not be '.' or '..'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid project name '..': must not be '.' or '..'"
        );
        assert_eq!(error.error_code(), "INVALID_PROJECT_NAME");
    }

    #[test]
    fn test_schema_error_code() {
        let error = ConfigError::Schema {
            message: "'templates' is not a table".to_string(),
        };
        assert_eq!(error.error_code(), "CONFIG_SCHEMA_ERROR");
        assert!(error.is_user_error());
    }
}
