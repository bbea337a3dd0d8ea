//! Configuration document loading.
//!
//! Loads the optional external config file and applies environment
//! overrides. All I/O for configuration lives here; the resolver stays pure.
//!
//! A missing `path` is not an error: generation without a config file uses
//! an empty document and falls through to the built-in defaults. A *given*
//! path that cannot be read is an error — the user asked for that file.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::errors::ConfigError;
use crate::config::types::{AuthorSection, ConfigDocument};

pub const ENV_AUTHOR_NAME: &str = "PYFRESH_AUTHOR_NAME";
pub const ENV_AUTHOR_EMAIL: &str = "PYFRESH_AUTHOR_EMAIL";

/// Load the configuration document for one invocation.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the file is unreadable or not valid
/// TOML, and [`ConfigError::Schema`] if its top-level keys have the wrong
/// shape (e.g. `templates` is not a table).
pub fn load(path: Option<&Path>) -> Result<ConfigDocument, ConfigError> {
    let mut document = match path {
        Some(path) => {
            let document = load_document(path)?;
            info!(event = "core.config.loaded", path = %path.display());
            document
        }
        None => {
            debug!(event = "core.config.no_file");
            ConfigDocument::default()
        }
    };

    apply_env_overrides(&mut document);

    Ok(document)
}

fn load_document(path: &Path) -> Result<ConfigDocument, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    // Parse in two steps so syntax errors and shape errors stay distinct.
    let value: toml::Value = content.parse().map_err(|e: toml::de::Error| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.message().to_string(),
    })?;

    value
        .try_into()
        .map_err(|e: toml::de::Error| ConfigError::Schema {
            message: e.message().to_string(),
        })
}

fn apply_env_overrides(document: &mut ConfigDocument) {
    if let Ok(name) = std::env::var(ENV_AUTHOR_NAME)
        && !name.trim().is_empty()
    {
        document
            .author
            .get_or_insert_with(AuthorSection::default)
            .name = Some(name);
    }

    if let Ok(email) = std::env::var(ENV_AUTHOR_EMAIL)
        && !email.trim().is_empty()
    {
        document
            .author
            .get_or_insert_with(AuthorSection::default)
            .email = Some(email);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("pyfresh.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_without_path_is_empty() {
        let document = load(None).unwrap();
        assert!(document.templates.is_empty());
    }

    #[test]
    fn test_load_valid_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[author]
name = "Jane Doe"

[templates.standard]
dependencies = ["requests>=2.31.0"]
"#,
        );

        let document = load(Some(&path)).unwrap();
        assert_eq!(
            document.author.unwrap().name.as_deref(),
            Some("Jane Doe")
        );
        assert_eq!(
            document.templates["standard"].dependencies,
            vec!["requests>=2.31.0"]
        );
    }

    #[test]
    fn test_load_missing_file_is_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = load(Some(&dir.path().join("nope.toml")));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_malformed_toml_is_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "invalid toml [[[");
        let result = load(Some(&path));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_wrong_shape_is_schema_error() {
        let dir = tempfile::TempDir::new().unwrap();
        // `templates` must be a table, not an array
        let path = write_config(&dir, "templates = [\"standard\"]");
        let result = load(Some(&path));
        assert!(matches!(result, Err(ConfigError::Schema { .. })));
    }

    #[test]
    fn test_wrong_section_shape_is_schema_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[templates.standard]
dependencies = "click>=8.0.0"
"#,
        );
        let result = load(Some(&path));
        assert!(matches!(result, Err(ConfigError::Schema { .. })));
    }
}
