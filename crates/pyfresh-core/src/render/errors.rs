use crate::errors::PyfreshError;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Unknown placeholder '{token}' in template node '{location}'")]
    UnknownPlaceholder { token: String, location: String },

    #[error("Rendered path '{path}' is not a safe relative path")]
    UnsafePath { path: String },
}

impl PyfreshError for RenderError {
    fn error_code(&self) -> &'static str {
        match self {
            RenderError::UnknownPlaceholder { .. } => "RENDER_UNKNOWN_PLACEHOLDER",
            RenderError::UnsafePath { .. } => "RENDER_UNSAFE_PATH",
        }
    }
}
