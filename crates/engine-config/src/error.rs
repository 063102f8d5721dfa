use thiserror::Error;

/// Errors raised while loading or saving step settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting was present but is not one of the recognised names.
    #[error("Invalid value '{value}' for setting '{key}'")]
    InvalidValue { key: String, value: String },

    /// The XML step fragment could not be read.
    #[error("Failed to read settings XML: {0}")]
    Xml(String),

    /// The JSON settings document could not be read or written.
    #[error("Failed to read settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The settings repository failed to load or store an attribute.
    #[error("Repository error for step '{step}': {message}")]
    Repository { step: String, message: String },
}
