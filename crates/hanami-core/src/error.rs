//! Error types for Hanami

use thiserror::Error;

/// The main error type for Hanami operations
#[derive(Debug, Error)]
pub enum HanamiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Asset error: {0}")]
    AssetError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

/// Result type alias for Hanami operations
pub type Result<T> = std::result::Result<T, HanamiError>;

impl From<toml::de::Error> for HanamiError {
    fn from(err: toml::de::Error) -> Self {
        HanamiError::TomlParseError(err.to_string())
    }
}
