//! Error types for nested value utilities.

use crate::path::KeyPath;
use thiserror::Error;

/// Configuration and validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error(
        "in deep_map, expected one of mapping, sequence, string, number, boolean or null, \
         got {type_name} at {path}"
    )]
    UnsupportedValue { type_name: String, path: KeyPath },

    #[error("Failed to parse {format} document: {message}")]
    Parse { format: &'static str, message: String },

    #[error("Configuration layer '{source_name}' must be a mapping, found {found}")]
    NotAMapping { source_name: String, found: String },

    #[error("Failed to build configuration: {0}")]
    Build(String),

    #[error("Failed to deserialize merged configuration: {0}")]
    Deserialize(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Build(err.to_string())
    }
}
