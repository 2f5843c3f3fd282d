use std::io;

use thiserror::Error;

use crate::domain::prompt::PromptError;

/// Library-wide error type for promptspec operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Resolution or rendering failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Template file does not exist.
    #[error("Template file not found: {0}")]
    TemplateNotFound(String),

    /// A `--var` argument is not of the form `NAME=VALUE`.
    #[error("Invalid variable '{0}': expected NAME=VALUE")]
    InvalidVariable(String),

    /// Serialization of command output failed.
    #[error("Failed to serialize {what}: {details}")]
    Serialization { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    pub fn serialization<S: Into<String>>(what: S, err: impl std::fmt::Display) -> Self {
        AppError::Serialization { what: what.into(), details: err.to_string() }
    }
}
