//! Prompt configuration domain models.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Environment variable overriding `prompt.lang`.
pub const LANG_ENV: &str = "PROMPTSPEC_LANG";
/// Environment variable overriding `prompt.llm`.
pub const LLM_ENV: &str = "PROMPTSPEC_LLM";

/// Configuration loaded from `promptspec.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Default resolution context.
    #[serde(default)]
    pub prompt: PromptDefaults,
}

/// Language and model used when a call does not specify its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptDefaults {
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub llm: Option<String>,
}

impl Settings {
    /// Parse and validate settings from TOML content.
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.prompt.validate()
    }

    /// Apply `PROMPTSPEC_LANG` / `PROMPTSPEC_LLM` when set and non-empty.
    pub fn with_env_overrides(mut self) -> Result<Self, AppError> {
        if let Some(lang) = env_value(LANG_ENV) {
            self.prompt.lang = Some(lang);
        }
        if let Some(llm) = env_value(LLM_ENV) {
            self.prompt.llm = Some(llm);
        }
        self.validate()?;
        Ok(self)
    }
}

impl PromptDefaults {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_value("prompt.lang", self.lang.as_deref())?;
        validate_value("prompt.llm", self.llm.as_deref())?;
        Ok(())
    }
}

fn validate_value(field: &str, value: Option<&str>) -> Result<(), AppError> {
    let Some(value) = value else {
        return Ok(());
    };
    if value.trim().is_empty() {
        return Err(AppError::config_error(format!("{} must not be empty", field)));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(AppError::config_error(format!(
            "{} must not contain whitespace: '{}'",
            field, value
        )));
    }
    Ok(())
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
