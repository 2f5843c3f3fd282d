//! Settings loading from `promptspec.toml` and the environment.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, Settings};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "promptspec.toml";

/// Load settings, then apply environment overrides.
///
/// An explicit `path` must exist. Without one, `promptspec.toml` in the
/// working directory is read if present and defaults are used otherwise.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, AppError> {
    let settings = match path {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::ConfigNotFound(path.display().to_string()));
            }
            read_settings(path)?
        }
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.is_file() { read_settings(path)? } else { Settings::default() }
        }
    };

    settings.with_env_overrides()
}

fn read_settings(path: &Path) -> Result<Settings, AppError> {
    let content = fs::read_to_string(path)?;
    let settings = Settings::parse_toml(&content)?;
    debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::configuration::{LANG_ENV, LLM_ENV};
    use serial_test::serial;
    use tempfile::TempDir;

    fn clear_env() {
        unsafe {
            std::env::remove_var(LANG_ENV);
            std::env::remove_var(LLM_ENV);
        }
    }

    #[test]
    #[serial]
    fn loads_explicit_file() {
        clear_env();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[prompt]\nlang = \"ja\"\n").unwrap();

        let settings = load_settings(Some(&path)).unwrap();

        assert_eq!(settings.prompt.lang.as_deref(), Some("ja"));
        assert_eq!(settings.prompt.llm, None);
    }

    #[test]
    #[serial]
    fn missing_explicit_file_is_an_error() {
        clear_env();
        let dir = TempDir::new().unwrap();

        let err = load_settings(Some(&dir.path().join("missing.toml"))).unwrap_err();

        assert!(matches!(err, AppError::ConfigNotFound(_)));
    }

    #[test]
    #[serial]
    fn malformed_file_is_reported() {
        clear_env();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[prompt\nlang = ").unwrap();

        let err = load_settings(Some(&path)).unwrap_err();

        assert!(matches!(err, AppError::TomlParseError(_)));
    }
}
