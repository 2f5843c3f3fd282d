use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, PromptTemplate};
use crate::ports::TemplateSource;

/// Reads prompt documents from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemTemplateSource;

impl FilesystemTemplateSource {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for FilesystemTemplateSource {
    fn read_template(&self, path: &Path) -> Result<PromptTemplate, AppError> {
        match fs::read_to_string(path) {
            Ok(content) => {
                debug!(path = %path.display(), bytes = content.len(), "read template");
                Ok(PromptTemplate::new(content))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(AppError::TemplateNotFound(path.display().to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn write_template(&self, path: &Path, template: &PromptTemplate) -> Result<(), AppError> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, template.as_str())?;
        debug!(path = %path.display(), "wrote template");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_raw_text_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("greeting.yml");
        fs::write(&path, "lang-en: Hi {{name}}\n").unwrap();

        let template = FilesystemTemplateSource::new().read_template(&path).unwrap();

        assert_eq!(template.as_str(), "lang-en: Hi {{name}}\n");
    }

    #[test]
    fn missing_file_is_template_not_found() {
        let dir = TempDir::new().unwrap();
        let err = FilesystemTemplateSource::new()
            .read_template(&dir.path().join("missing.yml"))
            .unwrap_err();

        assert!(matches!(err, AppError::TemplateNotFound(_)));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/out.yml");

        FilesystemTemplateSource::new()
            .write_template(&path, &PromptTemplate::new("Name: X"))
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Name: X");
    }
}
