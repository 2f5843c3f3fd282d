use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, PromptTemplate};
use crate::ports::TemplateSource;

/// In-memory template source for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateSource {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl MemoryTemplateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.lock().insert(path.into(), content.into());
        self
    }

    /// Raw content stored at `path`, if any.
    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock().get(path.as_ref()).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, String>> {
        self.files.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TemplateSource for MemoryTemplateSource {
    fn read_template(&self, path: &Path) -> Result<PromptTemplate, AppError> {
        self.lock()
            .get(path)
            .map(|content| PromptTemplate::new(content.as_str()))
            .ok_or_else(|| AppError::TemplateNotFound(path.display().to_string()))
    }

    fn write_template(&self, path: &Path, template: &PromptTemplate) -> Result<(), AppError> {
        self.lock().insert(path.to_path_buf(), template.as_str().to_string());
        Ok(())
    }
}
