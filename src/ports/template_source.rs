use std::path::Path;

use crate::domain::{AppError, PromptTemplate};

/// Port for reading and writing raw prompt documents.
pub trait TemplateSource {
    /// Read the document at `path`.
    ///
    /// Returns `AppError::TemplateNotFound` when nothing exists there.
    fn read_template(&self, path: &Path) -> Result<PromptTemplate, AppError>;

    /// Write the raw text of `template` to `path`, replacing any existing file.
    fn write_template(&self, path: &Path, template: &PromptTemplate) -> Result<(), AppError>;
}
