use std::path::Path;

use crate::app::AppContext;
use crate::domain::{AppError, PromptTemplate};
use crate::ports::TemplateSource;

/// The document at `path` as a `{ "template": ... }` JSON record.
pub fn execute<S, R>(ctx: &AppContext<S, R>, path: &Path) -> Result<String, AppError>
where
    S: TemplateSource,
{
    let template = ctx.source().read_template(path)?;
    to_json(&template)
}

pub fn to_json(template: &PromptTemplate) -> Result<String, AppError> {
    serde_json::to_string_pretty(template).map_err(|err| AppError::serialization("template", err))
}
