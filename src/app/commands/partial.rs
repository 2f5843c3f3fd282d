use std::path::PathBuf;

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, PromptInputs, PromptTemplate, TemplateRenderer};
use crate::ports::TemplateSource;

/// Options for the partial command.
#[derive(Debug, Clone)]
pub struct PartialOptions {
    pub path: PathBuf,
    pub inputs: PromptInputs,
    /// Where to write the bound document; nothing is written when `None`.
    pub output: Option<PathBuf>,
}

/// Bind variables into the raw document and optionally persist the result.
pub fn execute<S, R>(
    ctx: &AppContext<S, R>,
    options: &PartialOptions,
) -> Result<PromptTemplate, AppError>
where
    S: TemplateSource,
    R: TemplateRenderer,
{
    let template = ctx.source().read_template(&options.path)?;
    let bound = template.partial(&options.inputs, ctx.renderer())?;

    if let Some(output) = &options.output {
        ctx.source().write_template(output, &bound)?;
        info!(path = %output.display(), "wrote bound template");
    }

    Ok(bound)
}
