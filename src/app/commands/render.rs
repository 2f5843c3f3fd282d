use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{
    AppError, PromptDefaults, PromptEnv, PromptInputs, PromptOutput, ResolutionContext,
    TemplateRenderer,
};
use crate::ports::TemplateSource;

/// Options for the render command.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub path: PathBuf,
    pub env: PromptEnv,
    pub inputs: PromptInputs,
}

/// Resolve the document at `options.path` and render the selected section.
pub fn execute<S, R>(
    ctx: &AppContext<S, R>,
    options: &RenderOptions,
    defaults: &PromptDefaults,
) -> Result<PromptOutput, AppError>
where
    S: TemplateSource,
    R: TemplateRenderer,
{
    let template = ctx.source().read_template(&options.path)?;
    let context = ResolutionContext::new(Some(&options.env), defaults);
    Ok(template.format(&options.inputs, &context, ctx.renderer())?)
}

/// Human-readable form of an output: the text itself, or `role: content` blocks.
pub fn format_output(output: &PromptOutput) -> String {
    match output {
        PromptOutput::Text(text) => text.clone(),
        PromptOutput::Messages(messages) => messages
            .iter()
            .map(|message| format!("{}: {}", message.role, message.content))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

/// JSON form of an output: a string or an array of `{role, content}` records.
pub fn output_json(output: &PromptOutput) -> Result<String, AppError> {
    serde_json::to_string_pretty(output).map_err(|err| AppError::serialization("output", err))
}
