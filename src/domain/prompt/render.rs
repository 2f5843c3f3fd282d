//! Variable substitution over a resolved section.

use tracing::debug;

use super::error::PromptError;
use super::section::{ChatMessage, PromptOutput, RenderableSection};
use super::template::TemplateRenderer;
use super::types::PromptInputs;

/// Render `section` with `inputs`.
///
/// Message sections render each message's content in order and keep roles
/// unchanged. Text sections render to a single string.
pub fn render_section<R>(
    section: &RenderableSection,
    inputs: &PromptInputs,
    renderer: &R,
) -> Result<PromptOutput, PromptError>
where
    R: TemplateRenderer + ?Sized,
{
    match section {
        RenderableSection::Messages(messages) => {
            let rendered = messages
                .iter()
                .enumerate()
                .map(|(index, message)| {
                    let name = format!("messages[{}]", index);
                    Ok(ChatMessage {
                        role: message.role.clone(),
                        content: renderer.render(&message.content, inputs, &name)?,
                    })
                })
                .collect::<Result<Vec<_>, PromptError>>()?;
            debug!(count = rendered.len(), "rendered message section");
            Ok(PromptOutput::Messages(rendered))
        }
        RenderableSection::Text(template) => {
            let rendered = renderer.render(template, inputs, "text")?;
            debug!(len = rendered.len(), "rendered text section");
            Ok(PromptOutput::Text(rendered))
        }
    }
}
