//! promptspec: resolve language- and model-specialized prompt templates and
//! render them to text or chat messages.
//!
//! A prompt document is YAML whose keys select variants:
//!
//! ```yaml
//! lang-en:
//!   llm-gpt-4:
//!     messages:
//!       - role: system
//!         content: "Hello {{name}}"
//!   default: "Hi {{name}}"
//! default: "Hey {{name}}"
//! ```
//!
//! [`format`] picks the variant for a language/model pair (falling back to the
//! process-wide defaults) and substitutes variables; [`partial`] binds some
//! variables into the raw document ahead of time.
//!
//! Sections use [minijinja](https://docs.rs/minijinja) syntax, not mustache:
//! `{{#name}}...{{/name}}` sections are syntax errors (use `{% if %}` or
//! `{% for %}`) and values are inserted without HTML escaping.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::MinijinjaTemplateRenderer;
use app::config::process_defaults;

pub use adapters::{FilesystemTemplateSource, MemoryTemplateSource};
pub use app::config::{load_settings, set_process_defaults};
pub use domain::{
    AppError, ChatMessage, MessageRole, MessageTemplate, PromptDefaults, PromptEnv, PromptError,
    PromptInputs, PromptOutput, PromptTemplate, RenderableSection, ResolutionContext,
    ResolvedSection, Selection, Settings, SpecializationNode, TemplateRenderer,
};

/// Render `template` for `env`, falling back to the process-wide defaults.
pub fn format(
    template: &PromptTemplate,
    inputs: &PromptInputs,
    env: Option<&PromptEnv>,
) -> Result<PromptOutput, PromptError> {
    let context = ResolutionContext::new(env, &process_defaults());
    template.format(inputs, &context, &MinijinjaTemplateRenderer::new())
}

/// Select the section of `template` for `env`, falling back to the process-wide defaults.
pub fn resolve(
    template: &PromptTemplate,
    env: Option<&PromptEnv>,
) -> Result<ResolvedSection, PromptError> {
    let context = ResolutionContext::new(env, &process_defaults());
    template.resolve(&context)
}

/// Bind `inputs` into the raw text of `template`, returning a new template.
pub fn partial(
    template: &PromptTemplate,
    inputs: &PromptInputs,
) -> Result<PromptTemplate, PromptError> {
    template.partial(inputs, &MinijinjaTemplateRenderer::new())
}
