use thiserror::Error;

/// Error raised while resolving or rendering a prompt template.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The raw template text is not a valid YAML document.
    #[error(transparent)]
    MalformedDocument(#[from] serde_yaml::Error),

    /// The selected value is neither a string nor a mapping with `messages`.
    #[error("Invalid template section: expected a string or a mapping with `messages`, found {found}")]
    InvalidTemplateSection { found: String },

    /// The `messages` sequence of a section holds something other than `{role, content}` records.
    #[error("Invalid template section: malformed `messages` ({reason})")]
    InvalidMessages { reason: String },

    /// The template engine rejected a template.
    #[error("Failed to render template {template}: {reason}")]
    TemplateRender { template: String, reason: String },
}
