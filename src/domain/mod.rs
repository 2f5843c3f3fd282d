pub mod configuration;
pub mod error;
pub mod prompt;

pub use configuration::{PromptDefaults, Settings};
pub use error::AppError;

pub use prompt::{
    ChatMessage, MessageRole, MessageTemplate, PromptEnv, PromptError, PromptInputs,
    PromptOutput, PromptTemplate, RenderableSection, ResolutionContext, ResolvedSection,
    Selection, SpecializationNode, TemplateRenderer,
};
