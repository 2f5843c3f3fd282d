pub mod error;
pub mod prompt_template;
pub mod render;
pub mod resolver;
pub mod section;
pub mod template;
pub mod tree;
pub mod types;

pub use error::PromptError;
pub use prompt_template::PromptTemplate;
pub use render::render_section;
pub use resolver::{DimensionMatcher, ResolvedSection, Selection, resolve};
pub use section::{ChatMessage, MessageRole, MessageTemplate, PromptOutput, RenderableSection};
pub use template::TemplateRenderer;
pub use tree::{Branch, SpecializationNode};
pub use types::{PromptEnv, PromptInputs, ResolutionContext};
