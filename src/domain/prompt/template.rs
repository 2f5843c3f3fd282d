use super::error::PromptError;
use super::types::PromptInputs;

/// Trait for substituting variables into template text.
///
/// This abstraction keeps the template engine (e.g. minijinja) out of the
/// domain layer.
pub trait TemplateRenderer {
    /// Render a template string with the given inputs.
    ///
    /// Variables missing from `inputs` render as empty.
    ///
    /// # Arguments
    /// * `template` - The template string to render.
    /// * `inputs` - The variables to substitute.
    /// * `template_name` - A name for the template (for error reporting).
    fn render(
        &self,
        template: &str,
        inputs: &PromptInputs,
        template_name: &str,
    ) -> Result<String, PromptError>;

    /// Substitute only the variables present in `inputs`.
    ///
    /// References to any other variable are written back out so the result
    /// can be rendered again later.
    fn bind(
        &self,
        template: &str,
        inputs: &PromptInputs,
        template_name: &str,
    ) -> Result<String, PromptError>;
}
