use serde::{Deserialize, Serialize};

use super::error::PromptError;
use super::render::render_section;
use super::resolver::{ResolvedSection, resolve};
use super::section::PromptOutput;
use super::template::TemplateRenderer;
use super::tree::SpecializationNode;
use super::types::{PromptInputs, ResolutionContext};

/// A prompt document holding every language/model variant of one prompt.
///
/// Only the raw text is stored. Each call re-parses it, so a template carries
/// no state between calls and can be shared freely across threads.
///
/// Serializes as `{ "template": "<raw text>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self { template: template.into() }
    }

    /// The raw, unparsed document text.
    pub fn as_str(&self) -> &str {
        &self.template
    }

    pub fn into_inner(self) -> String {
        self.template
    }

    /// Parse the raw text into a fresh specialization tree.
    pub fn parse(&self) -> Result<SpecializationNode, PromptError> {
        SpecializationNode::parse(&self.template)
    }

    /// Select the section matching `context`.
    pub fn resolve(&self, context: &ResolutionContext) -> Result<ResolvedSection, PromptError> {
        let tree = self.parse()?;
        resolve(&tree, context)
    }

    /// Resolve the section matching `context` and render it with `inputs`.
    pub fn format<R>(
        &self,
        inputs: &PromptInputs,
        context: &ResolutionContext,
        renderer: &R,
    ) -> Result<PromptOutput, PromptError>
    where
        R: TemplateRenderer + ?Sized,
    {
        let resolved = self.resolve(context)?;
        render_section(&resolved.section, inputs, renderer)
    }

    /// Bind `inputs` into the raw text before any resolution happens.
    ///
    /// The returned template is independent of `self`. Values are inserted
    /// as-is; a value containing template syntax will be interpreted later.
    pub fn partial<R>(&self, inputs: &PromptInputs, renderer: &R) -> Result<Self, PromptError>
    where
        R: TemplateRenderer + ?Sized,
    {
        let bound = renderer.bind(&self.template, inputs, "partial")?;
        Ok(Self::new(bound))
    }
}

impl From<String> for PromptTemplate {
    fn from(template: String) -> Self {
        Self::new(template)
    }
}

impl From<&str> for PromptTemplate {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}
