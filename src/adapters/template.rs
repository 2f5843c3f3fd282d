use std::sync::OnceLock;

use minijinja::machinery::{Token, WhitespaceConfig, parse, tokenize};
use minijinja::syntax::SyntaxConfig;
use minijinja::{Environment, UndefinedBehavior};

use crate::domain::prompt::{PromptError, PromptInputs, TemplateRenderer};

/// Template renderer using Minijinja.
///
/// Undefined variables (and attributes of them) render as empty strings,
/// trailing newlines are kept and nothing is auto-escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        template: &str,
        inputs: &PromptInputs,
        template_name: &str,
    ) -> Result<String, PromptError> {
        environment()
            .render_named_str(template_name, template, &inputs.variables)
            .map_err(|err| template_render_error(template_name, err))
    }

    /// Replace `{{ name }}` expressions whose name is bound in `inputs`.
    ///
    /// Every other byte of `template` is copied through: blocks, filters,
    /// raw sections and comments are left for the final render.
    fn bind(
        &self,
        template: &str,
        inputs: &PromptInputs,
        template_name: &str,
    ) -> Result<String, PromptError> {
        parse(template, template_name, SyntaxConfig::default(), WhitespaceConfig::default())
            .map_err(|err| template_render_error(template_name, err))?;

        let tokens = tokenize(template, false, SyntaxConfig::default(), WhitespaceConfig::default())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| template_render_error(template_name, err))?;

        let mut bound = String::with_capacity(template.len());
        let mut copied = 0;
        for window in tokens.windows(3) {
            let [
                (Token::VariableStart, start),
                (Token::Ident(name), _),
                (Token::VariableEnd, end),
            ] = window
            else {
                continue;
            };
            let Some(value) = inputs.get(name) else {
                continue;
            };

            let start = start.start_offset as usize;
            let end = end.end_offset as usize;
            let lead = &template[copied..start];
            if template[start..end].starts_with("{{-") {
                bound.push_str(lead.trim_end());
            } else {
                bound.push_str(lead);
            }
            bound.push_str(value);

            copied = end;
            if template[start..end].ends_with("-}}") {
                let rest = &template[end..];
                copied += rest.len() - rest.trim_start().len();
            }
        }
        bound.push_str(&template[copied..]);
        Ok(bound)
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Chainable);
        env
    })
}

fn template_render_error(template_name: &str, err: impl std::fmt::Display) -> PromptError {
    PromptError::TemplateRender { template: template_name.to_string(), reason: err.to_string() }
}
