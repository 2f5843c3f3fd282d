use std::sync::Mutex;

use crate::domain::prompt::{PromptError, PromptInputs, TemplateRenderer};

/// Renderer that echoes templates back and records every call.
#[derive(Default)]
pub struct RecordingRenderer {
    calls: Mutex<Vec<(String, String)>>,
    fail_on: Option<String>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with a render error whenever the template equals `template`.
    pub fn failing_on(template: &str) -> Self {
        Self { fail_on: Some(template.to_string()), ..Self::default() }
    }

    /// Template names passed to the renderer, in call order.
    pub fn names(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(name, _)| name.clone()).collect()
    }

    /// Template texts passed to the renderer, in call order.
    pub fn rendered(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(_, template)| template.clone()).collect()
    }

    fn record(&self, template: &str, template_name: &str) -> Result<String, PromptError> {
        self.calls.lock().unwrap().push((template_name.to_string(), template.to_string()));
        if self.fail_on.as_deref() == Some(template) {
            return Err(PromptError::TemplateRender {
                template: template_name.to_string(),
                reason: "mock render failure".to_string(),
            });
        }
        Ok(template.to_string())
    }
}

impl TemplateRenderer for RecordingRenderer {
    fn render(
        &self,
        template: &str,
        _inputs: &PromptInputs,
        template_name: &str,
    ) -> Result<String, PromptError> {
        self.record(template, template_name)
    }

    fn bind(
        &self,
        template: &str,
        _inputs: &PromptInputs,
        template_name: &str,
    ) -> Result<String, PromptError> {
        self.record(template, template_name)
    }
}
