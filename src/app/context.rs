use crate::domain::TemplateRenderer;
use crate::ports::TemplateSource;

/// Application context holding dependencies for command execution.
pub struct AppContext<S, R> {
    source: S,
    renderer: R,
}

impl<S: TemplateSource, R: TemplateRenderer> AppContext<S, R> {
    /// Create a new application context.
    pub fn new(source: S, renderer: R) -> Self {
        Self { source, renderer }
    }
}

impl<S: TemplateSource, R> AppContext<S, R> {
    /// Get a reference to the template source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S, R: TemplateRenderer> AppContext<S, R> {
    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
