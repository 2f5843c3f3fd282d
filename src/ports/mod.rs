mod template_source;

pub use template_source::TemplateSource;
