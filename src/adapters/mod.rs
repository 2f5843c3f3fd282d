pub mod memory_template_source;
pub mod template;
pub mod template_source;

pub use memory_template_source::MemoryTemplateSource;
pub use template::MinijinjaTemplateRenderer;
pub use template_source::FilesystemTemplateSource;
