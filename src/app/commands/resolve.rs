use std::path::PathBuf;

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{
    AppError, MessageTemplate, PromptDefaults, PromptEnv, RenderableSection, ResolutionContext,
    ResolvedSection,
};
use crate::ports::TemplateSource;

/// Options for the resolve command.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    pub path: PathBuf,
    pub env: PromptEnv,
}

/// Select the section of the document at `options.path` without rendering it.
pub fn execute<S, R>(
    ctx: &AppContext<S, R>,
    options: &ResolveOptions,
    defaults: &PromptDefaults,
) -> Result<ResolvedSection, AppError>
where
    S: TemplateSource,
{
    let template = ctx.source().read_template(&options.path)?;
    let context = ResolutionContext::new(Some(&options.env), defaults);
    Ok(template.resolve(&context)?)
}

#[derive(Serialize)]
struct MessagesDocument<'a> {
    messages: &'a [MessageTemplate],
}

/// The selected section as YAML, in the shape it had in the document.
pub fn section_yaml(section: &RenderableSection) -> Result<String, AppError> {
    let yaml = match section {
        RenderableSection::Text(text) => serde_yaml::to_string(text),
        RenderableSection::Messages(messages) => {
            serde_yaml::to_string(&MessagesDocument { messages })
        }
    };
    yaml.map_err(|err| AppError::serialization("section", err))
}

/// Dotted key path of a resolution; `<document>` when the whole document was used.
pub fn describe_path(resolved: &ResolvedSection) -> String {
    if resolved.path.is_empty() { "<document>".to_string() } else { resolved.path.join(".") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MemoryTemplateSource, MinijinjaTemplateRenderer};
    use crate::domain::{MessageRole, Selection};
    use crate::testing::RecordingRenderer;

    fn ctx(doc: &str) -> AppContext<MemoryTemplateSource, MinijinjaTemplateRenderer> {
        AppContext::new(
            MemoryTemplateSource::new().with_file("p.yml", doc),
            MinijinjaTemplateRenderer::new(),
        )
    }

    #[test]
    fn reports_selected_path() {
        let ctx = ctx("lang-en:\n  llm-default: generic\n  llm-gpt-4: specific\n");
        let options = ResolveOptions {
            path: PathBuf::from("p.yml"),
            env: PromptEnv::new().with_lang("EN").with_llm("gpt-4"),
        };

        let resolved = execute(&ctx, &options, &PromptDefaults::default()).unwrap();

        assert_eq!(describe_path(&resolved), "lang-en.llm-gpt-4");
        assert_eq!(resolved.section, RenderableSection::Text("specific".into()));
    }

    #[test]
    fn resolving_never_renders() {
        let ctx = AppContext::new(
            MemoryTemplateSource::new().with_file("p.yml", "default: \"Hi {{name}}\"\n"),
            RecordingRenderer::new(),
        );
        let options = ResolveOptions { path: PathBuf::from("p.yml"), env: PromptEnv::new() };

        let resolved = execute(&ctx, &options, &PromptDefaults::default()).unwrap();

        assert_eq!(resolved.section, RenderableSection::Text("Hi {{name}}".into()));
        assert!(ctx.renderer().names().is_empty());
    }

    #[test]
    fn whole_document_path_is_described() {
        let ctx = ctx("Hi {{name}}");
        let options = ResolveOptions { path: PathBuf::from("p.yml"), env: PromptEnv::new() };

        let resolved = execute(&ctx, &options, &PromptDefaults::default()).unwrap();

        assert_eq!(resolved.selection, Selection::WholeDocument);
        assert_eq!(describe_path(&resolved), "<document>");
    }

    #[test]
    fn message_section_yaml_round_trips() {
        let section = RenderableSection::Messages(vec![MessageTemplate {
            role: MessageRole::Other("critic".into()),
            content: "Review {{draft}}".into(),
        }]);

        let yaml = section_yaml(&section).unwrap();
        let reparsed = crate::domain::SpecializationNode::parse(&yaml).unwrap();

        assert_eq!(RenderableSection::try_from(&reparsed).unwrap(), section);
    }
}
