//! Selection of one renderable section from a specialization tree.
//!
//! Root entries are visited in document order. A key matching the language
//! dimension selects its value, and when that value is a mapping its nested
//! keys refine the selection: the last key matching the model dimension, or
//! the nested bare `default` when no model key matched. A root key matching
//! the model dimension selects its value directly. A root `default` is only
//! remembered as a fallback.
//!
//! Among several matching keys at one level, the one appearing later in the
//! document wins. If nothing matched, the root `default` is used, and failing
//! that the whole document is treated as the section.

use tracing::{debug, trace};

use super::error::PromptError;
use super::section::RenderableSection;
use super::tree::SpecializationNode;
use super::types::ResolutionContext;

pub const LANG_DIMENSION: &str = "lang";
pub const LLM_DIMENSION: &str = "llm";
pub const DEFAULT_KEY: &str = "default";

/// Case-insensitive matcher for `<dimension>-<value>` and `<dimension>-default`.
#[derive(Debug, Clone)]
pub struct DimensionMatcher {
    specific: Option<String>,
    fallback: String,
}

impl DimensionMatcher {
    pub fn new(dimension: &str, value: Option<&str>) -> Self {
        Self {
            specific: value
                .filter(|value| !value.is_empty())
                .map(|value| format!("{}-{}", dimension, value).to_lowercase()),
            fallback: format!("{}-{}", dimension, DEFAULT_KEY),
        }
    }

    pub fn matches(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        key == self.fallback || self.specific.as_deref() == Some(key.as_str())
    }
}

/// How the resolver arrived at its section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A language or model key matched.
    Specialized,
    /// No dimension key matched; the root `default` was used.
    RootDefault,
    /// No specialization keys at all; the document is the section.
    WholeDocument,
}

/// A selected section together with the keys that led to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSection {
    pub section: RenderableSection,
    pub path: Vec<String>,
    pub selection: Selection,
}

/// Pick the section of `tree` that best matches `context`.
pub fn resolve(
    tree: &SpecializationNode,
    context: &ResolutionContext,
) -> Result<ResolvedSection, PromptError> {
    let lang = DimensionMatcher::new(LANG_DIMENSION, context.lang.as_deref());
    let llm = DimensionMatcher::new(LLM_DIMENSION, context.llm.as_deref());

    let mut selected: Option<(Vec<&str>, &SpecializationNode)> = None;
    let mut root_default: Option<&SpecializationNode> = None;

    if let Some(root) = tree.as_branch() {
        for (key, value) in root.entries() {
            if lang.matches(key) {
                trace!(key, "language key matched");
                selected = Some((vec![key], value));

                if let Some(nested) = value.as_branch() {
                    let mut nested_match = None;
                    let mut nested_default = None;
                    for (nested_key, nested_value) in nested.entries() {
                        if llm.matches(nested_key) {
                            nested_match = Some((nested_key, nested_value));
                        } else if nested_key == DEFAULT_KEY {
                            nested_default = Some((nested_key, nested_value));
                        }
                    }
                    if let Some((nested_key, nested_value)) = nested_match.or(nested_default) {
                        trace!(key, nested_key, "nested key matched");
                        selected = Some((vec![key, nested_key], nested_value));
                    }
                }
            } else if llm.matches(key) {
                trace!(key, "model key matched");
                selected = Some((vec![key], value));
            } else if key == DEFAULT_KEY {
                root_default = Some(value);
            }
        }
    }

    let selected = selected.filter(|(_, node)| !node.is_null());
    let root_default = root_default.filter(|node| !node.is_null());

    let (selection, path, node) = match (selected, root_default) {
        (Some((path, node)), _) => (Selection::Specialized, path, node),
        (None, Some(node)) => (Selection::RootDefault, vec![DEFAULT_KEY], node),
        (None, None) => (Selection::WholeDocument, Vec::new(), tree),
    };

    let path: Vec<String> = path.into_iter().map(str::to_string).collect();
    debug!(
        path = %path.join("."),
        selection = ?selection,
        lang = ?context.lang,
        llm = ?context.llm,
        "resolved template section"
    );

    let section = RenderableSection::try_from(node)?;
    Ok(ResolvedSection { section, path, selection })
}
