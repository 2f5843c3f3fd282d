use std::collections::HashMap;

use crate::domain::configuration::PromptDefaults;

/// Variables substituted into a template when rendering.
///
/// Values are plain strings; there are no nested or typed variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptInputs {
    /// Variable name to value mapping.
    pub variables: HashMap<String, String>,
}

impl PromptInputs {
    /// Create a new empty input mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the mapping.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PromptInputs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { variables: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Explicit per-call language and model selection.
///
/// Unset fields fall back to the configured [`PromptDefaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptEnv {
    pub lang: Option<String>,
    pub llm: Option<String>,
}

impl PromptEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_llm(mut self, llm: impl Into<String>) -> Self {
        self.llm = Some(llm.into());
        self
    }
}

/// The (language, model) pair a single resolution call matches against.
///
/// Built fresh for every call. `None` means the dimension only accepts its
/// `-default` key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionContext {
    pub lang: Option<String>,
    pub llm: Option<String>,
}

impl ResolutionContext {
    /// Combine explicit values with configured defaults.
    ///
    /// Explicit values win; empty strings count as unset on both sides.
    pub fn new(env: Option<&PromptEnv>, defaults: &PromptDefaults) -> Self {
        let pick = |explicit: Option<&String>, fallback: Option<&String>| {
            explicit
                .filter(|value| !value.is_empty())
                .or(fallback.filter(|value| !value.is_empty()))
                .cloned()
        };

        Self {
            lang: pick(env.and_then(|e| e.lang.as_ref()), defaults.lang.as_ref()),
            llm: pick(env.and_then(|e| e.llm.as_ref()), defaults.llm.as_ref()),
        }
    }
}
