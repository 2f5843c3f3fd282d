pub mod settings;

pub use settings::{LANG_ENV, LLM_ENV, PromptDefaults, Settings};
