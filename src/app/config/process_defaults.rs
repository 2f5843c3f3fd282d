//! Process-wide default resolution context.
//!
//! Seeded lazily from `PROMPTSPEC_LANG` / `PROMPTSPEC_LLM`. Readers take a
//! snapshot, so a call never observes a change made while it runs.

use std::sync::{OnceLock, PoisonError, RwLock};

use tracing::warn;

use crate::domain::{PromptDefaults, Settings};

static DEFAULTS: OnceLock<RwLock<PromptDefaults>> = OnceLock::new();

fn cell() -> &'static RwLock<PromptDefaults> {
    DEFAULTS.get_or_init(|| {
        let settings = Settings::default().with_env_overrides().unwrap_or_else(|err| {
            warn!(error = %err, "ignoring invalid prompt defaults from environment");
            Settings::default()
        });
        RwLock::new(settings.prompt)
    })
}

/// Snapshot of the current process-wide defaults.
pub fn process_defaults() -> PromptDefaults {
    cell().read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Replace the process-wide defaults.
pub fn set_process_defaults(defaults: PromptDefaults) {
    *cell().write().unwrap_or_else(PoisonError::into_inner) = defaults;
}
