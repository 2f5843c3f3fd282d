//! Filesystem- and environment-backed configuration loaders.
//!
//! Pure schema/model parsing lives in `domain::configuration`.

mod load_settings;
mod process_defaults;

pub use load_settings::{DEFAULT_CONFIG_FILE, load_settings};
pub use process_defaults::{process_defaults, set_process_defaults};
