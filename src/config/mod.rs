//! Configuration module for aapt2-stage
//!
//! Configuration hierarchy:
//! 1. Environment variables (AAPT2_STAGE_*) (highest priority)
//! 2. Project config (<root>/.aapt2-stage.toml)
//! 3. User config (<config dir>/aapt2-stage/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    ConfigWarning, CONFIG_HOME_VAR, ENV_FIXUP, ENV_LEGACY_EXTENSION, ENV_LIBRARY_EXTENSION,
    ENV_OVERWRITE, PROJECT_CONFIG_FILE,
};
pub use types::{CopyConfig, FixupConfig, StageConfig};
