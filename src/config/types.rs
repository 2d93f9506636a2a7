//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{LibraryFixup, LEGACY_LIBRARY_SUFFIX, LIBRARY_SUFFIX};
use crate::error::StageResult;

use super::loader::{self, ConfigWarning};

/// Library extension fix-up configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixupConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_legacy_extension")]
    pub legacy_extension: String,

    #[serde(default = "default_library_extension")]
    pub library_extension: String,
}

impl Default for FixupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            legacy_extension: default_legacy_extension(),
            library_extension: default_library_extension(),
        }
    }
}

impl FixupConfig {
    /// The fix-up to apply, `None` when disabled
    pub fn to_fixup(&self) -> Option<LibraryFixup> {
        self.enabled.then(|| {
            LibraryFixup::new(
                self.legacy_extension.clone(),
                self.library_extension.clone(),
            )
        })
    }
}

fn default_true() -> bool {
    true
}

fn default_legacy_extension() -> String {
    LEGACY_LIBRARY_SUFFIX.to_string()
}

fn default_library_extension() -> String {
    LIBRARY_SUFFIX.to_string()
}

/// Copy behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CopyConfig {
    /// Replace existing destinations instead of failing
    #[serde(default)]
    pub overwrite_existing: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StageConfig {
    #[serde(default)]
    pub fixup: FixupConfig,

    #[serde(default)]
    pub copy: CopyConfig,
}

impl StageConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StageResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> StageResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (AAPT2_STAGE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
