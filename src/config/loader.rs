//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StageError, StageResult};

use super::types::StageConfig;

/// Project-level config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = ".aapt2-stage.toml";

/// Overrides the user config directory (test isolation)
pub const CONFIG_HOME_VAR: &str = "AAPT2_STAGE_CONFIG_HOME";

pub const ENV_FIXUP: &str = "AAPT2_STAGE_FIXUP";
pub const ENV_LEGACY_EXTENSION: &str = "AAPT2_STAGE_LEGACY_EXTENSION";
pub const ENV_LIBRARY_EXTENSION: &str = "AAPT2_STAGE_LIBRARY_EXTENSION";
pub const ENV_OVERWRITE: &str = "AAPT2_STAGE_OVERWRITE";

/// Non-fatal configuration warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StageResult<(StageConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: StageConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| StageError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
///
/// A config file that exists but fails to parse is skipped with a warning.
pub fn load_or_default(project_root: Option<&Path>) -> StageConfig {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_dir().map(|dir| dir.join("aapt2-stage/config.toml")));

    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                for warning in warnings {
                    tracing::warn!("{warning}");
                }
                return with_env_overrides(config);
            }
            Err(error) => {
                tracing::warn!(%error, path = %candidate.display(), "ignoring unreadable config");
            }
        }
    }

    with_env_overrides(StageConfig::default())
}

/// Apply environment variable overrides (AAPT2_STAGE_* prefix)
pub fn with_env_overrides(config: StageConfig) -> StageConfig {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(super) fn apply_overrides(
    mut config: StageConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> StageConfig {
    if let Some(val) = lookup(ENV_FIXUP) {
        config.fixup.enabled = parse_flag(&val);
    }

    if let Some(ext) = lookup(ENV_LEGACY_EXTENSION) {
        config.fixup.legacy_extension = ext;
    }

    if let Some(ext) = lookup(ENV_LIBRARY_EXTENSION) {
        config.fixup.library_extension = ext;
    }

    if let Some(val) = lookup(ENV_OVERWRITE) {
        config.copy.overwrite_existing = parse_flag(&val);
    }

    config
}

fn parse_flag(val: &str) -> bool {
    !matches!(val.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off")
}

fn user_config_dir() -> Option<PathBuf> {
    std::env::var(CONFIG_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "fixup",
        "enabled",
        "legacy_extension",
        "library_extension",
        "copy",
        "overwrite_existing",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
