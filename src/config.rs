//! # Configuration & Dictionary Root Resolution
//!
//! The dictionary root is the directory holding the `english/` and
//! `french/` store directories. It resolves in precedence order:
//!
//! 1. The `--base-dir` command-line flag.
//! 2. The `base_dir` field of the persisted config file.
//! 3. The platform data directory (e.g. `~/.local/share/dico` on Linux).
//!
//! ## Config File Location
//!
//! ```text
//! ~/.config/dico/config.json
//! ```
//!
//! The `directories` crate is used to resolve the platform-appropriate
//! config and data directories.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::Language;

/// Persisted user configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional dictionary root override.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from disk. Returns `Config::default()` if the
    /// file does not exist or cannot be parsed.
    pub fn load() -> Self {
        Self::try_load().unwrap_or_default()
    }

    /// Try to load configuration, returning an error on failure.
    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `Config::default()`
    /// if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the current configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Return the path to the config file.
    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "dico")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}

/// Resolve the dictionary root: CLI override first, then the config file,
/// then the platform data directory.
pub fn resolve_root(cli_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = cli_override {
        return Ok(dir);
    }
    if let Some(dir) = Config::load().base_dir {
        return Ok(dir);
    }
    default_root()
}

/// Platform data directory for the dictionary stores.
fn default_root() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "dico")
        .context("Could not determine application data directory")?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Idempotently create the per-language directories under `root`.
///
/// Called once before any store operation; both directories are created
/// regardless of which direction is in use.
pub fn ensure_directories(root: &Path) -> Result<()> {
    for lang in [Language::English, Language::French] {
        let dir = root.join(lang.dir_name());
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create language directory: {}", dir.display()))?;
    }
    Ok(())
}
