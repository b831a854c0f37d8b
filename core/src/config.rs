//! Loader configuration (`roster.toml`).
//!
//! Every field has a default, so a missing, empty or partial file is valid.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use roster_shared::constants::{CHARACTER_DIR_NAME, DEFAULT_DATA_FILE, DEFAULT_IMAGE_EXTENSION};
use serde::{Deserialize, Serialize};

use crate::scan::ScanOptions;

/// Default config file name, looked up in the working directory first.
pub const CONFIG_FILE_NAME: &str = "roster.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Directory holding character sources (default: `<data dir>/CustomCharacterData`)
    #[serde(default = "default_character_dir")]
    pub character_dir: PathBuf,
    /// Definition file name (default: `characterdata.txt`)
    #[serde(default = "default_data_file")]
    pub data_file: String,
    /// Image extension without the dot (default: `png`)
    #[serde(default = "default_image_extension")]
    pub image_extension: String,
    /// Create `character_dir` when it is missing (default: true)
    #[serde(default = "default_true")]
    pub create_missing_dir: bool,
    /// Item catalog TOML used to resolve loadouts (default: none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_file: Option<PathBuf>,
}

fn default_character_dir() -> PathBuf {
    data_dir()
        .map(|dir| dir.join(CHARACTER_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(CHARACTER_DIR_NAME))
}
fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}
fn default_image_extension() -> String {
    DEFAULT_IMAGE_EXTENSION.to_string()
}
fn default_true() -> bool {
    true
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            character_dir: default_character_dir(),
            data_file: default_data_file(),
            image_extension: default_image_extension(),
            create_missing_dir: default_true(),
            items_file: None,
        }
    }
}

impl LoaderConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid loader config")
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Write the config, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            data_file: self.data_file.clone(),
            image_extension: self.image_extension.trim_start_matches('.').to_string(),
        }
    }
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\Roster\config`
/// On macOS: `~/Library/Application Support/io.roster.Roster`
/// On Linux: `~/.config/Roster`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.roster", "", "Roster")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Returns the platform-specific data directory.
///
/// On Windows: `%APPDATA%\Roster\data`
/// On macOS: `~/Library/Application Support/io.roster.Roster`
/// On Linux: `~/.local/share/Roster`
pub fn data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.roster", "", "Roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

/// Config file to use when none is given: `./roster.toml` if present,
/// otherwise the one in [`config_dir`].
pub fn default_config_path() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .unwrap_or(local)
}
