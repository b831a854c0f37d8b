//! Config, item catalog and scanning shared by the subcommands.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use roster_core::{
    InfiniteWeaponPool, ItemCatalog, LoaderConfig, PngDecoder, ScanResult, Scanner,
    ensure_character_dir,
};

pub struct Context {
    pub config_path: PathBuf,
    pub config: LoaderConfig,
}

impl Context {
    pub fn load(config_path: PathBuf) -> Result<Self> {
        let config = LoaderConfig::load(&config_path)?;
        tracing::debug!("Using config {}", config_path.display());
        Ok(Self {
            config_path,
            config,
        })
    }

    /// `dir` when given, otherwise the configured character directory.
    ///
    /// `dir` comes from the command line and stays relative to the working
    /// directory; a relative `character_dir` is resolved like `items_file`.
    pub fn character_dir(&self, dir: Option<&Path>) -> PathBuf {
        match dir {
            Some(dir) => dir.to_path_buf(),
            None => self.relative_to_config(&self.config.character_dir),
        }
    }

    /// Resolve a path from the config file against the config's directory.
    fn relative_to_config(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match self.config_path.parent() {
            Some(dir) => dir.join(path),
            None => path.to_path_buf(),
        }
    }

    /// The configured item catalog, or an empty one when none is configured.
    ///
    /// A relative `items_file` is resolved against the config file's directory.
    pub fn catalog(&self) -> Result<ItemCatalog> {
        let Some(items_file) = &self.config.items_file else {
            tracing::warn!("No items_file configured; every loadout item will be unknown");
            return Ok(ItemCatalog::new());
        };

        let path = self.relative_to_config(items_file);
        let catalog = ItemCatalog::load(&path)?;
        tracing::debug!("Loaded {} item(s) from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Scan the character directory with the default collaborators.
    pub fn scan(&self, dir: Option<&Path>) -> Result<(ScanResult, InfiniteWeaponPool)> {
        let root = self.character_dir(dir);
        if self.config.create_missing_dir {
            ensure_character_dir(&root)
                .with_context(|| format!("Failed to create {}", root.display()))?;
        }

        let catalog = self.catalog()?;
        let mut pool = InfiniteWeaponPool::new();
        let result = Scanner::new(&PngDecoder, &catalog, &mut pool)
            .with_options(self.config.scan_options())
            .scan(&root);
        Ok((result, pool))
    }
}
