//! Init command - write a default roster.toml

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::Args;
use roster_core::LoaderConfig;

/// Arguments for the init command
#[derive(Args)]
pub struct InitArgs {
    /// Character directory to store in the config
    #[arg(long)]
    pub character_dir: Option<PathBuf>,

    /// Item catalog to store in the config
    #[arg(long)]
    pub items_file: Option<PathBuf>,

    /// Overwrite an existing config
    #[arg(long)]
    pub force: bool,
}

/// Execute the init command
pub fn execute(args: InitArgs, config_path: &Path) -> Result<()> {
    if config_path.exists() && !args.force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    let mut config = LoaderConfig::default();
    if let Some(dir) = args.character_dir {
        config.character_dir = dir;
    }
    config.items_file = args.items_file;

    config.save(config_path)?;
    println!("Created {}", config_path.display());
    println!("  Character directory: {}", config.character_dir.display());
    Ok(())
}
