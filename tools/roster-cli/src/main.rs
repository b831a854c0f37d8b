//! Roster CLI - inspect and export custom characters
//!
//! # Commands
//!
//! - `roster scan [DIR]` - Load every character source and report the results
//! - `roster check <FILE>` - Parse a single definition file and list its problems
//! - `roster show <NAME> [DIR]` - Print one character, looked up by short name
//! - `roster build [DIR] --output <OUT>` - Export characters as JSON plus PNG images
//! - `roster init` - Write a default roster.toml
//!
//! # Configuration (roster.toml)
//!
//! ```toml
//! character_dir = "CustomCharacterData"
//! data_file = "characterdata.txt"
//! image_extension = "png"
//! create_missing_dir = true
//! items_file = "items.toml"
//! ```
//!
//! Log output goes to stderr; set `RUST_LOG` or pass `--verbose` for more.

mod build;
mod check;
mod context;
mod init;
mod scan;
mod show;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use context::Context;

/// Roster CLI - inspect and export custom characters
#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Inspect and export custom characters")]
#[command(version)]
struct Cli {
    /// Config file (default: ./roster.toml, then the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load every character source in a directory
    Scan(scan::ScanArgs),

    /// Parse a single definition file
    Check(check::CheckArgs),

    /// Show one character by short name or internal name
    Show(show::ShowArgs),

    /// Export characters as JSON manifests and PNG images
    Build(build::BuildArgs),

    /// Write a default config file
    Init(init::InitArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.unwrap_or_else(roster_core::config::default_config_path);

    match cli.command {
        Commands::Init(args) => init::execute(args, &config_path),
        Commands::Scan(args) => scan::execute(args, &Context::load(config_path)?),
        Commands::Check(args) => check::execute(args, &Context::load(config_path)?),
        Commands::Show(args) => show::execute(args, &Context::load(config_path)?),
        Commands::Build(args) => build::execute(args, &Context::load(config_path)?),
    }
}
