//! Check command - parse one definition file and list its problems

use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};
use clap::Args;
use roster_core::{InfiniteWeaponPool, parse_definition};
use roster_shared::fs::{MAX_DEFINITION_BYTES, read_text_with_limit};

use crate::context::Context;

/// Arguments for the check command
#[derive(Args)]
pub struct CheckArgs {
    /// Definition file to check (e.g. ./ace/characterdata.txt)
    pub file: PathBuf,
}

/// Execute the check command
///
/// Fails when the file has any error-level diagnostics; warnings and info
/// are printed but do not fail the check.
pub fn execute(args: CheckArgs, ctx: &Context) -> Result<()> {
    let text = read_text_with_limit(&args.file, MAX_DEFINITION_BYTES)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let catalog = ctx.catalog()?;
    let mut pool = InfiniteWeaponPool::new();
    let source = args.file.display().to_string();
    let (data, diagnostics) = parse_definition(&text, &source, &catalog, &mut pool);

    println!("=== {} ===", source);
    println!("  Name:      {}", data.name.as_deref().unwrap_or("-"));
    println!("  Short:     {}", data.name_short().unwrap_or("-"));
    println!("  Base:      {}", data.base_character);
    println!("  Armor:     {}", data.armor);
    println!("  Stats:     {}", data.stats.len());
    println!("  Loadout:   {}", data.loadout.len());

    for diagnostic in &diagnostics {
        println!("  [{:?}] {}", diagnostic.severity, diagnostic);
    }

    let errors = diagnostics.error_count();
    if errors > 0 {
        bail!("{} error(s) in {}", errors, source);
    }

    println!("OK");
    Ok(())
}
