//! Scan command - load every character source and report

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use roster_core::{LoadedCharacter, ScanResult};
use serde::Serialize;

use crate::context::Context;

/// Arguments for the scan command
#[derive(Args)]
pub struct ScanArgs {
    /// Character directory (default: character_dir from the config)
    pub dir: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output of `roster scan --json`.
#[derive(Serialize)]
struct ScanReport<'a> {
    #[serde(flatten)]
    result: &'a ScanResult,
    infinite_weapons: Vec<&'a str>,
}

/// Execute the scan command
pub fn execute(args: ScanArgs, ctx: &Context) -> Result<()> {
    let (result, pool) = ctx.scan(args.dir.as_deref())?;

    if args.json {
        let report = ScanReport {
            result: &result,
            infinite_weapons: pool.weapons().iter().map(|item| item.id.as_str()).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=== {} character(s) ===", result.len());
    for character in &result.characters {
        println!("{}", summary_line(character));
    }

    if !result.diagnostics.is_empty() {
        println!();
        println!("=== {} diagnostic(s) ===", result.diagnostics.len());
        for diagnostic in &result.diagnostics {
            println!("  [{:?}] {}", diagnostic.severity, diagnostic);
        }
    }

    if !pool.is_empty() {
        println!();
        println!("Infinite weapons: {}", pool.len());
    }

    Ok(())
}

/// One line per character: label, short name, base, origin and counts.
pub fn summary_line(character: &LoadedCharacter) -> String {
    let data = &character.definition;
    format!(
        "  {} ({}) base={} from {} | {} stat(s), {} item(s), {} image(s)",
        data.label(),
        data.name_short().unwrap_or("-"),
        data.base_character,
        character.origin.label(),
        data.stats.len(),
        data.loadout.len(),
        image_count(character),
    )
}

fn image_count(character: &LoadedCharacter) -> usize {
    let data = &character.definition;
    let collections = [
        &data.sprites,
        &data.foyer_card_sprites,
        &data.punchout_sprites,
        &data.punchout_face_cards,
    ];
    let singletons = [
        &data.minimap_icon,
        &data.boss_card,
        &data.player_sheet,
        &data.face_card,
    ];
    collections
        .iter()
        .map(|c| c.as_ref().map_or(0, Vec::len))
        .sum::<usize>()
        + singletons.iter().filter(|s| s.is_some()).count()
}
