//! Show command - print one character
//!
//! Supports smart lookup:
//! - Short name: `roster show the_ace`
//! - Internal name: `roster show Playerthe_ace`
//! - Prefix matching: `roster show the` (if unique)

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use roster_core::{render_definition, resolve_character};

use crate::context::Context;
use crate::scan::summary_line;

/// Arguments for the show command
#[derive(Args)]
pub struct ShowArgs {
    /// Short name, internal name or unique prefix
    pub name: String,

    /// Character directory (default: character_dir from the config)
    pub dir: Option<PathBuf>,

    /// Print the character as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the show command
pub fn execute(args: ShowArgs, ctx: &Context) -> Result<()> {
    let (result, _) = ctx.scan(args.dir.as_deref())?;

    let character = match resolve_character(&args.name, &result.characters) {
        Ok(character) => character,
        Err(err) => {
            if let Some(suggestions) = &err.suggestion {
                eprintln!("Did you mean: {}?", suggestions.join(", "));
            }
            bail!(err);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(character)?);
        return Ok(());
    }

    println!("{}", summary_line(character));
    if let Some(internal) = character.definition.name_internal() {
        println!("  Internal name: {}", internal);
    }
    println!();
    print!("{}", render_definition(&character.definition));
    Ok(())
}
