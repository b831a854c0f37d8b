//! Write definitions back out in the definition file format.
//!
//! Only fields the parser reads are rendered; images live next to the file
//! and are not part of it. Floats use Rust's shortest round-trip formatting,
//! so parsing the output reproduces the same values.

use std::fmt::Write;

use roster_shared::constants::{
    INFINITE_TOKEN, KEY_ARMOR, KEY_BASE, KEY_NAME, KEY_NAME_SHORT, KEY_NICKNAME, LOADOUT_CLOSE,
    LOADOUT_OPEN, STATS_CLOSE, STATS_OPEN,
};
use roster_shared::{BaseCharacter, CharacterDefinition, StatOverrides};

/// Render a `<stats>` block, one stat per line in declaration order.
pub fn render_stats_block(stats: &StatOverrides) -> String {
    let mut out = String::new();
    out.push_str(STATS_OPEN);
    out.push('\n');
    for (stat, value) in stats.iter() {
        let _ = writeln!(out, "{}: {}", stat, value);
    }
    out.push_str(STATS_CLOSE);
    out.push('\n');
    out
}

/// Render a whole definition.
///
/// `armor:` is written after `base:` so an explicit armor value survives a
/// robot base when the output is parsed again.
pub fn render_definition(data: &CharacterDefinition) -> String {
    let mut out = String::new();

    if let Some(name) = &data.name {
        let _ = writeln!(out, "{} {}", KEY_NAME, name);
    }
    if let Some(short) = data.name_short() {
        let _ = writeln!(out, "{} {}", KEY_NAME_SHORT, short);
    }
    if let Some(nickname) = &data.nickname {
        let _ = writeln!(out, "{} {}", KEY_NICKNAME, nickname);
    }
    let _ = writeln!(out, "{} {}", KEY_BASE, base_token(data.base_character));
    let _ = writeln!(out, "{} {}", KEY_ARMOR, data.armor);

    if !data.stats.is_empty() {
        out.push('\n');
        out.push_str(&render_stats_block(&data.stats));
    }

    if !data.loadout.is_empty() {
        out.push('\n');
        out.push_str(LOADOUT_OPEN);
        out.push('\n');
        for entry in &data.loadout {
            if entry.infinite {
                let _ = writeln!(out, "{} {}", entry.item.id, INFINITE_TOKEN);
            } else {
                let _ = writeln!(out, "{}", entry.item.id);
            }
        }
        out.push_str(LOADOUT_CLOSE);
        out.push('\n');
    }

    out
}

/// Name that resolves back to `character` (`coop` is stripped on lookup).
fn base_token(character: BaseCharacter) -> String {
    character.name().to_lowercase().replace("coop", "")
}
