//! Definition file parser.
//!
//! The format is line oriented:
//!
//! ```text
//! # comment
//! name: The Ace
//! name short: ace
//! nickname: Ace
//! base: robot
//! armor: 3
//!
//! <stats>
//! movementspeed: 8
//! </stats>
//!
//! <loadout>
//! ak-47 infinite
//! ration
//! </loadout>
//! ```
//!
//! Keys and tags are matched case-insensitively; values keep their case.
//! Lines are applied in order, so a later line overrides an earlier one
//! (including the armor that `base: robot` implies).
//!
//! Parsing never fails. Bad lines are skipped and recorded in the
//! [`Diagnostics`] passed to the [`Parser`].

mod blocks;
mod render;

pub use render::{render_definition, render_stats_block};

use roster_shared::constants::{
    COMMENT_PREFIX, KEY_ARMOR, KEY_BASE, KEY_NAME, KEY_NAME_SHORT, KEY_NICKNAME, LOADOUT_OPEN,
    ROBOT_ARMOR, STATS_OPEN,
};
use roster_shared::{BaseCharacter, CharacterDefinition};

use crate::alias;
use crate::diagnostics::Diagnostics;
use crate::host::{ItemLookup, WeaponPool};

/// Single-pass parser for one definition file.
pub struct Parser<'a> {
    items: &'a dyn ItemLookup,
    weapons: &'a mut dyn WeaponPool,
    diagnostics: &'a mut Diagnostics,
    source: &'a str,
}

impl<'a> Parser<'a> {
    /// `source` labels every diagnostic this parser records.
    pub fn new(
        items: &'a dyn ItemLookup,
        weapons: &'a mut dyn WeaponPool,
        diagnostics: &'a mut Diagnostics,
        source: &'a str,
    ) -> Self {
        Self {
            items,
            weapons,
            diagnostics,
            source,
        }
    }

    /// Parse all lines into a fresh definition.
    pub fn parse<S: AsRef<str>>(&mut self, lines: &[S]) -> CharacterDefinition {
        let mut data = CharacterDefinition::default();

        let mut i = 0;
        while i < lines.len() {
            let line_no = i + 1;
            let raw = lines[i].as_ref().trim();
            let line = raw.to_ascii_lowercase();
            i += 1;

            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }

            // Block handlers return the index of their closing tag, or None
            // when the input ran out first.
            if line.starts_with(LOADOUT_OPEN) {
                let (loadout, close) = self.parse_loadout(lines, i);
                data.loadout = loadout;
                i = close.map_or(lines.len(), |close| close + 1);
                continue;
            }

            if line.starts_with(STATS_OPEN) {
                let (stats, close) = self.parse_stats(lines, i);
                data.stats = stats;
                i = close.map_or(lines.len(), |close| close + 1);
                continue;
            }

            let Some(divider) = line.find(':') else {
                continue;
            };
            // ASCII lowercasing keeps byte offsets, so the divider indexes `raw` too.
            let value = raw[divider + 1..].trim();

            if line.starts_with(KEY_BASE) {
                data.base_character = match alias::resolve(value) {
                    Ok(character) => character,
                    Err(err) => {
                        self.diagnostics
                            .warning(self.source, Some(line_no), err.to_string());
                        BaseCharacter::FALLBACK
                    }
                };
                if data.base_character == BaseCharacter::Robot {
                    data.armor = ROBOT_ARMOR;
                }
                continue;
            }
            if line.starts_with(KEY_NAME) {
                data.name = Some(value.to_string());
                continue;
            }
            if line.starts_with(KEY_NAME_SHORT) {
                data.set_short_name(value);
                continue;
            }
            if line.starts_with(KEY_NICKNAME) {
                data.nickname = Some(value.to_string());
                continue;
            }
            if line.starts_with(KEY_ARMOR) {
                match value.parse::<f32>() {
                    Ok(armor) => data.armor = armor,
                    Err(_) => self.diagnostics.error(
                        self.source,
                        Some(line_no),
                        format!("Invalid armor value: {}", raw),
                    ),
                }
                continue;
            }

            self.diagnostics.error(
                self.source,
                Some(line_no),
                format!("Line did not meet any expected criteria: {}", raw),
            );
        }

        data
    }
}

/// Parse text in one call, returning the definition and its diagnostics.
pub fn parse_definition(
    text: &str,
    source: &str,
    items: &dyn ItemLookup,
    weapons: &mut dyn WeaponPool,
) -> (CharacterDefinition, Diagnostics) {
    let lines = roster_shared::fs::split_lines(text);
    let mut diagnostics = Diagnostics::new();
    let data = Parser::new(items, weapons, &mut diagnostics, source).parse(&lines);
    (data, diagnostics)
}
