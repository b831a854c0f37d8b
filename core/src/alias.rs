//! Base character name resolution.
//!
//! Names are matched case-insensitively against each variant's canonical
//! name with `coop` removed (so `cultist` finds `CoopCultist`), then against
//! a short table of community aliases.

use std::sync::LazyLock;

use roster_shared::BaseCharacter;

use crate::error::UnknownBaseCharacter;

/// Alias → variant, checked after the canonical names.
const ALIASES: [(&str, BaseCharacter); 3] = [
    ("marine", BaseCharacter::Soldier),
    ("hunter", BaseCharacter::Guide),
    ("paradox", BaseCharacter::Eevee),
];

/// Lowercased canonical names with `coop` stripped, built once.
static CANONICAL_NAMES: LazyLock<Vec<(String, BaseCharacter)>> = LazyLock::new(|| {
    BaseCharacter::ALL
        .into_iter()
        .map(|character| {
            let name = character.name().to_lowercase().replace("coop", "");
            (name, character)
        })
        .collect()
});

/// Resolve a `base:` value to a base character.
///
/// Callers decide how to fall back; the parser uses
/// [`BaseCharacter::FALLBACK`] and records a diagnostic.
pub fn resolve(name: &str) -> Result<BaseCharacter, UnknownBaseCharacter> {
    let lower = name.trim().to_lowercase();

    if let Some((_, character)) = CANONICAL_NAMES.iter().find(|(n, _)| *n == lower) {
        return Ok(*character);
    }

    ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map(|(_, character)| *character)
        .ok_or_else(|| UnknownBaseCharacter(name.to_string()))
}
