//! The character record assembled from one source.

use serde::{Deserialize, Serialize};

use crate::constants::INTERNAL_NAME_PREFIX;
use crate::item::Item;
use crate::stats::StatOverrides;
use crate::texture::Texture;

/// Built-in characters a custom character can derive from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseCharacter {
    #[default]
    Pilot,
    Convict,
    Robot,
    Ninja,
    Cosmonaut,
    Soldier,
    Guide,
    CoopCultist,
    Bullet,
    Eevee,
    Gunslinger,
}

impl BaseCharacter {
    /// Every base character, in declaration order.
    pub const ALL: [BaseCharacter; 11] = [
        BaseCharacter::Pilot,
        BaseCharacter::Convict,
        BaseCharacter::Robot,
        BaseCharacter::Ninja,
        BaseCharacter::Cosmonaut,
        BaseCharacter::Soldier,
        BaseCharacter::Guide,
        BaseCharacter::CoopCultist,
        BaseCharacter::Bullet,
        BaseCharacter::Eevee,
        BaseCharacter::Gunslinger,
    ];

    /// Used when a `base:` value matches nothing.
    pub const FALLBACK: BaseCharacter = BaseCharacter::Pilot;

    /// Canonical variant name.
    pub fn name(self) -> &'static str {
        match self {
            BaseCharacter::Pilot => "Pilot",
            BaseCharacter::Convict => "Convict",
            BaseCharacter::Robot => "Robot",
            BaseCharacter::Ninja => "Ninja",
            BaseCharacter::Cosmonaut => "Cosmonaut",
            BaseCharacter::Soldier => "Soldier",
            BaseCharacter::Guide => "Guide",
            BaseCharacter::CoopCultist => "CoopCultist",
            BaseCharacter::Bullet => "Bullet",
            BaseCharacter::Eevee => "Eevee",
            BaseCharacter::Gunslinger => "Gunslinger",
        }
    }
}

impl std::fmt::Display for BaseCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One line of a `<loadout>` block after resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadoutEntry {
    pub item: Item,
    pub infinite: bool,
}

impl LoadoutEntry {
    pub fn new(item: Item, infinite: bool) -> Self {
        Self { item, infinite }
    }
}

/// Everything known about one custom character.
///
/// Created empty when parsing of a source starts, filled in line by line and
/// then by the image scan, and handed to a builder once complete.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CharacterDefinition {
    /// Display name (`name:`).
    pub name: Option<String>,
    /// Set together with `name_internal` through [`Self::set_short_name`].
    name_short: Option<String>,
    name_internal: Option<String>,
    pub nickname: Option<String>,
    pub base_character: BaseCharacter,
    pub armor: f32,
    pub stats: StatOverrides,
    pub loadout: Vec<LoadoutEntry>,

    pub sprites: Option<Vec<Texture>>,
    pub foyer_card_sprites: Option<Vec<Texture>>,
    pub punchout_sprites: Option<Vec<Texture>>,
    pub punchout_face_cards: Option<Vec<Texture>>,
    pub minimap_icon: Option<Texture>,
    pub boss_card: Option<Texture>,
    pub player_sheet: Option<Texture>,
    pub face_card: Option<Texture>,
}

impl CharacterDefinition {
    /// Store the short name (spaces become underscores) and derive the
    /// internal identifier from it.
    pub fn set_short_name(&mut self, value: &str) {
        let short = value.replace(' ', "_");
        self.name_internal = Some(format!("{INTERNAL_NAME_PREFIX}{short}"));
        self.name_short = Some(short);
    }

    pub fn name_short(&self) -> Option<&str> {
        self.name_short.as_deref()
    }

    /// `"Player" + short name`, once a short name is set.
    pub fn name_internal(&self) -> Option<&str> {
        self.name_internal.as_deref()
    }

    /// Name used in log output: display name, then short name.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.name_short.as_deref())
            .unwrap_or("<unnamed>")
    }
}
