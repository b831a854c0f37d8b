//! Centralized constants for the character data layout.
//!
//! Single source of truth for file names, folder names and the tokens of the
//! definition file grammar. Both the directory and the archive loaders read
//! from here so the two source kinds can never drift apart.

/// Default name of the per-character definition file.
pub const DEFAULT_DATA_FILE: &str = "characterdata.txt";

/// Default image extension (without the dot) picked up next to a definition.
pub const DEFAULT_IMAGE_EXTENSION: &str = "png";

/// Archive extension (without the dot) scanned at the top of the root directory.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Default folder name for character sources, relative to the data directory.
pub const CHARACTER_DIR_NAME: &str = "CustomCharacterData";

/// Prefix joined with the short name to form the internal identifier.
///
/// ```
/// use roster_shared::constants::INTERNAL_NAME_PREFIX;
/// assert_eq!(format!("{INTERNAL_NAME_PREFIX}Ace"), "PlayerAce");
/// ```
pub const INTERNAL_NAME_PREFIX: &str = "Player";

/// Armor forced by `base: robot`.
pub const ROBOT_ARMOR: f32 = 6.0;

// === Image folders (relative to the definition file) ===

pub const SPRITES_DIR: &str = "sprites";
pub const FOYER_CARD_DIR: &str = "foyercard";
pub const PUNCHOUT_DIR: &str = "punchout";
pub const PUNCHOUT_SPRITES_DIR: &str = "punchout/sprites";

// === Singleton image names (extension stripped, compared lowercase) ===

pub const ICON_IMAGE: &str = "icon";
pub const BOSS_CARD_IMAGE: &str = "bosscard";
pub const PLAYER_SHEET_IMAGE: &str = "playersheet";
pub const FACE_CARD_IMAGE: &str = "facecard";

/// Substrings that mark an image in `punchout/` as a punchout face card.
pub const PUNCHOUT_FACE_CARD_MARKERS: [&str; 3] = ["facecard1", "facecard2", "facecard3"];

// === Definition grammar ===

pub const COMMENT_PREFIX: &str = "#";
pub const LOADOUT_OPEN: &str = "<loadout>";
pub const LOADOUT_CLOSE: &str = "</loadout>";
pub const STATS_OPEN: &str = "<stats>";
pub const STATS_CLOSE: &str = "</stats>";

pub const KEY_BASE: &str = "base:";
pub const KEY_NAME: &str = "name:";
pub const KEY_NAME_SHORT: &str = "name short:";
pub const KEY_NICKNAME: &str = "nickname:";
pub const KEY_ARMOR: &str = "armor:";

/// Token on a loadout line that requests infinite ammo (matched by containment).
pub const INFINITE_TOKEN: &str = "infinite";
