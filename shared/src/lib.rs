//! Shared types for the Roster custom character loader.
//!
//! Everything here is plain data: the character record produced by the
//! loader, the fixed tables it resolves names against, and a couple of
//! filesystem helpers used by both the loader and the CLI.

pub mod character;
pub mod constants;
pub mod fs;
pub mod ids;
pub mod item;
pub mod stats;
pub mod texture;

pub use character::{BaseCharacter, CharacterDefinition, LoadoutEntry};
pub use item::{Item, Weapon};
pub use stats::{StatOverrides, StatType};
pub use texture::Texture;
