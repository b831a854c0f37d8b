//! Collaborators provided by the host.
//!
//! The loader never touches engine state directly. Image decoding, item
//! lookup and the always-available weapon pool sit behind these traits so
//! the parser and scanner can run (and be tested) outside the game.
//!
//! Default implementations:
//! - [`PngDecoder`] decodes with the `image` crate
//! - [`ItemCatalog`] is an in-memory table, loadable from TOML
//! - [`InfiniteWeaponPool`] records registered weapons

mod catalog;
mod decoder;
mod weapons;

pub use catalog::{CatalogEntry, ItemCatalog};
pub use decoder::PngDecoder;
pub use weapons::InfiniteWeaponPool;

use anyhow::Result;
use roster_shared::{Item, Texture};

/// Turns raw image bytes into a [`Texture`].
pub trait ImageDecoder {
    /// Decode `bytes`; `name` becomes the texture name (extension stripped).
    fn decode(&self, name: &str, bytes: &[u8]) -> Result<Texture>;
}

/// Resolves loadout item identifiers.
pub trait ItemLookup {
    /// Find an item by identifier. Identifiers arrive lowercased.
    fn find(&self, id: &str) -> Option<Item>;
}

/// Weapons that every character can fire without ammo.
///
/// A loadout entry marked `infinite` registers its weapon here unless the
/// weapon already has infinite ammo or is already registered.
pub trait WeaponPool {
    fn contains(&self, id: &str) -> bool;
    fn register(&mut self, item: &Item);
}
