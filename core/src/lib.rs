//! Roster Core - custom character loading
//!
//! Reads custom character definitions from a character directory and turns
//! them into [`CharacterDefinition`] records ready to hand to a host.
//!
//! # Architecture
//!
//! - [`Scanner`] - Finds sources (subdirectories and `.zip` archives) and loads each one
//! - [`Parser`] - Line-oriented parser for the definition file
//! - [`alias`] - Base character name resolution
//! - [`host`] - Traits for the collaborators the host provides (images, items, weapons)
//! - [`CharacterBuilder`] - Host hook that receives finished records
//!
//! Problems never abort a scan; they are collected as [`Diagnostics`].

pub mod alias;
pub mod build;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod host;
pub mod lookup;
pub mod parser;
pub mod scan;
#[cfg(test)]
mod test_utils;

pub use build::{BuildFailure, BuildReport, CharacterBuilder, build_all};
pub use config::LoaderConfig;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{LoadError, UnknownBaseCharacter};
pub use host::{ImageDecoder, InfiniteWeaponPool, ItemCatalog, ItemLookup, PngDecoder, WeaponPool};
pub use lookup::{LookupError, resolve_character};
pub use parser::{Parser, parse_definition, render_definition, render_stats_block};
pub use scan::{
    LoadedCharacter, ScanOptions, ScanResult, Scanner, SourceOrigin, ensure_character_dir,
    scan_characters,
};

pub use roster_shared::{CharacterDefinition, StatOverrides, StatType};
