//! Character source scanning.
//!
//! A character directory holds one source per immediate subdirectory and per
//! top-level `.zip` archive:
//!
//! ```text
//! CustomCharacterData/
//!   ace/
//!     characterdata.txt
//!     icon.png
//!     sprites/*.png
//!     foyercard/*.png
//!     punchout/facecard1.png
//!     punchout/sprites/*.png
//!   pack.zip            (any number of characterdata.txt files inside)
//! ```
//!
//! Each source is loaded independently. A broken source is skipped with a
//! diagnostic and never stops the scan.

mod archive;
mod directory;
mod tree;

pub use tree::{SourceTree, TreeSlot};

use std::path::{Path, PathBuf};
use std::time::Instant;

use roster_shared::constants::{ARCHIVE_EXTENSION, DEFAULT_DATA_FILE, DEFAULT_IMAGE_EXTENSION};
use roster_shared::CharacterDefinition;
use serde::Serialize;

use crate::diagnostics::Diagnostics;
use crate::error::LoadError;
use crate::host::{ImageDecoder, ItemLookup, WeaponPool};
use crate::parser::Parser;

/// File names the scanner looks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Definition file name, matched case-insensitively.
    pub data_file: String,
    /// Image extension without the dot, matched case-insensitively.
    pub image_extension: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            image_extension: DEFAULT_IMAGE_EXTENSION.to_string(),
        }
    }
}

/// Where a definition was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceOrigin {
    Directory {
        path: PathBuf,
    },
    Archive {
        path: PathBuf,
        /// Directory of the definition file inside the archive, `/`-terminated
        /// (empty at the archive root).
        prefix: String,
    },
}

impl SourceOrigin {
    /// Short label used in diagnostics: `ace` or `pack.zip:ace`.
    pub fn label(&self) -> String {
        match self {
            SourceOrigin::Directory { path } => file_name_lossy(path),
            SourceOrigin::Archive { path, prefix } => {
                let archive = file_name_lossy(path);
                let prefix = prefix.trim_end_matches('/');
                if prefix.is_empty() {
                    archive
                } else {
                    format!("{}:{}", archive, prefix)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadedCharacter {
    pub definition: CharacterDefinition,
    pub origin: SourceOrigin,
}

/// Everything one scan produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanResult {
    /// Directories first, then archives, each in file-name order.
    pub characters: Vec<LoadedCharacter>,
    pub diagnostics: Diagnostics,
}

impl ScanResult {
    pub fn definitions(&self) -> impl Iterator<Item = &CharacterDefinition> {
        self.characters.iter().map(|c| &c.definition)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

/// Scans a character directory using the host collaborators.
pub struct Scanner<'a> {
    decoder: &'a dyn ImageDecoder,
    items: &'a dyn ItemLookup,
    weapons: &'a mut dyn WeaponPool,
    options: ScanOptions,
    diagnostics: Diagnostics,
}

impl<'a> Scanner<'a> {
    pub fn new(
        decoder: &'a dyn ImageDecoder,
        items: &'a dyn ItemLookup,
        weapons: &'a mut dyn WeaponPool,
    ) -> Self {
        Self {
            decoder,
            items,
            weapons,
            options: ScanOptions::default(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// Load every source under `root`.
    ///
    /// An unreadable root yields an empty result with one error diagnostic.
    pub fn scan(mut self, root: &Path) -> ScanResult {
        let started = Instant::now();
        tracing::info!("Scanning {} for custom characters", root.display());

        let (directories, archives) = match list_sources(root) {
            Ok(sources) => sources,
            Err(err) => {
                self.diagnostics
                    .error(&file_name_lossy(root), None, err.to_string());
                return ScanResult {
                    characters: Vec::new(),
                    diagnostics: self.diagnostics,
                };
            }
        };

        let mut characters = Vec::new();

        for dir in directories {
            let source_started = Instant::now();
            let label = file_name_lossy(&dir);
            match self.load_directory(&dir) {
                Ok(definition) => {
                    tracing::info!(
                        "Loaded {} from {} in {:.2?}",
                        definition.label(),
                        label,
                        source_started.elapsed()
                    );
                    characters.push(LoadedCharacter {
                        definition,
                        origin: SourceOrigin::Directory { path: dir },
                    });
                }
                Err(err @ LoadError::MissingDefinition { .. }) => {
                    self.diagnostics.warning(&label, None, err.to_string());
                }
                Err(err) => {
                    self.diagnostics.error(&label, None, err.to_string());
                }
            }
        }

        for path in archives {
            let source_started = Instant::now();
            let label = file_name_lossy(&path);
            match self.load_archive(&path) {
                Ok(loaded) => {
                    tracing::info!(
                        "Loaded {} character(s) from {} in {:.2?}",
                        loaded.len(),
                        label,
                        source_started.elapsed()
                    );
                    characters.extend(loaded);
                }
                Err(err) => {
                    self.diagnostics.error(&label, None, err.to_string());
                }
            }
        }

        tracing::info!(
            "Found {} custom character(s) in {:.2?} ({} diagnostic(s))",
            characters.len(),
            started.elapsed(),
            self.diagnostics.len()
        );

        ScanResult {
            characters,
            diagnostics: self.diagnostics,
        }
    }

    /// Run the parser over a definition's text.
    fn parse_text(&mut self, text: &str, label: &str) -> CharacterDefinition {
        let lines = roster_shared::fs::split_lines(text);
        Parser::new(self.items, &mut *self.weapons, &mut self.diagnostics, label).parse(&lines)
    }

    /// Strip the image extension from `file_name`, or `None` if it is not an image.
    fn image_stem<'n>(&self, file_name: &'n str) -> Option<&'n str> {
        let ext_len = self.options.image_extension.len() + 1;
        let split = file_name.len().checked_sub(ext_len)?;
        if split == 0 || !file_name.is_char_boundary(split) {
            return None;
        }
        let (stem, ext) = file_name.split_at(split);
        let matches = ext
            .strip_prefix('.')
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.options.image_extension));
        matches.then_some(stem)
    }

    /// Decode one image into `tree`, recording a diagnostic on failure.
    fn decode_into(
        &mut self,
        tree: &mut SourceTree,
        slot: TreeSlot,
        stem: &str,
        bytes: &[u8],
        label: &str,
    ) {
        match self.decoder.decode(stem, bytes) {
            Ok(texture) => tree.push(slot, texture),
            Err(err) => self.diagnostics.error(label, None, format!("{:#}", err)),
        }
    }
}

/// Scan `root` with default options.
pub fn scan_characters(
    root: &Path,
    decoder: &dyn ImageDecoder,
    items: &dyn ItemLookup,
    weapons: &mut dyn WeaponPool,
) -> ScanResult {
    Scanner::new(decoder, items, weapons).scan(root)
}

/// Create the character directory if it does not exist yet.
///
/// Returns `true` when the directory was created.
pub fn ensure_character_dir(path: &Path) -> std::io::Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(path)?;
    tracing::info!("Created character directory: {}", path.display());
    Ok(true)
}

/// Immediate subdirectories and top-level archives, each sorted by file name.
fn list_sources(root: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>), LoadError> {
    let entries = std::fs::read_dir(root).map_err(|source| LoadError::ListDir {
        path: root.to_path_buf(),
        source,
    })?;

    let mut directories = Vec::new();
    let mut archives = Vec::new();
    for entry in entries.filter_map(|entry| entry.ok()) {
        let path = entry.path();
        if path.is_dir() {
            directories.push(path);
        } else if path.is_file()
            && path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(ARCHIVE_EXTENSION))
        {
            archives.push(path);
        }
    }

    directories.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    archives.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok((directories, archives))
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
