//! Error types for source-level failures.
//!
//! Every variant is recoverable at the scanner: the offending source (or
//! archive entry) is skipped and the error is recorded as a diagnostic.

use std::path::PathBuf;

use roster_shared::fs::ReadError;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The directory has no definition file.
    #[error("No \"{file}\" file found for {}", dir.display())]
    MissingDefinition { dir: PathBuf, file: String },

    /// Reading a file from disk failed or the file was too large.
    #[error(transparent)]
    Read(#[from] ReadError),

    /// Listing a directory failed.
    #[error("Failed to list {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The archive could not be opened or one of its entries could not be read.
    #[error("Failed to read archive {}: {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// Reading the bytes of an archive entry failed.
    #[error("Failed to read {entry} in {}: {source}", archive.display())]
    ArchiveEntry {
        archive: PathBuf,
        entry: String,
        #[source]
        source: std::io::Error,
    },

    /// An archive entry is larger than the configured cap.
    #[error("{entry} in {} is too large ({len} bytes, max {max} bytes)", archive.display())]
    EntryTooLarge {
        archive: PathBuf,
        entry: String,
        len: u64,
        max: u64,
    },
}

/// `base:` value that matched neither a base character nor an alias.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to find character base: {0}")]
pub struct UnknownBaseCharacter(pub String);
