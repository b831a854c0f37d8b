//! Zip archive sources.
//!
//! An archive may hold any number of definition files. Each one is loaded
//! with the images under its own directory prefix, using the same slot
//! layout as a loose directory.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use roster_shared::fs::{MAX_DEFINITION_BYTES, MAX_IMAGE_BYTES, ReadError, decode_text};
use zip::ZipArchive;

use super::{LoadedCharacter, Scanner, SourceOrigin, SourceTree, TreeSlot, file_name_lossy};
use crate::error::LoadError;

type Archive = ZipArchive<BufReader<File>>;

/// A file entry with its `/`-separated name.
struct Entry {
    index: usize,
    name: String,
}

impl Scanner<'_> {
    /// Load every definition in the archive at `path`.
    ///
    /// Fails only when the archive itself cannot be opened or listed. A
    /// definition that cannot be read is skipped with a diagnostic.
    pub(super) fn load_archive(&mut self, path: &Path) -> Result<Vec<LoadedCharacter>, LoadError> {
        let file = File::open(path).map_err(|source| ReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut archive = ZipArchive::new(BufReader::new(file)).map_err(|source| {
            LoadError::Archive {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let entries = list_entries(&mut archive, path)?;
        let archive_name = file_name_lossy(path);

        let mut definitions: Vec<&Entry> = entries
            .iter()
            .filter(|entry| {
                let file_name = entry.name.rsplit('/').next().unwrap_or(&entry.name);
                file_name.eq_ignore_ascii_case(&self.options.data_file)
            })
            .collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(
            "{} contains {} definition file(s)",
            archive_name,
            definitions.len()
        );

        let mut loaded = Vec::new();
        for definition in definitions {
            let prefix = match definition.name.rfind('/') {
                Some(slash) => definition.name[..=slash].to_string(),
                None => String::new(),
            };
            let origin = SourceOrigin::Archive {
                path: path.to_path_buf(),
                prefix: prefix.clone(),
            };
            let label = origin.label();

            let bytes = match read_entry(&mut archive, path, definition, MAX_DEFINITION_BYTES) {
                Ok(bytes) => bytes,
                Err(err) => {
                    self.diagnostics.error(&label, None, err.to_string());
                    continue;
                }
            };

            let mut data = self.parse_text(&decode_text(&bytes), &label);

            let tree = self.collect_images(&mut archive, path, &entries, &prefix, &label);
            tree.apply_to(&mut data);

            loaded.push(LoadedCharacter {
                definition: data,
                origin,
            });
        }

        Ok(loaded)
    }

    /// Decode the images under `prefix` into their slots.
    ///
    /// Images outside the recognized folders are skipped with an info
    /// diagnostic naming the entry and the archive.
    fn collect_images(
        &mut self,
        archive: &mut Archive,
        path: &Path,
        entries: &[Entry],
        prefix: &str,
        label: &str,
    ) -> SourceTree {
        let mut tree = SourceTree::new();

        for entry in entries {
            let Some(relative) = strip_prefix_ignore_case(&entry.name, prefix) else {
                continue;
            };
            let (parent, file_name) = relative.rsplit_once('/').unwrap_or(("", relative));
            let Some(stem) = self.image_stem(file_name) else {
                continue;
            };

            let Some(slot) = TreeSlot::from_relative_dir(parent) else {
                self.diagnostics.info(
                    label,
                    None,
                    format!(
                        "Skipping {} in {}: not in a recognized image folder",
                        entry.name,
                        file_name_lossy(path)
                    ),
                );
                continue;
            };

            match read_entry(archive, path, entry, MAX_IMAGE_BYTES) {
                Ok(bytes) => self.decode_into(&mut tree, slot, stem, &bytes, label),
                Err(err) => self.diagnostics.error(label, None, err.to_string()),
            }
        }

        tracing::debug!("Found {} image(s) for {}", tree.image_count(), label);
        tree
    }
}

/// `name` without `prefix`, comparing ASCII letters case-insensitively.
fn strip_prefix_ignore_case<'n>(name: &'n str, prefix: &str) -> Option<&'n str> {
    let head = name.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then_some(&name[prefix.len()..])
}

/// File entries in archive order; directories are left out and `\` becomes `/`.
fn list_entries(archive: &mut Archive, path: &Path) -> Result<Vec<Entry>, LoadError> {
    let mut entries = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let file = archive.by_index(index).map_err(|source| LoadError::Archive {
            path: path.to_path_buf(),
            source,
        })?;
        if file.is_dir() {
            continue;
        }
        entries.push(Entry {
            index,
            name: file.name().replace('\\', "/"),
        });
    }
    Ok(entries)
}

/// Read one entry into memory, refusing entries larger than `max_bytes`.
fn read_entry(
    archive: &mut Archive,
    path: &Path,
    entry: &Entry,
    max_bytes: u64,
) -> Result<Vec<u8>, LoadError> {
    let file = archive.by_index(entry.index).map_err(|source| LoadError::Archive {
        path: path.to_path_buf(),
        source,
    })?;

    let too_large = |len| LoadError::EntryTooLarge {
        archive: path.to_path_buf(),
        entry: entry.name.clone(),
        len,
        max: max_bytes,
    };
    if file.size() > max_bytes {
        return Err(too_large(file.size()));
    }

    // The header size is not trusted; read at most one byte past the cap.
    let mut bytes = Vec::new();
    file.take(max_bytes + 1)
        .read_to_end(&mut bytes)
        .map_err(|source| LoadError::ArchiveEntry {
            archive: path.to_path_buf(),
            entry: entry.name.clone(),
            source,
        })?;
    if bytes.len() as u64 > max_bytes {
        return Err(too_large(bytes.len() as u64));
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{InfiniteWeaponPool, PngDecoder};
    use crate::test_utils::{png_bytes, test_catalog};
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn write_zip(path: &Path, files: &[(&str, Vec<u8>)]) {
        let file = File::create(path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        for (name, bytes) in files {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(bytes).unwrap();
        }
        zip.finish().unwrap();
    }

    fn load(path: &Path) -> (Result<Vec<LoadedCharacter>, LoadError>, crate::Diagnostics) {
        let catalog = test_catalog();
        let mut pool = InfiniteWeaponPool::new();
        let mut scanner = Scanner::new(&PngDecoder, &catalog, &mut pool);
        let result = scanner.load_archive(path);
        (result, scanner.diagnostics)
    }

    fn png() -> Vec<u8> {
        png_bytes(1, 1, [10, 20, 30, 255])
    }

    #[test]
    fn test_each_definition_scoped_to_its_prefix() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pack.zip");
        write_zip(
            &path,
            &[
                ("ace/characterdata.txt", b"name: Ace".to_vec()),
                ("ace/icon.png", png()),
                ("ace/sprites/run.png", png()),
                ("mia/characterdata.txt", b"name: Mia".to_vec()),
                ("mia/bosscard.png", png()),
            ],
        );

        let (result, diagnostics) = load(&path);
        let loaded = result.unwrap();
        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
        assert_eq!(loaded.len(), 2);

        let ace = &loaded[0].definition;
        assert_eq!(ace.name.as_deref(), Some("Ace"));
        assert!(ace.minimap_icon.is_some());
        assert!(ace.boss_card.is_none());
        assert_eq!(ace.sprites.as_ref().unwrap().len(), 1);

        let mia = &loaded[1].definition;
        assert_eq!(mia.name.as_deref(), Some("Mia"));
        assert!(mia.minimap_icon.is_none());
        assert!(mia.boss_card.is_some());
        assert_eq!(loaded[1].origin.label(), "pack.zip:mia");
    }

    #[test]
    fn test_unrecognized_folder_is_skipped_with_info() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pack.zip");
        write_zip(
            &path,
            &[
                ("ace/characterdata.txt", b"name: Ace".to_vec()),
                ("ace/portraits/happy.png", png()),
            ],
        );

        let (result, diagnostics) = load(&path);
        assert_eq!(result.unwrap().len(), 1);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.error_count(), 0);
        assert!(diagnostics.contains("ace/portraits/happy.png"));
        assert!(diagnostics.contains("pack.zip"));
    }

    #[test]
    fn test_root_definition_matches_all_entries() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("solo.zip");
        write_zip(
            &path,
            &[
                ("CharacterData.txt", b"name: Solo".to_vec()),
                ("Sprites/idle.png", png()),
                ("PUNCHOUT/FaceCard2.png", png()),
            ],
        );

        let (result, diagnostics) = load(&path);
        let loaded = result.unwrap();
        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
        let data = &loaded[0].definition;
        assert_eq!(data.sprites.as_ref().unwrap()[0].name, "idle");
        assert_eq!(data.punchout_face_cards.as_ref().unwrap()[0].name, "FaceCard2");
        assert_eq!(loaded[0].origin.label(), "solo.zip");
    }

    #[test]
    fn test_prefix_matches_regardless_of_case() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pack.zip");
        write_zip(
            &path,
            &[
                ("Ace/characterdata.txt", b"name: Ace".to_vec()),
                ("ACE/icon.png", png()),
                ("ace/Sprites/run.png", png()),
                ("acer/bosscard.png", png()),
            ],
        );

        let (result, diagnostics) = load(&path);
        let loaded = result.unwrap();
        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
        assert_eq!(loaded.len(), 1);

        let ace = &loaded[0].definition;
        assert_eq!(ace.minimap_icon.as_ref().unwrap().name, "icon");
        assert_eq!(ace.sprites.as_ref().unwrap()[0].name, "run");
        assert!(ace.boss_card.is_none());
        assert_eq!(loaded[0].origin.label(), "pack.zip:Ace");
    }

    #[test]
    fn test_strip_prefix_ignore_case() {
        assert_eq!(strip_prefix_ignore_case("ACE/icon.png", "Ace/"), Some("icon.png"));
        assert_eq!(
            strip_prefix_ignore_case("ace/Sprites/run.png", "Ace/"),
            Some("Sprites/run.png")
        );
        assert_eq!(strip_prefix_ignore_case("icon.png", ""), Some("icon.png"));
        assert_eq!(strip_prefix_ignore_case("acer/icon.png", "Ace/"), None);
        assert_eq!(strip_prefix_ignore_case("ac", "Ace/"), None);
        // Multi-byte names never slice inside a character.
        assert_eq!(strip_prefix_ignore_case("é/icon.png", "e/"), None);
        assert_eq!(strip_prefix_ignore_case("Café/icon.png", "CAFé/"), Some("icon.png"));
    }

    #[test]
    fn test_archive_without_definition_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("art.zip");
        write_zip(&path, &[("icon.png", png())]);

        let (result, diagnostics) = load(&path);
        assert!(result.unwrap().is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_corrupt_archive_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.zip");
        std::fs::write(&path, b"PK not really").unwrap();

        let (result, _) = load(&path);
        assert!(matches!(result, Err(LoadError::Archive { .. })));
    }
}
