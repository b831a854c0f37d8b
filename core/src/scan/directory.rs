//! Loose directory sources.

use std::path::{Path, PathBuf};

use roster_shared::CharacterDefinition;
use roster_shared::fs::{
    MAX_DEFINITION_BYTES, MAX_IMAGE_BYTES, read_file_with_limit, read_text_with_limit,
};

use super::{Scanner, SourceTree, TreeSlot, file_name_lossy};
use crate::error::LoadError;

impl Scanner<'_> {
    /// Load the single definition in `dir` together with its images.
    pub(super) fn load_directory(&mut self, dir: &Path) -> Result<CharacterDefinition, LoadError> {
        let label = file_name_lossy(dir);
        let data_file = self.options.data_file.clone();

        let definition_path =
            find_child(dir, &data_file, false).ok_or_else(|| LoadError::MissingDefinition {
                dir: dir.to_path_buf(),
                file: data_file.clone(),
            })?;
        let text = read_text_with_limit(&definition_path, MAX_DEFINITION_BYTES)?;

        tracing::debug!("Parsing {}", definition_path.display());
        let mut data = self.parse_text(&text, &label);

        let mut tree = SourceTree::new();
        for slot in TreeSlot::ALL {
            let Some(folder) = resolve_folder(dir, slot.relative_dir()) else {
                continue;
            };
            self.load_folder(&folder, slot, &mut tree, &label);
        }
        tracing::debug!("Found {} image(s) for {}", tree.image_count(), label);

        tree.apply_to(&mut data);
        Ok(data)
    }

    /// Decode every image directly inside `folder` into `slot`.
    fn load_folder(&mut self, folder: &Path, slot: TreeSlot, tree: &mut SourceTree, label: &str) {
        let entries = match std::fs::read_dir(folder) {
            Ok(entries) => entries,
            Err(err) => {
                self.diagnostics.error(
                    label,
                    None,
                    format!("Failed to list {}: {}", folder.display(), err),
                );
                return;
            }
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        files.sort();

        for path in files {
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(stem) = self.image_stem(file_name) else {
                continue;
            };

            match read_file_with_limit(&path, MAX_IMAGE_BYTES) {
                Ok(bytes) => self.decode_into(tree, slot, stem, &bytes, label),
                Err(err) => self.diagnostics.error(label, None, err.to_string()),
            }
        }
    }
}

/// Resolve a `/`-separated relative folder one component at a time,
/// matching each component case-insensitively.
fn resolve_folder(dir: &Path, relative: &str) -> Option<PathBuf> {
    relative
        .split('/')
        .filter(|part| !part.is_empty())
        .try_fold(dir.to_path_buf(), |current, part| find_child(&current, part, true))
}

/// Find a child of `dir` by name, ignoring ASCII case.
fn find_child(dir: &Path, name: &str, want_dir: bool) -> Option<PathBuf> {
    let exact = dir.join(name);
    let kind_matches = |path: &Path| if want_dir { path.is_dir() } else { path.is_file() };
    if kind_matches(exact.as_path()) {
        return Some(exact);
    }

    let mut candidates: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
        })
        .map(|entry| entry.path())
        .filter(|path| kind_matches(path.as_path()))
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}
