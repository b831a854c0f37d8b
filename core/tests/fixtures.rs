//! On-disk character sources for integration tests.
//!
//! The same file list can be written as a loose directory or packed into a
//! zip archive under any prefix, so tests can compare the two source kinds.

#![allow(dead_code)]

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use roster_core::ItemCatalog;
use roster_shared::{Item, Weapon};
use zip::write::SimpleFileOptions;

/// Relative path and contents of one file in a source.
pub type SourceFile = (String, Vec<u8>);

pub const ACE_DEFINITION: &str = "\
# The Ace
name: The Ace
name short: the ace
nickname: Ace
base: robot
armor: 2

<stats>
MovementSpeed: 8.5
health: 4
</stats>

<loadout>
ak-47 infinite
ration
</loadout>
";

/// Encode a solid-colour PNG.
pub fn png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
    bytes.into_inner()
}

/// A character that uses every image slot.
pub fn ace_files() -> Vec<SourceFile> {
    vec![
        file("characterdata.txt", ACE_DEFINITION.as_bytes().to_vec()),
        file("icon.png", png(4, 4, [255, 0, 0, 255])),
        file("BossCard.png", png(8, 4, [0, 255, 0, 255])),
        file("playersheet.png", png(16, 16, [0, 0, 255, 255])),
        file("facecard.png", png(4, 6, [9, 9, 9, 255])),
        file("sprites/idle_002.png", png(2, 2, [1, 2, 3, 255])),
        file("sprites/idle_001.png", png(2, 2, [4, 5, 6, 255])),
        file("foyercard/card.png", png(3, 3, [7, 8, 9, 255])),
        file("punchout/facecard1.png", png(5, 5, [10, 11, 12, 255])),
        file("punchout/stage.png", png(5, 5, [13, 14, 15, 255])),
        file("punchout/sprites/jab.png", png(6, 6, [16, 17, 18, 255])),
    ]
}

/// A character with only a definition file.
pub fn plain_files(name: &str) -> Vec<SourceFile> {
    vec![file(
        "characterdata.txt",
        format!("name: {name}\nname short: {name}\nbase: convict\n").into_bytes(),
    )]
}

pub fn file(path: &str, bytes: Vec<u8>) -> SourceFile {
    (path.to_string(), bytes)
}

/// Write `files` under `root/name`.
pub fn write_dir(root: &Path, name: &str, files: &[SourceFile]) {
    for (relative, bytes) in files {
        let path = root.join(name).join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, bytes).unwrap();
    }
}

/// Write a zip at `path` holding every source in `sources` under its prefix.
pub fn write_zip(path: &Path, sources: &[(&str, Vec<SourceFile>)]) {
    let file = fs::File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    for (prefix, files) in sources {
        for (relative, bytes) in files {
            zip.start_file(format!("{prefix}{relative}"), SimpleFileOptions::default())
                .unwrap();
            zip.write_all(bytes).unwrap();
        }
    }
    zip.finish().unwrap();
}

pub fn catalog() -> ItemCatalog {
    [
        Item::new("ak-47", "AK-47").with_weapon(Weapon::default()),
        Item::new("ration", "Ration"),
    ]
    .into_iter()
    .collect()
}
