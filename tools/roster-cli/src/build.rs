//! Build command - export characters as JSON manifests and PNG images
//!
//! Output layout:
//!
//! ```text
//! <output>/
//!   manifest.json              build report and one entry per character
//!   <short name>/
//!     character.json           the record (images listed, pixels omitted)
//!     icon.png ...             singleton images
//!     sprites/*.png
//!     foyercard/*.png
//!     punchout/*.png           face cards
//!     punchout/sprites/*.png
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, bail};
use clap::Args;
use roster_core::{BuildReport, CharacterBuilder, build_all};
use roster_shared::constants::{
    BOSS_CARD_IMAGE, FACE_CARD_IMAGE, FOYER_CARD_DIR, ICON_IMAGE, PLAYER_SHEET_IMAGE,
    PUNCHOUT_DIR, PUNCHOUT_SPRITES_DIR, SPRITES_DIR,
};
use roster_shared::ids::is_safe_path_component;
use roster_shared::{CharacterDefinition, Texture};
use serde::Serialize;

use crate::context::Context;

/// Arguments for the build command
#[derive(Args)]
pub struct BuildArgs {
    /// Character directory (default: character_dir from the config)
    pub dir: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    pub output: PathBuf,
}

/// One exported character in `manifest.json`.
#[derive(Debug, Serialize)]
pub struct ManifestEntry {
    pub name_short: String,
    pub name_internal: String,
    pub name: Option<String>,
    /// Written files, relative to the character's folder.
    pub files: Vec<String>,
}

#[derive(Serialize)]
struct Manifest<'a> {
    characters: &'a [ManifestEntry],
    #[serde(flatten)]
    report: &'a BuildReport,
}

/// Builder that writes each character into its own output folder.
pub struct ManifestBuilder {
    output: PathBuf,
    entries: Vec<ManifestEntry>,
}

impl ManifestBuilder {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Write `manifest.json` next to the character folders.
    pub fn write_manifest(&self, report: &BuildReport) -> Result<PathBuf> {
        let path = self.output.join("manifest.json");
        let manifest = Manifest {
            characters: &self.entries,
            report,
        };
        let json = serde_json::to_string_pretty(&manifest)?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}

impl CharacterBuilder for ManifestBuilder {
    fn build(&mut self, data: &CharacterDefinition) -> Result<()> {
        let (Some(short), Some(internal)) = (data.name_short(), data.name_internal()) else {
            bail!("{} has no short name", data.label());
        };
        if !is_safe_path_component(short) {
            bail!("Short name {:?} cannot be used as a folder name", short);
        }

        let dir = self.output.join(short);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        let mut files = Vec::new();
        let singletons = [
            (ICON_IMAGE, &data.minimap_icon),
            (BOSS_CARD_IMAGE, &data.boss_card),
            (PLAYER_SHEET_IMAGE, &data.player_sheet),
            (FACE_CARD_IMAGE, &data.face_card),
        ];
        for (file_name, texture) in singletons {
            if let Some(texture) = texture {
                files.push(write_png(&dir, "", file_name, texture)?);
            }
        }

        let collections = [
            (SPRITES_DIR, &data.sprites),
            (FOYER_CARD_DIR, &data.foyer_card_sprites),
            (PUNCHOUT_DIR, &data.punchout_face_cards),
            (PUNCHOUT_SPRITES_DIR, &data.punchout_sprites),
        ];
        for (folder, textures) in collections {
            for texture in textures.iter().flatten() {
                files.push(write_png(&dir, folder, &texture.name, texture)?);
            }
        }

        let json_path = dir.join("character.json");
        std::fs::write(&json_path, serde_json::to_string_pretty(data)?)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;
        files.push("character.json".to_string());

        tracing::debug!("Wrote {} file(s) to {}", files.len(), dir.display());
        self.entries.push(ManifestEntry {
            name_short: short.to_string(),
            name_internal: internal.to_string(),
            name: data.name.clone(),
            files,
        });
        Ok(())
    }
}

/// Encode `texture` as `<dir>/<folder>/<name>.png` and return the relative path.
fn write_png(dir: &Path, folder: &str, name: &str, texture: &Texture) -> Result<String> {
    if !is_safe_path_component(name) {
        bail!("Image name {:?} cannot be used as a file name", name);
    }
    let relative = if folder.is_empty() {
        format!("{}.png", name)
    } else {
        format!("{}/{}.png", folder, name)
    };
    let path = dir.join(&relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let img = image::RgbaImage::from_raw(texture.width, texture.height, texture.pixels.clone())
        .with_context(|| format!("Pixel buffer of {} does not match its size", name))?;
    img.save_with_format(&path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(relative)
}

/// Execute the build command
pub fn execute(args: BuildArgs, ctx: &Context) -> Result<()> {
    let (result, _) = ctx.scan(args.dir.as_deref())?;

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    let mut builder = ManifestBuilder::new(&args.output);
    let report = build_all(&mut builder, result.definitions());
    let manifest = builder.write_manifest(&report)?;

    println!(
        "Built {} character(s) into {}",
        report.built.len(),
        args.output.display()
    );
    println!("  Manifest: {}", manifest.display());

    if !report.is_success() {
        for failure in &report.failed {
            eprintln!("  {}: {}", failure.name, failure.message);
        }
        bail!("{} character(s) failed to build", report.failed.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn texture(name: &str) -> Texture {
        Texture::new(name, 2, 1, vec![255, 0, 0, 255, 0, 255, 0, 255])
    }

    #[test]
    fn test_builder_writes_images_and_record() {
        let temp_dir = TempDir::new().unwrap();
        let mut data = CharacterDefinition::default();
        data.set_short_name("ace");
        data.minimap_icon = Some(texture("Icon"));
        data.sprites = Some(vec![texture("run_0"), texture("run_1")]);
        data.punchout_face_cards = Some(vec![texture("facecard1")]);

        let mut builder = ManifestBuilder::new(temp_dir.path());
        builder.build(&data).unwrap();

        let dir = temp_dir.path().join("ace");
        assert!(dir.join("icon.png").is_file());
        assert!(dir.join("sprites/run_1.png").is_file());
        assert!(dir.join("punchout/facecard1.png").is_file());
        assert!(dir.join("character.json").is_file());

        let decoded = image::open(dir.join("sprites/run_0.png")).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (2, 1));
        assert_eq!(decoded.get_pixel(1, 0).0, [0, 255, 0, 255]);

        let entry = &builder.entries()[0];
        assert_eq!(entry.name_internal, "Playerace");
        assert_eq!(entry.files.len(), 5);
    }

    #[test]
    fn test_builder_rejects_missing_short_name() {
        let temp_dir = TempDir::new().unwrap();
        let mut data = CharacterDefinition::default();
        data.name = Some("Nameless".to_string());
        let err = ManifestBuilder::new(temp_dir.path()).build(&data).unwrap_err();
        assert!(err.to_string().contains("Nameless has no short name"));
    }

    #[test]
    fn test_builder_rejects_unsafe_short_name() {
        let temp_dir = TempDir::new().unwrap();
        let mut data = CharacterDefinition::default();
        data.set_short_name("..");
        assert!(ManifestBuilder::new(temp_dir.path()).build(&data).is_err());
    }

    #[test]
    fn test_manifest_lists_built_and_failed() {
        let temp_dir = TempDir::new().unwrap();
        let mut good = CharacterDefinition::default();
        good.set_short_name("ace");
        let bad = CharacterDefinition::default();

        let mut builder = ManifestBuilder::new(temp_dir.path());
        let report = build_all(&mut builder, [&good, &bad]);
        let path = builder.write_manifest(&report).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(json["characters"][0]["name_short"], "ace");
        assert_eq!(json["built"][0], "ace");
        assert_eq!(json["failed"][0]["name"], "<unnamed>");
    }
}
