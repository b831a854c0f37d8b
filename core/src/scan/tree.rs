//! Normalized view of the images found in one source.
//!
//! Directories and archives both fill a [`SourceTree`]; assigning images to
//! the definition happens only here so the two source kinds cannot disagree.

use roster_shared::constants::{
    BOSS_CARD_IMAGE, FACE_CARD_IMAGE, FOYER_CARD_DIR, ICON_IMAGE, PLAYER_SHEET_IMAGE,
    PUNCHOUT_DIR, PUNCHOUT_FACE_CARD_MARKERS, PUNCHOUT_SPRITES_DIR, SPRITES_DIR,
};
use roster_shared::{CharacterDefinition, Texture};

/// The five image locations relative to a definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeSlot {
    Root,
    Sprites,
    FoyerCard,
    Punchout,
    PunchoutSprites,
}

impl TreeSlot {
    pub const ALL: [TreeSlot; 5] = [
        TreeSlot::Root,
        TreeSlot::Sprites,
        TreeSlot::FoyerCard,
        TreeSlot::Punchout,
        TreeSlot::PunchoutSprites,
    ];

    /// Path relative to the definition file, `/`-separated. Empty for the root.
    pub fn relative_dir(self) -> &'static str {
        match self {
            TreeSlot::Root => "",
            TreeSlot::Sprites => SPRITES_DIR,
            TreeSlot::FoyerCard => FOYER_CARD_DIR,
            TreeSlot::Punchout => PUNCHOUT_DIR,
            TreeSlot::PunchoutSprites => PUNCHOUT_SPRITES_DIR,
        }
    }

    /// Match a relative directory (case-insensitive, `/` or `\` separated).
    pub fn from_relative_dir(dir: &str) -> Option<Self> {
        let dir = dir.replace('\\', "/");
        let dir = dir.trim_matches('/');
        Self::ALL
            .into_iter()
            .find(|slot| slot.relative_dir().eq_ignore_ascii_case(dir))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SourceTree {
    pub root: Vec<Texture>,
    pub sprites: Vec<Texture>,
    pub foyer_card: Vec<Texture>,
    pub punchout: Vec<Texture>,
    pub punchout_sprites: Vec<Texture>,
}

impl SourceTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, slot: TreeSlot, texture: Texture) {
        self.slot_mut(slot).push(texture);
    }

    pub fn slot(&self, slot: TreeSlot) -> &[Texture] {
        match slot {
            TreeSlot::Root => &self.root,
            TreeSlot::Sprites => &self.sprites,
            TreeSlot::FoyerCard => &self.foyer_card,
            TreeSlot::Punchout => &self.punchout,
            TreeSlot::PunchoutSprites => &self.punchout_sprites,
        }
    }

    fn slot_mut(&mut self, slot: TreeSlot) -> &mut Vec<Texture> {
        match slot {
            TreeSlot::Root => &mut self.root,
            TreeSlot::Sprites => &mut self.sprites,
            TreeSlot::FoyerCard => &mut self.foyer_card,
            TreeSlot::Punchout => &mut self.punchout,
            TreeSlot::PunchoutSprites => &mut self.punchout_sprites,
        }
    }

    pub fn image_count(&self) -> usize {
        TreeSlot::ALL.iter().map(|slot| self.slot(*slot).len()).sum()
    }

    /// Move the images into their slots on `data`.
    ///
    /// Collections are ordered by name and left as `None` when empty.
    /// Root images only count when they carry one of the singleton names;
    /// `punchout/` images only count when they are face cards.
    pub fn apply_to(mut self, data: &mut CharacterDefinition) {
        for slot in TreeSlot::ALL {
            self.slot_mut(slot).sort_by(|a, b| a.name.cmp(&b.name));
        }

        for texture in self.root {
            let target = match texture.name.to_lowercase().as_str() {
                ICON_IMAGE => &mut data.minimap_icon,
                BOSS_CARD_IMAGE => &mut data.boss_card,
                PLAYER_SHEET_IMAGE => &mut data.player_sheet,
                FACE_CARD_IMAGE => &mut data.face_card,
                _ => continue,
            };
            *target = Some(texture);
        }

        let face_cards: Vec<Texture> = self
            .punchout
            .into_iter()
            .filter(|texture| {
                let name = texture.name.to_lowercase();
                PUNCHOUT_FACE_CARD_MARKERS
                    .iter()
                    .any(|marker| name.contains(marker))
            })
            .collect();

        data.sprites = non_empty(self.sprites);
        data.foyer_card_sprites = non_empty(self.foyer_card);
        data.punchout_sprites = non_empty(self.punchout_sprites);
        data.punchout_face_cards = non_empty(face_cards);
    }
}

fn non_empty(textures: Vec<Texture>) -> Option<Vec<Texture>> {
    (!textures.is_empty()).then_some(textures)
}
