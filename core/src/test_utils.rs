//! Shared test utilities for unit tests

use std::io::Cursor;

use roster_shared::{Item, Weapon};

use crate::host::ItemCatalog;

/// Encode a solid-colour PNG of the given size.
pub fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, image::ImageFormat::Png)
        .expect("encode test png");
    bytes.into_inner()
}

/// Catalog with one plain weapon, one infinite-ammo weapon and one non-weapon.
pub fn test_catalog() -> ItemCatalog {
    [
        Item::new("ak-47", "AK-47").with_weapon(Weapon::default()),
        Item::new("casey", "Casey").with_weapon(Weapon {
            infinite_ammo: true,
        }),
        Item::new("ration", "Ration"),
    ]
    .into_iter()
    .collect()
}
