//! In-memory item table.
//!
//! Catalog files are TOML:
//!
//! ```toml
//! [[items]]
//! id = "ak-47"
//! name = "AK-47"
//! weapon = true
//!
//! [[items]]
//! id = "casey"
//! name = "Casey"
//! weapon = true
//! infinite_ammo = true
//!
//! [[items]]
//! id = "ration"
//! name = "Ration"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use hashbrown::HashMap;
use roster_shared::{Item, Weapon};
use serde::{Deserialize, Serialize};

use super::ItemLookup;

/// One row of a catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub weapon: bool,
    #[serde(default)]
    pub infinite_ammo: bool,
}

impl From<CatalogEntry> for Item {
    fn from(entry: CatalogEntry) -> Self {
        let item = Item::new(entry.id.to_lowercase(), entry.name);
        if entry.weapon {
            item.with_weapon(Weapon {
                infinite_ammo: entry.infinite_ammo,
            })
        } else {
            item
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<CatalogEntry>,
}

/// Item lookup backed by a hash map keyed by lowercase id.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: HashMap<String, Item>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, replacing any item with the same id.
    pub fn insert(&mut self, item: Item) {
        self.items.insert(item.id.to_lowercase(), item);
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content).context("Invalid item catalog")?;
        Ok(file.items.into_iter().map(Item::from).collect())
    }

    /// Load a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read item catalog: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse item catalog: {}", path.display()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Item> for ItemCatalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for item in iter {
            catalog.insert(item);
        }
        catalog
    }
}

impl ItemLookup for ItemCatalog {
    fn find(&self, id: &str) -> Option<Item> {
        self.items.get(&id.to_lowercase()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml() {
        let catalog = ItemCatalog::from_toml(
            r#"
[[items]]
id = "AK-47"
name = "AK-47"
weapon = true

[[items]]
id = "casey"
weapon = true
infinite_ammo = true

[[items]]
id = "ration"
"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 3);

        let ak = catalog.find("ak-47").unwrap();
        assert_eq!(ak.id, "ak-47");
        assert_eq!(ak.weapon, Some(Weapon { infinite_ammo: false }));

        let casey = catalog.find("CASEY").unwrap();
        assert_eq!(casey.weapon, Some(Weapon { infinite_ammo: true }));
        assert_eq!(casey.display_name(), "casey");

        assert!(!catalog.find("ration").unwrap().is_weapon());
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn test_empty_toml_is_empty_catalog() {
        assert!(ItemCatalog::from_toml("").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_toml_fails() {
        assert!(ItemCatalog::from_toml("[[items]]\nname = 3").is_err());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = ItemCatalog::load(Path::new("/nonexistent/items.toml")).unwrap_err();
        assert!(err.to_string().contains("items.toml"));
    }
}
