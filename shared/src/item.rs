//! Items a loadout can reference.

use serde::{Deserialize, Serialize};

/// An item resolved through the host's item lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Lookup identifier (lowercase).
    pub id: String,
    /// Display name; may be empty.
    #[serde(default)]
    pub name: String,
    /// Present when the item can be fired.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon: Option<Weapon>,
}

/// Weapon capability of an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    /// Already exempt from ammo depletion without any loadout flag.
    #[serde(default)]
    pub infinite_ammo: bool,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weapon: None,
        }
    }

    /// Builder-style helper for weapon items.
    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.weapon = Some(weapon);
        self
    }

    pub fn is_weapon(&self) -> bool {
        self.weapon.is_some()
    }

    /// Name for log output, falling back to the id.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
