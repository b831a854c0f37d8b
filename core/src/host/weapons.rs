//! Always-available weapon pool.

use hashbrown::HashSet;
use roster_shared::Item;

use super::WeaponPool;

/// Weapon pool that keeps the registered weapons in registration order.
#[derive(Debug, Clone, Default)]
pub struct InfiniteWeaponPool {
    ids: HashSet<String>,
    weapons: Vec<Item>,
}

impl InfiniteWeaponPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered weapons, oldest first.
    pub fn weapons(&self) -> &[Item] {
        &self.weapons
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}

impl WeaponPool for InfiniteWeaponPool {
    fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    fn register(&mut self, item: &Item) {
        if self.ids.insert(item.id.clone()) {
            tracing::debug!("Registered infinite weapon: {}", item.display_name());
            self.weapons.push(item.clone());
        }
    }
}
