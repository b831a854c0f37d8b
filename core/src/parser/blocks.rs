//! `<loadout>` and `<stats>` block handlers.

use roster_shared::constants::{COMMENT_PREFIX, INFINITE_TOKEN, LOADOUT_CLOSE, STATS_CLOSE};
use roster_shared::{LoadoutEntry, StatOverrides, StatType};

use super::Parser;

impl Parser<'_> {
    /// Parse loadout lines starting at `start`.
    ///
    /// Returns the entries and the index of the `</loadout>` line. Without a
    /// closing tag the partial loadout is discarded and `None` is returned.
    pub(super) fn parse_loadout<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        start: usize,
    ) -> (Vec<LoadoutEntry>, Option<usize>) {
        tracing::debug!("Getting loadout...");
        let mut entries = Vec::new();

        for (i, raw) in lines.iter().enumerate().skip(start) {
            let line_no = i + 1;
            let line = raw.as_ref().trim().to_ascii_lowercase();
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }
            if line.starts_with(LOADOUT_CLOSE) {
                return (entries, Some(i));
            }

            let mut tokens = line.split_whitespace();
            let Some(id) = tokens.next() else {
                continue;
            };

            let Some(item) = self.items.find(id) else {
                self.diagnostics.error(
                    self.source,
                    Some(line_no),
                    format!("Could not find item with ID: \"{}\"", id),
                );
                continue;
            };

            let wants_infinite = tokens.next().is_some_and(|t| t.contains(INFINITE_TOKEN));
            if !wants_infinite {
                tracing::debug!("    {}", item.display_name());
                entries.push(LoadoutEntry::new(item, false));
                continue;
            }

            match item.weapon {
                Some(weapon) => {
                    if !weapon.infinite_ammo && !self.weapons.contains(&item.id) {
                        self.weapons.register(&item);
                    }
                    tracing::debug!("    {} (infinite)", item.display_name());
                    entries.push(LoadoutEntry::new(item, true));
                }
                None => {
                    self.diagnostics.error(
                        self.source,
                        Some(line_no),
                        format!(
                            "{} is not a gun, and therefore cannot be infinite",
                            item.display_name()
                        ),
                    );
                    entries.push(LoadoutEntry::new(item, false));
                }
            }
        }

        self.diagnostics.error(
            self.source,
            None,
            "Invalid loadout setup, expecting '</loadout>' but found none",
        );
        (Vec::new(), None)
    }

    /// Parse stat lines starting at `start`.
    ///
    /// Returns the overrides and the index of the `</stats>` line. Without a
    /// closing tag every stat in the block is discarded and `None` is returned.
    pub(super) fn parse_stats<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        start: usize,
    ) -> (StatOverrides, Option<usize>) {
        let mut stats = StatOverrides::new();

        for (i, raw) in lines.iter().enumerate().skip(start) {
            let line_no = i + 1;
            let raw = raw.as_ref().trim();
            let line = raw.to_ascii_lowercase();
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }
            if line.starts_with(STATS_CLOSE) {
                return (stats, Some(i));
            }

            let Some((name, value)) = line.split_once(':') else {
                self.diagnostics.error(
                    self.source,
                    Some(line_no),
                    format!("Invalid stat line: {}", raw),
                );
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }

            let Some(stat) = StatType::from_name(name) else {
                self.diagnostics.error(
                    self.source,
                    Some(line_no),
                    format!("Unable to find stat: {}", raw),
                );
                continue;
            };

            let Ok(value) = value.trim().parse::<f32>() else {
                self.diagnostics.error(
                    self.source,
                    Some(line_no),
                    format!("Invalid stat value: {}", raw),
                );
                continue;
            };

            if let Some(previous) = stats.insert(stat, value) {
                self.diagnostics.warning(
                    self.source,
                    Some(line_no),
                    format!("{} set more than once ({} replaced by {})", stat, previous, value),
                );
            }
        }

        self.diagnostics.error(
            self.source,
            None,
            "Invalid stats setup, expecting '</stats>' but found none",
        );
        (StatOverrides::new(), None)
    }
}

#[cfg(test)]
mod tests {
    use roster_shared::{CharacterDefinition, StatType};

    use crate::diagnostics::Diagnostics;
    use crate::host::{InfiniteWeaponPool, ItemCatalog, WeaponPool};
    use crate::parser::parse_definition;
    use crate::test_utils::test_catalog;

    fn parse_with(
        text: &str,
        catalog: &ItemCatalog,
        pool: &mut InfiniteWeaponPool,
    ) -> (CharacterDefinition, Diagnostics) {
        parse_definition(text, "test", catalog, pool)
    }

    fn parse(text: &str) -> (CharacterDefinition, Diagnostics, InfiniteWeaponPool) {
        let catalog = test_catalog();
        let mut pool = InfiniteWeaponPool::new();
        let (data, diagnostics) = parse_with(text, &catalog, &mut pool);
        (data, diagnostics, pool)
    }

    // =============================================================
    // Loadout
    // =============================================================

    #[test]
    fn test_loadout_finite_items() {
        let (data, diagnostics, pool) = parse("<loadout>\nak-47\nration\n</loadout>");
        assert!(diagnostics.is_empty());
        let ids: Vec<&str> = data.loadout.iter().map(|e| e.item.id.as_str()).collect();
        assert_eq!(ids, vec!["ak-47", "ration"]);
        assert!(data.loadout.iter().all(|e| !e.infinite));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_loadout_ids_are_case_insensitive() {
        let (data, diagnostics, _) = parse("<LOADOUT>\n  AK-47  \n</Loadout>");
        assert!(diagnostics.is_empty());
        assert_eq!(data.loadout[0].item.id, "ak-47");
    }

    #[test]
    fn test_infinite_weapon_is_registered() {
        let (data, diagnostics, pool) = parse("<loadout>\nak-47 infinite\n</loadout>");
        assert!(diagnostics.is_empty());
        assert!(data.loadout[0].infinite);
        assert!(pool.contains("ak-47"));
    }

    #[test]
    fn test_infinite_token_matches_by_containment() {
        let (data, _, _) = parse("<loadout>\nak-47 (infinite)\n</loadout>");
        assert!(data.loadout[0].infinite);
    }

    #[test]
    fn test_other_second_token_is_finite() {
        let (data, _, pool) = parse("<loadout>\nak-47 spare\n</loadout>");
        assert!(!data.loadout[0].infinite);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_already_infinite_weapon_is_not_registered() {
        let (data, _, pool) = parse("<loadout>\ncasey infinite\n</loadout>");
        assert!(data.loadout[0].infinite);
        assert!(!pool.contains("casey"));
    }

    #[test]
    fn test_weapon_registered_once_across_characters() {
        let catalog = test_catalog();
        let mut pool = InfiniteWeaponPool::new();
        parse_with("<loadout>\nak-47 infinite\n</loadout>", &catalog, &mut pool);
        parse_with("<loadout>\nak-47 infinite\n</loadout>", &catalog, &mut pool);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_infinite_non_weapon_is_rejected_but_kept() {
        let catalog: ItemCatalog = [roster_shared::Item::new("gun_ak47", "Fake AK")]
            .into_iter()
            .collect();
        let mut pool = InfiniteWeaponPool::new();
        let (data, diagnostics) = parse_with("<loadout>\ngun_ak47 infinite\n</loadout>", &catalog, &mut pool);

        assert_eq!(data.loadout.len(), 1);
        assert_eq!(data.loadout[0].item.id, "gun_ak47");
        assert!(!data.loadout[0].infinite);
        assert!(pool.is_empty());
        assert_eq!(diagnostics.error_count(), 1);
        assert!(diagnostics.contains("Fake AK is not a gun, and therefore cannot be infinite"));
    }

    #[test]
    fn test_unknown_item_is_skipped() {
        let (data, diagnostics, _) = parse("<loadout>\nmystery\nration\n</loadout>");
        assert_eq!(data.loadout.len(), 1);
        assert_eq!(data.loadout[0].item.id, "ration");
        assert!(diagnostics.contains("Could not find item with ID: \"mystery\""));
    }

    #[test]
    fn test_unterminated_loadout_is_empty() {
        let (data, diagnostics, _) = parse("<loadout>\nak-47\nration");
        assert!(data.loadout.is_empty());
        assert_eq!(diagnostics.error_count(), 1);
        assert!(diagnostics.contains("expecting '</loadout>' but found none"));
    }

    #[test]
    fn test_loadout_tag_on_last_line() {
        let (data, diagnostics, _) = parse("name: Ace\n<loadout>");
        assert_eq!(data.name.as_deref(), Some("Ace"));
        assert!(data.loadout.is_empty());
        assert!(diagnostics.contains("expecting '</loadout>'"));
    }

    // =============================================================
    // Stats
    // =============================================================

    #[test]
    fn test_stats_block() {
        let (data, diagnostics, _) =
            parse("<stats>\nMovementSpeed: 8\nhealth:4\n  damage : 1.25 \n</stats>");
        assert!(diagnostics.is_empty());
        assert_eq!(data.stats.get(StatType::MovementSpeed), Some(8.0));
        assert_eq!(data.stats.get(StatType::Health), Some(4.0));
        assert_eq!(data.stats.get(StatType::Damage), Some(1.25));
    }

    #[test]
    fn test_bad_stat_lines_are_skipped_individually() {
        let text = "\
<stats>
speedy: 3
health: lots
no colon here
coolness: 2
</stats>";
        let (data, diagnostics, _) = parse(text);
        assert_eq!(data.stats.len(), 1);
        assert_eq!(data.stats.get(StatType::Coolness), Some(2.0));
        assert_eq!(diagnostics.error_count(), 3);
        assert!(diagnostics.contains("Unable to find stat: speedy: 3"));
        assert!(diagnostics.contains("Invalid stat value: health: lots"));
        assert!(diagnostics.contains("Invalid stat line: no colon here"));
    }

    #[test]
    fn test_stat_split_on_first_colon() {
        let (data, diagnostics, _) = parse("<stats>\nhealth: 4:5\n</stats>");
        assert!(data.stats.is_empty());
        assert!(diagnostics.contains("Invalid stat value"));
    }

    #[test]
    fn test_duplicate_stat_keeps_last_with_warning() {
        let (data, diagnostics, _) = parse("<stats>\nhealth: 3\nhealth: 5\n</stats>");
        assert_eq!(data.stats.get(StatType::Health), Some(5.0));
        assert_eq!(diagnostics.error_count(), 0);
        assert!(diagnostics.contains("Health set more than once"));
    }

    #[test]
    fn test_unterminated_stats_is_empty() {
        let (data, diagnostics, _) = parse("<stats>\nhealth: 4");
        assert!(data.stats.is_empty());
        assert!(diagnostics.contains("expecting '</stats>' but found none"));
    }

    #[test]
    fn test_diagnostics_carry_line_numbers() {
        let (_, diagnostics, _) = parse("name: Ace\n<stats>\n\nbogus: 1\n</stats>");
        assert_eq!(diagnostics.iter().next().unwrap().line, Some(4));
    }
}
