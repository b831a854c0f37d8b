//! Player stat identifiers and per-character stat overrides.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fixed set of player stats a definition can override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatType {
    MovementSpeed,
    RateOfFire,
    Accuracy,
    Health,
    Coolness,
    Damage,
    ProjectileSpeed,
    AdditionalGunCapacity,
    AdditionalItemCapacity,
    AmmoCapacityMultiplier,
    ReloadSpeed,
    AdditionalShotPiercing,
    KnockbackMultiplier,
    GlobalPriceMultiplier,
    Curse,
    PlayerBulletScale,
    AdditionalClipCapacityMultiplier,
    AdditionalShotBounces,
    AdditionalBlanksPerFloor,
    ShadowBulletChance,
    ThrownGunDamage,
    DodgeRollDamage,
    DamageToBosses,
    EnemyProjectileSpeedMultiplier,
    ExtremeShadowBulletChance,
    ChargeAmountMultiplier,
    RangeMultiplier,
    DodgeRollDistanceMultiplier,
    DodgeRollSpeedMultiplier,
    TarnisherClipCapacityMultiplier,
    MoneyMultiplierFromEnemies,
}

impl StatType {
    /// Every stat, in declaration order.
    pub const ALL: [StatType; 31] = [
        StatType::MovementSpeed,
        StatType::RateOfFire,
        StatType::Accuracy,
        StatType::Health,
        StatType::Coolness,
        StatType::Damage,
        StatType::ProjectileSpeed,
        StatType::AdditionalGunCapacity,
        StatType::AdditionalItemCapacity,
        StatType::AmmoCapacityMultiplier,
        StatType::ReloadSpeed,
        StatType::AdditionalShotPiercing,
        StatType::KnockbackMultiplier,
        StatType::GlobalPriceMultiplier,
        StatType::Curse,
        StatType::PlayerBulletScale,
        StatType::AdditionalClipCapacityMultiplier,
        StatType::AdditionalShotBounces,
        StatType::AdditionalBlanksPerFloor,
        StatType::ShadowBulletChance,
        StatType::ThrownGunDamage,
        StatType::DodgeRollDamage,
        StatType::DamageToBosses,
        StatType::EnemyProjectileSpeedMultiplier,
        StatType::ExtremeShadowBulletChance,
        StatType::ChargeAmountMultiplier,
        StatType::RangeMultiplier,
        StatType::DodgeRollDistanceMultiplier,
        StatType::DodgeRollSpeedMultiplier,
        StatType::TarnisherClipCapacityMultiplier,
        StatType::MoneyMultiplierFromEnemies,
    ];

    /// Canonical name as written in definition files.
    pub fn name(self) -> &'static str {
        match self {
            StatType::MovementSpeed => "MovementSpeed",
            StatType::RateOfFire => "RateOfFire",
            StatType::Accuracy => "Accuracy",
            StatType::Health => "Health",
            StatType::Coolness => "Coolness",
            StatType::Damage => "Damage",
            StatType::ProjectileSpeed => "ProjectileSpeed",
            StatType::AdditionalGunCapacity => "AdditionalGunCapacity",
            StatType::AdditionalItemCapacity => "AdditionalItemCapacity",
            StatType::AmmoCapacityMultiplier => "AmmoCapacityMultiplier",
            StatType::ReloadSpeed => "ReloadSpeed",
            StatType::AdditionalShotPiercing => "AdditionalShotPiercing",
            StatType::KnockbackMultiplier => "KnockbackMultiplier",
            StatType::GlobalPriceMultiplier => "GlobalPriceMultiplier",
            StatType::Curse => "Curse",
            StatType::PlayerBulletScale => "PlayerBulletScale",
            StatType::AdditionalClipCapacityMultiplier => "AdditionalClipCapacityMultiplier",
            StatType::AdditionalShotBounces => "AdditionalShotBounces",
            StatType::AdditionalBlanksPerFloor => "AdditionalBlanksPerFloor",
            StatType::ShadowBulletChance => "ShadowBulletChance",
            StatType::ThrownGunDamage => "ThrownGunDamage",
            StatType::DodgeRollDamage => "DodgeRollDamage",
            StatType::DamageToBosses => "DamageToBosses",
            StatType::EnemyProjectileSpeedMultiplier => "EnemyProjectileSpeedMultiplier",
            StatType::ExtremeShadowBulletChance => "ExtremeShadowBulletChance",
            StatType::ChargeAmountMultiplier => "ChargeAmountMultiplier",
            StatType::RangeMultiplier => "RangeMultiplier",
            StatType::DodgeRollDistanceMultiplier => "DodgeRollDistanceMultiplier",
            StatType::DodgeRollSpeedMultiplier => "DodgeRollSpeedMultiplier",
            StatType::TarnisherClipCapacityMultiplier => "TarnisherClipCapacityMultiplier",
            StatType::MoneyMultiplierFromEnemies => "MoneyMultiplierFromEnemies",
        }
    }

    /// Case-insensitive lookup by canonical name.
    pub fn from_name(name: &str) -> Option<StatType> {
        StatType::ALL
            .into_iter()
            .find(|stat| stat.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for StatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Stat overrides declared in a `<stats>` block. One value per stat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatOverrides(BTreeMap<StatType, f32>);

impl StatOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a stat, returning the value it replaced.
    pub fn insert(&mut self, stat: StatType, value: f32) -> Option<f32> {
        self.0.insert(stat, value)
    }

    pub fn get(&self, stat: StatType) -> Option<f32> {
        self.0.get(&stat).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in stat declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (StatType, f32)> + '_ {
        self.0.iter().map(|(stat, value)| (*stat, *value))
    }
}

impl FromIterator<(StatType, f32)> for StatOverrides {
    fn from_iter<I: IntoIterator<Item = (StatType, f32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
