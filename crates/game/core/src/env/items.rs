//! Item templates.
//!
//! Items are immutable, stateless definitions living in static registries.
//! Inventories hold `&'static Item` references, so two potions in a bag are
//! two references to the same template.

use crate::state::Player;
use crate::stats::{Combatant, StatBlock, StatKind};

use super::ItemError;

/// Provides the item catalog.
pub trait ItemOracle: Send + Sync {
    /// Every item template the content defines.
    fn catalog(&self) -> &'static [&'static Item];

    /// Items a fresh player starts with, in bag order.
    fn starting_kit(&self) -> &'static [&'static Item];

    /// Looks up a template by display name.
    fn find(&self, name: &str) -> Option<&'static Item> {
        self.catalog().iter().copied().find(|item| item.name == name)
    }
}

/// Display category of an item.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ItemCategory {
    Weapon,
    Armor,
    Consumable,
    Artifact,
}

/// Equipment slot. Consumables have none.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EquipSlot {
    Weapon,
    Armor,
    Artifact,
}

impl EquipSlot {
    pub const fn category(self) -> ItemCategory {
        match self {
            EquipSlot::Weapon => ItemCategory::Weapon,
            EquipSlot::Armor => ItemCategory::Armor,
            EquipSlot::Artifact => ItemCategory::Artifact,
        }
    }
}

/// One-shot effects applied when a consumable is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsumableEffect {
    /// Restore up to N health.
    Heal(u32),

    /// Restore health to maximum.
    RestoreFull,

    /// Temporary stat bonus, cleared at the next combat boundary.
    Boost { stat: StatKind, amount: i32 },

    /// Grant experience (may trigger level-ups).
    Experience(u32),
}

/// What an item does: a static bonus while equipped, or a one-shot effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    Equippable { slot: EquipSlot, bonus: StatBlock },
    Consumable(ConsumableEffect),
}

/// Immutable item template.
///
/// Constructors tie the category to the effect, so a weapon is always
/// equippable into the weapon slot and a consumable never is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Item {
    pub name: &'static str,
    pub description: &'static str,
    pub effect: ItemEffect,
}

impl Item {
    pub const fn weapon(name: &'static str, description: &'static str, bonus: StatBlock) -> Self {
        Self::equippable(name, description, EquipSlot::Weapon, bonus)
    }

    pub const fn armor(name: &'static str, description: &'static str, bonus: StatBlock) -> Self {
        Self::equippable(name, description, EquipSlot::Armor, bonus)
    }

    pub const fn artifact(
        name: &'static str,
        description: &'static str,
        bonus: StatBlock,
    ) -> Self {
        Self::equippable(name, description, EquipSlot::Artifact, bonus)
    }

    pub const fn consumable(
        name: &'static str,
        description: &'static str,
        effect: ConsumableEffect,
    ) -> Self {
        Self {
            name,
            description,
            effect: ItemEffect::Consumable(effect),
        }
    }

    const fn equippable(
        name: &'static str,
        description: &'static str,
        slot: EquipSlot,
        bonus: StatBlock,
    ) -> Self {
        Self {
            name,
            description,
            effect: ItemEffect::Equippable { slot, bonus },
        }
    }

    pub const fn category(&self) -> ItemCategory {
        match self.effect {
            ItemEffect::Equippable { slot, .. } => slot.category(),
            ItemEffect::Consumable(_) => ItemCategory::Consumable,
        }
    }

    pub const fn slot(&self) -> Option<EquipSlot> {
        match self.effect {
            ItemEffect::Equippable { slot, .. } => Some(slot),
            ItemEffect::Consumable(_) => None,
        }
    }

    /// Stat delta granted while equipped (zero for consumables).
    pub const fn bonus(&self) -> StatBlock {
        match self.effect {
            ItemEffect::Equippable { bonus, .. } => bonus,
            ItemEffect::Consumable(_) => StatBlock::ZERO,
        }
    }

    pub const fn is_consumable(&self) -> bool {
        matches!(self.effect, ItemEffect::Consumable(_))
    }

    /// Applies a consumable's one-shot effect to the player.
    ///
    /// The caller removes the item from the inventory afterwards.
    pub fn use_on(&self, player: &mut Player) -> Result<String, ItemError> {
        let ItemEffect::Consumable(effect) = self.effect else {
            return Err(ItemError::NotConsumable { item: self.name });
        };

        let message = match effect {
            ConsumableEffect::Heal(amount) => {
                let healed = player.health_mut().heal(amount);
                format!("You use the {} and recover {} health.", self.name, healed)
            }
            ConsumableEffect::RestoreFull => {
                let healed = player.health_mut().restore_full();
                format!(
                    "You use the {} and recover {} health. You feel whole again.",
                    self.name, healed
                )
            }
            ConsumableEffect::Boost { stat, amount } => {
                player.add_temporary(StatBlock::single(stat, amount));
                format!(
                    "You use the {}. {} +{} until the next battle ends.",
                    self.name, stat, amount
                )
            }
            ConsumableEffect::Experience(amount) => {
                let levels = player.gain_experience(amount);
                if levels > 0 {
                    format!(
                        "You use the {} and gain {} experience. You reached level {}!",
                        self.name,
                        amount,
                        player.level()
                    )
                } else {
                    format!("You use the {} and gain {} experience.", self.name, amount)
                }
            }
        };

        Ok(message)
    }
}
