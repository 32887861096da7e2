//! Item catalog.
//!
//! Every item is a `static` so inventories can compare entries by address.

use game_core::{ConsumableEffect, Item, StatBlock, StatKind};

// ===== consumables =====

pub static HEALTH_POTION: Item = Item::consumable(
    "Health Potion",
    "A red draught that restores 30 health.",
    ConsumableEffect::Heal(30),
);

pub static GREATER_HEALTH_POTION: Item = Item::consumable(
    "Greater Health Potion",
    "A deep crimson draught that restores 60 health.",
    ConsumableEffect::Heal(60),
);

pub static PHOENIX_FEATHER: Item = Item::consumable(
    "Phoenix Feather",
    "Still warm. Restores you to full health.",
    ConsumableEffect::RestoreFull,
);

pub static ELIXIR_OF_FURY: Item = Item::consumable(
    "Elixir of Fury",
    "+5 strength until the end of the next battle.",
    ConsumableEffect::Boost {
        stat: StatKind::Strength,
        amount: 5,
    },
);

pub static TOME_OF_INSIGHT: Item = Item::consumable(
    "Tome of Insight",
    "Grants 50 experience to whoever reads it.",
    ConsumableEffect::Experience(50),
);

// ===== weapons =====

pub static IRON_SWORD: Item = Item::weapon(
    "Iron Sword",
    "Plain and dependable.",
    StatBlock::new(3, 0, 0, 0),
);

pub static BLESSED_MACE: Item = Item::weapon(
    "Blessed Mace",
    "Hums faintly with holy light.",
    StatBlock::new(4, 0, 0, 1),
);

pub static SHADOW_DAGGER: Item = Item::weapon(
    "Shadow Dagger",
    "Light, quick and hungry.",
    StatBlock::new(2, 0, 3, 0),
);

// ===== armor =====

pub static LEATHER_ARMOR: Item = Item::armor(
    "Leather Armor",
    "Boiled leather, patched in places.",
    StatBlock::new(0, 2, 0, 0),
);

pub static CHAINMAIL: Item = Item::armor(
    "Chainmail",
    "Heavy rings of iron.",
    StatBlock::new(0, 3, 0, 0),
);

pub static CLOAK_OF_SHADOWS: Item = Item::armor(
    "Cloak of Shadows",
    "The edges blur when you move.",
    StatBlock::new(0, 1, 3, 0),
);

// ===== artifacts =====

pub static AMULET_OF_THE_DAWN: Item = Item::artifact(
    "Amulet of the Dawn",
    "Warm to the touch at any hour.",
    StatBlock::new(0, 0, 2, 2),
);

pub static RING_OF_WHISPERS: Item = Item::artifact(
    "Ring of Whispers",
    "It tells you things. Some are true.",
    StatBlock::new(0, 0, 0, 3),
);

pub static CATALOG: [&Item; 13] = [
    &HEALTH_POTION,
    &GREATER_HEALTH_POTION,
    &PHOENIX_FEATHER,
    &ELIXIR_OF_FURY,
    &TOME_OF_INSIGHT,
    &IRON_SWORD,
    &BLESSED_MACE,
    &SHADOW_DAGGER,
    &LEATHER_ARMOR,
    &CHAINMAIL,
    &CLOAK_OF_SHADOWS,
    &AMULET_OF_THE_DAWN,
    &RING_OF_WHISPERS,
];

/// Two Health Potions and a set of Leather Armor.
pub static STARTING_KIT: [&Item; 3] = [&HEALTH_POTION, &HEALTH_POTION, &LEATHER_ARMOR];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use game_core::ItemCategory;

    use super::*;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = CATALOG.iter().map(|item| item.name).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn starting_kit_comes_from_catalog() {
        for item in STARTING_KIT {
            assert!(CATALOG.iter().any(|known| core::ptr::eq(*known, item)));
        }
        assert_eq!(
            STARTING_KIT
                .iter()
                .filter(|item| item.category() == ItemCategory::Consumable)
                .count(),
            2
        );
    }
}
