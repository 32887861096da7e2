//! Bounded player inventory with equip slots.
//!
//! Held items keep insertion order. Equipping moves an item out of the held
//! list into its slot; the previous occupant of that slot takes the vacated
//! held position, so a swap can never overflow capacity or lose an item.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::env::{EquipSlot, Item};
use crate::error::{ErrorSeverity, GameError};
use crate::stats::StatBlock;

use super::Equipment;

/// Errors from inventory mutations. State is unchanged whenever one is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("inventory is full, cannot take {item}")]
    Full { item: &'static str },

    #[error("{item} is not in the inventory")]
    NotHeld { item: &'static str },

    #[error("{item} cannot be equipped")]
    NotEquippable { item: &'static str },

    #[error("no item in slot {index}")]
    EmptySlot { index: usize },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Full { .. } => ErrorSeverity::Recoverable,
            Self::NotHeld { .. } | Self::NotEquippable { .. } | Self::EmptySlot { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Full { .. } => "INVENTORY_FULL",
            Self::NotHeld { .. } => "INVENTORY_NOT_HELD",
            Self::NotEquippable { .. } => "INVENTORY_NOT_EQUIPPABLE",
            Self::EmptySlot { .. } => "INVENTORY_EMPTY_SLOT",
        }
    }
}

type HeldItems = ArrayVec<&'static Item, { GameConfig::MAX_INVENTORY_SLOTS }>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Inventory {
    held: HeldItems,
    equipment: Equipment,
}

impl Inventory {
    pub fn empty() -> Self {
        Self::default()
    }

    pub const fn capacity(&self) -> usize {
        GameConfig::MAX_INVENTORY_SLOTS
    }

    /// Unequipped items in insertion order.
    pub fn held(&self) -> &[&'static Item] {
        &self.held
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn is_full(&self) -> bool {
        self.held.is_full()
    }

    pub fn get(&self, index: usize) -> Option<&'static Item> {
        self.held.get(index).copied()
    }

    /// Appends an item to the held list.
    pub fn add(&mut self, item: &'static Item) -> Result<(), InventoryError> {
        self.held
            .try_push(item)
            .map_err(|_| InventoryError::Full { item: item.name })
    }

    /// Removes the first held reference to `item`. No-op if absent.
    pub fn remove(&mut self, item: &'static Item) -> Option<&'static Item> {
        let index = self.position(item)?;
        Some(self.held.remove(index))
    }

    pub fn remove_at(&mut self, index: usize) -> Result<&'static Item, InventoryError> {
        if index >= self.held.len() {
            return Err(InventoryError::EmptySlot { index });
        }
        Ok(self.held.remove(index))
    }

    /// Moves a held item into its equip slot.
    ///
    /// Returns the item that previously occupied the slot, which is now back
    /// in the held list at the position the equipped item vacated.
    pub fn equip(&mut self, item: &'static Item) -> Result<Option<&'static Item>, InventoryError> {
        let slot = item
            .slot()
            .ok_or(InventoryError::NotEquippable { item: item.name })?;
        let index = self
            .position(item)
            .ok_or(InventoryError::NotHeld { item: item.name })?;

        let previous = self.equipment.replace(slot, item);
        match previous {
            Some(previous) => self.held[index] = previous,
            None => {
                self.held.remove(index);
            }
        }
        Ok(previous)
    }

    /// Moves the occupant of `slot` back into the held list.
    ///
    /// Returns `Ok(None)` for an empty slot. Fails without touching the slot
    /// when the held list is full.
    pub fn unequip(&mut self, slot: EquipSlot) -> Result<Option<&'static Item>, InventoryError> {
        let Some(item) = self.equipment.get(slot) else {
            return Ok(None);
        };
        self.add(item)?;
        self.equipment.take(slot);
        Ok(Some(item))
    }

    /// Aggregated stat delta of everything equipped.
    pub fn equipped_bonus_stats(&self) -> StatBlock {
        self.equipment.bonus_stats()
    }

    fn position(&self, item: &'static Item) -> Option<usize> {
        self.held
            .iter()
            .position(|held| core::ptr::eq(*held, item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ConsumableEffect;

    static SWORD: Item = Item::weapon("Sword", "", StatBlock::new(3, 0, 0, 0));
    static AXE: Item = Item::weapon("Axe", "", StatBlock::new(5, 0, -1, 0));
    static MAIL: Item = Item::armor("Mail", "", StatBlock::new(0, 3, 0, 0));
    static RING: Item = Item::artifact("Ring", "", StatBlock::new(0, 0, 1, 2));
    static POTION: Item = Item::consumable("Potion", "", ConsumableEffect::Heal(30));

    fn fill(inventory: &mut Inventory) {
        while !inventory.is_full() {
            inventory.add(&POTION).unwrap();
        }
    }

    #[test]
    fn add_respects_capacity_and_order() {
        let mut inventory = Inventory::empty();
        inventory.add(&SWORD).unwrap();
        inventory.add(&MAIL).unwrap();
        assert_eq!(inventory.held()[0].name, "Sword");
        assert_eq!(inventory.held()[1].name, "Mail");

        fill(&mut inventory);
        assert_eq!(inventory.held().len(), inventory.capacity());
        assert_eq!(
            inventory.add(&RING),
            Err(InventoryError::Full { item: "Ring" })
        );
    }

    #[test]
    fn remove_takes_first_match_only() {
        let mut inventory = Inventory::empty();
        inventory.add(&POTION).unwrap();
        inventory.add(&SWORD).unwrap();
        inventory.add(&POTION).unwrap();

        assert!(inventory.remove(&POTION).is_some());
        assert_eq!(inventory.held().len(), 2);
        assert_eq!(inventory.held()[0].name, "Sword");
        assert!(inventory.remove(&RING).is_none());
    }

    #[test]
    fn equip_then_unequip_round_trips() {
        let mut inventory = Inventory::empty();
        inventory.add(&SWORD).unwrap();

        assert_eq!(inventory.equip(&SWORD), Ok(None));
        assert!(inventory.held().is_empty());
        assert_eq!(inventory.equipment().weapon.map(|i| i.name), Some("Sword"));
        assert_eq!(inventory.equipped_bonus_stats().strength, 3);

        assert_eq!(inventory.unequip(EquipSlot::Weapon).unwrap().map(|i| i.name), Some("Sword"));
        assert!(inventory.equipment().weapon.is_none());
        assert_eq!(inventory.held()[0].name, "Sword");
        assert_eq!(inventory.unequip(EquipSlot::Weapon), Ok(None));
    }

    #[test]
    fn equip_swaps_occupant_back_even_when_full() {
        let mut inventory = Inventory::empty();
        inventory.add(&SWORD).unwrap();
        inventory.equip(&SWORD).unwrap();
        inventory.add(&AXE).unwrap();
        fill(&mut inventory);

        let replaced = inventory.equip(&AXE).unwrap();
        assert_eq!(replaced.map(|i| i.name), Some("Sword"));
        assert_eq!(inventory.equipment().weapon.map(|i| i.name), Some("Axe"));
        assert_eq!(inventory.held()[0].name, "Sword");
        assert!(inventory.is_full());
    }

    #[test]
    fn equip_rejects_consumables_and_unheld_items() {
        let mut inventory = Inventory::empty();
        inventory.add(&POTION).unwrap();
        assert_eq!(
            inventory.equip(&POTION),
            Err(InventoryError::NotEquippable { item: "Potion" })
        );
        assert_eq!(
            inventory.equip(&MAIL),
            Err(InventoryError::NotHeld { item: "Mail" })
        );
        assert_eq!(inventory.held().len(), 1);
    }

    #[test]
    fn unequip_into_full_bag_keeps_slot() {
        let mut inventory = Inventory::empty();
        inventory.add(&RING).unwrap();
        inventory.equip(&RING).unwrap();
        fill(&mut inventory);

        assert_eq!(
            inventory.unequip(EquipSlot::Artifact),
            Err(InventoryError::Full { item: "Ring" })
        );
        assert!(inventory.equipment().artifact.is_some());
    }

    #[test]
    fn bonuses_sum_across_slots() {
        let mut inventory = Inventory::empty();
        for item in [&SWORD, &MAIL, &RING] {
            inventory.add(item).unwrap();
            inventory.equip(item).unwrap();
        }
        assert_eq!(inventory.equipped_bonus_stats(), StatBlock::new(3, 3, 1, 2));
    }
}
