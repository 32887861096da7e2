//! Equip slots.
//!
//! One slot per equippable category. Slots hold references to static item
//! templates; an item sitting in a slot is never also in the held list.

use crate::env::{EquipSlot, Item};
use crate::stats::StatBlock;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Equipment {
    pub weapon: Option<&'static Item>,
    pub armor: Option<&'static Item>,
    pub artifact: Option<&'static Item>,
}

impl Equipment {
    /// Creates empty equipment.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipSlot) -> Option<&'static Item> {
        match slot {
            EquipSlot::Weapon => self.weapon,
            EquipSlot::Armor => self.armor,
            EquipSlot::Artifact => self.artifact,
        }
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<&'static Item> {
        match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Armor => &mut self.armor,
            EquipSlot::Artifact => &mut self.artifact,
        }
    }

    /// Places `item` into `slot`, returning the previous occupant if any.
    pub fn replace(&mut self, slot: EquipSlot, item: &'static Item) -> Option<&'static Item> {
        self.slot_mut(slot).replace(item)
    }

    /// Empties `slot`, returning its occupant if any.
    pub fn take(&mut self, slot: EquipSlot) -> Option<&'static Item> {
        self.slot_mut(slot).take()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Item> {
        [self.weapon, self.armor, self.artifact].into_iter().flatten()
    }

    /// Sum of the stat deltas of every equipped item.
    pub fn bonus_stats(&self) -> StatBlock {
        self.iter()
            .fold(StatBlock::ZERO, |total, item| total + item.bonus())
    }
}
