//! The player character.

use core::str::FromStr;

use crate::combat;
use crate::config::GameConfig;
use crate::env::{RngOracle, StoryPath};
use crate::stats::{Combatant, HealthMeter, StatBlock, StatError, StatKind};

use super::Inventory;

/// Player state for one playthrough.
///
/// Base stats only ever grow (level-ups and manual allocation). Temporary
/// stats hold scenario and consumable boosts until the next combat boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Player {
    health: HealthMeter,
    level: u32,
    experience: u32,
    stat_points: u32,
    base_stats: StatBlock,
    temporary: StatBlock,
    inventory: Inventory,
    path: Option<StoryPath>,
}

impl Player {
    pub const STARTING_HEALTH: u32 = 100;
    pub const STARTING_STATS: StatBlock = StatBlock::new(10, 5, 5, 5);

    /// A fresh level-1 character with an empty bag.
    pub fn new() -> Self {
        Self::with_stats(Self::STARTING_STATS, Self::STARTING_HEALTH)
    }

    pub fn with_stats(base_stats: StatBlock, max_health: u32) -> Self {
        Self {
            health: HealthMeter::full(max_health),
            level: 1,
            experience: 0,
            stat_points: 0,
            base_stats,
            temporary: StatBlock::ZERO,
            inventory: Inventory::empty(),
            path: None,
        }
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    /// Experience required to reach the next level.
    pub fn experience_to_next(&self) -> u32 {
        self.level * GameConfig::EXPERIENCE_PER_LEVEL
    }

    pub fn stat_points(&self) -> u32 {
        self.stat_points
    }

    pub fn base_stats(&self) -> StatBlock {
        self.base_stats
    }

    pub fn temporary_stats(&self) -> StatBlock {
        self.temporary
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn path(&self) -> Option<StoryPath> {
        self.path
    }

    pub fn set_path(&mut self, path: StoryPath) {
        self.path = Some(path);
    }

    pub fn add_temporary(&mut self, delta: StatBlock) {
        self.temporary += delta;
    }

    pub fn clear_temporary(&mut self) {
        self.temporary = StatBlock::ZERO;
    }

    /// Permanent increase to one base stat (scenario rewards).
    pub fn raise_base(&mut self, stat: StatKind, amount: i32) {
        *self.base_stats.get_mut(stat) += amount;
    }

    /// Adds experience and applies every level-up it pays for.
    ///
    /// Surplus experience carries over. Returns the number of levels gained.
    pub fn gain_experience(&mut self, amount: u32) -> u32 {
        self.experience += amount;
        let mut gained = 0;
        while self.experience >= self.experience_to_next() {
            self.experience -= self.experience_to_next();
            self.level_up();
            gained += 1;
        }
        gained
    }

    /// One level: +stat points, +1 to every base stat, +max health, full heal.
    pub fn level_up(&mut self) {
        self.level += 1;
        self.stat_points += GameConfig::STAT_POINTS_PER_LEVEL;
        self.base_stats.raise_all(1);
        self.health.raise_maximum(GameConfig::HEALTH_PER_LEVEL);
        self.health.restore_full();
    }

    /// Spends one stat point on `stat`.
    pub fn allocate_stat(&mut self, stat: StatKind) -> Result<(), StatError> {
        if self.stat_points == 0 {
            return Err(StatError::NoStatPoints);
        }
        *self.base_stats.get_mut(stat) += 1;
        self.stat_points -= 1;
        Ok(())
    }

    /// Spends one stat point on the stat named `name` (case-insensitive).
    pub fn allocate_stat_named(&mut self, name: &str) -> Result<(), StatError> {
        let stat =
            StatKind::from_str(name).map_err(|_| StatError::UnknownStat(name.to_string()))?;
        self.allocate_stat(stat)
    }

    /// Plain attack damage before the target's mitigation.
    pub fn base_damage(&self, rng: &mut dyn RngOracle) -> u32 {
        combat::player_base_damage(&self.effective_stats(), rng)
    }

    /// Special attack damage before the target's mitigation.
    pub fn special_damage(&self, rng: &mut dyn RngOracle) -> u32 {
        combat::player_special_damage(&self.effective_stats(), rng)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Combatant for Player {
    const DODGE_PER_AGILITY: f64 = 0.02;
    const DODGE_CEILING: f64 = 0.4;

    fn name(&self) -> &str {
        "You"
    }

    fn level(&self) -> u32 {
        self.level
    }

    fn health(&self) -> &HealthMeter {
        &self.health
    }

    fn health_mut(&mut self) -> &mut HealthMeter {
        &mut self.health
    }

    fn effective_stats(&self) -> StatBlock {
        self.base_stats + self.inventory.equipped_bonus_stats() + self.temporary
    }
}
