//! Enemy templates and oracle interface.
//!
//! A template is a pure function of level: every stat and the experience
//! reward scale linearly from a fixed base. [`EnemyTemplate::instantiate`]
//! materializes a fresh [`Enemy`] for one encounter.

use crate::combat::AiPolicy;
use crate::state::Enemy;
use crate::stats::StatBlock;

use super::{Item, StoryPath};

/// Provides the enemy pools for each story path.
pub trait EnemyOracle: Send + Sync {
    /// Templates drawn from for generic combat nodes on `path`.
    fn encounter_pool(&self, path: StoryPath) -> &'static [EnemyTemplate];

    /// The unique boss of `path`.
    fn boss(&self, path: StoryPath) -> &'static EnemyTemplate;
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnemyTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub base_health: u32,
    pub health_per_level: u32,
    pub base_stats: StatBlock,
    pub stats_per_level: StatBlock,
    pub base_experience: u32,
    pub experience_per_level: u32,
    /// One of these is granted uniformly at random on victory.
    pub loot: &'static [&'static Item],
    pub policy: AiPolicy,
}

impl EnemyTemplate {
    /// Builds an enemy scaled to `level` (at least 1).
    pub fn instantiate(&self, level: u32) -> Enemy {
        let level = level.max(1);
        let scale = level as i32;
        let stats = StatBlock {
            strength: self.base_stats.strength + self.stats_per_level.strength * scale,
            defense: self.base_stats.defense + self.stats_per_level.defense * scale,
            agility: self.base_stats.agility + self.stats_per_level.agility * scale,
            intelligence: 0,
        };

        Enemy::new(
            self.name,
            level,
            self.base_health + self.health_per_level * level,
            stats,
            self.base_experience + self.experience_per_level * level,
            self.loot,
            self.policy,
        )
    }
}
