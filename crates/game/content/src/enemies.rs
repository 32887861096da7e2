//! Enemy templates.
//!
//! Level 1 is the baseline: the player starts with strength 10, defense 5
//! and agility 5, so a template with base + per-level agility above 5 will
//! strike first at level 1.

use game_core::{AiPolicy, EnemyTemplate, Item, StatBlock};

use crate::items::{
    AMULET_OF_THE_DAWN, BLESSED_MACE, CHAINMAIL, CLOAK_OF_SHADOWS, ELIXIR_OF_FURY,
    GREATER_HEALTH_POTION, HEALTH_POTION, IRON_SWORD, PHOENIX_FEATHER, RING_OF_WHISPERS,
    SHADOW_DAGGER, TOME_OF_INSIGHT,
};

static GOBLIN_LOOT: [&Item; 2] = [&HEALTH_POTION, &IRON_SWORD];
static WOLF_LOOT: [&Item; 2] = [&HEALTH_POTION, &ELIXIR_OF_FURY];
static SKELETON_LOOT: [&Item; 2] = [&CHAINMAIL, &HEALTH_POTION];
static SHADE_LOOT: [&Item; 2] = [&CLOAK_OF_SHADOWS, &TOME_OF_INSIGHT];
static PALADIN_LOOT: [&Item; 3] = [&BLESSED_MACE, &AMULET_OF_THE_DAWN, &PHOENIX_FEATHER];
static LICH_LOOT: [&Item; 3] = [&SHADOW_DAGGER, &RING_OF_WHISPERS, &GREATER_HEALTH_POTION];

/// Generic encounters on the path of light.
pub static LIGHT_POOL: [EnemyTemplate; 2] = [
    EnemyTemplate {
        name: "Goblin Raider",
        description: "A goblin in stolen mail, clutching a notched blade.",
        base_health: 30,
        health_per_level: 10,
        base_stats: StatBlock::new(4, 1, 2, 0),
        stats_per_level: StatBlock::new(2, 1, 1, 0),
        base_experience: 30,
        experience_per_level: 10,
        loot: &GOBLIN_LOOT,
        policy: AiPolicy::STANDARD,
    },
    EnemyTemplate {
        name: "Dire Wolf",
        description: "Yellow eyes in the brush, then teeth.",
        base_health: 22,
        health_per_level: 8,
        base_stats: StatBlock::new(5, 0, 6, 0),
        stats_per_level: StatBlock::new(2, 0, 1, 0),
        base_experience: 35,
        experience_per_level: 10,
        loot: &WOLF_LOOT,
        policy: AiPolicy {
            opening_special_chance: 0.4,
            ..AiPolicy::STANDARD
        },
    },
];

/// Generic encounters on the path of shadow.
pub static SHADOW_POOL: [EnemyTemplate; 2] = [
    EnemyTemplate {
        name: "Skeleton Warrior",
        description: "Old bones bound by older oaths.",
        base_health: 32,
        health_per_level: 10,
        base_stats: StatBlock::new(4, 3, 1, 0),
        stats_per_level: StatBlock::new(2, 1, 0, 0),
        base_experience: 30,
        experience_per_level: 10,
        loot: &SKELETON_LOOT,
        policy: AiPolicy::STANDARD,
    },
    EnemyTemplate {
        name: "Shade",
        description: "A cold shape that drinks the torchlight.",
        base_health: 20,
        health_per_level: 8,
        base_stats: StatBlock::new(5, 0, 6, 0),
        stats_per_level: StatBlock::new(2, 0, 1, 0),
        base_experience: 35,
        experience_per_level: 10,
        loot: &SHADE_LOOT,
        policy: AiPolicy {
            finishing_attack_chance: 0.5,
            ..AiPolicy::STANDARD
        },
    },
];

pub static CORRUPTED_PALADIN: EnemyTemplate = EnemyTemplate {
    name: "Corrupted Paladin",
    description: "Once the temple's champion. The light in his eyes has gone wrong.",
    base_health: 60,
    health_per_level: 15,
    base_stats: StatBlock::new(6, 3, 2, 0),
    stats_per_level: StatBlock::new(2, 1, 1, 0),
    base_experience: 100,
    experience_per_level: 25,
    loot: &PALADIN_LOOT,
    policy: AiPolicy::STANDARD,
};

pub static LICH_KING: EnemyTemplate = EnemyTemplate {
    name: "Lich King",
    description: "A crown of black iron over an empty skull.",
    base_health: 55,
    health_per_level: 15,
    base_stats: StatBlock::new(7, 2, 3, 0),
    stats_per_level: StatBlock::new(2, 1, 1, 0),
    base_experience: 100,
    experience_per_level: 25,
    loot: &LICH_LOOT,
    policy: AiPolicy {
        opening_special_chance: 0.5,
        ..AiPolicy::STANDARD
    },
};

#[cfg(test)]
mod tests {
    use game_core::{Combatant, Player};

    use super::*;

    #[test]
    fn wolves_and_shades_outpace_a_fresh_player() {
        let player = Player::new();
        for template in [&LIGHT_POOL[1], &SHADOW_POOL[1]] {
            let enemy = template.instantiate(1);
            assert!(enemy.effective_stats().agility > player.effective_stats().agility);
        }
    }

    #[test]
    fn bosses_outclass_generic_enemies() {
        for (pool, boss) in [(&LIGHT_POOL, &CORRUPTED_PALADIN), (&SHADOW_POOL, &LICH_KING)] {
            let boss = boss.instantiate(2);
            for template in pool.iter() {
                let enemy = template.instantiate(2);
                assert!(boss.health().maximum() > enemy.health().maximum());
                assert!(boss.experience_reward() > enemy.experience_reward());
            }
        }
    }

    #[test]
    fn every_template_has_loot() {
        let all = LIGHT_POOL
            .iter()
            .chain(SHADOW_POOL.iter())
            .chain([&CORRUPTED_PALADIN, &LICH_KING]);
        for template in all {
            assert!(!template.loot.is_empty(), "{} has no loot", template.name);
        }
    }
}
