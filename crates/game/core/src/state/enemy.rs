//! Enemy instances materialized from level-scaled templates.

use crate::combat::{self, AiPolicy, EnemyAction};
use crate::env::{Item, RngOracle};
use crate::stats::{Combatant, HealthMeter, StatBlock};

/// One enemy for one encounter. Discarded when combat ends.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Enemy {
    name: &'static str,
    level: u32,
    health: HealthMeter,
    stats: StatBlock,
    experience_reward: u32,
    loot: &'static [&'static Item],
    policy: AiPolicy,
}

impl Enemy {
    /// Builds an enemy; intelligence is ignored since no enemy ability uses it.
    pub fn new(
        name: &'static str,
        level: u32,
        max_health: u32,
        stats: StatBlock,
        experience_reward: u32,
        loot: &'static [&'static Item],
        policy: AiPolicy,
    ) -> Self {
        Self {
            name,
            level,
            health: HealthMeter::full(max_health),
            stats: StatBlock {
                intelligence: 0,
                ..stats
            },
            experience_reward,
            loot,
            policy,
        }
    }

    pub fn experience_reward(&self) -> u32 {
        self.experience_reward
    }

    /// Picks one loot item uniformly, if the enemy has any.
    pub fn roll_loot(&self, rng: &mut dyn RngOracle) -> Option<&'static Item> {
        if self.loot.is_empty() {
            return None;
        }
        Some(self.loot[rng.pick(self.loot.len())])
    }

    pub fn choose_action(&self, player_health_ratio: f64, rng: &mut dyn RngOracle) -> EnemyAction {
        combat::choose_enemy_action(&self.policy, player_health_ratio, rng)
    }

    /// Plain attack damage before the player's mitigation.
    pub fn damage(&self, rng: &mut dyn RngOracle) -> u32 {
        combat::enemy_damage(&self.stats, rng)
    }

    /// Special attack damage (1.5× plain) before mitigation.
    pub fn special_damage(&self, rng: &mut dyn RngOracle) -> u32 {
        combat::enemy_special_damage(&self.stats, rng)
    }
}

impl Combatant for Enemy {
    const DODGE_PER_AGILITY: f64 = 0.015;
    const DODGE_CEILING: f64 = 0.3;

    fn name(&self) -> &str {
        self.name
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
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn brute(defense: i32, agility: i32) -> Enemy {
        Enemy::new(
            "Brute",
            1,
            50,
            StatBlock::new(6, defense, agility, 9),
            20,
            &[],
            AiPolicy::STANDARD,
        )
    }

    #[test]
    fn defense_four_takes_three_from_five() {
        let mut enemy = brute(4, 0);
        assert_eq!(enemy.apply_damage(5), 3);
        assert_eq!(enemy.health().current(), 47);
    }

    #[test]
    fn intelligence_is_dropped() {
        assert_eq!(brute(0, 0).effective_stats().intelligence, 0);
    }

    #[test]
    fn no_loot_rolls_none() {
        assert!(brute(0, 0).roll_loot(&mut crate::env::ScriptedRng::constant(0)).is_none());
    }

    proptest! {
        #[test]
        fn enemy_dodge_never_exceeds_ceiling(agility in -100i32..100_000) {
            let dodge = brute(0, agility).dodge_chance();
            prop_assert!((0.0..=0.3).contains(&dodge));
        }

        #[test]
        fn enemy_health_never_negative(raw in 1u32..10_000, defense in -20i32..50) {
            let mut enemy = brute(defense, 0);
            let dealt = enemy.apply_damage(raw);
            prop_assert!(dealt >= 1);
            prop_assert!(enemy.health().current() <= enemy.health().maximum());
        }
    }
}
