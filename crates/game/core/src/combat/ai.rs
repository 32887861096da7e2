//! Enemy action selection.
//!
//! A fixed heuristic keyed on the player's remaining health ratio. Enemies
//! carry their policy as data so content can tune the thresholds.

use crate::env::RngOracle;

/// What the enemy does on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyAction {
    Attack,
    SpecialAttack,
}

/// Thresholds and probabilities for [`choose_enemy_action`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AiPolicy {
    /// Below this player health ratio the enemy plays it safe.
    pub finishing_threshold: f64,
    /// Chance of a plain attack while the player is below `finishing_threshold`.
    pub finishing_attack_chance: f64,
    /// Above this player health ratio the enemy may open with a special.
    pub opening_threshold: f64,
    /// Chance of a special attack while the player is above `opening_threshold`.
    pub opening_special_chance: f64,
}

impl AiPolicy {
    pub const STANDARD: AiPolicy = AiPolicy {
        finishing_threshold: 0.3,
        finishing_attack_chance: 0.7,
        opening_threshold: 0.7,
        opening_special_chance: 0.3,
    };
}

impl Default for AiPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Picks the enemy's action for this turn.
///
/// - player ratio below the finishing threshold: plain attack with
///   `finishing_attack_chance`, otherwise special
/// - player ratio above the opening threshold: special with
///   `opening_special_chance`, otherwise plain
/// - anything in between: plain attack
pub fn choose_enemy_action(
    policy: &AiPolicy,
    player_health_ratio: f64,
    rng: &mut dyn RngOracle,
) -> EnemyAction {
    if player_health_ratio < policy.finishing_threshold {
        if rng.chance(policy.finishing_attack_chance) {
            EnemyAction::Attack
        } else {
            EnemyAction::SpecialAttack
        }
    } else if player_health_ratio > policy.opening_threshold {
        if rng.chance(policy.opening_special_chance) {
            EnemyAction::SpecialAttack
        } else {
            EnemyAction::Attack
        }
    } else {
        EnemyAction::Attack
    }
}
