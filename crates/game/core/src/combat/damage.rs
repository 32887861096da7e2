//! Damage calculation and mitigation.

use crate::env::RngOracle;
use crate::stats::StatBlock;

/// Every landed hit deals at least this much.
pub const MINIMUM_DAMAGE: u32 = 1;

/// Fraction of effective defense subtracted from incoming damage.
const MITIGATION_PER_DEFENSE: f64 = 0.5;

const PLAYER_BASE_VARIANCE: (i32, i32) = (-2, 3);
const PLAYER_SPECIAL_VARIANCE: (i32, i32) = (-3, 5);
const ENEMY_VARIANCE: (i32, i32) = (-2, 2);

const ENEMY_SPECIAL_MULTIPLIER: f64 = 1.5;

/// Reduce raw damage by the defender's defense.
///
/// # Formula
///
/// ```text
/// mitigation = floor(defense × 0.5)
/// final      = max(1, raw - mitigation)
/// ```
///
/// Negative defense (debuffs) mitigates nothing rather than amplifying.
pub fn mitigate(raw: u32, defense: i32) -> u32 {
    let mitigation = (defense.max(0) as f64 * MITIGATION_PER_DEFENSE).floor() as u32;
    raw.saturating_sub(mitigation).max(MINIMUM_DAMAGE)
}

/// `strength × 2 + variance[-2, 3]`, floored at 1.
pub fn player_base_damage(stats: &StatBlock, rng: &mut dyn RngOracle) -> u32 {
    let variance = roll(rng, PLAYER_BASE_VARIANCE);
    at_least_one(stats.strength as f64 * 2.0 + variance as f64)
}

/// `floor(strength + intelligence × 1.5 + variance[-3, 5])`, floored at 1.
pub fn player_special_damage(stats: &StatBlock, rng: &mut dyn RngOracle) -> u32 {
    let variance = roll(rng, PLAYER_SPECIAL_VARIANCE);
    at_least_one(stats.strength as f64 + stats.intelligence as f64 * 1.5 + variance as f64)
}

/// `floor(strength × 1.5 + variance[-2, 2])`, floored at 1.
pub fn enemy_damage(stats: &StatBlock, rng: &mut dyn RngOracle) -> u32 {
    let variance = roll(rng, ENEMY_VARIANCE);
    at_least_one(stats.strength as f64 * 1.5 + variance as f64)
}

/// The enemy's special attack: 1.5× its plain damage roll.
pub fn enemy_special_damage(stats: &StatBlock, rng: &mut dyn RngOracle) -> u32 {
    let base = enemy_damage(stats, rng);
    at_least_one(base as f64 * ENEMY_SPECIAL_MULTIPLIER)
}

fn roll(rng: &mut dyn RngOracle, (min, max): (i32, i32)) -> i32 {
    rng.range(min, max)
}

fn at_least_one(value: f64) -> u32 {
    let floored = value.floor();
    if floored < MINIMUM_DAMAGE as f64 {
        MINIMUM_DAMAGE
    } else {
        floored as u32
    }
}
