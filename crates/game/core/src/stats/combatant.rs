//! Behavior shared by the player and enemies.
//!
//! Player and Enemy are separate types; this trait only collects the pieces
//! of the stat model that read the same for both (mitigation, dodge).

use super::{HealthMeter, StatBlock};
use crate::combat::{dodge_chance, mitigate};

pub trait Combatant {
    /// Agility-to-dodge conversion rate.
    const DODGE_PER_AGILITY: f64;
    /// Hard ceiling on dodge probability.
    const DODGE_CEILING: f64;

    fn name(&self) -> &str;
    fn level(&self) -> u32;
    fn health(&self) -> &HealthMeter;
    fn health_mut(&mut self) -> &mut HealthMeter;

    /// Base stats plus every active bonus layer.
    fn effective_stats(&self) -> StatBlock;

    fn is_alive(&self) -> bool {
        !self.health().is_depleted()
    }

    /// Probability that an incoming attack misses, capped per combatant type.
    fn dodge_chance(&self) -> f64 {
        dodge_chance(
            self.effective_stats().agility,
            Self::DODGE_PER_AGILITY,
            Self::DODGE_CEILING,
        )
    }

    /// Mitigates `raw` by defense and subtracts it from health.
    ///
    /// Returns the post-mitigation damage (at least 1), even when the
    /// remaining health was smaller.
    fn apply_damage(&mut self, raw: u32) -> u32 {
        let damage = mitigate(raw, self.effective_stats().defense);
        self.health_mut().drain(damage);
        damage
    }
}
