//! Dodge and escape probabilities.

use crate::env::RngOracle;

/// Base probability of fleeing combat before agility is added.
pub const ESCAPE_BASE_CHANCE: f64 = 0.3;
const ESCAPE_PER_AGILITY: f64 = 0.02;

/// Agility-scaled dodge probability, clamped to `[0, ceiling]`.
pub fn dodge_chance(agility: i32, per_agility: f64, ceiling: f64) -> f64 {
    (agility as f64 * per_agility).clamp(0.0, ceiling)
}

/// Rolls whether an attack is dodged.
pub fn roll_dodge(chance: f64, rng: &mut dyn RngOracle) -> bool {
    rng.chance(chance)
}

/// `0.3 + agility × 0.02`, capped at certainty.
pub fn escape_chance(agility: i32) -> f64 {
    (ESCAPE_BASE_CHANCE + agility as f64 * ESCAPE_PER_AGILITY).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn dodge_is_capped() {
        assert!((dodge_chance(10, 0.02, 0.4) - 0.2).abs() < 1e-9);
        assert_eq!(dodge_chance(1_000, 0.02, 0.4), 0.4);
        assert_eq!(dodge_chance(-3, 0.015, 0.3), 0.0);
    }

    #[test]
    fn escape_with_agility_five() {
        assert!((escape_chance(5) - 0.4).abs() < 1e-9);
        assert_eq!(escape_chance(100), 1.0);
    }

    #[test]
    fn escape_rate_converges() {
        let mut rng = PcgRng::seeded(2024);
        let trials = 20_000;
        let chance = escape_chance(5);
        let successes = (0..trials).filter(|_| rng.chance(chance)).count();
        let rate = successes as f64 / trials as f64;
        assert!((rate - 0.4).abs() < 0.02, "rate was {rate}");
    }
}
