//! Health pool shared by every combatant.
//!
//! The meter owns the `0 <= current <= maximum` invariant: every mutation
//! goes through a method that clamps.

/// Current and maximum health.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthMeter {
    current: u32,
    maximum: u32,
}

impl HealthMeter {
    /// A full meter.
    pub const fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    pub const fn current(&self) -> u32 {
        self.current
    }

    pub const fn maximum(&self) -> u32 {
        self.maximum
    }

    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Fraction of maximum health remaining, in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        if self.maximum == 0 {
            return 0.0;
        }
        self.current as f64 / self.maximum as f64
    }

    /// Removes up to `amount`, returning how much was actually lost.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current);
        self.current -= lost;
        lost
    }

    /// Removes up to `amount` but never drops below 1.
    pub fn drain_non_lethal(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current.saturating_sub(1));
        self.current -= lost;
        lost
    }

    /// Restores up to `amount`, returning how much was actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.maximum - self.current);
        self.current += healed;
        healed
    }

    pub fn restore_full(&mut self) -> u32 {
        self.heal(self.maximum)
    }

    /// Raises the maximum; current health is left untouched.
    pub fn raise_maximum(&mut self, amount: u32) {
        self.maximum = self.maximum.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_clamps_at_zero() {
        let mut hp = HealthMeter::full(10);
        assert_eq!(hp.drain(4), 4);
        assert_eq!(hp.drain(50), 6);
        assert_eq!(hp.current(), 0);
        assert!(hp.is_depleted());
    }

    #[test]
    fn heal_clamps_at_maximum() {
        let mut hp = HealthMeter::full(20);
        hp.drain(15);
        assert_eq!(hp.heal(100), 15);
        assert_eq!(hp.current(), 20);
    }

    #[test]
    fn non_lethal_drain_leaves_one() {
        let mut hp = HealthMeter::full(10);
        assert_eq!(hp.drain_non_lethal(30), 9);
        assert_eq!(hp.current(), 1);
        assert_eq!(hp.drain_non_lethal(5), 0);
    }
}
