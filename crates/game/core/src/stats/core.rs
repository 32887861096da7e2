//! Named combat attributes and the additive stat block.
//!
//! Base stats, equipment bonuses and temporary bonuses all share the same
//! [`StatBlock`] shape, so effective stats are a plain sum of layers. A stat
//! that a layer does not mention is simply zero.

use core::ops::{Add, AddAssign};

/// The four named attributes.
///
/// Enemies carry strength, defense and agility only; their intelligence is
/// always zero because no enemy ability scales with it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StatKind {
    Strength,
    Defense,
    Agility,
    Intelligence,
}

impl StatKind {
    /// All stats in menu order.
    pub const ALL: [StatKind; 4] = [
        StatKind::Strength,
        StatKind::Defense,
        StatKind::Agility,
        StatKind::Intelligence,
    ];
}

/// One layer of stat values (base, equipment delta, or temporary delta).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub strength: i32,
    pub defense: i32,
    pub agility: i32,
    pub intelligence: i32,
}

impl StatBlock {
    pub const ZERO: StatBlock = StatBlock::new(0, 0, 0, 0);

    pub const fn new(strength: i32, defense: i32, agility: i32, intelligence: i32) -> Self {
        Self {
            strength,
            defense,
            agility,
            intelligence,
        }
    }

    /// A block with a single non-zero stat.
    pub const fn single(stat: StatKind, amount: i32) -> Self {
        let mut block = Self::ZERO;
        match stat {
            StatKind::Strength => block.strength = amount,
            StatKind::Defense => block.defense = amount,
            StatKind::Agility => block.agility = amount,
            StatKind::Intelligence => block.intelligence = amount,
        }
        block
    }

    pub const fn get(&self, stat: StatKind) -> i32 {
        match stat {
            StatKind::Strength => self.strength,
            StatKind::Defense => self.defense,
            StatKind::Agility => self.agility,
            StatKind::Intelligence => self.intelligence,
        }
    }

    pub fn get_mut(&mut self, stat: StatKind) -> &mut i32 {
        match stat {
            StatKind::Strength => &mut self.strength,
            StatKind::Defense => &mut self.defense,
            StatKind::Agility => &mut self.agility,
            StatKind::Intelligence => &mut self.intelligence,
        }
    }

    /// Adds `amount` to every stat.
    pub fn raise_all(&mut self, amount: i32) {
        for stat in StatKind::ALL {
            *self.get_mut(stat) += amount;
        }
    }

    /// Iterates the non-zero entries, for display of item bonuses.
    pub fn non_zero(&self) -> impl Iterator<Item = (StatKind, i32)> + '_ {
        StatKind::ALL
            .into_iter()
            .map(|stat| (stat, self.get(stat)))
            .filter(|(_, value)| *value != 0)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Add for StatBlock {
    type Output = StatBlock;

    fn add(mut self, rhs: StatBlock) -> StatBlock {
        self += rhs;
        self
    }
}

impl AddAssign for StatBlock {
    fn add_assign(&mut self, rhs: StatBlock) {
        self.strength += rhs.strength;
        self.defense += rhs.defense;
        self.agility += rhs.agility;
        self.intelligence += rhs.intelligence;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn stat_names_parse_case_insensitively() {
        assert_eq!(StatKind::from_str("strength"), Ok(StatKind::Strength));
        assert_eq!(StatKind::from_str("Agility"), Ok(StatKind::Agility));
        assert!(StatKind::from_str("luck").is_err());
        assert_eq!(StatKind::Intelligence.to_string(), "intelligence");
    }

    #[test]
    fn blocks_sum_per_stat() {
        let base = StatBlock::new(10, 5, 5, 5);
        let bonus = StatBlock::single(StatKind::Strength, 3) + StatBlock::single(StatKind::Agility, -1);
        let total = base + bonus;
        assert_eq!(total, StatBlock::new(13, 5, 4, 5));
        assert_eq!(bonus.non_zero().count(), 2);
    }
}
