//! Combat result types.

/// Which side acts next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TurnOwner {
    Player,
    Enemy,
}

impl TurnOwner {
    pub const fn other(self) -> Self {
        match self {
            TurnOwner::Player => TurnOwner::Enemy,
            TurnOwner::Enemy => TurnOwner::Player,
        }
    }
}

/// Plain or special attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackKind {
    Basic,
    Special,
}

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// The defender dodged; no damage.
    Dodged,
    /// The attack landed for the given post-mitigation damage.
    Hit { damage: u32 },
}

/// Result of one resolved attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub kind: AttackKind,
    pub outcome: AttackOutcome,
}

impl AttackResult {
    pub fn damage(&self) -> u32 {
        match self.outcome {
            AttackOutcome::Dodged => 0,
            AttackOutcome::Hit { damage } => damage,
        }
    }
}

/// How an encounter ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatOutcome {
    /// Enemy health reached zero.
    Victory,
    /// Player health reached zero.
    Defeat,
    /// The player fled; no reward.
    Escaped,
}
