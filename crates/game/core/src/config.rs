/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Delay before the automatic enemy turn resolves, in milliseconds.
    pub enemy_turn_delay_ms: u64,

    /// Minimum interval between accepted input events, in milliseconds.
    ///
    /// Advisory only: debouncing belongs to the input collaborator.
    pub input_debounce_ms: u64,

    /// Fixed RNG seed. `None` lets the runtime pick one from OS entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_INVENTORY_SLOTS: usize = 10;
    pub const COMBAT_LOG_CAPACITY: usize = 8;
    pub const MESSAGE_LOG_CAPACITY: usize = 5;

    // ===== progression constants =====
    pub const STAT_POINTS_PER_LEVEL: u32 = 3;
    pub const HEALTH_PER_LEVEL: u32 = 10;
    pub const EXPERIENCE_PER_LEVEL: u32 = 100;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ENEMY_TURN_DELAY_MS: u64 = 800;
    pub const DEFAULT_INPUT_DEBOUNCE_MS: u64 = 200;

    pub fn new() -> Self {
        Self {
            enemy_turn_delay_ms: Self::DEFAULT_ENEMY_TURN_DELAY_MS,
            input_debounce_ms: Self::DEFAULT_INPUT_DEBOUNCE_MS,
            seed: None,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new()
        }
    }

    /// Enemy turn pacing as a [`core::time::Duration`].
    pub fn enemy_turn_delay(&self) -> core::time::Duration {
        core::time::Duration::from_millis(self.enemy_turn_delay_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
