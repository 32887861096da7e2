//! Shared handles to the read-only content oracles.
//!
//! [`OracleBundle`] keeps each oracle behind an `Arc` so the controller and
//! any number of workers can build a [`game_core::GameEnv`] on demand. The
//! content is immutable at runtime; all mutable state lives in the
//! controller.
use std::sync::Arc;

use game_content::StaticContent;
use game_core::{EnemyOracle, Env, GameEnv, ItemOracle, ScenarioOracle};

/// Manages all oracle implementations and provides unified access.
#[derive(Clone)]
pub struct OracleBundle {
    pub(crate) scenarios: Arc<dyn ScenarioOracle>,
    pub(crate) enemies: Arc<dyn EnemyOracle>,
    pub(crate) items: Arc<dyn ItemOracle>,
}

impl OracleBundle {
    pub fn new(
        scenarios: Arc<dyn ScenarioOracle>,
        enemies: Arc<dyn EnemyOracle>,
        items: Arc<dyn ItemOracle>,
    ) -> Self {
        Self {
            scenarios,
            enemies,
            items,
        }
    }

    /// Uses one value for every oracle.
    pub fn from_content<C>(content: C) -> Self
    where
        C: ScenarioOracle + EnemyOracle + ItemOracle + 'static,
    {
        let content = Arc::new(content);
        Self {
            scenarios: content.clone(),
            enemies: content.clone(),
            items: content,
        }
    }

    /// The content compiled into `game-content`.
    pub fn builtin() -> Self {
        Self::from_content(StaticContent::new())
    }

    /// Converts the bundle into a `GameEnv` for game-core.
    pub fn as_game_env(&self) -> GameEnv<'_> {
        Env::with_all(
            self.scenarios.as_ref(),
            self.enemies.as_ref(),
            self.items.as_ref(),
        )
    }

    pub fn items(&self) -> &dyn ItemOracle {
        self.items.as_ref()
    }
}

impl Default for OracleBundle {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for OracleBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleBundle").finish_non_exhaustive()
    }
}
