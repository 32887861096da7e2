//! Traits describing read-only game content.
//!
//! Oracles expose the item catalog, enemy templates, narrative nodes and
//! path sequences. The [`Env`] aggregate bundles them so the progression
//! sequencer can reach everything it needs without hard coupling to
//! concrete content registries.
mod enemies;
mod error;
mod items;
mod rng;
mod scenarios;

pub use enemies::{EnemyOracle, EnemyTemplate};
pub use error::{ItemError, OracleError};
pub use items::{ConsumableEffect, EquipSlot, Item, ItemCategory, ItemEffect, ItemOracle};
pub use rng::{PcgRng, RngOracle, ScriptedRng};
pub use scenarios::{
    Choice, ChoiceContext, ChoiceEffect, NarrativeScenario, NodeKind, ScenarioOracle, StoryPath,
};

/// Aggregates the read-only oracles.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, S, E, I>
where
    S: ScenarioOracle + ?Sized,
    E: EnemyOracle + ?Sized,
    I: ItemOracle + ?Sized,
{
    scenarios: Option<&'a S>,
    enemies: Option<&'a E>,
    items: Option<&'a I>,
}

pub type GameEnv<'a> = Env<'a, dyn ScenarioOracle + 'a, dyn EnemyOracle + 'a, dyn ItemOracle + 'a>;

impl<'a, S, E, I> Env<'a, S, E, I>
where
    S: ScenarioOracle + ?Sized,
    E: EnemyOracle + ?Sized,
    I: ItemOracle + ?Sized,
{
    pub fn new(scenarios: Option<&'a S>, enemies: Option<&'a E>, items: Option<&'a I>) -> Self {
        Self {
            scenarios,
            enemies,
            items,
        }
    }

    pub fn with_all(scenarios: &'a S, enemies: &'a E, items: &'a I) -> Self {
        Self::new(Some(scenarios), Some(enemies), Some(items))
    }

    pub fn empty() -> Self {
        Self {
            scenarios: None,
            enemies: None,
            items: None,
        }
    }

    /// Returns the ScenarioOracle, or an error if not available.
    pub fn scenarios(&self) -> Result<&'a S, OracleError> {
        self.scenarios.ok_or(OracleError::ScenariosNotAvailable)
    }

    /// Returns the EnemyOracle, or an error if not available.
    pub fn enemies(&self) -> Result<&'a E, OracleError> {
        self.enemies.ok_or(OracleError::EnemiesNotAvailable)
    }

    /// Returns the ItemOracle, or an error if not available.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }
}

impl<'a, S, E, I> Env<'a, S, E, I>
where
    S: ScenarioOracle + 'a,
    E: EnemyOracle + 'a,
    I: ItemOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv`.
    pub fn into_game_env(self) -> GameEnv<'a> {
        let scenarios: Option<&'a dyn ScenarioOracle> = self.scenarios.map(|s| s as _);
        let enemies: Option<&'a dyn EnemyOracle> = self.enemies.map(|e| e as _);
        let items: Option<&'a dyn ItemOracle> = self.items.map(|i| i as _);
        Env::new(scenarios, enemies, items)
    }
}
