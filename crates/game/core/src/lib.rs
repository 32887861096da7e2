//! Deterministic game logic and data types for the dungeon crawler.
//!
//! `game-core` defines the canonical rules (stat model, inventory, combat
//! resolution, path progression) as pure APIs. Every random roll draws from
//! an injected [`env::RngOracle`], and read-only content arrives through the
//! oracle traits in [`env`], so the same inputs always replay the same game.
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod progression;
pub mod state;
pub mod stats;

pub use combat::{
    AiPolicy, AttackKind, AttackOutcome, AttackResult, CombatOutcome, EnemyAction, Encounter,
    TurnOwner,
};
pub use config::GameConfig;
pub use env::{
    Choice, ChoiceContext, ConsumableEffect, EnemyOracle, EnemyTemplate, Env, EquipSlot, GameEnv,
    Item, ItemCategory, ItemEffect, ItemError, ItemOracle, NarrativeScenario, NodeKind,
    OracleError, PcgRng, RngOracle, ScenarioOracle, ScriptedRng, StoryPath,
};
pub use error::{ErrorSeverity, GameError};
pub use progression::{CombatScenario, Progression, ProgressionError, Scenario};
pub use state::{BoundedLog, Enemy, Equipment, Inventory, InventoryError, Player};
pub use stats::{Combatant, HealthMeter, StatBlock, StatError, StatKind};
