//! Runtime orchestration for the dungeon crawler.
//!
//! This crate wires the game-core rules and the game-content catalogs into a
//! single interactive session. Consumers either drive a [`GameController`]
//! directly (frame ticks through [`GameController::advance`]) or embed
//! [`Runtime`], which hosts the controller on a worker task, fires enemy
//! turns on a timer, and talks to clients through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`controller`] is the root state machine and its snapshot views
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`oracle`] bundles the read-only content behind shared handles
pub mod api;
pub mod controller;
pub mod oracle;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use controller::{
    CombatAction, ControllerError, EnemyView, EquipmentView, GameController, GameMode,
    GameSnapshot, InputEvent, ItemView, PlayerView, STAT_MENU, ScenarioView,
};
pub use oracle::OracleBundle;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
