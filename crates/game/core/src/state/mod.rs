//! Mutable simulation state.
//!
//! The player (with inventory and equipment), per-encounter enemies and the
//! bounded text logs. Everything here is owned by a single controller and
//! mutated one event at a time.
mod enemy;
mod equipment;
mod inventory;
mod log;
mod player;

pub use enemy::Enemy;
pub use equipment::Equipment;
pub use inventory::{Inventory, InventoryError};
pub use log::BoundedLog;
pub use player::Player;
