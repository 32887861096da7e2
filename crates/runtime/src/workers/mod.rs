//! Worker tasks that back the runtime orchestration.
//!
//! The session worker owns the [`crate::controller::GameController`] and is
//! the only task that mutates game state.

mod session;

pub use session::{Command, SessionWorker};
