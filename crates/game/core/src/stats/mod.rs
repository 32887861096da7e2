//! Stat model shared by every combatant.
//!
//! ```text
//! [ Base stats ] + [ Equipment bonuses ] + [ Temporary bonuses ]
//!                        ↓
//!               [ Effective stats ]
//!                        ↓
//!        damage / mitigation / dodge (crate::combat)
//! ```
//!
//! Enemies only have the base layer.

pub mod combatant;
pub mod core;
pub mod resources;

pub use combatant::Combatant;
pub use self::core::{StatBlock, StatKind};
pub use resources::HealthMeter;

use crate::error::{ErrorSeverity, GameError};

/// Errors from manual stat allocation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatError {
    #[error("no unallocated stat points")]
    NoStatPoints,

    #[error("unknown stat '{0}'")]
    UnknownStat(String),
}

impl GameError for StatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoStatPoints => ErrorSeverity::Recoverable,
            Self::UnknownStat(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoStatPoints => "STAT_NO_POINTS",
            Self::UnknownStat(_) => "STAT_UNKNOWN",
        }
    }
}
