//! Content access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when accessing oracle data.
///
/// The simulation cannot continue without its content, so every variant
/// is fatal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("ScenarioOracle not available")]
    ScenariosNotAvailable,

    #[error("EnemyOracle not available")]
    EnemiesNotAvailable,

    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    /// A path's encounter pool is empty.
    #[error("no enemy templates for the {0} path")]
    EmptyEncounterPool(&'static str),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ScenariosNotAvailable => "ORACLE_SCENARIOS_NOT_AVAILABLE",
            EnemiesNotAvailable => "ORACLE_ENEMIES_NOT_AVAILABLE",
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            EmptyEncounterPool(_) => "ORACLE_EMPTY_ENCOUNTER_POOL",
        }
    }
}

/// Errors from using an item.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    #[error("{item} cannot be used")]
    NotConsumable { item: &'static str },
}

impl GameError for ItemError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotConsumable { .. } => "ITEM_NOT_CONSUMABLE",
        }
    }
}
