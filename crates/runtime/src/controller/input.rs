//! Input events and controller modes.

use game_core::StatKind;

/// Discrete, already-debounced input from the input collaborator.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputEvent {
    Up,
    Down,
    Confirm,
    Cancel,
    #[strum(to_string = "toggle-inventory", serialize = "open-inventory")]
    ToggleInventory,
}

/// Root state-machine states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameMode {
    #[default]
    Menu,
    /// Pass-through after a level-up; confirm resumes progression.
    Exploring,
    Scenario,
    Combat,
    Inventory,
    LevelUp,
    GameOver,
    Victory,
}

/// The fixed combat menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum CombatAction {
    Attack,
    #[strum(serialize = "Special Attack")]
    SpecialAttack,
    #[strum(serialize = "Use Item")]
    UseItem,
    Escape,
}

impl CombatAction {
    pub const ALL: [CombatAction; 4] = [
        CombatAction::Attack,
        CombatAction::SpecialAttack,
        CombatAction::UseItem,
        CombatAction::Escape,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Level-up menu order.
pub const STAT_MENU: [StatKind; 4] = StatKind::ALL;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_key_has_two_names() {
        assert_eq!("toggle-inventory".parse(), Ok(InputEvent::ToggleInventory));
        assert_eq!("open-inventory".parse(), Ok(InputEvent::ToggleInventory));
        assert_eq!("Confirm".parse(), Ok(InputEvent::Confirm));
        assert!("jump".parse::<InputEvent>().is_err());
    }

    #[test]
    fn combat_menu_labels() {
        let labels: Vec<String> = CombatAction::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["Attack", "Special Attack", "Use Item", "Escape"]);
    }

    #[test]
    fn mode_names() {
        assert_eq!(GameMode::LevelUp.to_string(), "levelUp");
        assert_eq!(GameMode::default(), GameMode::Menu);
    }
}
