//! Read-only views handed to the rendering collaborator.
//!
//! Snapshots are plain owned data, so a renderer can hold one across frames
//! or serialize it as JSON without touching the controller.

use serde::Serialize;

use game_core::{
    Combatant, Enemy, Item, ItemCategory, Player, Scenario, StatBlock, StoryPath, TurnOwner,
};

use super::GameMode;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub mode: GameMode,
    pub player: PlayerView,
    pub scenario: Option<ScenarioView>,
    pub enemy: Option<EnemyView>,
    pub turn_owner: Option<TurnOwner>,
    pub enemy_turn_pending: bool,
    /// Last ≤8 combat lines, oldest first.
    pub combat_log: Vec<String>,
    /// Last ≤5 messages, oldest first.
    pub messages: Vec<String>,
    /// Labels for the list the cursor moves through in the current mode.
    pub options: Vec<String>,
    pub selection: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub level: u32,
    pub experience: u32,
    pub experience_to_next: u32,
    pub health: u32,
    pub max_health: u32,
    pub stats: StatBlock,
    pub stat_points: u32,
    pub path: Option<StoryPath>,
    pub inventory: Vec<ItemView>,
    pub equipment: EquipmentView,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        let equipment = player.inventory().equipment();
        Self {
            level: player.level(),
            experience: player.experience(),
            experience_to_next: player.experience_to_next(),
            health: player.health().current(),
            max_health: player.health().maximum(),
            stats: player.effective_stats(),
            stat_points: player.stat_points(),
            path: player.path(),
            inventory: player
                .inventory()
                .held()
                .iter()
                .map(|item| ItemView::from(*item))
                .collect(),
            equipment: EquipmentView {
                weapon: equipment.weapon.map(ItemView::from),
                armor: equipment.armor.map(ItemView::from),
                artifact: equipment.artifact.map(ItemView::from),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub name: &'static str,
    pub description: &'static str,
    pub category: ItemCategory,
}

impl From<&'static Item> for ItemView {
    fn from(item: &'static Item) -> Self {
        Self {
            name: item.name,
            description: item.description,
            category: item.category(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EquipmentView {
    pub weapon: Option<ItemView>,
    pub armor: Option<ItemView>,
    pub artifact: Option<ItemView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScenarioView {
    pub title: String,
    pub description: String,
    pub choices: Vec<String>,
    pub combat: bool,
}

impl From<&Scenario> for ScenarioView {
    fn from(scenario: &Scenario) -> Self {
        let choices = match scenario {
            Scenario::Narrative(node) => node.choice_texts().map(String::from).collect(),
            Scenario::Combat(_) => Vec::new(),
        };
        Self {
            title: scenario.title().to_string(),
            description: scenario.description().to_string(),
            choices,
            combat: scenario.is_combat(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnemyView {
    pub name: String,
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
    pub stats: StatBlock,
    pub boss: bool,
}

impl EnemyView {
    pub fn new(enemy: &Enemy, boss: bool) -> Self {
        Self {
            name: enemy.name().to_string(),
            level: enemy.level(),
            health: enemy.health().current(),
            max_health: enemy.health().maximum(),
            stats: enemy.effective_stats(),
            boss,
        }
    }
}
