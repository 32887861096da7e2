//! Oracle implementation over the static registries.

use game_core::{
    EnemyOracle, EnemyTemplate, Env, GameEnv, Item, ItemOracle, NarrativeScenario, NodeKind,
    ScenarioOracle, StoryPath,
};

use crate::enemies::{CORRUPTED_PALADIN, LICH_KING, LIGHT_POOL, SHADOW_POOL};
use crate::items::{CATALOG, STARTING_KIT};
use crate::scenarios::{CROSSROADS, LIGHT_SEQUENCE, NARRATIVES, SHADOW_SEQUENCE};

/// Serves the built-in content through every oracle trait.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticContent;

impl StaticContent {
    pub fn new() -> Self {
        Self
    }

    /// Bundles this content as a [`GameEnv`].
    pub fn game_env(&self) -> GameEnv<'_> {
        Env::with_all(self, self, self).into_game_env()
    }
}

impl ScenarioOracle for StaticContent {
    fn entry(&self) -> &'static NarrativeScenario {
        &CROSSROADS
    }

    fn narrative(&self, id: &str) -> Option<&'static NarrativeScenario> {
        NARRATIVES.iter().copied().find(|node| node.id == id)
    }

    fn sequence(&self, path: StoryPath) -> &'static [NodeKind] {
        match path {
            StoryPath::Light => &LIGHT_SEQUENCE,
            StoryPath::Shadow => &SHADOW_SEQUENCE,
        }
    }
}

impl EnemyOracle for StaticContent {
    fn encounter_pool(&self, path: StoryPath) -> &'static [EnemyTemplate] {
        match path {
            StoryPath::Light => &LIGHT_POOL,
            StoryPath::Shadow => &SHADOW_POOL,
        }
    }

    fn boss(&self, path: StoryPath) -> &'static EnemyTemplate {
        match path {
            StoryPath::Light => &CORRUPTED_PALADIN,
            StoryPath::Shadow => &LICH_KING,
        }
    }
}

impl ItemOracle for StaticContent {
    fn catalog(&self) -> &'static [&'static Item] {
        &CATALOG
    }

    fn starting_kit(&self) -> &'static [&'static Item] {
        &STARTING_KIT
    }
}
