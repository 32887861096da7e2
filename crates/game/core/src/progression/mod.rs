//! Progression sequencer.
//!
//! Walks the chosen path's fixed node sequence one step at a time and
//! materializes each node into a [`Scenario`]. The cursor only moves forward
//! and stops at the end of the sequence; once there, every further call
//! reports completion.

use crate::env::{GameEnv, NarrativeScenario, NodeKind, OracleError, RngOracle, StoryPath};
use crate::error::{ErrorSeverity, GameError};
use crate::state::Enemy;
use crate::stats::Combatant;

/// Errors from walking a path sequence.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    /// A path sequence names a narrative node the catalog does not have.
    #[error("unknown scenario '{id}'")]
    UnknownScenario { id: &'static str },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for ProgressionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownScenario { .. } => "PROGRESSION_UNKNOWN_SCENARIO",
            Self::Oracle(error) => error.error_code(),
        }
    }
}

/// A combat node with its freshly instantiated enemy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CombatScenario {
    pub title: String,
    pub description: &'static str,
    pub enemy: Enemy,
    pub boss: bool,
}

/// A materialized node.
#[derive(Clone, Debug)]
pub enum Scenario {
    Narrative(&'static NarrativeScenario),
    Combat(CombatScenario),
}

impl Scenario {
    pub fn title(&self) -> &str {
        match self {
            Scenario::Narrative(node) => node.title,
            Scenario::Combat(combat) => &combat.title,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Scenario::Narrative(node) => node.description,
            Scenario::Combat(combat) => combat.description,
        }
    }

    pub fn is_combat(&self) -> bool {
        matches!(self, Scenario::Combat(_))
    }
}

/// Cursor over one path's sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progression {
    path: Option<StoryPath>,
    cursor: usize,
}

impl Progression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<StoryPath> {
        self.path
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the next node, or `None` once the path is complete.
    ///
    /// Until a path is known the universal entry node is returned and the
    /// cursor stays put. The first path seen is locked in; later values of
    /// `chosen` are ignored.
    pub fn next_node(
        &mut self,
        env: &GameEnv<'_>,
        chosen: Option<StoryPath>,
        player_level: u32,
        rng: &mut dyn RngOracle,
    ) -> Result<Option<Scenario>, ProgressionError> {
        let scenarios = env.scenarios()?;

        let path = match (self.path, chosen) {
            (Some(locked), _) => locked,
            (None, Some(chosen)) => {
                self.path = Some(chosen);
                chosen
            }
            (None, None) => return Ok(Some(Scenario::Narrative(scenarios.entry()))),
        };

        let sequence = scenarios.sequence(path);
        let Some(&node) = sequence.get(self.cursor) else {
            return Ok(None);
        };

        let scenario = match node {
            NodeKind::Narrative(id) => {
                let narrative = scenarios
                    .narrative(id)
                    .ok_or(ProgressionError::UnknownScenario { id })?;
                Scenario::Narrative(narrative)
            }
            NodeKind::Combat => {
                let pool = env.enemies()?.encounter_pool(path);
                if pool.is_empty() {
                    return Err(OracleError::EmptyEncounterPool(path.into()).into());
                }
                let template = &pool[rng.pick(pool.len())];
                let enemy = template.instantiate(player_level);
                Scenario::Combat(CombatScenario {
                    title: format!("A {} blocks your way!", enemy.name()),
                    description: template.description,
                    enemy,
                    boss: false,
                })
            }
            NodeKind::Boss => {
                let template = env.enemies()?.boss(path);
                let enemy = template.instantiate(player_level + 1);
                Scenario::Combat(CombatScenario {
                    title: format!("{} awaits!", enemy.name()),
                    description: template.description,
                    enemy,
                    boss: true,
                })
            }
        };

        // advance only after the node materialized
        self.cursor += 1;
        Ok(Some(scenario))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::AiPolicy;
    use crate::env::{
        Choice, ChoiceContext, EnemyOracle, EnemyTemplate, Env, Item, ItemOracle, ScenarioOracle,
        ScriptedRng,
    };
    use crate::stats::StatBlock;

    fn nothing(_: &mut ChoiceContext<'_>) -> String {
        String::from("Nothing happens.")
    }

    static GATE: NarrativeScenario = NarrativeScenario {
        id: "gate",
        title: "Gate",
        description: "",
        choices: &[Choice {
            text: "Wait",
            effect: nothing,
        }],
    };
    static HALL: NarrativeScenario = NarrativeScenario {
        id: "hall",
        title: "Hall",
        description: "",
        choices: &[Choice {
            text: "Wait",
            effect: nothing,
        }],
    };

    static LIGHT: [NodeKind; 3] = [NodeKind::Narrative("hall"), NodeKind::Combat, NodeKind::Boss];
    static SHADOW: [NodeKind; 1] = [NodeKind::Narrative("missing")];

    const RAT: EnemyTemplate = EnemyTemplate {
        name: "Rat",
        description: "",
        base_health: 10,
        health_per_level: 5,
        base_stats: StatBlock::new(2, 0, 1, 0),
        stats_per_level: StatBlock::new(1, 0, 0, 0),
        base_experience: 5,
        experience_per_level: 5,
        loot: &[],
        policy: AiPolicy::STANDARD,
    };
    static POOL: [EnemyTemplate; 1] = [RAT];

    struct TestContent;

    impl ScenarioOracle for TestContent {
        fn entry(&self) -> &'static NarrativeScenario {
            &GATE
        }

        fn narrative(&self, id: &str) -> Option<&'static NarrativeScenario> {
            (id == "hall").then_some(&HALL)
        }

        fn sequence(&self, path: StoryPath) -> &'static [NodeKind] {
            match path {
                StoryPath::Light => &LIGHT,
                StoryPath::Shadow => &SHADOW,
            }
        }
    }

    impl EnemyOracle for TestContent {
        fn encounter_pool(&self, _: StoryPath) -> &'static [EnemyTemplate] {
            &POOL
        }

        fn boss(&self, _: StoryPath) -> &'static EnemyTemplate {
            &POOL[0]
        }
    }

    impl ItemOracle for TestContent {
        fn catalog(&self) -> &'static [&'static Item] {
            &[]
        }

        fn starting_kit(&self) -> &'static [&'static Item] {
            &[]
        }
    }

    fn env(content: &TestContent) -> GameEnv<'_> {
        Env::with_all(content, content, content).into_game_env()
    }

    #[test]
    fn entry_until_path_chosen() {
        let content = TestContent;
        let env = env(&content);
        let mut progression = Progression::new();
        let mut rng = ScriptedRng::constant(0);

        for _ in 0..3 {
            let node = progression.next_node(&env, None, 1, &mut rng).unwrap();
            assert!(matches!(node, Some(Scenario::Narrative(n)) if n.id == "gate"));
        }
        assert_eq!(progression.cursor(), 0);
        assert_eq!(progression.path(), None);
    }

    #[test]
    fn walks_sequence_then_reports_completion_forever() {
        let content = TestContent;
        let env = env(&content);
        let mut progression = Progression::new();
        let mut rng = ScriptedRng::constant(0);
        let path = Some(StoryPath::Light);

        let hall = progression.next_node(&env, path, 2, &mut rng).unwrap();
        assert!(matches!(hall, Some(Scenario::Narrative(n)) if n.id == "hall"));

        let Some(Scenario::Combat(fight)) = progression.next_node(&env, path, 2, &mut rng).unwrap()
        else {
            panic!("expected a combat node");
        };
        assert!(!fight.boss);
        assert_eq!(fight.enemy.level(), 2);

        let Some(Scenario::Combat(boss)) = progression.next_node(&env, path, 2, &mut rng).unwrap()
        else {
            panic!("expected the boss");
        };
        assert!(boss.boss);
        assert_eq!(boss.enemy.level(), 3);

        for _ in 0..3 {
            assert!(progression.next_node(&env, path, 2, &mut rng).unwrap().is_none());
            assert_eq!(progression.cursor(), LIGHT.len());
        }
    }

    #[test]
    fn path_locks_on_first_choice() {
        let content = TestContent;
        let env = env(&content);
        let mut progression = Progression::new();
        let mut rng = ScriptedRng::constant(0);

        progression
            .next_node(&env, Some(StoryPath::Light), 1, &mut rng)
            .unwrap();
        let node = progression
            .next_node(&env, Some(StoryPath::Shadow), 1, &mut rng)
            .unwrap();
        assert!(matches!(node, Some(Scenario::Combat(_))));
        assert_eq!(progression.path(), Some(StoryPath::Light));
    }

    #[test]
    fn dangling_id_fails_without_advancing() {
        let content = TestContent;
        let env = env(&content);
        let mut progression = Progression::new();
        let mut rng = ScriptedRng::constant(0);

        let error = progression
            .next_node(&env, Some(StoryPath::Shadow), 1, &mut rng)
            .unwrap_err();
        assert_eq!(error, ProgressionError::UnknownScenario { id: "missing" });
        assert_eq!(error.severity(), ErrorSeverity::Fatal);
        assert_eq!(progression.cursor(), 0);
    }

    #[test]
    fn missing_oracle_is_reported() {
        let mut progression = Progression::new();
        let env = GameEnv::empty();
        let error = progression
            .next_node(&env, None, 1, &mut ScriptedRng::constant(0))
            .unwrap_err();
        assert_eq!(
            error,
            ProgressionError::Oracle(OracleError::ScenariosNotAvailable)
        );
    }
}
