//! Narrative content and the two path sequences.
//!
//! Narrative nodes are static: a title, a description and 2–3 choices whose
//! effects mutate the player. Path sequences interleave narrative ids with
//! combat placeholders and always end in a boss fight.

use core::fmt;

use crate::state::Player;

use super::RngOracle;

/// Provides narrative nodes and path sequences.
pub trait ScenarioOracle: Send + Sync {
    /// The node shown before a path is chosen.
    fn entry(&self) -> &'static NarrativeScenario;

    fn narrative(&self, id: &str) -> Option<&'static NarrativeScenario>;

    /// The fixed node order for `path`.
    fn sequence(&self, path: StoryPath) -> &'static [NodeKind];
}

/// One of the two mutually exclusive story branches.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StoryPath {
    Light,
    Shadow,
}

/// One step of a path sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NodeKind {
    /// A catalog node, looked up by id.
    Narrative(&'static str),
    /// A random enemy from the path's pool, scaled to the player's level.
    Combat,
    /// The path's boss, scaled one level above the player.
    Boss,
}

/// Mutable view handed to a choice effect.
pub struct ChoiceContext<'a> {
    pub player: &'a mut Player,
    pub rng: &'a mut dyn RngOracle,
}

/// Applies a choice to the player and returns the message to log.
pub type ChoiceEffect = fn(&mut ChoiceContext<'_>) -> String;

#[derive(Clone, Copy)]
pub struct Choice {
    pub text: &'static str,
    pub effect: ChoiceEffect,
}

impl Choice {
    pub fn apply(&self, context: &mut ChoiceContext<'_>) -> String {
        (self.effect)(context)
    }
}

impl fmt::Debug for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Choice").field("text", &self.text).finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct NarrativeScenario {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub choices: &'static [Choice],
}

impl NarrativeScenario {
    pub fn choice(&self, index: usize) -> Option<&'static Choice> {
        self.choices.get(index)
    }

    pub fn choice_texts(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.choices.iter().map(|choice| choice.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::stats::Combatant;

    fn rest(context: &mut ChoiceContext<'_>) -> String {
        let healed = context.player.health_mut().heal(10);
        format!("You rest and recover {healed} health.")
    }

    static CAMP: NarrativeScenario = NarrativeScenario {
        id: "camp",
        title: "Camp",
        description: "A quiet clearing.",
        choices: &[Choice {
            text: "Rest",
            effect: rest,
        }],
    };

    #[test]
    fn choice_effect_mutates_player() {
        let mut player = Player::new();
        player.health_mut().drain(25);
        let mut rng = ScriptedRng::constant(0);
        let mut context = ChoiceContext {
            player: &mut player,
            rng: &mut rng,
        };

        let message = CAMP.choice(0).map(|choice| choice.apply(&mut context));
        assert_eq!(message.as_deref(), Some("You rest and recover 10 health."));
        assert_eq!(player.health().current(), 85);
        assert!(CAMP.choice(1).is_none());
    }

    #[test]
    fn path_names_parse() {
        assert_eq!("Shadow".parse::<StoryPath>(), Ok(StoryPath::Shadow));
        assert_eq!(StoryPath::Light.to_string(), "light");
    }
}
