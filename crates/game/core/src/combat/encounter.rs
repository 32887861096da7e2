//! Per-encounter combat state machine.
//!
//! An [`Encounter`] owns the enemy for the duration of one fight. Attack and
//! escape methods resolve a single action and write to the rolling log; they
//! never flip turn ownership. [`Encounter::end_turn`] is the only place that
//! does, and the caller decides when to invoke it.

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::{BoundedLog, Enemy, Player};
use crate::stats::Combatant;

use super::{
    AttackKind, AttackOutcome, AttackResult, CombatOutcome, EnemyAction, TurnOwner, escape_chance,
    roll_dodge,
};

/// Player special attacks halve the enemy's dodge chance.
const SPECIAL_DODGE_FACTOR: f64 = 0.5;
/// Enemy special attacks are dodged at 70% of the player's usual chance.
const ENEMY_SPECIAL_DODGE_FACTOR: f64 = 0.7;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Encounter {
    enemy: Enemy,
    turn_owner: TurnOwner,
    turn: u32,
    log: BoundedLog,
    boss: bool,
    escaped: bool,
}

impl Encounter {
    /// Opens combat. The enemy strikes first only with strictly higher agility.
    pub fn start(player: &Player, enemy: Enemy, boss: bool) -> Self {
        let turn_owner =
            if enemy.effective_stats().agility > player.effective_stats().agility {
                TurnOwner::Enemy
            } else {
                TurnOwner::Player
            };

        let mut log = BoundedLog::new(GameConfig::COMBAT_LOG_CAPACITY);
        log.push(format!(
            "A level {} {} stands before you!",
            enemy.level(),
            enemy.name()
        ));
        match turn_owner {
            TurnOwner::Player => log.push("You act first."),
            TurnOwner::Enemy => log.push(format!("The {} is faster and strikes first!", enemy.name())),
        }

        Self {
            enemy,
            turn_owner,
            turn: 1,
            log,
            boss,
            escaped: false,
        }
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn turn_owner(&self) -> TurnOwner {
        self.turn_owner
    }

    pub fn is_player_turn(&self) -> bool {
        self.turn_owner == TurnOwner::Player
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn log(&self) -> &BoundedLog {
        &self.log
    }

    pub fn is_boss(&self) -> bool {
        self.boss
    }

    pub fn escaped(&self) -> bool {
        self.escaped
    }

    pub fn player_attack(&mut self, player: &Player, rng: &mut dyn RngOracle) -> AttackResult {
        let dodge = self.enemy.dodge_chance();
        if roll_dodge(dodge, rng) {
            self.log.push(format!("The {} dodges your attack!", self.enemy.name()));
            return AttackResult {
                kind: AttackKind::Basic,
                outcome: AttackOutcome::Dodged,
            };
        }

        let raw = player.base_damage(rng);
        let damage = self.enemy.apply_damage(raw);
        self.log.push(format!(
            "You hit the {} for {} damage.",
            self.enemy.name(),
            damage
        ));
        AttackResult {
            kind: AttackKind::Basic,
            outcome: AttackOutcome::Hit { damage },
        }
    }

    pub fn player_special_attack(
        &mut self,
        player: &Player,
        rng: &mut dyn RngOracle,
    ) -> AttackResult {
        let dodge = self.enemy.dodge_chance() * SPECIAL_DODGE_FACTOR;
        if roll_dodge(dodge, rng) {
            self.log.push(format!(
                "The {} evades your special attack!",
                self.enemy.name()
            ));
            return AttackResult {
                kind: AttackKind::Special,
                outcome: AttackOutcome::Dodged,
            };
        }

        let raw = player.special_damage(rng);
        let damage = self.enemy.apply_damage(raw);
        self.log.push(format!(
            "Your special attack strikes the {} for {} damage!",
            self.enemy.name(),
            damage
        ));
        AttackResult {
            kind: AttackKind::Special,
            outcome: AttackOutcome::Hit { damage },
        }
    }

    /// Lets the enemy pick and resolve one action against the player.
    pub fn enemy_turn(&mut self, player: &mut Player, rng: &mut dyn RngOracle) -> AttackResult {
        let action = self.enemy.choose_action(player.health().ratio(), rng);
        let (kind, dodge) = match action {
            EnemyAction::Attack => (AttackKind::Basic, player.dodge_chance()),
            EnemyAction::SpecialAttack => (
                AttackKind::Special,
                player.dodge_chance() * ENEMY_SPECIAL_DODGE_FACTOR,
            ),
        };

        if roll_dodge(dodge, rng) {
            self.log.push(match kind {
                AttackKind::Basic => format!("You dodge the {}'s attack!", self.enemy.name()),
                AttackKind::Special => {
                    format!("You dodge the {}'s special attack!", self.enemy.name())
                }
            });
            return AttackResult {
                kind,
                outcome: AttackOutcome::Dodged,
            };
        }

        let raw = match kind {
            AttackKind::Basic => self.enemy.damage(rng),
            AttackKind::Special => self.enemy.special_damage(rng),
        };
        let damage = player.apply_damage(raw);
        self.log.push(match kind {
            AttackKind::Basic => format!("The {} hits you for {} damage.", self.enemy.name(), damage),
            AttackKind::Special => format!(
                "The {} unleashes a special attack for {} damage!",
                self.enemy.name(),
                damage
            ),
        });
        AttackResult {
            kind,
            outcome: AttackOutcome::Hit { damage },
        }
    }

    /// Tries to flee. Success ends the encounter with no reward.
    ///
    /// Bosses cannot be fled: the attempt fails without a roll.
    pub fn attempt_escape(&mut self, player: &Player, rng: &mut dyn RngOracle) -> bool {
        if self.boss {
            self.escaped = false;
            self.log.push("There is no escape!");
            return false;
        }

        let chance = escape_chance(player.effective_stats().agility);
        self.escaped = rng.chance(chance);
        if self.escaped {
            self.log.push("You escaped!");
        } else {
            self.log.push("You failed to escape!");
        }
        self.escaped
    }

    /// Hands the turn to the other side.
    pub fn end_turn(&mut self) {
        self.turn_owner = self.turn_owner.other();
        self.turn += 1;
    }

    /// Terminal state, if any. Defeat wins over every other outcome.
    pub fn outcome(&self, player: &Player) -> Option<CombatOutcome> {
        if !player.is_alive() {
            Some(CombatOutcome::Defeat)
        } else if !self.enemy.is_alive() {
            Some(CombatOutcome::Victory)
        } else if self.escaped {
            Some(CombatOutcome::Escaped)
        } else {
            None
        }
    }

    /// Gives up the enemy, for loot rolls after the fight.
    pub fn into_enemy(self) -> Enemy {
        self.enemy
    }
}
