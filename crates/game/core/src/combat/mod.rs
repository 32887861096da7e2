//! Combat resolution system.
//!
//! Damage, mitigation and dodge formulas are pure functions of a stat block
//! and an injected RNG. [`Encounter`] layers the per-fight state machine on
//! top of them: turn ownership, the turn counter and a rolling combat log.
//!
//! # Core Functions
//!
//! - `mitigate`: defense reduction with a floor of 1
//! - `player_base_damage` / `player_special_damage` / `enemy_damage`
//! - `dodge_chance`: agility-scaled probability with a per-type ceiling
//! - `choose_enemy_action`: the enemy's fixed heuristic policy

pub mod ai;
pub mod damage;
pub mod encounter;
pub mod hit;
pub mod result;

pub use ai::{AiPolicy, EnemyAction, choose_enemy_action};
pub use damage::{
    enemy_damage, enemy_special_damage, mitigate, player_base_damage, player_special_damage,
};
pub use encounter::Encounter;
pub use hit::{dodge_chance, escape_chance, roll_dodge};
pub use result::{AttackKind, AttackOutcome, AttackResult, CombatOutcome, TurnOwner};
