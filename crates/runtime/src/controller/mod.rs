//! Root game state machine.
//!
//! [`GameController`] exclusively owns the player, the progression cursor,
//! the current scenario and encounter, and the message log. Every input is
//! processed to completion before the next is accepted. The only suspension
//! point is the automatic enemy turn: after the player acts, the controller
//! records a pending delay and ignores combat input until the scheduler
//! calls [`GameController::advance`] or [`GameController::resolve_enemy_turn`].
mod input;
mod snapshot;

use std::time::Duration;

use tracing::{debug, error, info, warn};

use game_core::{
    AttackKind, BoundedLog, ChoiceContext, CombatOutcome, Combatant, Encounter, ErrorSeverity,
    GameConfig, GameError, NarrativeScenario, PcgRng, Player, Progression, ProgressionError,
    RngOracle, Scenario,
};

pub use input::{CombatAction, GameMode, InputEvent, STAT_MENU};
pub use snapshot::{EnemyView, EquipmentView, GameSnapshot, ItemView, PlayerView, ScenarioView};

use crate::oracle::OracleBundle;

/// Failures surfaced from input handling.
///
/// Inventory and stat-allocation failures are not errors here; they are
/// reported to the player through the message log and leave state as is.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error(transparent)]
    Progression(#[from] ProgressionError),
}

impl GameError for ControllerError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Progression(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Progression(error) => error.error_code(),
        }
    }
}

pub type ControllerResult<T> = std::result::Result<T, ControllerError>;

pub struct GameController {
    oracles: OracleBundle,
    config: GameConfig,
    rng: Box<dyn RngOracle>,

    mode: GameMode,
    player: Player,
    progression: Progression,
    scenario: Option<Scenario>,
    encounter: Option<Encounter>,
    messages: BoundedLog,
    selection: usize,
    /// Where cancel/toggle-inventory returns to.
    inventory_return: GameMode,
    /// Time left before the scheduled enemy turn fires.
    enemy_turn_remaining: Option<Duration>,
}

impl GameController {
    pub fn new(oracles: OracleBundle, config: GameConfig, rng: Box<dyn RngOracle>) -> Self {
        Self {
            oracles,
            config,
            rng,
            mode: GameMode::Menu,
            player: Player::new(),
            progression: Progression::new(),
            scenario: None,
            encounter: None,
            messages: BoundedLog::new(GameConfig::MESSAGE_LOG_CAPACITY),
            selection: 0,
            inventory_return: GameMode::Exploring,
            enemy_turn_remaining: None,
        }
    }

    /// Seeds a [`PcgRng`] from `config.seed`, or from OS entropy if unset.
    pub fn seeded(oracles: OracleBundle, config: GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        info!(seed, "seeding game rng");
        Self::new(oracles, config, Box::new(PcgRng::seeded(seed)))
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn scenario(&self) -> Option<&Scenario> {
        self.scenario.as_ref()
    }

    pub fn encounter(&self) -> Option<&Encounter> {
        self.encounter.as_ref()
    }

    pub fn messages(&self) -> &BoundedLog {
        &self.messages
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Time left before the enemy acts, if an enemy turn is scheduled.
    pub fn pending_enemy_turn(&self) -> Option<Duration> {
        self.enemy_turn_remaining
    }

    /// Routes one input to the handler for the current mode.
    pub fn handle_input(&mut self, input: InputEvent) -> ControllerResult<()> {
        match self.mode {
            GameMode::Menu => match input {
                InputEvent::Confirm => self.start_game()?,
                _ => self.ignore(input),
            },
            GameMode::Exploring => match input {
                InputEvent::Confirm => self.advance_progression()?,
                InputEvent::ToggleInventory => self.open_inventory(),
                _ => self.ignore(input),
            },
            GameMode::Scenario => self.handle_scenario(input)?,
            GameMode::Combat => self.handle_combat(input)?,
            GameMode::Inventory => self.handle_inventory(input),
            GameMode::LevelUp => self.handle_level_up(input),
            GameMode::GameOver | GameMode::Victory => match input {
                InputEvent::Confirm => self.reset(),
                _ => self.ignore(input),
            },
        }
        Ok(())
    }

    /// Frame-tick driving: counts `elapsed` against the pending enemy turn.
    ///
    /// Returns true if an enemy turn resolved during this tick.
    pub fn advance(&mut self, elapsed: Duration) -> ControllerResult<bool> {
        let Some(remaining) = self.enemy_turn_remaining else {
            return Ok(false);
        };
        if elapsed >= remaining {
            self.resolve_enemy_turn()
        } else {
            self.enemy_turn_remaining = Some(remaining - elapsed);
            Ok(false)
        }
    }

    /// Callback driving: resolves the pending enemy turn right away.
    ///
    /// Returns false if nothing was pending.
    pub fn resolve_enemy_turn(&mut self) -> ControllerResult<bool> {
        if self.enemy_turn_remaining.take().is_none() {
            return Ok(false);
        }
        // the encounter may already be over
        if self.check_combat_end()? {
            return Ok(false);
        }
        let Some(encounter) = self.encounter.as_mut() else {
            return Ok(false);
        };

        let result = encounter.enemy_turn(&mut self.player, self.rng.as_mut());
        debug!(
            enemy = encounter.enemy().name(),
            kind = ?result.kind,
            outcome = ?result.outcome,
            player_health = self.player.health().current(),
            "enemy turn resolved"
        );

        if !self.check_combat_end()? {
            if let Some(encounter) = self.encounter.as_mut() {
                encounter.end_turn();
            }
        }
        Ok(true)
    }

    /// Read-only view for the renderer.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            mode: self.mode,
            player: PlayerView::from(&self.player),
            scenario: self.scenario.as_ref().map(ScenarioView::from),
            enemy: self
                .encounter
                .as_ref()
                .map(|encounter| EnemyView::new(encounter.enemy(), encounter.is_boss())),
            turn_owner: self.encounter.as_ref().map(Encounter::turn_owner),
            enemy_turn_pending: self.enemy_turn_remaining.is_some(),
            combat_log: self
                .encounter
                .as_ref()
                .map(|encounter| encounter.log().to_vec())
                .unwrap_or_default(),
            messages: self.messages.to_vec(),
            options: self.options(),
            selection: self.selection,
        }
    }

    // ===== mode handlers =====

    fn handle_scenario(&mut self, input: InputEvent) -> ControllerResult<()> {
        let node = match &self.scenario {
            Some(Scenario::Narrative(node)) => Some(*node),
            Some(Scenario::Combat(_)) => None,
            None => {
                self.ignore(input);
                return Ok(());
            }
        };

        match (node, input) {
            (Some(node), InputEvent::Up) => self.select_previous(node.choices.len()),
            (Some(node), InputEvent::Down) => self.select_next(node.choices.len()),
            (Some(node), InputEvent::Confirm) => self.choose(node)?,
            (Some(_), InputEvent::ToggleInventory) => self.open_inventory(),
            (None, InputEvent::Confirm) => self.enter_combat(),
            _ => self.ignore(input),
        }
        Ok(())
    }

    fn handle_combat(&mut self, input: InputEvent) -> ControllerResult<()> {
        let players_turn = self
            .encounter
            .as_ref()
            .is_some_and(Encounter::is_player_turn);
        if self.enemy_turn_remaining.is_some() || !players_turn {
            self.ignore(input);
            return Ok(());
        }

        match input {
            InputEvent::Up => self.select_previous(CombatAction::ALL.len()),
            InputEvent::Down => self.select_next(CombatAction::ALL.len()),
            InputEvent::Confirm => match CombatAction::from_index(self.selection) {
                Some(CombatAction::Attack) => self.player_strike(AttackKind::Basic)?,
                Some(CombatAction::SpecialAttack) => self.player_strike(AttackKind::Special)?,
                Some(CombatAction::UseItem) => self.open_inventory(),
                Some(CombatAction::Escape) => self.try_escape()?,
                None => self.ignore(input),
            },
            InputEvent::Cancel | InputEvent::ToggleInventory => self.ignore(input),
        }
        Ok(())
    }

    fn handle_inventory(&mut self, input: InputEvent) {
        let held = self.player.inventory().held().len();
        match input {
            InputEvent::Up => self.select_previous(held),
            InputEvent::Down => self.select_next(held),
            InputEvent::Confirm => self.use_selected_item(),
            InputEvent::Cancel | InputEvent::ToggleInventory => self.close_inventory(),
        }
    }

    fn handle_level_up(&mut self, input: InputEvent) {
        let has_points = self.player.stat_points() > 0;
        match input {
            InputEvent::Up if has_points => self.select_previous(STAT_MENU.len()),
            InputEvent::Down if has_points => self.select_next(STAT_MENU.len()),
            InputEvent::Confirm if has_points => {
                let stat = STAT_MENU[self.selection.min(STAT_MENU.len() - 1)];
                match self.player.allocate_stat(stat) {
                    Ok(()) => {
                        let value = self.player.base_stats().get(stat);
                        debug!(%stat, value, remaining = self.player.stat_points(), "stat allocated");
                        self.messages.push(format!("Your {stat} rises to {value}."));
                    }
                    Err(error) => {
                        warn!(
                            %error,
                            code = error.error_code(),
                            severity = error.severity().as_str(),
                            "stat allocation rejected"
                        );
                        self.messages.push(error.to_string());
                    }
                }
            }
            InputEvent::Confirm => {
                self.selection = 0;
                self.set_mode(GameMode::Exploring);
            }
            _ => self.ignore(input),
        }
    }

    // ===== transitions =====

    fn start_game(&mut self) -> ControllerResult<()> {
        self.reset_session();
        for &item in self.oracles.items().starting_kit() {
            if let Err(error) = self.player.inventory_mut().add(item) {
                warn!(%error, "starting kit item dropped");
            }
        }
        info!("new game started");
        self.messages.push("Your adventure begins.");
        self.advance_progression()
    }

    fn reset(&mut self) {
        self.reset_session();
        self.set_mode(GameMode::Menu);
    }

    fn reset_session(&mut self) {
        self.player = Player::new();
        self.progression = Progression::new();
        self.scenario = None;
        self.encounter = None;
        self.enemy_turn_remaining = None;
        self.messages.clear();
        self.selection = 0;
    }

    /// Moves to the next node, or to victory when the path is exhausted.
    fn advance_progression(&mut self) -> ControllerResult<()> {
        let env = self.oracles.as_game_env();
        let next = self.progression.next_node(
            &env,
            self.player.path(),
            self.player.level(),
            self.rng.as_mut(),
        );
        let next = match next {
            Ok(next) => next,
            Err(error) => {
                error!(
                    %error,
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "progression failed"
                );
                return Err(error.into());
            }
        };

        self.selection = 0;
        match next {
            Some(scenario) => {
                info!(
                    title = scenario.title(),
                    cursor = self.progression.cursor(),
                    "entering scenario"
                );
                self.scenario = Some(scenario);
                self.set_mode(GameMode::Scenario);
            }
            None => {
                info!(path = ?self.progression.path(), "path complete");
                self.scenario = None;
                self.messages.push("Your journey is complete. Victory!");
                self.set_mode(GameMode::Victory);
            }
        }
        Ok(())
    }

    fn choose(&mut self, node: &'static NarrativeScenario) -> ControllerResult<()> {
        let Some(choice) = node.choice(self.selection) else {
            return Ok(());
        };

        let level_before = self.player.level();
        let message = choice.apply(&mut ChoiceContext {
            player: &mut self.player,
            rng: self.rng.as_mut(),
        });
        debug!(scenario = node.id, choice = choice.text, "choice resolved");
        self.messages.push(message);
        self.selection = 0;

        if !self.player.is_alive() {
            self.game_over();
            return Ok(());
        }
        if self.player.level() > level_before {
            self.messages
                .push(format!("You reached level {}!", self.player.level()));
            self.enter_level_up();
            return Ok(());
        }
        self.advance_progression()
    }

    fn enter_combat(&mut self) {
        let Some(Scenario::Combat(node)) = &self.scenario else {
            return;
        };

        let encounter = Encounter::start(&self.player, node.enemy.clone(), node.boss);
        info!(
            enemy = encounter.enemy().name(),
            level = encounter.enemy().level(),
            boss = encounter.is_boss(),
            first = %encounter.turn_owner(),
            "combat started"
        );
        let enemy_first = !encounter.is_player_turn();
        self.encounter = Some(encounter);
        self.selection = 0;
        self.set_mode(GameMode::Combat);

        if enemy_first {
            self.schedule_enemy_turn();
        }
    }

    fn enter_level_up(&mut self) {
        self.selection = 0;
        self.set_mode(GameMode::LevelUp);
    }

    fn game_over(&mut self) {
        self.encounter = None;
        self.enemy_turn_remaining = None;
        self.messages.push("You have fallen. Game over.");
        self.set_mode(GameMode::GameOver);
    }

    fn open_inventory(&mut self) {
        self.inventory_return = self.mode;
        self.selection = 0;
        self.set_mode(GameMode::Inventory);
    }

    fn close_inventory(&mut self) {
        self.selection = 0;
        self.set_mode(self.inventory_return);
    }

    fn set_mode(&mut self, mode: GameMode) {
        if self.mode != mode {
            info!(from = %self.mode, to = %mode, "mode changed");
            self.mode = mode;
        }
    }

    // ===== combat =====

    fn player_strike(&mut self, kind: AttackKind) -> ControllerResult<()> {
        let Some(encounter) = self.encounter.as_mut() else {
            return Ok(());
        };
        let result = match kind {
            AttackKind::Basic => encounter.player_attack(&self.player, self.rng.as_mut()),
            AttackKind::Special => {
                encounter.player_special_attack(&self.player, self.rng.as_mut())
            }
        };
        debug!(
            kind = ?result.kind,
            outcome = ?result.outcome,
            enemy_health = encounter.enemy().health().current(),
            "player attack resolved"
        );
        self.finish_player_action()
    }

    fn try_escape(&mut self) -> ControllerResult<()> {
        let Some(encounter) = self.encounter.as_mut() else {
            return Ok(());
        };
        let escaped = encounter.attempt_escape(&self.player, self.rng.as_mut());
        debug!(escaped, "escape attempted");
        self.finish_player_action()
    }

    /// Ends the player's turn unless the encounter is over.
    fn finish_player_action(&mut self) -> ControllerResult<()> {
        if self.check_combat_end()? {
            return Ok(());
        }
        if let Some(encounter) = self.encounter.as_mut() {
            encounter.end_turn();
        }
        self.schedule_enemy_turn();
        Ok(())
    }

    fn schedule_enemy_turn(&mut self) {
        let delay = self.config.enemy_turn_delay();
        debug!(delay_ms = delay.as_millis() as u64, "enemy turn scheduled");
        self.enemy_turn_remaining = Some(delay);
    }

    /// Applies the outcome if the encounter has ended. Returns true if it had.
    fn check_combat_end(&mut self) -> ControllerResult<bool> {
        let outcome = self
            .encounter
            .as_ref()
            .and_then(|encounter| encounter.outcome(&self.player));
        let Some(outcome) = outcome else {
            return Ok(false);
        };
        let Some(encounter) = self.encounter.take() else {
            return Ok(false);
        };
        self.enemy_turn_remaining = None;
        info!(?outcome, turns = encounter.turn(), "combat ended");

        match outcome {
            CombatOutcome::Defeat => {
                self.messages
                    .push(format!("The {} has slain you.", encounter.enemy().name()));
                self.game_over();
            }
            CombatOutcome::Escaped => {
                self.messages.push("You flee the battle.");
                self.player.clear_temporary();
                self.leave_combat()?;
            }
            CombatOutcome::Victory => self.claim_victory(encounter)?,
        }
        Ok(true)
    }

    fn claim_victory(&mut self, encounter: Encounter) -> ControllerResult<()> {
        let boss = encounter.is_boss();
        let enemy = encounter.into_enemy();
        let experience = enemy.experience_reward();
        let levels = self.player.gain_experience(experience);
        self.messages.push(format!(
            "You defeated the {}! (+{} XP)",
            enemy.name(),
            experience
        ));

        if let Some(item) = enemy.roll_loot(self.rng.as_mut()) {
            match self.player.inventory_mut().add(item) {
                Ok(()) => self
                    .messages
                    .push(format!("The {} dropped a {}.", enemy.name(), item.name)),
                Err(error) => {
                    warn!(%error, "loot discarded");
                    self.messages
                        .push(format!("Your pack is full; the {} is left behind.", item.name));
                }
            }
        }
        if levels > 0 {
            self.messages
                .push(format!("You reached level {}!", self.player.level()));
        }

        if boss {
            info!(enemy = enemy.name(), "boss defeated");
            self.scenario = None;
            self.messages.push("The final foe has fallen. Victory!");
            self.set_mode(GameMode::Victory);
            return Ok(());
        }

        self.player.clear_temporary();
        self.leave_combat()
    }

    /// Spends banked stat points before the path resumes. Points also bank
    /// from consumables used mid-fight.
    fn leave_combat(&mut self) -> ControllerResult<()> {
        if self.player.stat_points() > 0 {
            self.enter_level_up();
            Ok(())
        } else {
            self.advance_progression()
        }
    }

    // ===== inventory =====

    fn use_selected_item(&mut self) {
        let index = self.selection;
        let Some(item) = self.player.inventory().get(index) else {
            self.ignore(InputEvent::Confirm);
            return;
        };

        if item.is_consumable() {
            match item.use_on(&mut self.player) {
                Ok(message) => {
                    if let Err(error) = self.player.inventory_mut().remove_at(index) {
                        warn!(%error, "used item was not in the bag");
                    }
                    debug!(item = item.name, "item used");
                    self.messages.push(message);
                }
                Err(error) => {
                    warn!(
                        %error,
                        code = error.error_code(),
                        severity = error.severity().as_str(),
                        "item use rejected"
                    );
                    self.messages.push(error.to_string());
                }
            }
        } else {
            match self.player.inventory_mut().equip(item) {
                Ok(Some(previous)) => {
                    debug!(item = item.name, replaced = previous.name, "item equipped");
                    self.messages.push(format!(
                        "You equip the {}. The {} goes back in your pack.",
                        item.name, previous.name
                    ));
                }
                Ok(None) => {
                    debug!(item = item.name, "item equipped");
                    self.messages.push(format!("You equip the {}.", item.name));
                }
                Err(error) => {
                    warn!(
                        %error,
                        code = error.error_code(),
                        severity = error.severity().as_str(),
                        "equip rejected"
                    );
                    self.messages.push(error.to_string());
                }
            }
        }

        let held = self.player.inventory().held().len();
        self.selection = self.selection.min(held.saturating_sub(1));
    }

    // ===== selection =====

    fn select_previous(&mut self, len: usize) {
        if len > 0 {
            self.selection = self.selection.saturating_sub(1);
        }
    }

    fn select_next(&mut self, len: usize) {
        if self.selection + 1 < len {
            self.selection += 1;
        }
    }

    fn options(&self) -> Vec<String> {
        match self.mode {
            GameMode::Menu => vec![String::from("New Game")],
            GameMode::Exploring => vec![String::from("Continue")],
            GameMode::Scenario => match &self.scenario {
                Some(Scenario::Narrative(node)) => node.choice_texts().map(String::from).collect(),
                Some(Scenario::Combat(_)) => vec![String::from("Fight")],
                None => Vec::new(),
            },
            GameMode::Combat => CombatAction::ALL.iter().map(ToString::to_string).collect(),
            GameMode::Inventory => self
                .player
                .inventory()
                .held()
                .iter()
                .map(|item| item.name.to_string())
                .collect(),
            GameMode::LevelUp if self.player.stat_points() > 0 => {
                STAT_MENU.iter().map(ToString::to_string).collect()
            }
            GameMode::LevelUp => vec![String::from("Continue")],
            GameMode::GameOver | GameMode::Victory => vec![String::from("Play Again")],
        }
    }

    fn ignore(&self, input: InputEvent) {
        debug!(mode = %self.mode, %input, pending = self.enemy_turn_remaining.is_some(), "input ignored");
    }
}

#[cfg(test)]
mod tests {
    use game_content::items::TOME_OF_INSIGHT;
    use game_core::{ScriptedRng, StatBlock, StatKind, StoryPath};

    use super::*;

    fn controller(rng: ScriptedRng) -> GameController {
        GameController::new(OracleBundle::builtin(), GameConfig::default(), Box::new(rng))
    }

    /// Confirms through every mode, resolving enemy turns as they come due.
    fn play_until_done(controller: &mut GameController, max_steps: usize) {
        for _ in 0..max_steps {
            if matches!(controller.mode(), GameMode::Victory | GameMode::GameOver) {
                return;
            }
            if controller.pending_enemy_turn().is_some() {
                controller.resolve_enemy_turn().unwrap();
            } else {
                controller.handle_input(InputEvent::Confirm).unwrap();
            }
        }
    }

    #[test]
    fn light_path_playthrough_reaches_victory() {
        let mut controller = controller(ScriptedRng::constant(u32::MAX));
        controller.handle_input(InputEvent::Confirm).unwrap();
        assert_eq!(controller.mode(), GameMode::Scenario);
        assert_eq!(controller.player().inventory().held().len(), 3);

        // strong enough to one-shot the boss, tough enough to survive anything
        controller.player = Player::with_stats(StatBlock::new(60, 30, 5, 5), 500);

        // crossroads, first choice is the path of light
        controller.handle_input(InputEvent::Confirm).unwrap();
        assert_eq!(controller.player().path(), Some(StoryPath::Light));

        play_until_done(&mut controller, 100);
        assert_eq!(controller.mode(), GameMode::Victory);
        assert_eq!(controller.player().path(), Some(StoryPath::Light));
        assert_eq!(controller.progression.cursor(), 5);
    }

    #[test]
    fn victory_and_game_over_return_to_menu() {
        let mut controller = controller(ScriptedRng::constant(u32::MAX));
        controller.mode = GameMode::Victory;
        controller.handle_input(InputEvent::Up).unwrap();
        assert_eq!(controller.mode(), GameMode::Victory);
        controller.handle_input(InputEvent::Confirm).unwrap();
        assert_eq!(controller.mode(), GameMode::Menu);
        assert!(controller.messages().is_empty());
    }

    /// Starts a game and walks into the first light-path fight.
    fn into_first_fight(controller: &mut GameController) {
        controller.handle_input(InputEvent::Confirm).unwrap(); // menu
        controller.handle_input(InputEvent::Confirm).unwrap(); // path of light
        controller.handle_input(InputEvent::Confirm).unwrap(); // pray at the shrine
        assert!(controller.scenario().is_some_and(Scenario::is_combat));
        controller.handle_input(InputEvent::Confirm).unwrap(); // fight
        assert_eq!(controller.mode(), GameMode::Combat);
    }

    #[test]
    fn faster_enemy_acts_first_and_input_waits() {
        // pick(2) with the max value lands on the Dire Wolf, which outpaces a fresh player
        let mut controller = controller(ScriptedRng::constant(u32::MAX));
        into_first_fight(&mut controller);

        assert!(controller.pending_enemy_turn().is_some());
        controller.handle_input(InputEvent::Down).unwrap();
        assert_eq!(controller.selection(), 0);

        assert!(!controller.advance(Duration::from_millis(500)).unwrap());
        assert_eq!(
            controller.pending_enemy_turn(),
            Some(Duration::from_millis(300))
        );
        assert!(controller.advance(Duration::from_millis(300)).unwrap());
        assert!(controller.pending_enemy_turn().is_none());
        assert!(controller.encounter().is_some_and(Encounter::is_player_turn));
        assert!(controller.player().health().current() < controller.player().health().maximum());
    }

    #[test]
    fn player_attack_hands_turn_to_enemy() {
        let mut controller = controller(ScriptedRng::constant(u32::MAX));
        into_first_fight(&mut controller);
        controller.resolve_enemy_turn().unwrap();

        controller.handle_input(InputEvent::Confirm).unwrap();
        let encounter = controller.encounter().unwrap();
        assert!(!encounter.is_player_turn());
        assert!(encounter.enemy().health().current() < encounter.enemy().health().maximum());
        assert!(controller.pending_enemy_turn().is_some());
    }

    #[test]
    fn inventory_from_combat_keeps_the_turn() {
        let mut controller = controller(ScriptedRng::constant(u32::MAX));
        into_first_fight(&mut controller);
        controller.resolve_enemy_turn().unwrap();

        controller.handle_input(InputEvent::Down).unwrap();
        controller.handle_input(InputEvent::Down).unwrap();
        controller.handle_input(InputEvent::Confirm).unwrap();
        assert_eq!(controller.mode(), GameMode::Inventory);

        // drink the first potion
        let hurt = controller.player().health().current();
        controller.handle_input(InputEvent::Confirm).unwrap();
        assert!(controller.player().health().current() > hurt);
        assert_eq!(controller.player().inventory().held().len(), 2);

        controller.handle_input(InputEvent::Cancel).unwrap();
        assert_eq!(controller.mode(), GameMode::Combat);
        assert!(controller.encounter().is_some_and(Encounter::is_player_turn));
        assert!(controller.pending_enemy_turn().is_none());
    }

    #[test]
    fn equipping_from_inventory() {
        let mut controller = controller(ScriptedRng::constant(u32::MAX));
        controller.handle_input(InputEvent::Confirm).unwrap();
        controller.handle_input(InputEvent::ToggleInventory).unwrap();
        assert_eq!(controller.mode(), GameMode::Inventory);

        // potion, potion, leather armor
        controller.handle_input(InputEvent::Down).unwrap();
        controller.handle_input(InputEvent::Down).unwrap();
        controller.handle_input(InputEvent::Down).unwrap();
        assert_eq!(controller.selection(), 2);
        controller.handle_input(InputEvent::Confirm).unwrap();

        let equipment = controller.player().inventory().equipment();
        assert_eq!(equipment.armor.map(|item| item.name), Some("Leather Armor"));
        assert_eq!(controller.player().effective_stats().defense, 7);
        assert_eq!(controller.selection(), 1);

        controller.handle_input(InputEvent::ToggleInventory).unwrap();
        assert_eq!(controller.mode(), GameMode::Scenario);
    }

    #[test]
    fn defeat_ends_the_game() {
        let mut controller = controller(ScriptedRng::constant(u32::MAX));
        into_first_fight(&mut controller);
        controller.player = Player::with_stats(StatBlock::new(1, 0, 0, 0), 1);

        controller.resolve_enemy_turn().unwrap();
        assert_eq!(controller.mode(), GameMode::GameOver);
        assert!(controller.encounter().is_none());
        assert!(controller.pending_enemy_turn().is_none());
    }

    #[test]
    fn failed_escape_costs_the_turn() {
        let mut controller = controller(ScriptedRng::constant(u32::MAX));
        into_first_fight(&mut controller);
        controller.resolve_enemy_turn().unwrap();

        for _ in 0..3 {
            controller.handle_input(InputEvent::Down).unwrap();
        }
        controller.handle_input(InputEvent::Confirm).unwrap();
        assert_eq!(controller.mode(), GameMode::Combat);
        assert!(controller.pending_enemy_turn().is_some());
    }

    #[test]
    fn successful_escape_moves_on_without_reward() {
        let mut controller = controller(ScriptedRng::constant(u32::MAX));
        into_first_fight(&mut controller);
        controller.resolve_enemy_turn().unwrap();
        controller.rng = Box::new(ScriptedRng::constant(0));

        for _ in 0..3 {
            controller.handle_input(InputEvent::Down).unwrap();
        }
        controller.handle_input(InputEvent::Confirm).unwrap();
        assert_eq!(controller.mode(), GameMode::Scenario);
        assert_eq!(controller.player().experience(), 0);
        assert!(controller.player().temporary_stats().is_zero());
        assert!(matches!(
            controller.scenario(),
            Some(Scenario::Narrative(node)) if node.id == "wandering_healer"
        ));
    }

    #[test]
    fn level_up_interposes_before_progress() {
        let mut controller = controller(ScriptedRng::constant(u32::MAX));
        controller.handle_input(InputEvent::Confirm).unwrap();
        controller.handle_input(InputEvent::Confirm).unwrap();
        controller.player.gain_experience(99);

        into_fight_from_shrine(&mut controller);
        // one-shot the wolf after its opening move
        controller.player.add_temporary(StatBlock::single(StatKind::Strength, 100));
        controller.resolve_enemy_turn().unwrap();
        controller.handle_input(InputEvent::Confirm).unwrap();

        assert_eq!(controller.mode(), GameMode::LevelUp);
        assert_eq!(controller.player().level(), 2);
        assert!(controller.player().temporary_stats().is_zero());

        // intelligence
        for _ in 0..3 {
            controller.handle_input(InputEvent::Down).unwrap();
        }
        for _ in 0..3 {
            controller.handle_input(InputEvent::Confirm).unwrap();
        }
        assert_eq!(controller.player().stat_points(), 0);
        assert_eq!(controller.player().base_stats().intelligence, 9);

        controller.handle_input(InputEvent::Down).unwrap();
        controller.handle_input(InputEvent::Confirm).unwrap();
        assert_eq!(controller.mode(), GameMode::Exploring);

        controller.handle_input(InputEvent::Confirm).unwrap();
        assert_eq!(controller.mode(), GameMode::Scenario);
        assert!(matches!(
            controller.scenario(),
            Some(Scenario::Narrative(node)) if node.id == "wandering_healer"
        ));
    }

    #[test]
    fn points_banked_mid_fight_are_spent_after_it() {
        let mut controller = controller(ScriptedRng::constant(u32::MAX));
        controller.handle_input(InputEvent::Confirm).unwrap();
        controller.handle_input(InputEvent::Confirm).unwrap();
        controller.player.gain_experience(60);
        controller.player.inventory_mut().add(&TOME_OF_INSIGHT).unwrap();

        into_fight_from_shrine(&mut controller);
        controller.resolve_enemy_turn().unwrap();

        // read the tome, the fourth item in the pack
        controller.handle_input(InputEvent::Down).unwrap();
        controller.handle_input(InputEvent::Down).unwrap();
        controller.handle_input(InputEvent::Confirm).unwrap();
        for _ in 0..3 {
            controller.handle_input(InputEvent::Down).unwrap();
        }
        controller.handle_input(InputEvent::Confirm).unwrap();
        assert_eq!(controller.player().level(), 2);
        assert!(controller.player().stat_points() > 0);
        controller.handle_input(InputEvent::Cancel).unwrap();
        assert_eq!(controller.mode(), GameMode::Combat);

        // the wolf's experience alone is not enough for level 3
        controller.player.add_temporary(StatBlock::single(StatKind::Strength, 100));
        controller.handle_input(InputEvent::Confirm).unwrap();
        assert!(controller.encounter().is_none());
        assert_eq!(controller.player().level(), 2);
        assert_eq!(controller.mode(), GameMode::LevelUp);
    }

    #[test]
    fn boss_refuses_escape_and_takes_the_turn() {
        let mut controller = controller(ScriptedRng::constant(u32::MAX));
        controller.handle_input(InputEvent::Confirm).unwrap();
        controller.player = Player::with_stats(StatBlock::new(60, 30, 5, 5), 500);
        controller.handle_input(InputEvent::Confirm).unwrap();

        // walk the light path up to the boss fight
        for _ in 0..100 {
            if controller.encounter().is_some_and(Encounter::is_boss) {
                break;
            }
            if controller.pending_enemy_turn().is_some() {
                controller.resolve_enemy_turn().unwrap();
            } else {
                controller.handle_input(InputEvent::Confirm).unwrap();
            }
        }
        assert!(controller.encounter().is_some_and(Encounter::is_boss));
        if controller.pending_enemy_turn().is_some() {
            controller.resolve_enemy_turn().unwrap();
        }

        // a zero roll would clear any escape chance
        controller.rng = Box::new(ScriptedRng::constant(0));
        for _ in 0..3 {
            controller.handle_input(InputEvent::Down).unwrap();
        }
        controller.handle_input(InputEvent::Confirm).unwrap();

        assert_eq!(controller.mode(), GameMode::Combat);
        assert!(controller.pending_enemy_turn().is_some());
        let encounter = controller.encounter().unwrap();
        assert!(encounter.is_boss());
        assert!(!encounter.escaped());
        assert_eq!(encounter.log().last(), Some("There is no escape!"));
        assert_eq!(
            encounter.enemy().health().current(),
            encounter.enemy().health().maximum()
        );
    }

    fn into_fight_from_shrine(controller: &mut GameController) {
        controller.handle_input(InputEvent::Confirm).unwrap(); // pray
        controller.handle_input(InputEvent::Confirm).unwrap(); // fight
        assert_eq!(controller.mode(), GameMode::Combat);
    }

    #[test]
    fn scenario_selection_is_bounded() {
        let mut controller = controller(ScriptedRng::constant(u32::MAX));
        controller.handle_input(InputEvent::Confirm).unwrap();

        controller.handle_input(InputEvent::Up).unwrap();
        assert_eq!(controller.selection(), 0);
        for _ in 0..5 {
            controller.handle_input(InputEvent::Down).unwrap();
        }
        // the crossroads has two choices
        assert_eq!(controller.selection(), 1);

        controller.handle_input(InputEvent::Confirm).unwrap();
        assert_eq!(controller.player().path(), Some(StoryPath::Shadow));
        assert_eq!(controller.selection(), 0);
    }

    #[test]
    fn snapshot_reflects_combat() {
        let mut controller = controller(ScriptedRng::constant(u32::MAX));
        into_first_fight(&mut controller);

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.mode, GameMode::Combat);
        assert!(snapshot.enemy_turn_pending);
        assert_eq!(snapshot.enemy.as_ref().map(|e| e.name.as_str()), Some("Dire Wolf"));
        assert_eq!(snapshot.options.len(), 4);
        assert_eq!(snapshot.combat_log.len(), 2);
        assert!(snapshot.messages.len() <= GameConfig::MESSAGE_LOG_CAPACITY);
    }
}
