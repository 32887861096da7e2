//! Session worker that owns the authoritative [`GameController`].
//!
//! Receives commands from [`crate::RuntimeHandle`], applies them one at a
//! time, and fires scheduled enemy turns when their deadline passes. Every
//! state change is published on a watch channel.

use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{Instant, sleep_until};
use tracing::{debug, error, info};

use game_core::GameError;

use crate::api::Result;
use crate::controller::{GameController, GameSnapshot, InputEvent};

/// Commands that can be sent to the session worker
pub enum Command {
    /// Apply one input event and reply with the resulting snapshot.
    Input {
        event: InputEvent,
        reply: oneshot::Sender<Result<GameSnapshot>>,
    },
    /// Query the current snapshot (read-only).
    Snapshot { reply: oneshot::Sender<GameSnapshot> },
}

/// Background task that serializes all access to the controller.
pub struct SessionWorker {
    controller: GameController,
    command_rx: mpsc::Receiver<Command>,
    snapshot_tx: watch::Sender<GameSnapshot>,
    /// Wall-clock deadline of the scheduled enemy turn.
    deadline: Option<Instant>,
}

impl SessionWorker {
    pub fn new(
        controller: GameController,
        command_rx: mpsc::Receiver<Command>,
        snapshot_tx: watch::Sender<GameSnapshot>,
    ) -> Self {
        info!(
            mode = %controller.mode(),
            enemy_turn_delay_ms = controller.config().enemy_turn_delay_ms,
            "SessionWorker initialized"
        );

        Self {
            controller,
            command_rx,
            snapshot_tx,
            deadline: None,
        }
    }

    /// Main worker loop. Exits once every command sender is dropped.
    pub async fn run(mut self) {
        loop {
            let deadline = self.deadline;
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                _ = wait_until(deadline) => self.fire_enemy_turn(),
            }
        }
        debug!("SessionWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Input { event, reply } => {
                let result = self
                    .controller
                    .handle_input(event)
                    .map(|()| self.controller.snapshot())
                    .map_err(Into::into);
                self.sync_deadline();
                self.publish();
                if reply.send(result).is_err() {
                    debug!("Input reply channel closed (caller dropped)");
                }
            }
            Command::Snapshot { reply } => {
                if reply.send(self.controller.snapshot()).is_err() {
                    debug!("Snapshot reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn fire_enemy_turn(&mut self) {
        self.deadline = None;
        match self.controller.resolve_enemy_turn() {
            Ok(true) => debug!(mode = %self.controller.mode(), "scheduled enemy turn fired"),
            Ok(false) => debug!("scheduled enemy turn had nothing to resolve"),
            Err(error) => error!(
                %error,
                code = error.error_code(),
                severity = error.severity().as_str(),
                "enemy turn failed"
            ),
        }
        self.sync_deadline();
        self.publish();
    }

    /// Starts the timer when the controller schedules an enemy turn and
    /// drops it once nothing is pending.
    fn sync_deadline(&mut self) {
        match (self.controller.pending_enemy_turn(), self.deadline) {
            (Some(delay), None) => self.deadline = Some(Instant::now() + delay),
            (None, Some(_)) => self.deadline = None,
            _ => {}
        }
    }

    fn publish(&self) {
        // no subscribers is fine; the handle keeps one receiver alive anyway
        self.snapshot_tx.send_replace(self.controller.snapshot());
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
