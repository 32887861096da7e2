//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! feeding input to the session and reading back snapshots.
use tokio::sync::{mpsc, oneshot, watch};

use super::errors::{Result, RuntimeError};
use crate::controller::{GameSnapshot, InputEvent};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    snapshot_rx: watch::Receiver<GameSnapshot>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        snapshot_rx: watch::Receiver<GameSnapshot>,
    ) -> Self {
        Self {
            command_tx,
            snapshot_rx,
        }
    }

    /// Feeds one input event to the session and returns the resulting view.
    ///
    /// Inputs that the current mode ignores still succeed; the snapshot is
    /// simply unchanged.
    pub async fn send_input(&self, event: InputEvent) -> Result<GameSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Input {
                event,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Query the current view (read-only snapshot)
    pub async fn snapshot(&self) -> Result<GameSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Snapshot { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Watches every published snapshot, including ones produced by enemy
    /// turns that resolve without any input.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut views = handle.subscribe();
    /// while views.changed().await.is_ok() {
    ///     render(&views.borrow_and_update());
    /// }
    /// ```
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.snapshot_rx.clone()
    }
}
