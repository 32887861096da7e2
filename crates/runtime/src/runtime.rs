//! High-level runtime orchestrator.
//!
//! The runtime owns the session worker, wires up the command and snapshot
//! channels, and exposes a builder-based API for clients to drive the game.

use std::path::Path;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::info;

use game_content::ConfigLoader;
use game_core::{GameConfig, RngOracle};

use crate::api::{Result, RuntimeHandle};
use crate::controller::GameController;
use crate::oracle::OracleBundle;
use crate::workers::{Command, SessionWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub command_buffer_size: usize,
}

impl RuntimeConfig {
    /// Reads the game settings from a TOML file, keeping the default
    /// channel sizing.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let game_config = ConfigLoader::load(path.as_ref())?;
        Ok(Self {
            game_config,
            ..Self::default()
        })
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that hosts one game session
///
/// Design: Runtime owns the worker and coordinates shutdown.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    session_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once every handle clone has been dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.session_worker_handle
            .await
            .map_err(crate::api::RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleBundle>,
    rng: Option<Box<dyn RngOracle>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            rng: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the content oracles. Defaults to the built-in content.
    pub fn oracles(mut self, oracles: OracleBundle) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Inject the random source. Defaults to a PCG generator seeded from the
    /// config (or OS entropy when no seed is configured).
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Build the runtime and spawn its session worker
    pub async fn build(self) -> Result<Runtime> {
        let oracles = self.oracles.unwrap_or_default();
        let game_config = self.config.game_config;

        let controller = match self.rng {
            Some(rng) => GameController::new(oracles, game_config, rng),
            None => GameController::seeded(oracles, game_config),
        };

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let (snapshot_tx, snapshot_rx) = watch::channel(controller.snapshot());

        let handle = RuntimeHandle::new(command_tx, snapshot_rx);
        let session_worker = SessionWorker::new(controller, command_rx, snapshot_tx);

        let session_worker_handle = tokio::spawn(async move {
            session_worker.run().await;
        });
        info!("runtime started");

        Ok(Runtime {
            handle,
            session_worker_handle,
        })
    }
}
