//! Cloneable façade for issuing commands to a session.
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{Action, ActionOutcome, GameSnapshot, GameState, PlayerId};

use super::errors::{Result, RuntimeError};
use crate::config::RuntimeConfig;
use crate::events::SessionEvent;
use crate::workers::{Command, SessionWorker};

/// Client-facing handle to one session.
#[derive(Clone)]
pub struct SessionHandle {
    id: Arc<str>,
    command_tx: mpsc::Sender<Command>,
    event_tx: broadcast::Sender<SessionEvent>,
}

impl SessionHandle {
    /// Creates a fresh session and spawns its worker on the current runtime.
    pub fn spawn(id: impl Into<String>, config: &RuntimeConfig) -> Self {
        let id: String = id.into();
        let seed = config.session_seed();
        let state = GameState::with_stock(&config.game_config, seed, config.stock.placements());

        let (command_tx, command_rx) = mpsc::channel(config.command_buffer_size);
        let (event_tx, _) = broadcast::channel(config.event_buffer_size);

        let worker = SessionWorker::new(
            id.clone(),
            state,
            config.game_config.clone(),
            command_rx,
            event_tx.clone(),
        );
        tokio::spawn(worker.run());
        tracing::info!(target: "runtime::session", session = %id, seed, "Session opened");

        Self {
            id: id.into(),
            command_tx,
            event_tx,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Execute an action. Rule violations come back as [`RuntimeError::Action`].
    pub async fn submit(&self, action: Action) -> Result<ActionOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Submit {
                action,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Remove a player whose connection closed. Returns whether they were
    /// seated and have now left.
    pub async fn disconnect(&self, player: PlayerId) -> Result<bool> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Disconnect {
                player,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Query the committed game state.
    pub async fn state(&self) -> Result<Arc<GameState>> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Snapshot { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Project the committed state for `observer` (`None` for the unfiltered view).
    pub async fn snapshot(&self, observer: Option<&PlayerId>) -> Result<GameSnapshot> {
        let state = self.state().await?;
        Ok(GameSnapshot::project(&state, observer))
    }

    /// Subscribe to the state published after every command.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_tx.subscribe()
    }
}

impl std::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHandle").field("id", &self.id).finish()
    }
}
