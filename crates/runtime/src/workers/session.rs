//! Session worker that owns the authoritative [`game_core::GameState`].
//!
//! Receives commands from [`SessionHandle`](crate::SessionHandle), executes
//! them one at a time via [`GameEngine`], and publishes the committed state
//! after each one.
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, error, info, warn};

use game_core::{
    Action, ActionOutcome, GameConfig, GameEngine, GameEnv, GameError, GameState, PcgRng, PlayerId,
};

use crate::api::{Result, RuntimeError};
use crate::events::SessionEvent;

/// Commands that can be sent to the session worker.
pub enum Command {
    /// Execute a player action.
    Submit {
        action: Action,
        reply: oneshot::Sender<Result<ActionOutcome>>,
    },
    /// The player's connection closed. Replies whether they were seated.
    Disconnect {
        player: PlayerId,
        reply: oneshot::Sender<bool>,
    },
    /// Read the committed state.
    Snapshot { reply: oneshot::Sender<Arc<GameState>> },
}

/// Background task that serializes every mutation of one session.
pub struct SessionWorker {
    session: String,
    state: Arc<GameState>,
    config: GameConfig,
    command_rx: mpsc::Receiver<Command>,
    event_tx: broadcast::Sender<SessionEvent>,
}

impl SessionWorker {
    pub fn new(
        session: String,
        state: GameState,
        config: GameConfig,
        command_rx: mpsc::Receiver<Command>,
        event_tx: broadcast::Sender<SessionEvent>,
    ) -> Self {
        Self {
            session,
            state: Arc::new(state),
            config,
            command_rx,
            event_tx,
        }
    }

    /// Main worker loop. Ends once every handle is dropped.
    pub async fn run(mut self) {
        info!(target: "runtime::worker", session = %self.session, "Session worker started");
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        info!(target: "runtime::worker", session = %self.session, "Session worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Submit { action, reply } => {
                let result = self.execute(&action);
                self.publish();
                let _ = reply.send(result);
            }
            Command::Disconnect { player, reply } => {
                let removed = self.state.contains_player(&player)
                    && match self.execute(&Action::leave(player.clone())) {
                        Ok(_) => true,
                        Err(err) => {
                            warn!(
                                target: "runtime::worker",
                                session = %self.session,
                                player = %player,
                                error = %err,
                                "Disconnected player could not leave"
                            );
                            false
                        }
                    };
                self.publish();
                let _ = reply.send(removed);
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(Arc::clone(&self.state));
            }
        }
    }

    /// Runs the action on a staged copy and commits only on success.
    fn execute(&mut self, action: &Action) -> Result<ActionOutcome> {
        let rng = PcgRng;
        let env = GameEnv::new(&self.config, &rng);
        let mut staged = GameState::clone(&self.state);

        let result = catch_unwind(AssertUnwindSafe(|| {
            GameEngine::new(&mut staged).execute(env, action)
        }));

        match result {
            Ok(Ok(outcome)) => {
                self.state = Arc::new(staged);
                debug!(
                    target: "runtime::worker",
                    session = %self.session,
                    player = %action.actor(),
                    action = action.as_snake_case(),
                    phase = outcome.phase.as_str(),
                    "Action committed"
                );
                Ok(outcome)
            }
            Ok(Err(rejection)) => {
                debug!(
                    target: "runtime::worker",
                    session = %self.session,
                    player = %action.actor(),
                    action = action.as_snake_case(),
                    code = rejection.error_code(),
                    severity = rejection.severity().as_str(),
                    error = %rejection,
                    "Action rejected"
                );
                Err(rejection.into())
            }
            Err(_) => {
                error!(
                    target: "runtime::worker",
                    session = %self.session,
                    player = %action.actor(),
                    action = ?action,
                    "Handler panicked; staged state discarded"
                );
                Err(RuntimeError::HandlerPanicked {
                    action: action.as_snake_case(),
                })
            }
        }
    }

    fn publish(&self) {
        // No subscribers is normal between connections.
        let _ = self
            .event_tx
            .send(SessionEvent::StateChanged(Arc::clone(&self.state)));
    }
}
