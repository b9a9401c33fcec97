//! Notifications published by session workers.
use std::sync::Arc;

use game_core::GameState;

/// Published after every command the worker processes, whether or not it
/// changed anything. Subscribers project the state per observer.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    StateChanged(Arc<GameState>),
}

impl SessionEvent {
    pub fn state(&self) -> &Arc<GameState> {
        match self {
            SessionEvent::StateChanged(state) => state,
        }
    }
}
