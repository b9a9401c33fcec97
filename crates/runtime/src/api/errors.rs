//! Unified error types surfaced by the runtime API.
use std::path::PathBuf;

use thiserror::Error;
use tokio::sync::oneshot;

use game_core::ActionError;

use crate::protocol::ProtocolError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The game rejected the action; the message goes to the player verbatim.
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A handler panicked. The staged state was discarded.
    #[error("internal error while handling {action}")]
    HandlerPanicked { action: &'static str },

    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("failed to load {what} from {}: {reason}", .path.display())]
    Content {
        what: &'static str,
        path: PathBuf,
        reason: String,
    },
}

impl RuntimeError {
    /// Whether the failure is a normal rule rejection rather than a fault.
    pub fn is_rejection(&self) -> bool {
        matches!(self, RuntimeError::Action(_) | RuntimeError::Protocol(_))
    }
}
