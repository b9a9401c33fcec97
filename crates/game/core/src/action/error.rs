//! Action execution errors.
//!
//! Every rule violation is recoverable: the engine reports it and leaves the
//! state untouched. The `Display` text is sent to the player verbatim.

use crate::env::ItemSlot;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Phase, PlayerId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// Action attempted outside the phase that permits it.
    #[error("cannot {action} during the {} phase", .phase.as_str())]
    WrongPhase { action: &'static str, phase: Phase },

    /// Caller does not hold the turn.
    #[error("it is not your turn")]
    NotYourTurn { actor: PlayerId },

    /// Player id does not resolve.
    #[error("player {0} not found")]
    NotFound(PlayerId),

    /// Location, player, or item reference is unusable for this action.
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    /// Picking up would exceed the per-slot limit.
    #[error("cannot carry more than {limit} {} item(s)", .slot.as_str())]
    CapacityExceeded { slot: ItemSlot, limit: usize },

    /// Tried to leave the decisive location.
    #[error("the Showdown cannot be left once entered")]
    IrreversibleZone,

    /// Melee needs a shared location; ranged is blocked from or into the Showdown.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// No ammunition, potion, or creature available.
    #[error("missing resource: {0}")]
    MissingResource(String),

    /// Duplicate roll within a round.
    #[error("already acted: {0}")]
    AlreadyActed(String),

    /// Not enough players to start.
    #[error("need at least {required} players to start ({present} present)")]
    InsufficientPlayers { required: usize, present: usize },
}

impl ActionError {
    pub fn invalid_target(reason: impl Into<String>) -> Self {
        Self::InvalidTarget(reason.into())
    }

    pub fn out_of_range(reason: impl Into<String>) -> Self {
        Self::OutOfRange(reason.into())
    }

    pub fn missing(reason: impl Into<String>) -> Self {
        Self::MissingResource(reason.into())
    }
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            WrongPhase { .. } | NotYourTurn { .. } | AlreadyActed(_) => ErrorSeverity::Recoverable,
            OutOfRange(_) | MissingResource(_) | CapacityExceeded { .. } => {
                ErrorSeverity::Recoverable
            }
            InsufficientPlayers { .. } => ErrorSeverity::Recoverable,
            NotFound(_) | InvalidTarget(_) | IrreversibleZone => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            WrongPhase { .. } => "ACTION_WRONG_PHASE",
            NotYourTurn { .. } => "ACTION_NOT_YOUR_TURN",
            NotFound(_) => "ACTION_NOT_FOUND",
            InvalidTarget(_) => "ACTION_INVALID_TARGET",
            CapacityExceeded { .. } => "ACTION_CAPACITY_EXCEEDED",
            IrreversibleZone => "ACTION_IRREVERSIBLE_ZONE",
            OutOfRange(_) => "ACTION_OUT_OF_RANGE",
            MissingResource(_) => "ACTION_MISSING_RESOURCE",
            AlreadyActed(_) => "ACTION_ALREADY_ACTED",
            InsufficientPlayers { .. } => "ACTION_INSUFFICIENT_PLAYERS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_player_facing() {
        let err = ActionError::WrongPhase {
            action: "attack",
            phase: Phase::ExtraAction,
        };
        assert_eq!(err.to_string(), "cannot attack during the EXTRA_ACTION phase");

        let err = ActionError::CapacityExceeded {
            slot: ItemSlot::MainHand,
            limit: 1,
        };
        assert_eq!(err.to_string(), "cannot carry more than 1 main_hand item(s)");
        assert_eq!(err.error_code(), "ACTION_CAPACITY_EXCEEDED");
    }
}
