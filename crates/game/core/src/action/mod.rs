//! Player actions.
//!
//! Every action is a small struct implementing [`ActionTransition`]. The engine
//! checks the action's [`TurnRule`], runs `pre_validate` against the untouched
//! state, and only then calls `apply`. Handlers must reject every illegal input
//! in `pre_validate`; `apply` assumes the checks passed.
//!
//! # Module Structure
//!
//! - `error`: [`ActionError`], the single failure type surfaced to players
//! - `session`: join, leave, start, roll
//! - `movement`: move between locations
//! - `inventory`: pick up and drop
//! - `combat`: attack
//! - `potion`: use a potion on one player or the whole location
//! - `interact`: tame a creature
mod combat;
pub mod error;
mod interact;
mod inventory;
mod movement;
mod potion;
mod session;

pub use combat::AttackAction;
pub use error::ActionError;
pub use interact::TameAction;
pub use inventory::{DropItemAction, PickUpAction};
pub use movement::MoveAction;
pub use potion::{PotionTarget, UsePotionAction};
pub use session::{JoinAction, LeaveAction, RollAction, StartGameAction};

use crate::env::GameEnv;
use crate::state::{GameState, Location, PlayerId};

/// How an action interacts with the turn scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnRule {
    /// No turn ownership needed and no turn consumed. Phase checks, if any,
    /// belong to the handler.
    Free,
    /// Caller must hold the turn in ACTION or EXTRA_ACTION; consumes the turn.
    Turn,
    /// Like [`TurnRule::Turn`] but forbidden during EXTRA_ACTION.
    PrimaryTurn,
}

impl TurnRule {
    pub const fn consumes_turn(self) -> bool {
        !matches!(self, TurnRule::Free)
    }
}

/// Defines how a concrete action validates and mutates game state.
pub trait ActionTransition {
    /// Verb phrase used in player-facing phase errors ("cannot {VERB} during ...").
    const VERB: &'static str;

    const RULE: TurnRule;

    /// Returns the player performing this action.
    fn actor(&self) -> &PlayerId;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        Ok(())
    }

    /// Applies the action and returns the message reported to the caller.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<String, ActionError>;
}

/// Every action a player can submit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "action", rename_all = "snake_case"))]
pub enum Action {
    Join(JoinAction),
    Leave(LeaveAction),
    StartGame(StartGameAction),
    Roll(RollAction),
    Move(MoveAction),
    PickUp(PickUpAction),
    DropItem(DropItemAction),
    Attack(AttackAction),
    UsePotion(UsePotionAction),
    Tame(TameAction),
}

impl Action {
    pub fn join(actor: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Action::Join(JoinAction::new(actor.into(), name))
    }

    pub fn leave(actor: impl Into<PlayerId>) -> Self {
        Action::Leave(LeaveAction::new(actor.into()))
    }

    pub fn start_game(actor: impl Into<PlayerId>) -> Self {
        Action::StartGame(StartGameAction::new(actor.into()))
    }

    pub fn roll(actor: impl Into<PlayerId>) -> Self {
        Action::Roll(RollAction::new(actor.into()))
    }

    pub fn move_to(actor: impl Into<PlayerId>, target: Location) -> Self {
        Action::Move(MoveAction::new(actor.into(), target))
    }

    pub fn actor(&self) -> &PlayerId {
        match self {
            Action::Join(action) => action.actor(),
            Action::Leave(action) => action.actor(),
            Action::StartGame(action) => action.actor(),
            Action::Roll(action) => action.actor(),
            Action::Move(action) => action.actor(),
            Action::PickUp(action) => action.actor(),
            Action::DropItem(action) => action.actor(),
            Action::Attack(action) => action.actor(),
            Action::UsePotion(action) => action.actor(),
            Action::Tame(action) => action.actor(),
        }
    }

    /// Wire name of the action.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Join(_) => "join",
            Action::Leave(_) => "leave",
            Action::StartGame(_) => "start_game",
            Action::Roll(_) => "roll",
            Action::Move(_) => "move",
            Action::PickUp(_) => "pick_up",
            Action::DropItem(_) => "drop_item",
            Action::Attack(_) => "attack",
            Action::UsePotion(_) => "use_potion",
            Action::Tame(_) => "tame",
        }
    }
}
