//! Turn scheduling and action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! mutation, whether a player action or end-of-round settlement, flows through
//! it so that turn ownership, initiative, and phase changes stay consistent.

mod settlement;
mod transition;
mod turns;

use crate::action::{Action, ActionError, TurnRule};
use crate::env::GameEnv;
use crate::state::{GameState, Phase, PlayerId};

/// Result of a committed action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    /// Message for the acting player.
    pub message: String,
    /// Phase after the scheduler caught up with the action.
    pub phase: Phase,
}

/// Game engine that validates actions, applies them, and drives the round.
///
/// Pipeline for every action: turn check → `pre_validate` → `apply` →
/// scheduler reconciliation. A failure at any step before `apply` leaves the
/// state untouched.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Executes an action and advances the scheduler as needed.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
    ) -> Result<ActionOutcome, ActionError> {
        let before = self.turn_marker();

        let (rule, message) = transition::execute_transition(action, self.state, &env)?;

        self.state.turn.nonce += 1;

        if rule.consumes_turn() {
            self.state.turn.cursor += 1;
        }
        self.reconcile(&env);
        self.announce_turn(before);

        Ok(ActionOutcome {
            message,
            phase: self.state.turn.phase,
        })
    }

    /// Checks that the acting player may take an action under `rule` now.
    pub(crate) fn validate_turn(
        state: &GameState,
        actor: &PlayerId,
        rule: TurnRule,
        verb: &'static str,
    ) -> Result<(), ActionError> {
        let phase = state.phase();
        match rule {
            TurnRule::Free => return Ok(()),
            TurnRule::Turn if !phase.is_action_phase() => {}
            TurnRule::PrimaryTurn if phase != Phase::Action => {}
            _ => {
                return match state.turn.current_actor() {
                    Some(current) if current == actor => Ok(()),
                    _ => Err(ActionError::NotYourTurn {
                        actor: actor.clone(),
                    }),
                };
            }
        }
        Err(ActionError::WrongPhase {
            action: verb,
            phase,
        })
    }

    /// Brings the scheduler in line with the state after an action: computes
    /// initiative once everyone rolled, and moves the cursor past players who
    /// can no longer act.
    fn reconcile(&mut self, env: &GameEnv<'_>) {
        match self.state.turn.phase {
            Phase::Roll if self.everyone_rolled() => {
                self.compute_initiative(env.config());
                self.settle_cursor(env);
            }
            Phase::Action | Phase::ExtraAction => self.settle_cursor(env),
            _ => {}
        }
    }

    fn turn_marker(&self) -> (Phase, Option<PlayerId>) {
        (self.state.turn.phase, self.current_actor().cloned())
    }

    fn announce_turn(&mut self, before: (Phase, Option<PlayerId>)) {
        let after = self.turn_marker();
        if after == before {
            return;
        }
        if let (_, Some(actor)) = after {
            let name = self.state.name_of(&actor);
            self.state.log(format!("It is {name}'s turn."));
        }
    }
}
