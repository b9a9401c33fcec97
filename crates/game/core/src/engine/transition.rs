//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionError, ActionTransition, TurnRule};
use crate::env::GameEnv;
use crate::state::GameState;

use super::GameEngine;

/// Runs one transition through the pipeline.
///
/// Phases:
/// 1. turn check against the transition's [`TurnRule`]
/// 2. `pre_validate` - check preconditions before mutation
/// 3. `apply` - mutate the game state and produce the caller's message
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<(TurnRule, String), ActionError>
where
    T: ActionTransition,
{
    GameEngine::validate_turn(state, transition.actor(), T::RULE, T::VERB)?;
    transition.pre_validate(state, env)?;
    let message = transition.apply(state, env)?;
    Ok((T::RULE, message))
}

/// Routes an action to its transition.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<(TurnRule, String), ActionError> {
    match action {
        Action::Join(transition) => drive_transition(transition, state, env),
        Action::Leave(transition) => drive_transition(transition, state, env),
        Action::StartGame(transition) => drive_transition(transition, state, env),
        Action::Roll(transition) => drive_transition(transition, state, env),
        Action::Move(transition) => drive_transition(transition, state, env),
        Action::PickUp(transition) => drive_transition(transition, state, env),
        Action::DropItem(transition) => drive_transition(transition, state, env),
        Action::Attack(transition) => drive_transition(transition, state, env),
        Action::UsePotion(transition) => drive_transition(transition, state, env),
        Action::Tame(transition) => drive_transition(transition, state, env),
    }
}
