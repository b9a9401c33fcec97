//! Session lifecycle: join, leave, start, and initiative rolls.
use crate::action::{ActionError, ActionTransition, TurnRule};
use crate::env::{GameEnv, compute_seed};
use crate::state::{GameState, Phase, PlayerId, PlayerState};

/// Suffix attempts before falling back to the player id.
const MAX_RENAME_ATTEMPTS: u32 = 128;

/// Context tag mixed into dice seeds for name suffixes.
const RENAME_CONTEXT: u32 = 0x6e61_6d65;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JoinAction {
    pub actor: PlayerId,
    pub name: String,
}

impl JoinAction {
    pub fn new(actor: PlayerId, name: impl Into<String>) -> Self {
        Self {
            actor,
            name: name.into(),
        }
    }

    /// Resolves a display name that no other player holds.
    fn unique_name(&self, state: &GameState, env: &GameEnv<'_>) -> String {
        let base = self.name.trim();
        let taken = |candidate: &str| state.players.iter().any(|p| p.name == candidate);
        if !taken(base) {
            return base.to_owned();
        }

        let slot = state.players.len() as u32;
        for attempt in 0..MAX_RENAME_ATTEMPTS {
            let seed = compute_seed(state.game_seed, state.turn.nonce, slot, RENAME_CONTEXT + attempt);
            let suffix = env.rng().range(seed, 10, 99);
            let candidate = format!("{base}_{suffix}");
            if !taken(&candidate) {
                return candidate;
            }
        }
        format!("{base}_{}", self.actor)
    }
}

impl ActionTransition for JoinAction {
    const VERB: &'static str = "join";
    const RULE: TurnRule = TurnRule::Free;

    fn actor(&self) -> &PlayerId {
        &self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        if state.phase() != Phase::Waiting {
            return Err(ActionError::WrongPhase {
                action: Self::VERB,
                phase: state.phase(),
            });
        }
        if self.name.trim().is_empty() && !state.contains_player(&self.actor) {
            return Err(ActionError::invalid_target("name must not be empty"));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<String, ActionError> {
        if state.contains_player(&self.actor) {
            return Ok("Welcome back.".to_owned());
        }

        let name = self.unique_name(state, env);
        state.players.push(PlayerState::new(
            self.actor.clone(),
            name.clone(),
            env.config().max_hp,
        ));
        state.log(format!("{name} joined the game."));
        Ok(format!("Joined as {name}."))
    }
}

/// Emitted by the transport when a connection closes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeaveAction {
    pub actor: PlayerId,
}

impl LeaveAction {
    pub fn new(actor: PlayerId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for LeaveAction {
    const VERB: &'static str = "leave";
    const RULE: TurnRule = TurnRule::Free;

    fn actor(&self) -> &PlayerId {
        &self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        state.player(&self.actor).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<String, ActionError> {
        let index = state
            .player_index(&self.actor)
            .ok_or_else(|| ActionError::NotFound(self.actor.clone()))?;
        let mut player = state.players.remove(index);

        let location = player.location;
        for item in player.inventory.take_all() {
            state.world.put_on_ground(location, item);
        }

        let turn = &mut state.turn;
        let active_phase = turn.phase;
        for (phase, order) in [
            (Phase::Action, &mut turn.turn_order),
            (Phase::ExtraAction, &mut turn.extra_order),
        ] {
            while let Some(position) = order.iter().position(|id| id == &self.actor) {
                order.remove(position);
                if phase == active_phase && position < turn.cursor {
                    turn.cursor -= 1;
                }
            }
        }

        state.log(format!("{} left the game.", player.name));
        Ok("Left the game.".to_owned())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartGameAction {
    pub actor: PlayerId,
}

impl StartGameAction {
    pub fn new(actor: PlayerId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for StartGameAction {
    const VERB: &'static str = "start the game";
    const RULE: TurnRule = TurnRule::Free;

    fn actor(&self) -> &PlayerId {
        &self.actor
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
        if state.phase() != Phase::Waiting {
            return Err(ActionError::WrongPhase {
                action: Self::VERB,
                phase: state.phase(),
            });
        }
        let required = env.config().min_players;
        let present = state.players.len();
        if present < required {
            return Err(ActionError::InsufficientPlayers { required, present });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<String, ActionError> {
        state.turn.phase = Phase::Roll;
        state.turn.round = 1;
        state.log("The game has started. Everyone roll for initiative!");
        Ok("Game started.".to_owned())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollAction {
    pub actor: PlayerId,
}

impl RollAction {
    pub fn new(actor: PlayerId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for RollAction {
    const VERB: &'static str = "roll";
    const RULE: TurnRule = TurnRule::Free;

    fn actor(&self) -> &PlayerId {
        &self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        if state.phase() != Phase::Roll {
            return Err(ActionError::WrongPhase {
                action: Self::VERB,
                phase: state.phase(),
            });
        }
        let player = state.player(&self.actor)?;
        if !player.alive {
            return Err(ActionError::invalid_target("dead players cannot roll"));
        }
        if player.has_rolled() {
            return Err(ActionError::AlreadyActed(format!(
                "you already rolled {} this round",
                player.roll
            )));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<String, ActionError> {
        let slot = state
            .player_index(&self.actor)
            .ok_or_else(|| ActionError::NotFound(self.actor.clone()))? as u32;
        let seed = compute_seed(state.game_seed, state.turn.nonce, slot, state.turn.round);
        let face = env.rng().roll_die(seed, env.config().die_sides);

        let player = state.player_mut(&self.actor)?;
        player.roll = face;
        let name = player.name.clone();
        state.log(format!("{name} rolled a {face}."));
        Ok(format!("You rolled a {face}."))
    }
}
