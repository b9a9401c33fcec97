use crate::action::{ActionError, ActionTransition, TurnRule};
use crate::env::{GameEnv, ItemKind};
use crate::state::{GameState, Item, PlayerId, StatusKind};

/// One taming attempt at the creature in the actor's location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TameAction {
    pub actor: PlayerId,
}

impl TameAction {
    pub fn new(actor: PlayerId) -> Self {
        Self { actor }
    }

    fn creature<'s>(&self, state: &'s GameState) -> Result<&'s Item, ActionError> {
        let player = state.player(&self.actor)?;
        state
            .world
            .find_on_ground(player.location, |item| {
                matches!(item.kind, ItemKind::Creature { .. })
            })
            .ok_or_else(|| {
                ActionError::missing(format!("there is no creature in the {}", player.location))
            })
    }
}

impl ActionTransition for TameAction {
    const VERB: &'static str = "tame";
    const RULE: TurnRule = TurnRule::Turn;

    fn actor(&self) -> &PlayerId {
        &self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        if state.player(&self.actor)?.has_status(StatusKind::Mounted) {
            return Err(ActionError::invalid_target("you are already mounted"));
        }
        self.creature(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<String, ActionError> {
        let creature = self.creature(state)?;
        let (creature_id, creature_name) = (creature.id, creature.name.clone());
        let threshold = match creature.kind {
            ItemKind::Creature { capture_threshold } => capture_threshold.max(1),
            _ => 1,
        };

        let player = state.player_mut(&self.actor)?;
        player.taming_progress += 1;
        let progress = player.taming_progress;
        let location = player.location;
        let name = player.name.clone();

        if progress < threshold {
            state.log(format!(
                "{name} tries to tame the {creature_name} ({progress}/{threshold})."
            ));
            return Ok(format!(
                "The {creature_name} is warming up to you ({progress}/{threshold})."
            ));
        }

        player.status.insert(StatusKind::Mounted);
        state.world.take_from_ground(location, creature_id);
        state.log(format!("{name} tamed the {creature_name} and rides it."));
        Ok(format!("You tamed the {creature_name}!"))
    }
}
