use crate::action::{ActionError, ActionTransition, TurnRule};
use crate::env::GameEnv;
use crate::state::{GameState, Location, PlayerId};

/// Relocates the actor to one of the fixed locations.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub actor: PlayerId,
    pub target: Location,
}

impl MoveAction {
    pub fn new(actor: PlayerId, target: Location) -> Self {
        Self { actor, target }
    }
}

impl ActionTransition for MoveAction {
    const VERB: &'static str = "move";
    const RULE: TurnRule = TurnRule::Turn;

    fn actor(&self) -> &PlayerId {
        &self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        let player = state.player(&self.actor)?;
        if player.location.is_decisive() && self.target != player.location {
            return Err(ActionError::IrreversibleZone);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<String, ActionError> {
        let player = state.player_mut(&self.actor)?;
        let origin = player.location;
        player.location = self.target;
        let name = player.name.clone();

        if origin == self.target {
            state.log(format!("{name} stays in the {origin}."));
        } else {
            state.log(format!("{name} moved from the {origin} to the {}.", self.target));
        }
        Ok(format!("Moved to the {}.", self.target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::PcgRng;
    use crate::state::PlayerState;

    #[test]
    fn the_showdown_is_one_way() {
        let config = GameConfig::default();
        let env = GameEnv::new(&config, &PcgRng);
        let mut state = GameState::new(&config, 0);
        let id = PlayerId::from("a");
        state.players.push(PlayerState::new(id.clone(), "Ann", 12));

        let enter = MoveAction::new(id.clone(), Location::Showdown);
        enter.pre_validate(&state, &env).unwrap();
        enter.apply(&mut state, &env).unwrap();

        for target in Location::all().filter(|l| !l.is_decisive()) {
            assert_eq!(
                MoveAction::new(id.clone(), target).pre_validate(&state, &env),
                Err(ActionError::IrreversibleZone)
            );
        }
        assert!(enter.pre_validate(&state, &env).is_ok());
    }
}
