//! Moving items between the ground and a player's inventory.
use crate::action::{ActionError, ActionTransition, TurnRule};
use crate::env::{GameEnv, ItemSlot};
use crate::state::{GameState, ItemId, PlayerId};

/// Takes an item from the ground pile at the actor's location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickUpAction {
    pub actor: PlayerId,
    pub item: ItemId,
}

impl PickUpAction {
    pub fn new(actor: PlayerId, item: ItemId) -> Self {
        Self { actor, item }
    }
}

impl ActionTransition for PickUpAction {
    const VERB: &'static str = "pick up items";
    const RULE: TurnRule = TurnRule::Turn;

    fn actor(&self) -> &PlayerId {
        &self.actor
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
        let player = state.player(&self.actor)?;
        let item = state
            .world
            .ground_item(player.location, self.item)
            .ok_or_else(|| {
                ActionError::invalid_target(format!(
                    "item {} is not on the ground in the {}",
                    self.item, player.location
                ))
            })?;

        let slot = item.slot();
        if slot == ItemSlot::Creature {
            return Err(ActionError::invalid_target(format!(
                "{} cannot be carried, only tamed",
                item.name
            )));
        }
        if state.would_exceed_capacity(&self.actor, item, env.config())? {
            let limit = env.config().capacity.limit_for(slot).unwrap_or_default();
            return Err(ActionError::CapacityExceeded { slot, limit });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<String, ActionError> {
        let player = state.player(&self.actor)?;
        let location = player.location;
        let name = player.name.clone();

        let item = state
            .world
            .take_from_ground(location, self.item)
            .ok_or_else(|| ActionError::invalid_target(format!("item {} vanished", self.item)))?;
        let item_name = item.name.clone();
        state.player_mut(&self.actor)?.inventory.push(item);

        state.log(format!("{name} picked up the {item_name}."));
        Ok(format!("Picked up the {item_name}."))
    }
}

/// Puts an owned item back on the ground. Housekeeping: needs no turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropItemAction {
    pub actor: PlayerId,
    pub item: ItemId,
}

impl DropItemAction {
    pub fn new(actor: PlayerId, item: ItemId) -> Self {
        Self { actor, item }
    }
}

impl ActionTransition for DropItemAction {
    const VERB: &'static str = "drop items";
    const RULE: TurnRule = TurnRule::Free;

    fn actor(&self) -> &PlayerId {
        &self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        let player = state.player(&self.actor)?;
        if player.inventory.get(self.item).is_none() {
            return Err(ActionError::invalid_target(format!(
                "you do not carry item {}",
                self.item
            )));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<String, ActionError> {
        let player = state.player_mut(&self.actor)?;
        let location = player.location;
        let name = player.name.clone();
        let item = player
            .inventory
            .remove(self.item)
            .ok_or_else(|| ActionError::invalid_target(format!("item {} vanished", self.item)))?;

        let item_name = item.name.clone();
        state.world.put_on_ground(location, item);
        state.log(format!("{name} dropped the {item_name} in the {location}."));
        Ok(format!("Dropped the {item_name}."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{ItemDefinition, PcgRng};
    use crate::state::{Location, PlayerState};

    fn armory() -> (GameState, PlayerId, Vec<ItemId>) {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 0);
        let id = PlayerId::from("a");
        let mut player = PlayerState::new(id.clone(), "Ann", 12);
        player.location = Location::Armory;
        state.players.push(player);
        let items = vec![
            state.spawn_item(Location::Armory, &ItemDefinition::weapon("Dagger", 3, 3)),
            state.spawn_item(Location::Armory, &ItemDefinition::weapon("Greatsword", 5, 2)),
            state.spawn_item(Location::Menagerie, &ItemDefinition::creature("Wolf", 2)),
        ];
        (state, id, items)
    }

    #[test]
    fn second_main_hand_item_exceeds_capacity() {
        let config = GameConfig::default();
        let env = GameEnv::new(&config, &PcgRng);
        let (mut state, id, items) = armory();

        let first = PickUpAction::new(id.clone(), items[0]);
        first.pre_validate(&state, &env).unwrap();
        first.apply(&mut state, &env).unwrap();

        assert_eq!(
            PickUpAction::new(id.clone(), items[1]).pre_validate(&state, &env),
            Err(ActionError::CapacityExceeded {
                slot: ItemSlot::MainHand,
                limit: 1
            })
        );
        assert_eq!(state.player(&id).unwrap().inventory.count(ItemSlot::MainHand), 1);
    }

    #[test]
    fn items_elsewhere_and_creatures_are_not_pickable() {
        let config = GameConfig::default();
        let env = GameEnv::new(&config, &PcgRng);
        let (mut state, id, items) = armory();

        let wolf = PickUpAction::new(id.clone(), items[2]);
        assert!(matches!(
            wolf.pre_validate(&state, &env),
            Err(ActionError::InvalidTarget(_))
        ));

        state.player_mut(&id).unwrap().location = Location::Menagerie;
        assert!(matches!(
            wolf.pre_validate(&state, &env),
            Err(ActionError::InvalidTarget(reason)) if reason.contains("only tamed")
        ));
    }

    #[test]
    fn dropping_returns_the_item_to_the_current_pile() {
        let config = GameConfig::default();
        let env = GameEnv::new(&config, &PcgRng);
        let (mut state, id, items) = armory();
        PickUpAction::new(id.clone(), items[0])
            .apply(&mut state, &env)
            .unwrap();
        state.player_mut(&id).unwrap().location = Location::Apothecary;

        let drop = DropItemAction::new(id.clone(), items[0]);
        drop.pre_validate(&state, &env).unwrap();
        drop.apply(&mut state, &env).unwrap();

        assert!(state.player(&id).unwrap().inventory.is_empty());
        assert_eq!(state.world.ground(Location::Apothecary)[0].id, items[0]);
        assert!(drop.pre_validate(&state, &env).is_err());
    }
}
