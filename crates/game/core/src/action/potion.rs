use crate::action::{ActionError, ActionTransition, TurnRule};
use crate::env::{GameEnv, ItemKind, PotionEffect};
use crate::state::{GameState, ItemId, PlayerId, StatusKind};

/// Who a potion affects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PotionTarget {
    /// One player anywhere on the map.
    Player(PlayerId),
    /// Every living player at the user's location, the user included.
    Location,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsePotionAction {
    pub actor: PlayerId,
    pub potion: ItemId,
    pub target: PotionTarget,
}

impl UsePotionAction {
    pub fn new(actor: PlayerId, potion: ItemId, target: PotionTarget) -> Self {
        Self {
            actor,
            potion,
            target,
        }
    }

    /// Drinks the potion yourself.
    pub fn on_self(actor: PlayerId, potion: ItemId) -> Self {
        let target = PotionTarget::Player(actor.clone());
        Self::new(actor, potion, target)
    }

    fn effect(&self, state: &GameState) -> Result<PotionEffect, ActionError> {
        let user = state.player(&self.actor)?;
        let item = user
            .inventory
            .get(self.potion)
            .ok_or_else(|| ActionError::missing(format!("you do not carry potion {}", self.potion)))?;
        match item.kind {
            ItemKind::Potion { effect, .. } => Ok(effect),
            _ => Err(ActionError::invalid_target(format!(
                "the {} is not a potion",
                item.name
            ))),
        }
    }

    fn targets(&self, state: &GameState) -> Result<Vec<PlayerId>, ActionError> {
        match &self.target {
            PotionTarget::Player(id) => Ok(vec![id.clone()]),
            PotionTarget::Location => {
                let location = state.player(&self.actor)?.location;
                Ok(state
                    .living_players()
                    .filter(|player| player.location == location)
                    .map(|player| player.id.clone())
                    .collect())
            }
        }
    }
}

impl ActionTransition for UsePotionAction {
    const VERB: &'static str = "use potions";
    const RULE: TurnRule = TurnRule::PrimaryTurn;

    fn actor(&self) -> &PlayerId {
        &self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        self.effect(state)?;
        if let PotionTarget::Player(id) = &self.target {
            let target = state.player(id)?;
            if !target.alive {
                return Err(ActionError::invalid_target(format!(
                    "{} is already dead",
                    target.name
                )));
            }
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<String, ActionError> {
        let config = env.config();
        let effect = self.effect(state)?;
        let targets = self.targets(state)?;
        let user_name = state.name_of(&self.actor);

        let user = state.player_mut(&self.actor)?;
        let potion_name = user
            .inventory
            .get(self.potion)
            .map(|item| item.name.clone())
            .unwrap_or_default();
        let used_up = match effect {
            PotionEffect::Healing => user
                .inventory
                .get_mut(self.potion)
                .and_then(|item| item.spend_charges(config.potion_charge_cost))
                .is_none_or(|left| left == 0),
            _ => true,
        };
        if used_up {
            user.inventory.remove(self.potion);
        }

        let mut names = Vec::with_capacity(targets.len());
        for id in &targets {
            let target = state.player_mut(id)?;
            match effect {
                PotionEffect::Healing => {
                    target.heal(config.heal_amount);
                }
                PotionEffect::Poison => {
                    target.hp = 1;
                    target.status.insert(StatusKind::Poisoned);
                }
                PotionEffect::Berserk => {
                    target.status.insert(StatusKind::Berserk);
                }
                PotionEffect::Curse => {
                    target.status.insert(StatusKind::CurseSource);
                }
                PotionEffect::Purify => target.status.clear(),
            }
            names.push(target.name.clone());
        }

        let affected = if names.is_empty() {
            "nobody".to_owned()
        } else {
            names.join(", ")
        };
        state.log(format!("{user_name} used the {potion_name} on {affected}."));
        Ok(format!("Used the {potion_name} on {affected}."))
    }
}
