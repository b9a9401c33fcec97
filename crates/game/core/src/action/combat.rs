//! Attack resolution.
//!
//! Damage is fixed first (unarmed, weapon, or ranged), then modified in order:
//! berserk doubles it, a target's shield absorbs a melee hit, and a mounted
//! target ignores melee damage. Shield and mount never stack; the shield is
//! checked first and wears down even when the target is also mounted.
use crate::action::{ActionError, ActionTransition, TurnRule};
use crate::env::{GameEnv, ItemKind, ItemSlot};
use crate::state::{GameState, ItemId, PlayerId, StatusKind, Wear};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction {
    pub actor: PlayerId,
    pub target: PlayerId,
    /// Main-hand item to attack with; `None` attacks unarmed.
    pub weapon: Option<ItemId>,
}

impl AttackAction {
    pub fn new(actor: PlayerId, target: PlayerId, weapon: Option<ItemId>) -> Self {
        Self {
            actor,
            target,
            weapon,
        }
    }

    fn weapon_kind(&self, state: &GameState) -> Result<Option<ItemKind>, ActionError> {
        let Some(weapon) = self.weapon else {
            return Ok(None);
        };
        let attacker = state.player(&self.actor)?;
        match attacker.inventory.get(weapon) {
            Some(item) if item.slot() == ItemSlot::MainHand => Ok(Some(item.kind)),
            Some(item) => Err(ActionError::invalid_target(format!(
                "the {} is not a weapon",
                item.name
            ))),
            None => Err(ActionError::invalid_target(format!(
                "you do not carry item {weapon}"
            ))),
        }
    }
}

impl ActionTransition for AttackAction {
    const VERB: &'static str = "attack";
    const RULE: TurnRule = TurnRule::PrimaryTurn;

    fn actor(&self) -> &PlayerId {
        &self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        if self.target == self.actor {
            return Err(ActionError::invalid_target("you cannot attack yourself"));
        }
        let attacker = state.player(&self.actor)?;
        let target = state.player(&self.target)?;
        if !target.alive {
            return Err(ActionError::invalid_target(format!(
                "{} is already dead",
                target.name
            )));
        }

        let ranged = self.weapon_kind(state)?.is_some_and(|kind| kind.is_ranged());
        if ranged {
            if attacker.location.is_decisive() || target.location.is_decisive() {
                return Err(ActionError::out_of_range(
                    "ranged attacks cannot reach into or out of the Showdown",
                ));
            }
            if attacker
                .inventory
                .find(|item| item.kind == ItemKind::Ammunition)
                .is_none()
            {
                return Err(ActionError::missing("no ammunition"));
            }
        } else if attacker.location != target.location {
            return Err(ActionError::out_of_range(format!(
                "{} is not in the {}",
                target.name, attacker.location
            )));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<String, ActionError> {
        let config = env.config();
        let attacker_name = state.name_of(&self.actor);
        let target_name = state.name_of(&self.target);

        let kind = self.weapon_kind(state)?;
        let ranged = kind.is_some_and(|kind| kind.is_ranged());
        let attacker = state.player_mut(&self.actor)?;

        let mut damage = match (self.weapon, kind) {
            (Some(weapon), Some(ItemKind::Weapon { damage, .. })) => {
                let broken = attacker
                    .inventory
                    .get_mut(weapon)
                    .map(|item| item.wear() == Wear::Broken)
                    .unwrap_or(false);
                if broken && let Some(item) = attacker.inventory.remove(weapon) {
                    state.log(format!("{attacker_name}'s {} broke.", item.name));
                }
                damage
            }
            (Some(_), Some(ItemKind::RangedWeapon { damage })) => {
                let ammo = attacker
                    .inventory
                    .find(|item| item.kind == ItemKind::Ammunition)
                    .map(|item| item.id)
                    .ok_or_else(|| ActionError::missing("no ammunition"))?;
                attacker.inventory.remove(ammo);
                damage
            }
            _ => config.unarmed_damage,
        };

        if state.player(&self.actor)?.has_status(StatusKind::Berserk) {
            damage = damage.saturating_mul(2);
        }

        let target = state.player_mut(&self.target)?;
        let mut blocked_by = None;
        if !ranged {
            let shield = target
                .inventory
                .find(|item| matches!(item.kind, ItemKind::Shield { .. }))
                .map(|item| item.id);
            if let Some(shield) = shield {
                let broken = target
                    .inventory
                    .get_mut(shield)
                    .map(|item| item.wear() == Wear::Broken)
                    .unwrap_or(false);
                let removed = if broken {
                    target.inventory.remove(shield).map(|item| item.name)
                } else {
                    None
                };
                damage = 0;
                blocked_by = Some("shield");
                if let Some(name) = removed {
                    state.log(format!("{target_name}'s {name} shattered."));
                }
            } else if target.has_status(StatusKind::Mounted) {
                damage = 0;
                blocked_by = Some("mount");
            }
        }

        if damage == 0 {
            let reason = blocked_by.map(|by| format!(" (blocked by {by})")).unwrap_or_default();
            state.log(format!(
                "{attacker_name} hit {target_name} but dealt no damage{reason}."
            ));
            return Ok(format!("Your attack on {target_name} dealt no damage."));
        }

        let target = state.player_mut(&self.target)?;
        let killed = target.take_damage(damage);
        let remaining = target.hp;
        state.log(format!(
            "{attacker_name} hit {target_name} for {damage} damage ({remaining} hp left)."
        ));
        if killed {
            state.process_death(&self.target);
        }
        Ok(format!("You hit {target_name} for {damage} damage."))
    }
}
