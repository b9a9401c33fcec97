//! Per-player state.

mod inventory;

pub use inventory::InventoryState;

use super::{Location, PlayerId, StatusEffects, StatusKind};

/// Everything the engine tracks for one participant.
///
/// # Invariants
///
/// - `hp <= max_hp`
/// - `hp == 0` implies `!alive`
/// - inventory slot counts stay within the configured capacity limits
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub id: PlayerId,
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub location: Location,
    pub inventory: InventoryState,
    pub status: StatusEffects,
    pub alive: bool,
    /// Initiative roll for the current round; 0 until rolled.
    pub roll: u32,
    /// Successful taming attempts so far.
    pub taming_progress: u32,
}

impl PlayerState {
    pub fn new(id: PlayerId, name: impl Into<String>, max_hp: u32) -> Self {
        Self {
            id,
            name: name.into(),
            hp: max_hp,
            max_hp,
            location: Location::START,
            inventory: InventoryState::empty(),
            status: StatusEffects::empty(),
            alive: true,
            roll: 0,
            taming_progress: 0,
        }
    }

    pub fn has_rolled(&self) -> bool {
        self.roll > 0
    }

    pub fn has_status(&self, kind: StatusKind) -> bool {
        self.status.has(kind)
    }

    /// Subtracts hit points, clamping at zero. Returns true if hp hit zero.
    ///
    /// Death bookkeeping (dropping items, `alive = false`) is done by
    /// [`crate::state::GameState::process_death`].
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        self.hp == 0
    }

    /// Restores hit points up to `max_hp`. Returns the amount actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heal_is_capped_at_max() {
        let mut player = PlayerState::new(PlayerId::from("a"), "Ann", 12);
        player.hp = 11;
        assert_eq!(player.heal(2), 1);
        assert_eq!(player.hp, 12);
    }

    #[test]
    fn damage_clamps_to_zero() {
        let mut player = PlayerState::new(PlayerId::from("a"), "Ann", 12);
        assert!(!player.take_damage(5));
        assert!(player.take_damage(40));
        assert_eq!(player.hp, 0);
    }
}
