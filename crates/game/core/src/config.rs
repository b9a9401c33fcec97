use crate::env::ItemSlot;

/// Game configuration constants and tunable parameters.
///
/// Every field has a default matching the standard rules, so a partial TOML
/// file only needs to name the values it overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Hit points every player joins with; also the healing cap.
    pub max_hp: u32,
    /// Number of entries kept in the rolling game log.
    pub log_capacity: usize,
    /// Players required before `start_game` succeeds.
    pub min_players: usize,
    /// Faces on the initiative die. Lowest face skips the primary phase,
    /// highest face earns an extra action.
    pub die_sides: u32,
    /// Damage dealt without a weapon.
    pub unarmed_damage: u32,
    /// Hit points restored per target by a healing potion.
    pub heal_amount: u32,
    /// Charges a healing potion spends per use.
    pub potion_charge_cost: u32,
    /// Hit points a poison tick never goes below.
    pub poison_floor: u32,
    /// Extra hit points lost by a cursed player at settlement.
    pub curse_damage: u32,
    /// Hit points regained in the decisive location at settlement.
    pub regen_amount: u32,
    /// Per-slot inventory limits.
    pub capacity: CapacityLimits,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_HP: u32 = 12;
    pub const DEFAULT_LOG_CAPACITY: usize = 50;
    pub const DEFAULT_MIN_PLAYERS: usize = 2;
    pub const DEFAULT_DIE_SIDES: u32 = 6;

    pub fn new() -> Self {
        Self {
            max_hp: Self::DEFAULT_MAX_HP,
            log_capacity: Self::DEFAULT_LOG_CAPACITY,
            min_players: Self::DEFAULT_MIN_PLAYERS,
            die_sides: Self::DEFAULT_DIE_SIDES,
            unarmed_damage: 1,
            heal_amount: 2,
            potion_charge_cost: 1,
            poison_floor: 1,
            curse_damage: 1,
            regen_amount: 1,
            capacity: CapacityLimits::default(),
        }
    }

    /// Die face that sends a player straight to the extra phase.
    pub const fn skip_face(&self) -> u32 {
        1
    }

    /// Die face that grants a bonus action in the extra phase.
    pub const fn bonus_face(&self) -> u32 {
        self.die_sides
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Maximum number of items a player may carry per inventory slot.
///
/// Creatures never enter an inventory, so they have no limit here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CapacityLimits {
    pub main_hand: usize,
    pub off_hand: usize,
    pub potion: usize,
}

impl CapacityLimits {
    /// Limit for a slot, or `None` when the slot is unbounded.
    pub const fn limit_for(&self, slot: ItemSlot) -> Option<usize> {
        match slot {
            ItemSlot::MainHand => Some(self.main_hand),
            ItemSlot::OffHand => Some(self.off_hand),
            ItemSlot::Potion => Some(self.potion),
            ItemSlot::Creature => None,
        }
    }
}

impl Default for CapacityLimits {
    fn default() -> Self {
        Self {
            main_hand: 1,
            off_hand: 3,
            potion: 3,
        }
    }
}
