//! Item catalog.
//!
//! An item is a display name plus a typed archetype. Rules dispatch on the
//! archetype, never on the name.

/// Inventory category an item occupies. Capacity limits are per slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemSlot {
    MainHand,
    OffHand,
    Potion,
    Creature,
}

impl ItemSlot {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Item archetype with type-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemKind {
    /// Melee weapon. Loses one durability per attack.
    Weapon { damage: u32, durability: u32 },

    /// Ranged weapon. Every shot consumes one [`ItemKind::Ammunition`].
    RangedWeapon { damage: u32 },

    /// Ammunition for ranged weapons.
    Ammunition,

    /// Absorbs one melee hit per durability point.
    Shield { durability: u32 },

    /// Consumable. Only healing potions use more than one charge.
    Potion { effect: PotionEffect, charges: u32 },

    /// Capturable creature; tamed in place, never carried.
    Creature { capture_threshold: u32 },
}

impl ItemKind {
    pub const fn slot(&self) -> ItemSlot {
        match self {
            ItemKind::Weapon { .. } | ItemKind::RangedWeapon { .. } => ItemSlot::MainHand,
            ItemKind::Ammunition | ItemKind::Shield { .. } => ItemSlot::OffHand,
            ItemKind::Potion { .. } => ItemSlot::Potion,
            ItemKind::Creature { .. } => ItemSlot::Creature,
        }
    }

    /// Remaining durability for items that wear out.
    pub const fn durability(&self) -> Option<u32> {
        match self {
            ItemKind::Weapon { durability, .. } | ItemKind::Shield { durability } => {
                Some(*durability)
            }
            _ => None,
        }
    }

    pub const fn is_ranged(&self) -> bool {
        matches!(self, ItemKind::RangedWeapon { .. })
    }
}

/// Effect applied by drinking (or throwing) a potion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PotionEffect {
    /// Restores hit points; multi-charge.
    Healing,
    /// Drops the target to 1 hp and poisons them.
    Poison,
    /// Doubles the target's outgoing damage.
    Berserk,
    /// Marks the target as a curse source for co-located players.
    Curse,
    /// Clears every status.
    Purify,
}

/// Item template used to stock locations when a session is created.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub name: String,
    pub kind: ItemKind,
}

impl ItemDefinition {
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn weapon(name: impl Into<String>, damage: u32, durability: u32) -> Self {
        Self::new(name, ItemKind::Weapon { damage, durability })
    }

    pub fn ranged(name: impl Into<String>, damage: u32) -> Self {
        Self::new(name, ItemKind::RangedWeapon { damage })
    }

    pub fn ammunition(name: impl Into<String>) -> Self {
        Self::new(name, ItemKind::Ammunition)
    }

    pub fn shield(name: impl Into<String>, durability: u32) -> Self {
        Self::new(name, ItemKind::Shield { durability })
    }

    pub fn potion(name: impl Into<String>, effect: PotionEffect, charges: u32) -> Self {
        Self::new(name, ItemKind::Potion { effect, charges })
    }

    pub fn creature(name: impl Into<String>, capture_threshold: u32) -> Self {
        Self::new(name, ItemKind::Creature { capture_threshold })
    }
}
