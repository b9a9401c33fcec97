//! Item instances.
//!
//! An [`Item`] lives in exactly one container at a time: a player's
//! inventory or a location's ground pile. Items whose durability reaches
//! zero are destroyed by the handler that wore them out.

use super::ItemId;
use crate::env::{ItemDefinition, ItemKind, ItemSlot};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
}

/// Result of wearing down an item by one use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wear {
    /// Item has durability left (or never wears out).
    Intact,
    /// Durability reached zero; the caller must remove the item.
    Broken,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }

    pub fn from_definition(id: ItemId, definition: &ItemDefinition) -> Self {
        Self::new(id, definition.name.clone(), definition.kind)
    }

    pub fn slot(&self) -> ItemSlot {
        self.kind.slot()
    }

    /// Consumes one point of durability from weapons and shields.
    pub fn wear(&mut self) -> Wear {
        match &mut self.kind {
            ItemKind::Weapon { durability, .. } | ItemKind::Shield { durability } => {
                *durability = durability.saturating_sub(1);
                if *durability == 0 {
                    Wear::Broken
                } else {
                    Wear::Intact
                }
            }
            _ => Wear::Intact,
        }
    }

    /// Spends potion charges. Returns the charges left, or `None` for
    /// anything that is not a potion.
    pub fn spend_charges(&mut self, amount: u32) -> Option<u32> {
        match &mut self.kind {
            ItemKind::Potion { charges, .. } => {
                *charges = charges.saturating_sub(amount);
                Some(*charges)
            }
            _ => None,
        }
    }
}
