//! Player inventory.

use crate::config::CapacityLimits;
use crate::env::ItemSlot;
use crate::state::types::{Item, ItemId};

/// Ordered collection of owned items, unique by id.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct InventoryState {
    items: Vec<Item>,
}

impl InventoryState {
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// First item matching the predicate, in pickup order.
    pub fn find(&self, predicate: impl Fn(&Item) -> bool) -> Option<&Item> {
        self.items.iter().find(|item| predicate(item))
    }

    pub fn count(&self, slot: ItemSlot) -> usize {
        self.items.iter().filter(|item| item.slot() == slot).count()
    }

    /// Whether adding one more item of `slot` would break the limit.
    pub fn would_exceed(&self, slot: ItemSlot, limits: &CapacityLimits) -> bool {
        limits
            .limit_for(slot)
            .is_some_and(|limit| self.count(slot) >= limit)
    }

    /// Adds an item. Callers check capacity first; a duplicate id is ignored.
    pub fn push(&mut self, item: Item) {
        if self.get(item.id).is_none() {
            self.items.push(item);
        }
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Empties the inventory, yielding items in pickup order.
    pub fn take_all(&mut self) -> Vec<Item> {
        std::mem::take(&mut self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ItemKind, PotionEffect};

    fn potion(id: u32) -> Item {
        Item::new(
            ItemId(id),
            "Venom Vial",
            ItemKind::Potion {
                effect: PotionEffect::Poison,
                charges: 1,
            },
        )
    }

    #[test]
    fn potion_slot_fills_at_three() {
        let limits = CapacityLimits::default();
        let mut inventory = InventoryState::empty();
        for id in 0..3 {
            assert!(!inventory.would_exceed(ItemSlot::Potion, &limits));
            inventory.push(potion(id));
        }
        assert!(inventory.would_exceed(ItemSlot::Potion, &limits));
        assert!(!inventory.would_exceed(ItemSlot::OffHand, &limits));
    }

    #[test]
    fn creatures_are_never_capacity_limited() {
        let limits = CapacityLimits {
            main_hand: 0,
            off_hand: 0,
            potion: 0,
        };
        assert!(!InventoryState::empty().would_exceed(ItemSlot::Creature, &limits));
    }

    #[test]
    fn ids_stay_unique() {
        let mut inventory = InventoryState::empty();
        inventory.push(potion(7));
        inventory.push(potion(7));
        assert_eq!(inventory.len(), 1);
        assert!(inventory.remove(ItemId(7)).is_some());
        assert!(inventory.remove(ItemId(7)).is_none());
    }
}
