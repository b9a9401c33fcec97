use strum::EnumCount;

use super::{Item, ItemId, Location};

/// Ground piles, one per location.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    ground: [Vec<Item>; Location::COUNT],
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ground(&self, location: Location) -> &[Item] {
        &self.ground[location.index()]
    }

    pub fn ground_item(&self, location: Location, id: ItemId) -> Option<&Item> {
        self.ground(location).iter().find(|item| item.id == id)
    }

    /// First item on a pile matching the predicate.
    pub fn find_on_ground(
        &self,
        location: Location,
        predicate: impl Fn(&Item) -> bool,
    ) -> Option<&Item> {
        self.ground(location).iter().find(|item| predicate(item))
    }

    pub fn take_from_ground(&mut self, location: Location, id: ItemId) -> Option<Item> {
        let pile = &mut self.ground[location.index()];
        let index = pile.iter().position(|item| item.id == id)?;
        Some(pile.remove(index))
    }

    pub fn put_on_ground(&mut self, location: Location, item: Item) {
        self.ground[location.index()].push(item);
    }

    /// Every pile, in location order.
    pub fn piles(&self) -> impl Iterator<Item = (Location, &[Item])> {
        Location::all().map(|location| (location, self.ground(location)))
    }
}
