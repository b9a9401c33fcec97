//! Starting item placement.

use game_core::{ItemDefinition, Location, PotionEffect};

/// `count` copies of one item on one location's ground pile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StockEntry {
    pub location: Location,
    pub item: ItemDefinition,
    #[cfg_attr(feature = "serde", serde(default = "StockEntry::single"))]
    pub count: u32,
}

impl StockEntry {
    pub fn new(location: Location, item: ItemDefinition) -> Self {
        Self::repeated(location, item, 1)
    }

    pub fn repeated(location: Location, item: ItemDefinition, count: u32) -> Self {
        Self {
            location,
            item,
            count,
        }
    }

    #[cfg(feature = "serde")]
    fn single() -> u32 {
        1
    }
}

/// Everything laid out on the ground when a session opens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StockCatalog {
    pub entries: Vec<StockEntry>,
}

impl StockCatalog {
    /// The standard table: weapons in the Armory, a wolf in the Menagerie,
    /// helpful brews in the Apothecary and harmful ones in the Black Market.
    pub fn standard() -> Self {
        use Location::*;
        let entries = vec![
            StockEntry::new(Armory, ItemDefinition::weapon("Dagger", 3, 3)),
            StockEntry::new(Armory, ItemDefinition::weapon("Greatsword", 5, 2)),
            StockEntry::new(Armory, ItemDefinition::ranged("Bow", 2)),
            StockEntry::repeated(Armory, ItemDefinition::ammunition("Arrows"), 3),
            StockEntry::repeated(Armory, ItemDefinition::shield("Buckler", 1), 2),
            StockEntry::new(Menagerie, ItemDefinition::creature("Wolf", 2)),
            StockEntry::repeated(
                Apothecary,
                ItemDefinition::potion("Healing Draught", PotionEffect::Healing, 2),
                2,
            ),
            StockEntry::new(
                Apothecary,
                ItemDefinition::potion("Purifying Tonic", PotionEffect::Purify, 1),
            ),
            StockEntry::new(
                Apothecary,
                ItemDefinition::potion("Berserker Brew", PotionEffect::Berserk, 1),
            ),
            StockEntry::repeated(
                BlackMarket,
                ItemDefinition::potion("Venom Vial", PotionEffect::Poison, 1),
                2,
            ),
            StockEntry::new(
                BlackMarket,
                ItemDefinition::potion("Hex Flask", PotionEffect::Curse, 1),
            ),
        ];
        Self { entries }
    }

    /// One `(location, definition)` pair per physical item, in file order.
    pub fn placements(&self) -> impl Iterator<Item = (Location, &ItemDefinition)> {
        self.entries.iter().flat_map(|entry| {
            (0..entry.count).map(move |_| (entry.location, &entry.item))
        })
    }

    /// Total number of items placed.
    pub fn item_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.count as usize).sum()
    }
}
