//! Authoritative game state representation.
//!
//! This module owns the data structures that describe players, ground piles,
//! turn bookkeeping, and the rolling log. Runtime layers clone or query this
//! state but mutate it exclusively through the engine.
pub mod types;

pub use types::{
    EventLog, InventoryState, Item, ItemId, Location, Phase, PlayerId, PlayerState,
    StatusEffects, StatusKind, TurnState, Wear, WorldState,
};

use crate::action::ActionError;
use crate::config::GameConfig;
use crate::env::ItemDefinition;

/// How a finished session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "result", content = "player", rename_all = "snake_case"))]
pub enum GameOutcome {
    Winner(PlayerId),
    Draw,
}

/// Canonical snapshot of the game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Seed for dice rolls. Set once when the session is created.
    pub game_seed: u64,

    /// Item id allocator (monotonically increasing, never reused).
    next_item_id: u32,

    /// Players in join order. Dead players stay so their identity persists.
    pub players: Vec<PlayerState>,

    pub turn: TurnState,
    pub world: WorldState,
    pub log: EventLog,

    /// Set once settlement leaves at most one survivor.
    pub outcome: Option<GameOutcome>,
}

impl GameState {
    pub fn new(config: &GameConfig, game_seed: u64) -> Self {
        Self {
            game_seed,
            next_item_id: 1,
            players: Vec::new(),
            turn: TurnState::new(),
            world: WorldState::new(),
            log: EventLog::with_capacity(config.log_capacity),
            outcome: None,
        }
    }

    /// Creates a session and lays out the starting items.
    pub fn with_stock<'a>(
        config: &GameConfig,
        game_seed: u64,
        stock: impl IntoIterator<Item = (Location, &'a ItemDefinition)>,
    ) -> Self {
        let mut state = Self::new(config, game_seed);
        for (location, definition) in stock {
            state.spawn_item(location, definition);
        }
        state
    }

    pub fn phase(&self) -> Phase {
        self.turn.phase
    }

    pub fn log(&mut self, entry: impl Into<String>) {
        self.log.push(entry);
    }

    // ===== players =====

    pub fn player(&self, id: &PlayerId) -> Result<&PlayerState, ActionError> {
        self.players
            .iter()
            .find(|player| &player.id == id)
            .ok_or_else(|| ActionError::NotFound(id.clone()))
    }

    pub fn player_mut(&mut self, id: &PlayerId) -> Result<&mut PlayerState, ActionError> {
        self.players
            .iter_mut()
            .find(|player| &player.id == id)
            .ok_or_else(|| ActionError::NotFound(id.clone()))
    }

    pub fn player_index(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|player| &player.id == id)
    }

    pub fn contains_player(&self, id: &PlayerId) -> bool {
        self.player_index(id).is_some()
    }

    pub fn is_alive(&self, id: &PlayerId) -> bool {
        self.player(id).map(|player| player.alive).unwrap_or(false)
    }

    pub fn living_players(&self) -> impl Iterator<Item = &PlayerState> {
        self.players.iter().filter(|player| player.alive)
    }

    pub fn living_count(&self) -> usize {
        self.living_players().count()
    }

    /// Display name for log lines; falls back to the raw id.
    pub fn name_of(&self, id: &PlayerId) -> String {
        self.player(id)
            .map(|player| player.name.clone())
            .unwrap_or_else(|_| id.to_string())
    }

    // ===== items =====

    pub fn allocate_item_id(&mut self) -> ItemId {
        let id = ItemId(self.next_item_id);
        self.next_item_id = self.next_item_id.wrapping_add(1);
        id
    }

    /// Places a fresh instance of `definition` on a ground pile.
    pub fn spawn_item(&mut self, location: Location, definition: &ItemDefinition) -> ItemId {
        let id = self.allocate_item_id();
        self.world
            .put_on_ground(location, Item::from_definition(id, definition));
        id
    }

    /// Pure capacity predicate: would `item` fit in the player's inventory?
    pub fn would_exceed_capacity(
        &self,
        id: &PlayerId,
        item: &Item,
        config: &GameConfig,
    ) -> Result<bool, ActionError> {
        let player = self.player(id)?;
        Ok(player
            .inventory
            .would_exceed(item.slot(), &config.capacity))
    }

    /// Removes an item from a player's inventory or, failing that, from the
    /// ground pile at the player's location.
    pub fn remove_item(&mut self, owner: &PlayerId, item: ItemId) -> Option<Item> {
        let player = self.player_mut(owner).ok()?;
        if let Some(found) = player.inventory.remove(item) {
            return Some(found);
        }
        let location = player.location;
        self.world.take_from_ground(location, item)
    }

    // ===== death =====

    /// Marks a player dead and spills their inventory onto the ground.
    ///
    /// Dead players stay in [`GameState::players`]; the scheduler skips them.
    pub fn process_death(&mut self, id: &PlayerId) {
        let Ok(player) = self.player_mut(id) else {
            return;
        };
        if !player.alive {
            return;
        }
        player.alive = false;
        player.hp = 0;
        let location = player.location;
        let dropped = player.inventory.take_all();
        let name = player.name.clone();

        let count = dropped.len();
        for item in dropped {
            self.world.put_on_ground(location, item);
        }

        if count > 0 {
            self.log(format!(
                "{name} has fallen in the {location}, dropping {count} item(s)."
            ));
        } else {
            self.log(format!("{name} has fallen in the {location}."));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ItemKind;

    fn state_with_player() -> (GameState, PlayerId) {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 0);
        let id = PlayerId::from("p1");
        state
            .players
            .push(PlayerState::new(id.clone(), "Ann", config.max_hp));
        (state, id)
    }

    #[test]
    fn unknown_player_is_not_found() {
        let (state, _) = state_with_player();
        let missing = PlayerId::from("ghost");
        assert_eq!(
            state.player(&missing).unwrap_err(),
            ActionError::NotFound(missing)
        );
    }

    #[test]
    fn death_spills_every_item_at_the_location() {
        let (mut state, id) = state_with_player();
        let shield = ItemDefinition::shield("Buckler", 1);
        let sword = ItemDefinition::weapon("Dagger", 3, 3);
        let shield_id = state.spawn_item(Location::Armory, &shield);
        let sword_id = state.spawn_item(Location::Armory, &sword);
        for item_id in [shield_id, sword_id] {
            let item = state.world.take_from_ground(Location::Armory, item_id).unwrap();
            state.player_mut(&id).unwrap().inventory.push(item);
        }
        state.player_mut(&id).unwrap().location = Location::Menagerie;

        state.process_death(&id);

        let player = state.player(&id).unwrap();
        assert!(!player.alive);
        assert_eq!(player.hp, 0);
        assert!(player.inventory.is_empty());
        let pile: Vec<_> = state.world.ground(Location::Menagerie).iter().map(|i| i.id).collect();
        assert_eq!(pile, vec![shield_id, sword_id]);
    }

    #[test]
    fn remove_item_checks_inventory_then_ground() {
        let (mut state, id) = state_with_player();
        let wolf = state.spawn_item(
            Location::StartingGrounds,
            &ItemDefinition::new("Wolf", ItemKind::Creature { capture_threshold: 2 }),
        );
        assert!(state.remove_item(&id, wolf).is_some());
        assert!(state.remove_item(&id, wolf).is_none());
    }

    #[test]
    fn capacity_predicate_does_not_mutate() {
        let (mut state, id) = state_with_player();
        let config = GameConfig::default();
        let bow = ItemDefinition::ranged("Bow", 2);
        let bow_id = state.spawn_item(Location::StartingGrounds, &bow);
        let item = state.world.ground_item(Location::StartingGrounds, bow_id).unwrap().clone();

        assert_eq!(state.would_exceed_capacity(&id, &item, &config), Ok(false));
        assert!(state.player(&id).unwrap().inventory.is_empty());
    }
}
