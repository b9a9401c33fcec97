//! Per-observer projection of the game state.
//!
//! Players only learn the position of others standing in their own location
//! and only see the ground pile under their feet. The unfiltered view (no
//! observer) exposes everything and is meant for admin tooling.
use crate::state::{GameOutcome, GameState, Item, Location, PlayerId, PlayerState, StatusKind};

/// Placeholder location for players outside the observer's view.
pub const UNKNOWN_LOCATION: &str = "unknown";

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub location: String,
    pub inventory: Vec<Item>,
    pub status: Vec<StatusKind>,
    pub alive: bool,
    pub roll: u32,
    pub taming_progress: u32,
}

impl PlayerView {
    fn project(player: &PlayerState, visible: bool) -> Self {
        let location = if visible {
            player.location.as_str().to_owned()
        } else {
            UNKNOWN_LOCATION.to_owned()
        };
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
            hp: player.hp,
            max_hp: player.max_hp,
            location,
            inventory: player.inventory.items().to_vec(),
            status: player.status.iter().collect(),
            alive: player.alive,
            roll: player.roll,
            taming_progress: player.taming_progress,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroundView {
    pub location: String,
    pub items: Vec<Item>,
}

/// Everything a client needs to render the table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub players: Vec<PlayerView>,
    pub phase: String,
    pub round: u32,
    pub log: Vec<String>,
    pub locations: Vec<String>,
    pub ground: Vec<GroundView>,
    pub current_actor: Option<PlayerId>,
    pub outcome: Option<GameOutcome>,
}

impl GameSnapshot {
    /// Builds the view for `observer`; `None` yields the unfiltered view.
    pub fn project(state: &GameState, observer: Option<&PlayerId>) -> Self {
        // Outer `None`: unfiltered. Inner `None`: observer not in the session.
        let vantage: Option<Option<Location>> =
            observer.map(|id| state.player(id).ok().map(|player| player.location));
        let sees = |location: Location| match vantage {
            None => true,
            Some(here) => here == Some(location),
        };

        let players = state
            .players
            .iter()
            .map(|player| PlayerView::project(player, sees(player.location)))
            .collect();

        let ground = state
            .world
            .piles()
            .filter(|(location, _)| sees(*location))
            .map(|(location, items)| GroundView {
                location: location.as_str().to_owned(),
                items: items.to_vec(),
            })
            .collect();

        Self {
            players,
            phase: state.phase().as_str().to_owned(),
            round: state.turn.round,
            log: state.log.iter().map(str::to_owned).collect(),
            locations: Location::all().map(|l| l.as_str().to_owned()).collect(),
            ground,
            current_actor: state.turn.current_actor().cloned(),
            outcome: state.outcome.clone(),
        }
    }

    pub fn player(&self, id: &PlayerId) -> Option<&PlayerView> {
        self.players.iter().find(|player| &player.id == id)
    }
}
