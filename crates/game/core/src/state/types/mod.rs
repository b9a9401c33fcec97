pub mod common;
pub mod item;
pub mod log;
pub mod player;
pub mod status;
pub mod turn;
pub mod world;

pub use common::{ItemId, Location, PlayerId};
pub use item::{Item, Wear};
pub use log::EventLog;
pub use player::{InventoryState, PlayerState};
pub use status::{StatusEffects, StatusKind};
pub use turn::{Phase, TurnState};
pub use world::WorldState;
