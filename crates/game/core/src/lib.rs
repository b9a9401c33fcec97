//! Deterministic rules engine for the survival board game.
//!
//! `game-core` defines the canonical rules (items, players, turn scheduling,
//! actions, settlement) and exposes pure APIs that the runtime drives. All
//! state mutation flows through [`engine::GameEngine`]; clients only ever see
//! a [`snapshot::GameSnapshot`] projected for them.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod snapshot;
pub mod state;

pub use action::{
    Action, ActionError, ActionTransition, AttackAction, DropItemAction, JoinAction, LeaveAction,
    MoveAction, PickUpAction, PotionTarget, RollAction, StartGameAction, TameAction, TurnRule,
    UsePotionAction,
};
pub use config::{CapacityLimits, GameConfig};
pub use engine::{ActionOutcome, GameEngine};
pub use env::{
    GameEnv, ItemDefinition, ItemKind, ItemSlot, PcgRng, PotionEffect, RngOracle, ScriptedRng,
    compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use snapshot::{GameSnapshot, GroundView, PlayerView, UNKNOWN_LOCATION};
pub use state::{
    EventLog, GameOutcome, GameState, InventoryState, Item, ItemId, Location, Phase, PlayerId,
    PlayerState, StatusEffects, StatusKind, TurnState, Wear, WorldState,
};
