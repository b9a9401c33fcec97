//! Read-only inputs to the rules engine.
//!
//! [`GameEnv`] bundles the configuration and the dice oracle so handlers can
//! reach everything they need without owning it. Item archetypes live here
//! because they describe content, not mutable state.
mod items;
mod rng;

pub use items::{ItemDefinition, ItemKind, ItemSlot, PotionEffect};
pub use rng::{PcgRng, RngOracle, ScriptedRng, compute_seed};

use crate::config::GameConfig;

/// Aggregates the read-only collaborators required by the engine.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    config: &'a GameConfig,
    rng: &'a dyn RngOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(config: &'a GameConfig, rng: &'a dyn RngOracle) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
