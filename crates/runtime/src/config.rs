//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_content::{ConfigLoader, StockCatalog, StockLoader};
use game_core::GameConfig;

use crate::api::{Result, RuntimeError};

/// Settings shared by every session the runtime opens.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub stock: StockCatalog,
    /// Fixed session seed. `None` draws a fresh seed per session.
    pub seed: Option<u64>,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            stock: StockCatalog::standard(),
            seed: None,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GAME_COMMAND_BUFFER` - Command queue size per session (default: 32)
    /// - `GAME_EVENT_BUFFER` - Broadcast buffer per session (default: 100)
    /// - `GAME_SEED` - Fixed seed for every session (default: random)
    /// - `GAME_CONFIG_PATH` - TOML rules file (default: built-in rules)
    /// - `GAME_STOCK_PATH` - RON stock file (default: built-in stock)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RuntimeConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let read = |key: &str| lookup(key).and_then(|value| value.trim().parse::<u64>().ok());
        let mut config = Self::default();

        if let Some(capacity) = read("GAME_COMMAND_BUFFER") {
            config.command_buffer_size = (capacity as usize).max(1);
        }
        if let Some(capacity) = read("GAME_EVENT_BUFFER") {
            config.event_buffer_size = (capacity as usize).max(1);
        }
        config.seed = read("GAME_SEED");

        if let Some(path) = lookup("GAME_CONFIG_PATH").map(PathBuf::from) {
            config.game_config = ConfigLoader::load(&path).map_err(|e| RuntimeError::Content {
                what: "game config",
                path: path.clone(),
                reason: format!("{e:#}"),
            })?;
        }
        if let Some(path) = lookup("GAME_STOCK_PATH").map(PathBuf::from) {
            config.stock = StockLoader::load(&path).map_err(|e| RuntimeError::Content {
                what: "stock",
                path: path.clone(),
                reason: format!("{e:#}"),
            })?;
        }

        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seed for a new session.
    pub fn session_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
