//! Data-driven content definitions and loaders.
//!
//! This crate houses the static game content and provides loaders for RON/TOML
//! data files:
//! - Starting stock (which items lie on which ground pile)
//! - Game configuration (rules constants and capacity limits)
//!
//! Content seeds a session; once a game starts, only `GameState` matters.

pub mod stock;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use stock::{StockCatalog, StockEntry};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, StockLoader};

/// The stock used when no stock file is configured.
pub fn default_stock() -> StockCatalog {
    StockCatalog::standard()
}
