//! Content loaders for reading game data from files.
//!
//! Rules constants come from TOML, the starting stock from RON.

pub mod config;
pub mod factory;
pub mod stock;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use stock::StockLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
