//! Content factory for loading everything a session needs from a data directory.

use std::path::{Path, PathBuf};

use game_core::GameConfig;

use crate::loaders::{ConfigLoader, LoadResult, StockLoader};
use crate::stock::StockCatalog;

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── stock.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the starting stock from `stock.ron`.
    pub fn load_stock(&self) -> LoadResult<StockCatalog> {
        StockLoader::load(&self.data_dir.join("stock.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ContentFactory) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "min_players = 3\n").unwrap();
        fs::write(
            dir.path().join("stock.ron"),
            r#"(entries: [(location: menagerie, item: (name: "Wolf", kind: creature(capture_threshold: 2)))])"#,
        )
        .unwrap();
        let factory = ContentFactory::new(dir.path());
        (dir, factory)
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_config_and_stock() {
        let (_dir, factory) = setup();
        assert_eq!(factory.load_config().unwrap().min_players, 3);
        assert_eq!(factory.load_stock().unwrap().item_count(), 1);
    }

    #[test]
    fn bundled_data_directory_loads() {
        let factory = ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
        assert_eq!(factory.load_stock().unwrap(), StockCatalog::standard());
    }
}
