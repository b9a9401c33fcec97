//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`GameConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &GameConfig) -> LoadResult<()> {
        if config.max_hp == 0 {
            anyhow::bail!("max_hp must be positive");
        }
        if config.die_sides < 2 {
            anyhow::bail!("die_sides must be at least 2, got {}", config.die_sides);
        }
        if config.min_players == 0 {
            anyhow::bail!("min_players must be positive");
        }
        if config.log_capacity == 0 {
            anyhow::bail!("log_capacity must be positive");
        }
        Ok(())
    }
}
