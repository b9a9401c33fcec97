//! Starting stock loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::stock::StockCatalog;

/// Loader for the starting stock from RON files.
pub struct StockLoader;

impl StockLoader {
    /// Load a stock catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<StockCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<StockCatalog> {
        let catalog: StockCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse stock catalog RON: {}", e))?;

        if let Some(entry) = catalog.entries.iter().find(|entry| entry.count == 0) {
            anyhow::bail!("stock entry '{}' has a zero count", entry.item.name);
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ItemKind, Location, PotionEffect};
    use std::fs;
    use tempfile::TempDir;

    const BUNDLED: &str = include_str!("../../data/stock.ron");

    #[test]
    fn bundled_stock_matches_the_standard_table() {
        let catalog = StockLoader::parse(BUNDLED).unwrap();
        assert_eq!(catalog, StockCatalog::standard());
    }

    #[test]
    fn count_defaults_to_one() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stock.ron");
        fs::write(
            &path,
            r#"(
                entries: [
                    (location: black_market, item: (name: "Venom Vial", kind: potion(effect: poison, charges: 1))),
                    (location: armory, item: (name: "Arrows", kind: ammunition), count: 4),
                ],
            )"#,
        )
        .unwrap();

        let catalog = StockLoader::load(&path).unwrap();
        assert_eq!(catalog.item_count(), 5);
        assert_eq!(catalog.entries[0].location, Location::BlackMarket);
        assert_eq!(
            catalog.entries[0].item.kind,
            ItemKind::Potion {
                effect: PotionEffect::Poison,
                charges: 1
            }
        );
    }

    #[test]
    fn zero_count_is_rejected() {
        let err = StockLoader::parse(
            r#"(entries: [(location: armory, item: (name: "Bow", kind: ranged_weapon(damage: 2)), count: 0)])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Bow"));
    }

    #[test]
    fn unknown_location_fails_to_parse() {
        let err = StockLoader::parse(
            r#"(entries: [(location: moon, item: (name: "Bow", kind: ranged_weapon(damage: 2)))])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to parse stock catalog RON"));
    }
}
