//! Equipment catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use unit_core::{EquipmentCatalog, EquipmentType};

use crate::loaders::{LoadResult, read_file};

/// Equipment catalog structure for RON files.
///
/// ```ron
/// (
///     heat_sink_cost: Some(2000.0),
///     items: [
///         (name: "Improved SRM 2", aliases: ["CLImprovedSRM2"], kind: Weapon,
///          tonnage: 1.0, cost: 10000.0, battle_value: 28.0, flags: "NO_FIRES"),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub heat_sink_cost: Option<f64>,
    pub items: Vec<EquipmentType>,
}

/// Loader for the equipment catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load an equipment catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a CatalogFile
    pub fn load(path: &Path) -> LoadResult<EquipmentCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load catalog {}: {}", path.display(), e))
    }

    /// Build a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<EquipmentCatalog> {
        let file: CatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse equipment catalog RON: {}", e))?;

        let mut catalog = EquipmentCatalog::from_definitions(file.items)?;
        if let Some(cost) = file.heat_sink_cost {
            catalog = catalog.with_heat_sink_cost(cost);
        }
        tracing::debug!(entries = catalog.len(), "loaded equipment catalog");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unit_core::{EquipmentFlags, EquipmentKind, EquipmentOracle};

    const CATALOG: &str = r#"(
        heat_sink_cost: Some(1500.0),
        items: [
            (
                name: "Improved SRM 2",
                aliases: ["CLImprovedSRM2"],
                kind: Weapon,
                tonnage: 1.0,
                cost: 10000.0,
                battle_value: 28.0,
                flags: "NO_FIRES",
                heat: 2,
            ),
            (
                name: "Improved SRM 2 Ammo",
                kind: Ammunition,
                tonnage: 1.0,
                cost: 27000.0,
                battle_value: 3.0,
                shots_per_ton: 50,
            ),
        ],
    )"#;

    #[test]
    fn parses_catalog_with_defaults() {
        let catalog = CatalogLoader::parse(CATALOG).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.heat_sink_cost(), 1500.0);

        let srm = catalog.get("CLImprovedSRM2").unwrap();
        assert_eq!(srm.kind, EquipmentKind::Weapon);
        assert!(srm.has_flag(EquipmentFlags::NO_FIRES));
        assert_eq!(srm.criticals, 1);

        let ammo = catalog.get("Improved SRM 2 Ammo").unwrap();
        assert_eq!(ammo.shots_per_ton, 50);
        assert!(ammo.flags.is_empty());
    }

    #[test]
    fn rejects_invalid_entries() {
        let bad = r#"(items: [(name: "Ammo", kind: Ammunition, tonnage: 1.0, cost: 1.0, battle_value: 1.0)])"#;
        let err = CatalogLoader::parse(bad).unwrap_err();
        assert!(err.to_string().contains("no shots per ton"));
    }

    #[test]
    fn rejects_malformed_ron() {
        assert!(CatalogLoader::parse("(items: [").is_err());
    }
}
