//! Content factory for loading catalogs, config and units from a data directory.

use std::path::{Path, PathBuf};

use unit_core::{EquipmentCatalog, Unit, UnitConfig, UnitLoader};

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult, UnitFileLoader};

/// Content factory that loads all unit content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── equipment.ron
/// └── units/
///     ├── rifle.blk
///     └── mine_launcher.blk
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load construction config from `config.toml`, falling back to defaults
    /// when the file is absent.
    pub fn load_config(&self) -> LoadResult<UnitConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(UnitConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the equipment catalog from `equipment.ron`.
    pub fn load_catalog(&self) -> LoadResult<EquipmentCatalog> {
        let path = self.data_dir.join("equipment.ron");
        CatalogLoader::load(&path)
    }

    /// Load a unit from `units/{unit_name}.blk`.
    pub fn load_unit(&self, unit_name: &str, loader: &UnitLoader<'_>) -> LoadResult<Unit> {
        let path = self.units_dir().join(format!("{}.blk", unit_name));
        UnitFileLoader::load(&path, loader)
    }

    /// Returns the unit definitions directory.
    pub fn units_dir(&self) -> PathBuf {
        self.data_dir.join("units")
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
