//! Construction configuration loader.

use std::path::Path;

use unit_core::UnitConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for construction configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// ```toml
    /// [load]
    /// location_full = "record_failed"
    /// ```
    pub fn load(path: &Path) -> LoadResult<UnitConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<UnitConfig> {
        let config: UnitConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
