//! Content loaders for reading unit data from files.
//!
//! This module provides loaders that convert RON/TOML/BLK files into
//! `unit-core` values: the equipment catalog, the construction config and
//! unit definitions.

pub mod catalog;
pub mod config;
pub mod factory;
pub mod unit;

pub use catalog::{CatalogFile, CatalogLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use unit::UnitFileLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
