//! Unit definition file loader (`.blk` building-block files).

use std::path::{Path, PathBuf};

use unit_core::{Unit, UnitLoader};

use crate::loaders::{LoadResult, read_file};

/// File extension of unit definition files.
pub const UNIT_FILE_EXTENSION: &str = "blk";

/// Loader for unit definitions stored on disk.
pub struct UnitFileLoader;

impl UnitFileLoader {
    /// Load a single unit definition file.
    ///
    /// The returned error keeps the underlying `unit_core::LoadError`
    /// reachable through `downcast_ref`.
    pub fn load(path: &Path, loader: &UnitLoader<'_>) -> LoadResult<Unit> {
        let content = read_file(path)?;
        let unit = loader
            .load_str(&content)
            .map_err(|e| anyhow::Error::new(e).context(format!("Failed to load unit {}", path.display())))?;

        if !unit.failed_equipment().is_empty() {
            tracing::warn!(
                file = %path.display(),
                failed = ?unit.failed_equipment(),
                "unit loaded with unresolved equipment"
            );
        }
        Ok(unit)
    }

    /// Lists every unit definition file in `dir`, sorted by path.
    pub fn list(dir: &Path) -> LoadResult<Vec<PathBuf>> {
        let entries = std::fs::read_dir(dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            let is_unit = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(UNIT_FILE_EXTENSION));
            if path.is_file() && is_unit {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Load every unit definition in `dir`.
    ///
    /// One bad file does not stop the others; each result is paired with its path.
    pub fn load_dir(dir: &Path, loader: &UnitLoader<'_>) -> LoadResult<Vec<(PathBuf, LoadResult<Unit>)>> {
        let results = Self::list(dir)?
            .into_iter()
            .map(|path| {
                let unit = Self::load(&path, loader);
                (path, unit)
            })
            .collect();
        Ok(results)
    }
}
