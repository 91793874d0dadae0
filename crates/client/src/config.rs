//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Data directory used when `UNIT_DATA_DIR` is not set.
pub const DEFAULT_DATA_DIR: &str = "crates/unit/content/data";

/// Where the client finds its content and how it reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    /// Overrides `{data_dir}/equipment.ron`.
    pub catalog: Option<PathBuf>,
    /// Overrides `{data_dir}/config.toml`.
    pub config: Option<PathBuf>,
    pub ignore_ammo: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog: None,
            config: None,
            ignore_ammo: false,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `UNIT_DATA_DIR` - Content directory (default: `crates/unit/content/data`)
    /// - `UNIT_CATALOG` - Equipment catalog RON file (default: `{data_dir}/equipment.ron`)
    /// - `UNIT_CONFIG` - Construction policy TOML file (default: `{data_dir}/config.toml`)
    /// - `UNIT_IGNORE_AMMO` - Leave ammunition out of reported cost (default: false)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = var("UNIT_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.catalog = var("UNIT_CATALOG").map(PathBuf::from);
        config.config = var("UNIT_CONFIG").map(PathBuf::from);

        // A bare `UNIT_IGNORE_AMMO=` also counts as enabled.
        if let Some(raw) = var("UNIT_IGNORE_AMMO") {
            config.ignore_ammo = parse_flag(&raw).unwrap_or(true);
        }

        config
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.catalog
            .clone()
            .unwrap_or_else(|| self.data_dir.join("equipment.ron"))
    }

    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| self.data_dir.join("config.toml"))
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
