//! `unitcalc` subcommands and the content they share.

mod catalog;
mod report;
mod scan;

pub use catalog::Catalog;
pub use report::Report;
pub use scan::Scan;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use unit_content::{CatalogLoader, ConfigLoader};
use unit_core::{
    ConstructionError, EquipmentCatalog, ErrorSeverity, LoadError, LoadPolicy, UnitLoader,
};

use crate::config::ClientConfig;

/// Content selection flags. Each one overrides its environment variable.
#[derive(Args, Debug, Default)]
pub struct ContentArgs {
    /// Content directory holding equipment.ron, config.toml and units/
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Equipment catalog RON file
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Construction policy TOML file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Leave ammunition out of the reported cost
    #[arg(long)]
    ignore_ammo: bool,
}

impl ContentArgs {
    fn resolve(self, mut config: ClientConfig) -> ClientConfig {
        if let Some(dir) = self.data_dir {
            config.data_dir = dir;
        }
        if self.catalog.is_some() {
            config.catalog = self.catalog;
        }
        if self.config.is_some() {
            config.config = self.config;
        }
        config.ignore_ammo |= self.ignore_ammo;
        config
    }
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Summary,
    /// JSON output
    Json,
    /// Pretty-printed debug format
    Debug,
}

/// Catalog and load policy resolved from flags and environment.
pub struct Content {
    pub config: ClientConfig,
    pub catalog: EquipmentCatalog,
    pub policy: LoadPolicy,
}

impl Content {
    pub fn load(args: ContentArgs, env: ClientConfig) -> Result<Self> {
        let config = args.resolve(env);

        let catalog = CatalogLoader::load(&config.catalog_path())?;

        // The policy file is optional unless named explicitly.
        let policy_path = config.config_path();
        let policy = if config.config.is_some() || policy_path.exists() {
            ConfigLoader::load(&policy_path)?.load
        } else {
            LoadPolicy::default()
        };

        tracing::info!(
            catalog = %config.catalog_path().display(),
            entries = catalog.len(),
            location_full = %policy.location_full,
            "content loaded"
        );

        Ok(Self {
            config,
            catalog,
            policy,
        })
    }

    pub fn loader(&self) -> UnitLoader<'_> {
        UnitLoader::new(&self.catalog).with_policy(self.policy)
    }
}

/// Severity of a failure raised by the construction engine, if it was one.
pub fn failure_severity(err: &anyhow::Error) -> Option<ErrorSeverity> {
    err.downcast_ref::<LoadError>().map(ConstructionError::severity)
}

/// Renders a failure with the engine's severity and error code up front.
pub fn describe_failure(err: &anyhow::Error) -> String {
    match err.downcast_ref::<LoadError>() {
        Some(load) => format!(
            "[{} {}] {err:#}",
            load.severity().as_str(),
            load.error_code()
        ),
        None => format!("{err:#}"),
    }
}
