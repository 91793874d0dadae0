//! Load every unit file in a directory and tabulate the results.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use unit_content::UnitFileLoader;
use unit_core::UnitReport;

use super::{Content, ContentArgs, OutputFormat, describe_failure, failure_severity};
use crate::config::ClientConfig;

/// Load every unit file in a directory
#[derive(Parser, Debug)]
pub struct Scan {
    /// Directory of .blk files (defaults to {data_dir}/units)
    #[arg(value_name = "DIR")]
    dir: Option<PathBuf>,

    #[command(flatten)]
    content: ContentArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Scan {
    pub fn execute(self, env: ClientConfig) -> Result<()> {
        let content = Content::load(self.content, env)?;
        let dir = self
            .dir
            .unwrap_or_else(|| content.config.data_dir.join("units"));

        let results = UnitFileLoader::load_dir(&dir, &content.loader())?;
        let total = results.len();

        let mut reports = Vec::with_capacity(total);
        let mut failures = 0;
        for (path, unit) in results {
            match unit {
                Ok(unit) => reports.push((path, UnitReport::compute(&unit, &content.catalog))),
                Err(e) => {
                    failures += 1;
                    let message = describe_failure(&e);
                    if failure_severity(&e).is_some_and(|severity| severity.is_recoverable()) {
                        tracing::warn!(file = %path.display(), "{message}");
                    } else {
                        tracing::error!(file = %path.display(), "{message}");
                    }
                }
            }
        }

        match self.format {
            OutputFormat::Summary => {
                println!(
                    "{}",
                    style(format!("{:<32} {:>7} {:>12} {:>6}", "Unit", "Tons", "C-bills", "BV"))
                        .bold()
                );
                for (_, report) in &reports {
                    let cost = if content.config.ignore_ammo {
                        report.cost_without_ammo
                    } else {
                        report.cost
                    };
                    println!(
                        "{:<32} {:>7} {:>12.0} {:>6}",
                        report.name, report.weight, cost, report.battle_value
                    );
                }
            }
            OutputFormat::Json => {
                let reports: Vec<_> = reports.iter().map(|(_, report)| report).collect();
                println!("{}", serde_json::to_string_pretty(&reports)?);
            }
            OutputFormat::Debug => {
                for (path, report) in &reports {
                    println!("{}: {report:#?}", path.display());
                }
            }
        }

        if failures > 0 {
            anyhow::bail!("{failures} of {total} unit files failed to load");
        }
        Ok(())
    }
}
