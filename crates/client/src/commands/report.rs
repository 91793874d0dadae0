//! Report weight, cost and battle value for one unit file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use unit_content::UnitFileLoader;
use unit_core::{EquipmentKind, Unit, UnitReport};

use super::{Content, ContentArgs, OutputFormat, describe_failure};
use crate::config::ClientConfig;

/// Report weight, cost and battle value for a unit file
#[derive(Parser, Debug)]
pub struct Report {
    /// Unit definition file (.blk)
    #[arg(value_name = "FILE")]
    unit: PathBuf,

    #[command(flatten)]
    content: ContentArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Report {
    pub fn execute(self, env: ClientConfig) -> Result<()> {
        let content = Content::load(self.content, env)?;
        let unit = UnitFileLoader::load(&self.unit, &content.loader())
            .map_err(|e| anyhow::anyhow!(describe_failure(&e)))?;
        let report = UnitReport::compute(&unit, &content.catalog);

        match self.format {
            OutputFormat::Summary => print_summary(&unit, &report, content.config.ignore_ammo),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Debug => println!("{report:#?}"),
        }
        Ok(())
    }
}

fn print_summary(unit: &Unit, report: &UnitReport, ignore_ammo: bool) {
    println!("{}", style(&report.name).bold().green());
    if let Some(level) = unit.tech_level {
        println!("  Tech:        {} / {}", level.base, level.rules);
    }
    if let Some(year) = unit.year {
        println!("  Year:        {year}");
    }
    println!();

    println!("{}", style("Equipment:").bold().yellow());
    for mount in &report.equipment {
        let location = mount.location.as_deref().unwrap_or("-");
        let mut line = format!("  {:<24} {:<8}", mount.name, location);
        if mount.kind == EquipmentKind::Ammunition {
            line.push_str(&format!(" {}/{} shots", mount.shots_left, mount.original_shots));
        }
        if mount.rear_mounted {
            line.push_str(" (rear)");
        }
        if let Some(linked) = mount.linked {
            line.push_str(&format!(" linked {linked}"));
        }
        if mount.destroyed {
            line.push_str(" (destroyed)");
        }
        println!("{line}");
    }
    for name in &report.failed_equipment {
        println!("  {} {}", style(name).red(), style("(not in catalog)").dim());
    }
    println!();

    let cost = if ignore_ammo {
        report.cost_without_ammo
    } else {
        report.cost
    };
    println!("{}", style("Statistics:").bold().yellow());
    println!("  Weight:      {} t", report.weight);
    println!("  Armor:       {} points", report.armor);
    println!("  Heat sinks:  {}", report.heat_sinks);
    println!(
        "  Cost:        {:.0} C-bills{}",
        cost,
        if ignore_ammo { " (without ammo)" } else { "" }
    );
    println!("  BV:          {}", report.battle_value);
}
