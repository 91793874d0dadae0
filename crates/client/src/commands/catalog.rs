//! List the equipment catalog.

use anyhow::Result;
use clap::Parser;
use console::style;
use unit_core::{EquipmentKind, EquipmentOracle};

use super::{Content, ContentArgs, OutputFormat};
use crate::config::ClientConfig;

/// List equipment in the catalog
#[derive(Parser, Debug)]
pub struct Catalog {
    /// Only show one kind (weapon, ammunition, miscellaneous)
    #[arg(short, long, value_parser = parse_kind)]
    kind: Option<EquipmentKind>,

    #[command(flatten)]
    content: ContentArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Catalog {
    pub fn execute(self, env: ClientConfig) -> Result<()> {
        let content = Content::load(self.content, env)?;
        let entries: Vec<_> = content
            .catalog
            .all_definitions()
            .into_iter()
            .filter(|eq| self.kind.is_none_or(|kind| eq.kind == kind))
            .collect();

        match self.format {
            OutputFormat::Summary => {
                println!(
                    "{}",
                    style(format!(
                        "{:<24} {:<14} {:>7} {:>10} {:>6}  Flags",
                        "Name", "Kind", "Tons", "C-bills", "BV"
                    ))
                    .bold()
                );
                for eq in &entries {
                    println!(
                        "{:<24} {:<14} {:>7} {:>10.0} {:>6}  {:?}",
                        eq.name, eq.kind, eq.tonnage, eq.cost, eq.battle_value, eq.flags
                    );
                }
                println!(
                    "\n{} heat sinks on the counter cost {:.0} C-bills each",
                    style("Note:").dim(),
                    content.catalog.heat_sink_cost()
                );
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
            OutputFormat::Debug => println!("{entries:#?}"),
        }
        Ok(())
    }
}

fn parse_kind(raw: &str) -> Result<EquipmentKind, String> {
    raw.parse()
        .map_err(|_| format!("unknown equipment kind '{raw}'"))
}
