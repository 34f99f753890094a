use crate::commands::{format_amount, print_table};
use crate::config::{Config, OutputFormat};
use anyhow::Result;
use colored::*;
use minezero_core::environmental::{
    project_pathway, MineSize, Pathway, PathwayRequest, ReductionLever,
};
use prettytable::{Cell, Row, Table};

pub fn execute(request: &PathwayRequest, config: &Config) -> Result<()> {
    let years = project_pathway(request)?;

    match config.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&years)?);
        }
        OutputFormat::Text => {
            println!("{}", request.pathway.to_string().bold().green());
            for year in &years {
                println!("{}: {:.2} tCO₂", year.year, year.emissions);
            }
        }
        OutputFormat::Table => {
            println!("\n{}", request.pathway.to_string().bold().green());
            println!("{}", request.pathway.description());
            println!("{}", "=".repeat(50));

            let mut table = Table::new();
            let mut header = vec![
                Cell::new("Year").style_spec("bFg"),
                Cell::new("Emissions").style_spec("bFg"),
            ];
            header.extend(
                ReductionLever::ALL
                    .iter()
                    .map(|lever| Cell::new(&lever.to_string()).style_spec("bFg")),
            );
            table.add_row(Row::new(header));

            for year in &years {
                let mut cells = vec![
                    Cell::new(&year.year.to_string()),
                    Cell::new(&format_amount(year.emissions)),
                ];
                cells.extend(
                    ReductionLever::ALL
                        .iter()
                        .map(|lever| Cell::new(&format_amount(year.lever(*lever)))),
                );
                table.add_row(Row::new(cells));
            }
            table.printstd();

            if let Some(last) = years.last() {
                println!("\n{}", "Final-year reduction mix".bold());
                let rows: Vec<(String, String)> = ReductionLever::ALL
                    .iter()
                    .map(|lever| (lever.to_string(), format_amount(last.lever(*lever))))
                    .collect();
                print_table(&rows);
            }
        }
    }

    Ok(())
}

/// List available pathways and mine sizes
pub fn list() {
    println!("{}", "Pathways".bold().green());
    for pathway in Pathway::ALL {
        println!("  {:<24} {}", pathway.to_string(), pathway.description());
    }
    println!("\n{}", "Mine sizes".bold().green());
    for size in [MineSize::Small, MineSize::Medium, MineSize::Large] {
        println!("  {:<8} x{}", size.to_string(), size.emissions_factor());
    }
}
