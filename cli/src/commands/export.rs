use crate::commands::calculate::ActivityArgs;
use crate::commands::print_success;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::ValueEnum;
use minezero_core::environmental::{calculate_emissions, Report};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Markdown,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
        }
    }
}

pub fn render(report: &Report, format: ExportFormat) -> Result<String> {
    Ok(match format {
        ExportFormat::Csv => report.to_csv(),
        ExportFormat::Markdown => report.to_markdown(),
        ExportFormat::Json => report.to_json()?,
    })
}

pub fn execute(
    args: &ActivityArgs,
    format: ExportFormat,
    output: Option<&Path>,
    config: &Config,
) -> Result<()> {
    let input = args.to_input(config)?;
    let result = calculate_emissions(&input)?;
    let report = Report::from_result(&input, &result);
    let contents = render(&report, format)?;

    match output {
        Some(path) => {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!(path = %path.display(), "report exported");
            print_success(&format!("Report written to {}", path.display()));
        }
        None => print!("{contents}"),
    }

    Ok(())
}
