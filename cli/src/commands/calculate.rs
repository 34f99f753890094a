use crate::commands::{format_amount, format_output};
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use minezero_core::environmental::validation::require_non_negative;
use minezero_core::environmental::{
    calculate_emissions, EmissionInput, EmissionResult, MineType, OffsetMode,
};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Activity inputs shared by `calculate` and `export`
#[derive(Args, Debug, Clone, Default)]
pub struct ActivityArgs {
    /// Read the whole input from a JSON file (camelCase fields) instead of flags
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Diesel consumed (liters)
    #[arg(long, default_value_t = 0.0)]
    pub diesel: f64,

    /// Electricity consumed (kWh)
    #[arg(long, default_value_t = 0.0)]
    pub electricity: f64,

    /// Explosives used (tons of ANFO)
    #[arg(long, default_value_t = 0.0)]
    pub explosives: f64,

    /// Output for the period (tons)
    #[arg(long)]
    pub production: Option<f64>,

    /// Target intensity (tCO₂ per ton)
    #[arg(long = "target", value_name = "TCO2_PER_TON")]
    pub target_intensity: Option<f64>,

    /// trees, solar or combined
    #[arg(long)]
    pub offset_mode: Option<OffsetMode>,

    /// openCast or underground
    #[arg(long)]
    pub mine_type: Option<MineType>,
}

impl ActivityArgs {
    /// Build and validate a calculator input, filling gaps from the config
    pub fn to_input(&self, config: &Config) -> Result<EmissionInput> {
        let mut input = match &self.input {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read input file {}", path.display()))?;
                serde_json::from_str::<EmissionInput>(&contents)
                    .with_context(|| format!("Failed to parse input file {}", path.display()))?
            }
            None => {
                let production = self
                    .production
                    .context("--production is required unless --input is given")?;
                let target = self
                    .target_intensity
                    .context("--target is required unless --input is given")?;
                EmissionInput::new(
                    self.diesel,
                    self.electricity,
                    self.explosives,
                    production,
                    target,
                    self.offset_mode.unwrap_or(config.offset_mode),
                )
            }
        };

        if self.input.is_some() {
            if let Some(mode) = self.offset_mode {
                input.offset_mode = mode;
            }
        }
        if let Some(mine_type) = self.mine_type.or(input.mine_type).or(config.mine_type) {
            input.mine_type = Some(mine_type);
        }

        // Form-layer checks: the calculator would clamp these silently
        require_non_negative("diesel", input.diesel)?;
        require_non_negative("electricity", input.electricity)?;
        require_non_negative("explosives", input.explosives)?;

        Ok(input)
    }
}

pub fn result_rows(result: &EmissionResult, credit_price: f64) -> Vec<(String, String)> {
    let mut rows = vec![
        (
            "Diesel Emissions".to_string(),
            format!("{} kg CO₂", format_amount(result.emission_breakdown.diesel)),
        ),
        (
            "Electricity Emissions".to_string(),
            format!("{} kg CO₂", format_amount(result.emission_breakdown.electricity)),
        ),
        (
            "Explosives Emissions".to_string(),
            format!("{} kg CO₂", format_amount(result.emission_breakdown.explosives)),
        ),
        (
            "Total Emissions".to_string(),
            format!("{} kg CO₂", format_amount(result.total_emissions)),
        ),
        (
            "Emission Intensity".to_string(),
            format!("{:.6} tCO₂/ton", result.emission_intensity),
        ),
        (
            "Eligible For Credits".to_string(),
            if result.is_eligible_for_credits { "Yes" } else { "No" }.to_string(),
        ),
        (
            "Carbon Credits".to_string(),
            format!("{} tCO₂e", format_amount(result.carbon_credits)),
        ),
        (
            "Credit Value".to_string(),
            format!(
                "{} at {}/t",
                format_amount(result.credit_value_at(credit_price)),
                credit_price
            ),
        ),
        ("Trees Required".to_string(), result.trees_required.to_string()),
        (
            "Solar Panels Required".to_string(),
            result.solar_panels_required.to_string(),
        ),
        (
            "Emissions After Offset".to_string(),
            format!("{} kg CO₂", format_amount(result.emissions_after_offset)),
        ),
        (
            "Reduction".to_string(),
            format!("{:.1}%", result.reduction_percentage),
        ),
    ];

    if let Some(benchmark) = &result.benchmark {
        rows.push((
            format!("{} Benchmark", benchmark.mine_type),
            format!(
                "{} tCO₂/ton ({}, {:.1}% of benchmark)",
                benchmark.benchmark, benchmark.status, benchmark.percent_of_benchmark
            ),
        ));
    }

    rows
}

pub fn execute(args: &ActivityArgs, config: &Config) -> Result<()> {
    let input = args.to_input(config)?;
    let result = calculate_emissions(&input)?;
    info!(
        total_emissions = result.total_emissions,
        eligible = result.is_eligible_for_credits,
        "calculation complete"
    );

    let rows = result_rows(&result, config.credit_price);
    format_output(&result, &rows, &config.output_format, "Emission Results")?;

    if config.output_format != crate::config::OutputFormat::Json {
        let verdict = if result.is_eligible_for_credits {
            "Below target intensity: eligible for carbon credits".green()
        } else {
            "At or above target intensity: not eligible for carbon credits".yellow()
        };
        println!("\n{verdict}");
    }

    Ok(())
}
