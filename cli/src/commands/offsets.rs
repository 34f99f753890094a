use crate::commands::{format_amount, format_output};
use crate::config::Config;
use anyhow::Result;
use minezero_core::environmental::validation::require_non_negative;
use minezero_core::environmental::{calculate_offsets, OffsetMode, OffsetRequirements};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OffsetSummary {
    total_emissions: f64,
    strategy: OffsetMode,
    offset_amount: f64,
    remaining: f64,
    trees_required: u64,
    solar_panels_required: u64,
}

pub fn execute(total_emissions: f64, strategy: Option<OffsetMode>, config: &Config) -> Result<()> {
    let total_emissions = require_non_negative("totalEmissions", total_emissions)?;
    let strategy = strategy.unwrap_or(config.offset_mode);

    let requirements = OffsetRequirements::for_emissions(total_emissions);
    let offset_amount = calculate_offsets(total_emissions, strategy);
    let summary = OffsetSummary {
        total_emissions,
        strategy,
        offset_amount,
        remaining: total_emissions - offset_amount,
        trees_required: requirements.trees_required,
        solar_panels_required: requirements.solar_panels_required,
    };

    let rows = vec![
        ("Strategy".to_string(), strategy.to_string()),
        (
            "Total Emissions".to_string(),
            format!("{} kg CO₂", format_amount(total_emissions)),
        ),
        (
            "Offset Amount".to_string(),
            format!("{} kg CO₂", format_amount(offset_amount)),
        ),
        (
            "Remaining".to_string(),
            format!("{} kg CO₂", format_amount(summary.remaining)),
        ),
        (
            "Trees (full plan)".to_string(),
            requirements.trees_required.to_string(),
        ),
        (
            "Solar Panels (full plan)".to_string(),
            requirements.solar_panels_required.to_string(),
        ),
    ];

    format_output(&summary, &rows, &config.output_format, "Offset Simulation")
}
