use crate::commands::{format_output, print_warning};
use crate::config::Config;
use anyhow::{Context, Result};
use minezero_core::environmental::validation::require_non_negative;
use minezero_core::environmental::{BenchmarkComparison, MineType};

pub fn execute(intensity: f64, mine_type: Option<MineType>, config: &Config) -> Result<()> {
    let intensity = require_non_negative("intensity", intensity)?;
    let mine_type = mine_type
        .or(config.mine_type)
        .context("--mine-type is required when no default mine_type is configured")?;

    let comparison = BenchmarkComparison::compare(intensity, mine_type);
    let rows = vec![
        ("Mine Type".to_string(), mine_type.to_string()),
        (
            "Benchmark".to_string(),
            format!("{} tCO₂/ton", comparison.benchmark),
        ),
        ("Intensity".to_string(), format!("{intensity} tCO₂/ton")),
        ("Gap".to_string(), format!("{:+.4} tCO₂/ton", comparison.gap)),
        (
            "Of Benchmark".to_string(),
            format!("{:.1}%", comparison.percent_of_benchmark),
        ),
        ("Status".to_string(), comparison.status.to_string()),
    ];

    format_output(&comparison, &rows, &config.output_format, "Industry Benchmark")?;

    if !comparison.outperforms_industry() {
        print_warning("Intensity is not below the industry benchmark");
    }
    Ok(())
}
