use crate::commands::{format_amount, format_output, print_info};
use crate::config::{Config, OutputFormat};
use anyhow::Result;
use minezero_core::environmental::CreditPosition;

pub fn execute(
    actual_intensity: f64,
    target_intensity: f64,
    production: f64,
    price: Option<f64>,
    config: &Config,
) -> Result<()> {
    let price = price.unwrap_or(config.credit_price);
    let position = CreditPosition::assess(actual_intensity, target_intensity, production, price)?;

    let verb = if position.is_surplus() { "Earned" } else { "Needed" };
    let rows = vec![
        (
            "Target Intensity".to_string(),
            format!("{target_intensity} tCO₂/ton"),
        ),
        (
            "Actual Intensity".to_string(),
            format!("{actual_intensity} tCO₂/ton"),
        ),
        (
            "Production".to_string(),
            format!("{} tons", format_amount(production)),
        ),
        (
            format!("Credits {verb}"),
            format!("{} tons", format_amount(position.credits)),
        ),
        (
            "Credit Value".to_string(),
            format_amount(position.trade_value),
        ),
        ("Market Rate".to_string(), format!("{price}/t")),
        ("Credit Type".to_string(), position.credit_type.to_string()),
        (
            "Compliance".to_string(),
            format!("{:.1}%", position.compliance_percentage),
        ),
    ];

    format_output(&position, &rows, &config.output_format, "Carbon Credit Position")?;
    if config.output_format != OutputFormat::Json {
        print_info(position.recommendation());
    }
    Ok(())
}
