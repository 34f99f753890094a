use crate::commands::calculate::ActivityArgs;
use crate::config::{Config, OutputFormat};
use anyhow::Result;
use colored::*;
use minezero_core::environmental::{
    calculate_emissions, generate_recommendations, RuleBasedAdvisor, SuggestionProvider,
    SuggestionRequest,
};

pub fn execute(args: &ActivityArgs, config: &Config) -> Result<()> {
    let input = args.to_input(config)?;
    let result = calculate_emissions(&input)?;
    let breakdown = result.emission_breakdown;

    match config.output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&generate_recommendations(&breakdown))?
            );
        }
        OutputFormat::Text => {
            let request = SuggestionRequest {
                breakdown,
                mine_type: input.mine_type,
            };
            for line in RuleBasedAdvisor.suggest(&request)? {
                println!("{line}");
            }
        }
        OutputFormat::Table => {
            for (source, advice) in generate_recommendations(&breakdown) {
                println!(
                    "\n{} ({:.1}% of emissions)",
                    source.to_string().bold().green(),
                    breakdown.share(source) * 100.0
                );
                for line in advice {
                    println!("  • {line}");
                }
            }
        }
    }

    Ok(())
}
