use crate::commands::{print_error, print_info, print_success, print_warning};
use crate::config::{Config, OutputFormat};
use anyhow::Result;
use colored::*;
use minezero_core::environmental::{MineType, OffsetMode};
use prettytable::{Cell, Row, Table};
use std::path::Path;

pub fn show(config: &Config) -> Result<()> {
    match &config.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        _ => {
            println!("\n{}", "Current Configuration".bold().green());
            println!("{}", "=".repeat(50));

            let mut table = Table::new();
            table.add_row(Row::new(vec![
                Cell::new("Setting").style_spec("bFg"),
                Cell::new("Value").style_spec("bFg"),
            ]));
            table.add_row(Row::new(vec![
                Cell::new("Output Format"),
                Cell::new(&format!("{:?}", config.output_format)),
            ]));
            table.add_row(Row::new(vec![
                Cell::new("Credit Price"),
                Cell::new(&format!("{}/t", config.credit_price)).style_spec("Fy"),
            ]));
            table.add_row(Row::new(vec![
                Cell::new("Offset Mode"),
                Cell::new(&config.offset_mode.to_string()),
            ]));
            table.add_row(Row::new(vec![
                Cell::new("Mine Type"),
                Cell::new(
                    &config
                        .mine_type
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "(none)".to_string()),
                ),
            ]));
            table.add_row(Row::new(vec![
                Cell::new("Debug Mode"),
                Cell::new(if config.debug { "Enabled" } else { "Disabled" })
                    .style_spec(if config.debug { "Fy" } else { "Fr" }),
            ]));

            table.printstd();

            println!(
                "\nConfig file: {}",
                Config::config_path()?.display().to_string().cyan()
            );
        }
    }

    Ok(())
}

/// Apply `key = value` to a config. Returns a description of the change.
pub fn apply(config: &mut Config, key: &str, value: &str) -> Result<String> {
    match key.to_lowercase().as_str() {
        "format" | "output" | "output_format" => {
            config.output_format = value.parse::<OutputFormat>()?;
            Ok(format!("Output format set to: {:?}", config.output_format))
        }
        "price" | "credit_price" => {
            let price: f64 = value
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid credit price. Must be a number."))?;
            if !price.is_finite() || price < 0.0 {
                anyhow::bail!("Invalid credit price. Must not be negative.");
            }
            config.credit_price = price;
            Ok(format!("Set credit price to: {price}/t"))
        }
        "offset" | "offset_mode" => {
            config.offset_mode = value.parse::<OffsetMode>()?;
            Ok(format!("Set offset mode to: {}", config.offset_mode))
        }
        "mine" | "mine_type" => {
            if matches!(value.to_lowercase().as_str(), "none" | "") {
                config.mine_type = None;
                return Ok("Cleared default mine type".to_string());
            }
            let mine_type = value.parse::<MineType>()?;
            config.mine_type = Some(mine_type);
            Ok(format!("Set mine type to: {mine_type}"))
        }
        "debug" => match value.to_lowercase().as_str() {
            "true" | "on" | "1" | "yes" => {
                config.debug = true;
                Ok("Debug mode enabled".to_string())
            }
            "false" | "off" | "0" | "no" => {
                config.debug = false;
                Ok("Debug mode disabled".to_string())
            }
            _ => anyhow::bail!("Invalid debug value. Use: true/false, on/off, yes/no, 1/0"),
        },
        _ => anyhow::bail!("Unknown configuration key: {key}"),
    }
}

pub fn set(key: &str, value: &str) -> Result<()> {
    match set_at(&Config::config_path()?, key, value) {
        Ok(message) => print_success(&message),
        Err(e) => {
            print_error(&e.to_string());
            print_info("Valid keys: output_format, credit_price, offset_mode, mine_type, debug");
        }
    }
    Ok(())
}

/// Apply `key = value` to the file at `path` and write it back
pub fn set_at(path: &Path, key: &str, value: &str) -> Result<String> {
    let mut config = Config::load_file(path)?;
    let message = apply(&mut config, key, value)?;
    config.save_to(path)?;
    Ok(message)
}

pub fn reset(assume_yes: bool) -> Result<()> {
    print_warning("This will reset all configuration to default values.");

    if !assume_yes
        && !dialoguer::Confirm::new()
            .with_prompt("Are you sure?")
            .default(false)
            .interact()?
    {
        println!("Reset cancelled.");
        return Ok(());
    }

    let config = reset_at(&Config::config_path()?)?;

    print_success("Configuration reset to defaults");
    show(&config)?;

    Ok(())
}

/// Overwrite the file at `path` with defaults, whatever it held before
pub fn reset_at(path: &Path) -> Result<Config> {
    let config = Config::default();
    config.save_to(path)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_known_keys() {
        let mut config = Config::default();
        apply(&mut config, "credit_price", "450").unwrap();
        apply(&mut config, "offset_mode", "trees").unwrap();
        apply(&mut config, "mine_type", "underground").unwrap();
        apply(&mut config, "format", "json").unwrap();
        apply(&mut config, "debug", "on").unwrap();

        assert_eq!(config.credit_price, 450.0);
        assert_eq!(config.offset_mode, OffsetMode::Trees);
        assert_eq!(config.mine_type, Some(MineType::Underground));
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.debug);

        apply(&mut config, "mine_type", "none").unwrap();
        assert_eq!(config.mine_type, None);
    }

    #[test]
    fn test_apply_rejects_bad_values() {
        let mut config = Config::default();
        assert!(apply(&mut config, "credit_price", "-5").is_err());
        assert!(apply(&mut config, "credit_price", "cheap").is_err());
        assert!(apply(&mut config, "offset_mode", "wind").is_err());
        assert!(apply(&mut config, "rpc_url", "x").is_err());
        assert_eq!(config, Config::default());
    }
}
