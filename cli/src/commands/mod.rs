pub mod benchmark;
pub mod calculate;
pub mod config;
pub mod credits;
pub mod export;
pub mod offsets;
pub mod pathway;
pub mod recommend;

use crate::config::OutputFormat;
use anyhow::Result;
use colored::*;
use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Format output based on user preference.
///
/// `rows` is the human-readable rendering used for table and text output;
/// JSON output serializes `data` directly.
pub fn format_output<T: Serialize>(
    data: &T,
    rows: &[(String, String)],
    format: &OutputFormat,
    title: &str,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Text => {
            println!("{}", title.bold().green());
            println!("{}", "=".repeat(title.len()));
            for (label, value) in rows {
                println!("{label}: {value}");
            }
        }
        OutputFormat::Table => {
            println!("\n{}", title.bold().green());
            println!("{}", "=".repeat(50));
            print_table(rows);
        }
    }
    Ok(())
}

/// Print a two-column table
pub fn print_table(rows: &[(String, String)]) {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Metric").style_spec("bFg"),
        Cell::new("Value").style_spec("bFg"),
    ]));
    for (label, value) in rows {
        table.add_row(Row::new(vec![Cell::new(label), Cell::new(value)]));
    }
    table.printstd();
}

/// Print success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

/// Print error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

/// Print warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Print info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message.blue());
}

/// Thousands-separated amount with two decimals
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{:.2}", value.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1_498_044.0), "1,498,044.00");
        assert_eq!(format_amount(999.5), "999.50");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-12345.678), "-12,345.68");
    }
}
