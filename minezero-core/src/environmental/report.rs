use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::environmental::calculator::{EmissionInput, EmissionResult};
use crate::environmental::emissions_factors::{EmissionFactors, EmissionSource};
use crate::error::CalculatorResult;

/// Single labelled line of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub label: String,
    pub value: String,
}

/// Write-only export of a calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Build a report from the raw input and its result
    pub fn from_result(input: &EmissionInput, result: &EmissionResult) -> Self {
        let factors = EmissionFactors::STANDARD;
        let mut rows = Vec::new();
        let mut push = |label: &str, value: String| {
            rows.push(ReportRow {
                label: label.to_string(),
                value,
            })
        };

        for source in EmissionSource::ALL {
            push(
                &format!("{source} Used"),
                format!("{} {}", input.quantity(source), source.unit()),
            );
        }
        push("Production", format!("{} tons", input.production));
        push("Target Intensity", format!("{} tCO2/ton", input.target_intensity));
        push("Offset Mode", input.offset_mode.to_string());

        for source in EmissionSource::ALL {
            push(
                &format!("{source} Emissions"),
                format!(
                    "{:.2} kg CO2 ({} kg/{})",
                    result.emission_breakdown.get(source),
                    factors.factor_for(source),
                    source.unit().trim_end_matches('s')
                ),
            );
        }
        push("Total Emissions", format!("{:.2} kg CO2", result.total_emissions));
        push("Emission Intensity", format!("{:.6} tCO2/ton", result.emission_intensity));
        push(
            "Eligible For Credits",
            if result.is_eligible_for_credits { "Yes" } else { "No" }.to_string(),
        );
        push("Carbon Credits", format!("{:.2} tCO2e", result.carbon_credits));
        push("Credit Value", format!("{:.2}", result.credit_value));
        push("Trees Required", result.trees_required.to_string());
        push("Solar Panels Required", result.solar_panels_required.to_string());
        push(
            "Emissions After Offset",
            format!("{:.2} kg CO2", result.emissions_after_offset),
        );
        push("Reduction", format!("{:.1}%", result.reduction_percentage));
        if let Some(benchmark) = &result.benchmark {
            push(
                "Industry Benchmark",
                format!(
                    "{} tCO2/ton ({}, {})",
                    benchmark.benchmark, benchmark.mine_type, benchmark.status
                ),
            );
        }

        Self {
            title: "MineZero Emissions Report".to_string(),
            generated_at: Utc::now(),
            rows,
        }
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }

    /// `label,value` lines with a header row
    pub fn to_csv(&self) -> String {
        let mut out = String::from("Metric,Value\n");
        for row in &self.rows {
            out.push_str(&csv_field(&row.label));
            out.push(',');
            out.push_str(&csv_field(&row.value));
            out.push('\n');
        }
        out
    }

    pub fn to_markdown(&self) -> String {
        let mut out = format!(
            "# {}\n\n_Generated {}_\n\n| Metric | Value |\n| --- | --- |\n",
            self.title,
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        for row in &self.rows {
            out.push_str(&format!(
                "| {} | {} |\n",
                row.label.replace('|', "\\|"),
                row.value.replace('|', "\\|")
            ));
        }
        out
    }

    pub fn to_json(&self) -> CalculatorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environmental::calculator::calculate_emissions;
    use crate::environmental::emissions_factors::MineType;
    use crate::environmental::offsets::OffsetMode;

    fn sample_report() -> Report {
        let input = EmissionInput::new(1000.0, 5000.0, 2.0, 10000.0, 0.5, OffsetMode::Combined)
            .with_mine_type(MineType::OpenCast);
        let result = calculate_emissions(&input).unwrap();
        Report::from_result(&input, &result)
    }

    #[test]
    fn test_report_rows() {
        let report = sample_report();
        assert_eq!(report.value("Total Emissions"), Some("6520.00 kg CO2"));
        assert_eq!(report.value("Trees Required"), Some("261"));
        assert_eq!(report.value("Solar Panels Required"), Some("27"));
        assert_eq!(report.value("Eligible For Credits"), Some("Yes"));
        assert_eq!(report.value("Reduction"), Some("100.0%"));
        assert!(report.value("Industry Benchmark").is_some());
    }

    #[test]
    fn test_csv_export() {
        let csv = sample_report().to_csv();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Metric,Value"));
        assert!(csv.contains("Offset Mode,combined\n"));
        // Benchmark value contains commas and must be quoted
        assert!(csv.contains("Industry Benchmark,\"0.45 tCO2/ton (Open-cast, Below benchmark)\""));
    }

    #[test]
    fn test_markdown_export() {
        let md = sample_report().to_markdown();
        assert!(md.starts_with("# MineZero Emissions Report"));
        assert!(md.contains("| Trees Required | 261 |"));
    }

    #[test]
    fn test_csv_field_escaping() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a \"quoted\" word"), "\"a \"\"quoted\"\" word\"");
    }
}
