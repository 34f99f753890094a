//! Emissions & Credits Calculator
//!
//! Maps one period of mining activity to its emission totals, intensity,
//! carbon-credit eligibility and offset projections. Every call is pure:
//! the same [`EmissionInput`] always produces the same [`EmissionResult`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::environmental::benchmark::BenchmarkComparison;
use crate::environmental::emissions_factors::{
    EmissionFactors, EmissionSource, MineType, CARBON_MARKET_RATE,
};
use crate::environmental::offsets::{OffsetMode, OffsetRequirements};
use crate::environmental::validation::{clamp_non_negative, require_positive};
use crate::error::{CalculatorError, CalculatorResult};

/// Activity data for one calculation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionInput {
    /// Diesel consumed (liters)
    pub diesel: f64,
    /// Electricity consumed (kWh)
    pub electricity: f64,
    /// ANFO-equivalent explosives used (tons)
    pub explosives: f64,
    /// Output for the period (tons)
    pub production: f64,
    /// Target intensity (tCO₂ per ton of output)
    pub target_intensity: f64,
    #[serde(default)]
    pub offset_mode: OffsetMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mine_type: Option<MineType>,
}

impl EmissionInput {
    pub fn new(
        diesel: f64,
        electricity: f64,
        explosives: f64,
        production: f64,
        target_intensity: f64,
        offset_mode: OffsetMode,
    ) -> Self {
        Self {
            diesel,
            electricity,
            explosives,
            production,
            target_intensity,
            offset_mode,
            mine_type: None,
        }
    }

    pub fn with_mine_type(mut self, mine_type: MineType) -> Self {
        self.mine_type = Some(mine_type);
        self
    }

    /// Activity quantity recorded for a source
    pub fn quantity(&self, source: EmissionSource) -> f64 {
        match source {
            EmissionSource::Diesel => self.diesel,
            EmissionSource::Electricity => self.electricity,
            EmissionSource::Explosives => self.explosives,
        }
    }
}

/// Per-source emissions (kg CO₂)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmissionBreakdown {
    pub diesel: f64,
    pub electricity: f64,
    pub explosives: f64,
}

impl EmissionBreakdown {
    pub fn get(&self, source: EmissionSource) -> f64 {
        match source {
            EmissionSource::Diesel => self.diesel,
            EmissionSource::Electricity => self.electricity,
            EmissionSource::Explosives => self.explosives,
        }
    }

    pub fn total(&self) -> f64 {
        self.diesel + self.electricity + self.explosives
    }

    /// Fraction of the total contributed by `source`; 0 when nothing was emitted
    pub fn share(&self, source: EmissionSource) -> f64 {
        let total = self.total();
        if total > 0.0 {
            self.get(source) / total
        } else {
            0.0
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmissionSource, f64)> + '_ {
        EmissionSource::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

/// Labelled value for chart rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

/// Everything derived from one [`EmissionInput`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionResult {
    /// kg CO₂
    pub total_emissions: f64,
    pub emission_breakdown: EmissionBreakdown,
    /// tCO₂ per ton of output
    pub emission_intensity: f64,
    pub is_eligible_for_credits: bool,
    /// tCO₂-equivalent
    pub carbon_credits: f64,
    /// Credits valued at [`CARBON_MARKET_RATE`]
    pub credit_value: f64,
    pub trees_required: u64,
    pub solar_panels_required: u64,
    /// kg CO₂ remaining after the selected offset mode
    pub emissions_after_offset: f64,
    pub reduction_percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<BenchmarkComparison>,
}

impl EmissionResult {
    /// Value of the earned credits at a caller-chosen price.
    ///
    /// `credit_value` always uses the fixed market rate; pages that let the
    /// user override the price re-value through here.
    pub fn credit_value_at(&self, price_per_tonne: f64) -> f64 {
        self.carbon_credits * price_per_tonne
    }

    /// One slice per emission source
    pub fn pie_chart_data(&self) -> Vec<ChartPoint> {
        self.emission_breakdown
            .iter()
            .map(|(source, value)| ChartPoint {
                name: source.to_string(),
                value,
            })
            .collect()
    }

    /// Gross emissions against emissions after offset
    pub fn trend_data(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint {
                name: "Total Emissions".to_string(),
                value: self.total_emissions,
            },
            ChartPoint {
                name: "After Offset".to_string(),
                value: self.emissions_after_offset,
            },
        ]
    }
}

/// Calculate emissions, credits and offsets for one period of activity.
///
/// # Errors
/// Returns [`CalculatorError::Validation`](crate::error::CalculatorError::Validation)
/// when `production` or `target_intensity` is not a positive, finite number,
/// or when the activity quantities total to infinity.
/// Negative activity quantities are clamped to zero; NaN activity quantities
/// propagate to the outputs.
pub fn calculate_emissions(input: &EmissionInput) -> CalculatorResult<EmissionResult> {
    let production = require_positive("production", input.production)?;
    let target_intensity = require_positive("targetIntensity", input.target_intensity)?;

    let factors = EmissionFactors::STANDARD;
    let breakdown = EmissionBreakdown {
        diesel: clamp_non_negative("diesel", input.diesel) * factors.diesel,
        electricity: clamp_non_negative("electricity", input.electricity) * factors.electricity,
        explosives: clamp_non_negative("explosives", input.explosives) * factors.explosives,
    };
    let total_emissions = breakdown.total();
    if total_emissions.is_infinite() {
        warn!(total_emissions, "activity quantities overflow the emission total");
        return Err(CalculatorError::Validation(
            "activity quantities are too large to total".to_string(),
        ));
    }

    // kg -> tonnes folded into the intensity
    let emission_intensity = total_emissions / production / 1000.0;

    // Ties are not eligible
    let is_eligible_for_credits = emission_intensity < target_intensity;
    let carbon_credits = if is_eligible_for_credits {
        (target_intensity - emission_intensity) * production
    } else {
        0.0
    };
    let credit_value = carbon_credits * CARBON_MARKET_RATE;

    let requirements = OffsetRequirements::for_emissions(total_emissions);
    let offset = requirements.offset_for(input.offset_mode);
    // Floor at zero without swallowing NaN
    let remaining = total_emissions - offset;
    let emissions_after_offset = if remaining < 0.0 { 0.0 } else { remaining };

    let reduction_percentage = if total_emissions == 0.0 {
        0.0
    } else {
        (total_emissions - emissions_after_offset) / total_emissions * 100.0
    };

    let benchmark = input
        .mine_type
        .map(|mine_type| BenchmarkComparison::compare(emission_intensity, mine_type));

    debug!(
        total_emissions,
        emission_intensity,
        is_eligible_for_credits,
        carbon_credits,
        offset_mode = %input.offset_mode,
        emissions_after_offset,
        "calculated emissions"
    );

    Ok(EmissionResult {
        total_emissions,
        emission_breakdown: breakdown,
        emission_intensity,
        is_eligible_for_credits,
        carbon_credits,
        credit_value,
        trees_required: requirements.trees_required,
        solar_panels_required: requirements.solar_panels_required,
        emissions_after_offset,
        reduction_percentage,
        benchmark,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environmental::benchmark::BenchmarkStatus;

    fn sample_input(mode: OffsetMode) -> EmissionInput {
        EmissionInput::new(1000.0, 5000.0, 2.0, 10000.0, 0.5, mode)
    }

    #[test]
    fn test_breakdown_uses_fixed_factors() {
        let result = calculate_emissions(&sample_input(OffsetMode::Combined)).unwrap();
        assert!((result.emission_breakdown.diesel - 2600.0).abs() < 1e-9);
        assert!((result.emission_breakdown.electricity - 3580.0).abs() < 1e-9);
        assert!((result.emission_breakdown.explosives - 340.0).abs() < 1e-9);
        assert!((result.total_emissions - 6520.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_activity_is_clamped() {
        let mut input = sample_input(OffsetMode::Trees);
        input.diesel = -100.0;
        let result = calculate_emissions(&input).unwrap();
        assert_eq!(result.emission_breakdown.diesel, 0.0);
        assert!((result.total_emissions - 3920.0).abs() < 1e-9);
    }

    #[test]
    fn test_nan_activity_propagates() {
        let mut input = sample_input(OffsetMode::Trees);
        input.electricity = f64::NAN;
        let result = calculate_emissions(&input).unwrap();
        assert!(result.total_emissions.is_nan());
        assert!(result.emission_intensity.is_nan());
        assert!(!result.is_eligible_for_credits);
        assert!(result.emissions_after_offset.is_nan());
        assert!(result.reduction_percentage.is_nan());
    }

    #[test]
    fn test_overflowing_total_is_rejected() {
        let mut input = EmissionInput::new(1e308, 0.0, 0.0, 1000.0, 0.5, OffsetMode::Trees);
        assert!(calculate_emissions(&input).unwrap_err().is_validation());

        input.diesel = f64::INFINITY;
        assert!(calculate_emissions(&input).unwrap_err().is_validation());
    }

    #[test]
    fn test_rejects_non_positive_target() {
        let mut input = sample_input(OffsetMode::Solar);
        input.target_intensity = 0.0;
        assert!(calculate_emissions(&input).unwrap_err().is_validation());
        input.target_intensity = -0.2;
        assert!(calculate_emissions(&input).is_err());
    }

    #[test]
    fn test_benchmark_attached_when_mine_type_given() {
        let input = sample_input(OffsetMode::Combined).with_mine_type(MineType::Underground);
        let result = calculate_emissions(&input).unwrap();
        let benchmark = result.benchmark.unwrap();
        assert_eq!(benchmark.benchmark, 0.60);
        assert_eq!(benchmark.status, BenchmarkStatus::Below);

        let without = calculate_emissions(&sample_input(OffsetMode::Combined)).unwrap();
        assert!(without.benchmark.is_none());
    }

    #[test]
    fn test_chart_series() {
        let result = calculate_emissions(&sample_input(OffsetMode::Trees)).unwrap();
        let pie = result.pie_chart_data();
        assert_eq!(pie.len(), 3);
        assert_eq!(pie[0].name, "Diesel");
        assert_eq!(pie[2].name, "Explosives");

        let trend = result.trend_data();
        assert_eq!(trend[0].value, result.total_emissions);
        assert_eq!(trend[1].value, result.emissions_after_offset);
    }

    #[test]
    fn test_credit_value_at_custom_price() {
        let result = calculate_emissions(&sample_input(OffsetMode::Combined)).unwrap();
        assert_eq!(result.credit_value_at(CARBON_MARKET_RATE), result.credit_value);
        assert!((result.credit_value_at(0.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_input_json_uses_camel_case() {
        let json = r#"{
            "diesel": 1000, "electricity": 5000, "explosives": 2,
            "production": 10000, "targetIntensity": 0.5,
            "offsetMode": "solar", "mineType": "openCast"
        }"#;
        let input: EmissionInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.offset_mode, OffsetMode::Solar);
        assert_eq!(input.mine_type, Some(MineType::OpenCast));
    }
}
