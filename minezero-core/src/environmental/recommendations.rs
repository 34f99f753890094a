use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::environmental::calculator::EmissionBreakdown;
use crate::environmental::emissions_factors::{EmissionSource, MineType};
use crate::error::CalculatorResult;

/// Share of total emissions above which diesel advice switches to high-usage
pub const DIESEL_HIGH_SHARE: f64 = 0.4;
/// Share of total emissions above which electricity advice switches to high-usage
pub const ELECTRICITY_HIGH_SHARE: f64 = 0.3;
/// Share of total emissions above which explosives advice switches to high-usage
pub const EXPLOSIVES_HIGH_SHARE: f64 = 0.2;

const DIESEL_HIGH: &[&str] = &[
    "Implement fleet management systems for optimized routes",
    "Consider electric or hybrid vehicles where feasible",
    "Train operators on fuel-efficient driving techniques",
    "Regular maintenance of equipment to ensure optimal efficiency",
];
const DIESEL_BASELINE: &[&str] = &[
    "Maintain current diesel efficiency practices",
    "Regular equipment maintenance",
    "Optimize hauling routes",
];
const ELECTRICITY_HIGH: &[&str] = &[
    "Conduct energy audit to identify efficiency opportunities",
    "Install smart meters and energy management systems",
    "Implement variable frequency drives on major equipment",
    "Consider on-site renewable energy generation",
];
const ELECTRICITY_BASELINE: &[&str] = &[
    "Install energy-efficient lighting systems",
    "Implement automatic shutdown procedures for idle equipment",
    "Regular maintenance of electrical systems",
];
const EXPLOSIVES_HIGH: &[&str] = &[
    "Review blast design to optimize explosives usage",
    "Implement electronic detonation systems for precise control",
    "Investigate lower-carbon explosive alternatives",
    "Train teams on efficient blasting techniques",
];
const EXPLOSIVES_BASELINE: &[&str] = &[
    "Maintain current explosives management practices",
    "Optimize blast design",
    "Improve fragmentation efficiency",
];

fn high_share_threshold(source: EmissionSource) -> f64 {
    match source {
        EmissionSource::Diesel => DIESEL_HIGH_SHARE,
        EmissionSource::Electricity => ELECTRICITY_HIGH_SHARE,
        EmissionSource::Explosives => EXPLOSIVES_HIGH_SHARE,
    }
}

fn advice_table(source: EmissionSource, high_usage: bool) -> &'static [&'static str] {
    match (source, high_usage) {
        (EmissionSource::Diesel, true) => DIESEL_HIGH,
        (EmissionSource::Diesel, false) => DIESEL_BASELINE,
        (EmissionSource::Electricity, true) => ELECTRICITY_HIGH,
        (EmissionSource::Electricity, false) => ELECTRICITY_BASELINE,
        (EmissionSource::Explosives, true) => EXPLOSIVES_HIGH,
        (EmissionSource::Explosives, false) => EXPLOSIVES_BASELINE,
    }
}

/// Advice per emission source, keyed by category.
///
/// A source whose share of the total strictly exceeds its threshold gets the
/// high-usage set; every other source (including all of them when nothing
/// was emitted) gets the baseline set.
pub fn generate_recommendations(
    breakdown: &EmissionBreakdown,
) -> BTreeMap<EmissionSource, Vec<String>> {
    EmissionSource::ALL
        .into_iter()
        .map(|source| {
            let high_usage = breakdown.share(source) > high_share_threshold(source);
            let advice = advice_table(source, high_usage)
                .iter()
                .map(|line| line.to_string())
                .collect();
            (source, advice)
        })
        .collect()
}

/// Context handed to a [`SuggestionProvider`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub breakdown: EmissionBreakdown,
    pub mine_type: Option<MineType>,
}

/// Source of improvement suggestions.
///
/// The calculator never calls out to a network service; anything smarter than
/// the static rule table plugs in here.
pub trait SuggestionProvider {
    fn suggest(&self, request: &SuggestionRequest) -> CalculatorResult<Vec<String>>;
}

/// Suggestions drawn from the static rule table
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedAdvisor;

impl SuggestionProvider for RuleBasedAdvisor {
    fn suggest(&self, request: &SuggestionRequest) -> CalculatorResult<Vec<String>> {
        Ok(generate_recommendations(&request.breakdown)
            .into_iter()
            .flat_map(|(source, advice)| {
                advice
                    .into_iter()
                    .map(move |line| format!("{source}: {line}"))
            })
            .collect())
    }
}
