use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalculatorError;

/// kg CO₂ per liter of diesel burned
pub const DIESEL_KG_CO2_PER_LITER: f64 = 2.6;
/// kg CO₂ per kWh of grid electricity
pub const ELECTRICITY_KG_CO2_PER_KWH: f64 = 0.716;
/// kg CO₂ per ton of ANFO-equivalent explosives
pub const EXPLOSIVES_KG_CO2_PER_TON: f64 = 170.0;

/// kg CO₂ absorbed per planted tree per year
pub const TREE_KG_CO2_PER_YEAR: f64 = 25.0;
/// kg CO₂ offset per installed solar panel per year
pub const SOLAR_PANEL_KG_CO2_PER_YEAR: f64 = 250.0;

/// Open-cast mine benchmark intensity (tCO₂/ton)
pub const OPEN_CAST_BENCHMARK: f64 = 0.45;
/// Underground mine benchmark intensity (tCO₂/ton)
pub const UNDERGROUND_BENCHMARK: f64 = 0.60;

/// Reference carbon credit price (currency units per tonne CO₂)
pub const CARBON_MARKET_RATE: f64 = 300.0;

/// Activity sources that contribute to a mine's emissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmissionSource {
    /// Diesel burned by haulage and equipment (liters)
    Diesel,
    /// Grid electricity (kWh)
    Electricity,
    /// ANFO-equivalent explosives (tons)
    Explosives,
}

impl EmissionSource {
    /// Every source, in reporting order
    pub const ALL: [EmissionSource; 3] = [
        EmissionSource::Diesel,
        EmissionSource::Electricity,
        EmissionSource::Explosives,
    ];

    /// Unit the activity quantity is measured in
    pub fn unit(&self) -> &'static str {
        match self {
            EmissionSource::Diesel => "liters",
            EmissionSource::Electricity => "kWh",
            EmissionSource::Explosives => "tons",
        }
    }
}

impl fmt::Display for EmissionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmissionSource::Diesel => write!(f, "Diesel"),
            EmissionSource::Electricity => write!(f, "Electricity"),
            EmissionSource::Explosives => write!(f, "Explosives"),
        }
    }
}

/// Conversion factors from activity quantity to kg CO₂
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactors {
    /// kg CO₂ per liter
    pub diesel: f64,
    /// kg CO₂ per kWh
    pub electricity: f64,
    /// kg CO₂ per ton
    pub explosives: f64,
}

impl EmissionFactors {
    pub const STANDARD: EmissionFactors = EmissionFactors {
        diesel: DIESEL_KG_CO2_PER_LITER,
        electricity: ELECTRICITY_KG_CO2_PER_KWH,
        explosives: EXPLOSIVES_KG_CO2_PER_TON,
    };

    /// Get the factor for a single source
    pub fn factor_for(&self, source: EmissionSource) -> f64 {
        match source {
            EmissionSource::Diesel => self.diesel,
            EmissionSource::Electricity => self.electricity,
            EmissionSource::Explosives => self.explosives,
        }
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Annual absorption/avoidance rates of the supported offset mechanisms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonOffsetRates {
    /// kg CO₂ per tree per year
    pub tree: f64,
    /// kg CO₂ per solar panel per year
    pub solar_panel: f64,
}

impl CarbonOffsetRates {
    pub const STANDARD: CarbonOffsetRates = CarbonOffsetRates {
        tree: TREE_KG_CO2_PER_YEAR,
        solar_panel: SOLAR_PANEL_KG_CO2_PER_YEAR,
    };
}

impl Default for CarbonOffsetRates {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Mining method, used to pick the industry benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MineType {
    OpenCast,
    Underground,
}

impl MineType {
    /// Industry benchmark intensity for this mine type (tCO₂/ton)
    pub fn benchmark_intensity(&self) -> f64 {
        match self {
            MineType::OpenCast => OPEN_CAST_BENCHMARK,
            MineType::Underground => UNDERGROUND_BENCHMARK,
        }
    }
}

impl fmt::Display for MineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MineType::OpenCast => write!(f, "Open-cast"),
            MineType::Underground => write!(f, "Underground"),
        }
    }
}

impl FromStr for MineType {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "opencast" | "surface" => Ok(MineType::OpenCast),
            "underground" => Ok(MineType::Underground),
            other => Err(CalculatorError::Validation(format!(
                "unknown mine type '{other}', expected openCast or underground"
            ))),
        }
    }
}
