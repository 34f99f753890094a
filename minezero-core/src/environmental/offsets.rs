use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::environmental::emissions_factors::CarbonOffsetRates;
use crate::error::CalculatorError;

/// Offset simulation applied to gross emissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetMode {
    /// Plant enough trees to cover all emissions
    Trees,
    /// Install enough solar panels to cover all emissions
    Solar,
    /// Half of each full plan
    #[default]
    Combined,
}

impl fmt::Display for OffsetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OffsetMode::Trees => write!(f, "trees"),
            OffsetMode::Solar => write!(f, "solar"),
            OffsetMode::Combined => write!(f, "combined"),
        }
    }
}

impl FromStr for OffsetMode {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trees" | "tree" => Ok(OffsetMode::Trees),
            "solar" => Ok(OffsetMode::Solar),
            "combined" | "blend" => Ok(OffsetMode::Combined),
            other => Err(CalculatorError::Validation(format!(
                "unknown offset mode '{other}', expected trees, solar or combined"
            ))),
        }
    }
}

/// Independent full-offset plans for a given amount of emissions.
///
/// Each count alone covers the whole amount; they are alternatives, not
/// parts of one plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffsetRequirements {
    pub trees_required: u64,
    pub solar_panels_required: u64,
    /// kg CO₂ absorbed by `trees_required` trees
    pub tree_offset_kg: f64,
    /// kg CO₂ offset by `solar_panels_required` panels
    pub solar_offset_kg: f64,
}

impl OffsetRequirements {
    /// Size both plans for `total_emissions` kg CO₂ at the standard rates
    pub fn for_emissions(total_emissions: f64) -> Self {
        Self::with_rates(total_emissions, &CarbonOffsetRates::STANDARD)
    }

    pub fn with_rates(total_emissions: f64, rates: &CarbonOffsetRates) -> Self {
        let trees = (total_emissions / rates.tree).ceil();
        let panels = (total_emissions / rates.solar_panel).ceil();

        Self {
            // Saturating casts: NaN maps to 0, out-of-range to u64::MAX
            trees_required: trees as u64,
            solar_panels_required: panels as u64,
            tree_offset_kg: trees * rates.tree,
            solar_offset_kg: panels * rates.solar_panel,
        }
    }

    /// Offset amount the given mode would apply, before capping
    pub fn offset_for(&self, mode: OffsetMode) -> f64 {
        match mode {
            OffsetMode::Trees => self.tree_offset_kg,
            OffsetMode::Solar => self.solar_offset_kg,
            OffsetMode::Combined => self.tree_offset_kg / 2.0 + self.solar_offset_kg / 2.0,
        }
    }
}

/// Amount of CO₂ (kg) the strategy offsets, capped at `total_emissions`.
///
/// Agrees with the offset branch of
/// [`calculate_emissions`](crate::environmental::calculator::calculate_emissions):
/// `total - calculate_offsets(total, mode)` equals `emissions_after_offset`.
pub fn calculate_offsets(total_emissions: f64, strategy: OffsetMode) -> f64 {
    let offset = OffsetRequirements::for_emissions(total_emissions).offset_for(strategy);
    offset.min(total_emissions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirements_round_up() {
        let req = OffsetRequirements::for_emissions(6520.0);
        assert_eq!(req.trees_required, 261);
        assert_eq!(req.solar_panels_required, 27);
        assert_eq!(req.tree_offset_kg, 6525.0);
        assert_eq!(req.solar_offset_kg, 6750.0);
    }

    #[test]
    fn test_combined_is_half_of_each_plan() {
        let req = OffsetRequirements::for_emissions(6520.0);
        assert_eq!(req.offset_for(OffsetMode::Combined), 6637.5);
    }

    #[test]
    fn test_offsets_capped_at_total() {
        assert_eq!(calculate_offsets(6520.0, OffsetMode::Combined), 6520.0);
        assert_eq!(calculate_offsets(100.0, OffsetMode::Trees), 100.0);
        assert_eq!(calculate_offsets(110.0, OffsetMode::Solar), 110.0);
    }

    #[test]
    fn test_zero_emissions_need_nothing() {
        let req = OffsetRequirements::for_emissions(0.0);
        assert_eq!(req.trees_required, 0);
        assert_eq!(req.solar_panels_required, 0);
        assert_eq!(calculate_offsets(0.0, OffsetMode::Combined), 0.0);
    }

    #[test]
    fn test_offset_mode_parsing() {
        assert_eq!("Trees".parse::<OffsetMode>().unwrap(), OffsetMode::Trees);
        assert_eq!("solar".parse::<OffsetMode>().unwrap(), OffsetMode::Solar);
        assert_eq!("combined".parse::<OffsetMode>().unwrap(), OffsetMode::Combined);
        assert!("wind".parse::<OffsetMode>().is_err());
    }
}
