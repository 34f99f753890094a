//! Carbon neutrality pathway projections
//!
//! A pathway weights five reduction levers. Over the projection horizon each
//! lever ramps linearly to its full weight, so by the final year the mine's
//! emissions are cut by the sum of the weights.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::environmental::validation::require_non_negative;
use crate::error::{CalculatorError, CalculatorResult};

pub const DEFAULT_PROJECTION_YEARS: u32 = 10;
pub const DEFAULT_START_YEAR: i32 = 2024;

/// Reduction levers, in the order pathway weights are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReductionLever {
    CleanTech,
    Afforestation,
    Renewables,
    EnergyEfficiency,
    CarbonCredits,
}

impl ReductionLever {
    pub const ALL: [ReductionLever; 5] = [
        ReductionLever::CleanTech,
        ReductionLever::Afforestation,
        ReductionLever::Renewables,
        ReductionLever::EnergyEfficiency,
        ReductionLever::CarbonCredits,
    ];
}

impl fmt::Display for ReductionLever {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReductionLever::CleanTech => write!(f, "Clean technology"),
            ReductionLever::Afforestation => write!(f, "Afforestation"),
            ReductionLever::Renewables => write!(f, "Renewables"),
            ReductionLever::EnergyEfficiency => write!(f, "Energy efficiency"),
            ReductionLever::CarbonCredits => write!(f, "Carbon credits"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Pathway {
    Balanced,
    TechFocused,
    NatureBased,
    EnergyTransition,
}

impl Pathway {
    pub const ALL: [Pathway; 4] = [
        Pathway::Balanced,
        Pathway::TechFocused,
        Pathway::NatureBased,
        Pathway::EnergyTransition,
    ];

    /// Final-year reduction weight of each lever, in [`ReductionLever::ALL`] order
    pub fn reduction_factors(&self) -> [f64; 5] {
        match self {
            Pathway::Balanced => [0.2, 0.2, 0.2, 0.2, 0.2],
            Pathway::TechFocused => [0.4, 0.1, 0.2, 0.2, 0.1],
            Pathway::NatureBased => [0.1, 0.4, 0.1, 0.1, 0.3],
            Pathway::EnergyTransition => [0.2, 0.1, 0.4, 0.2, 0.1],
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Pathway::Balanced => {
                "A well-rounded strategy targeting all aspects of emission reduction."
            }
            Pathway::TechFocused => {
                "Emphasizes clean technologies and energy efficiency improvements."
            }
            Pathway::NatureBased => {
                "Prioritizes afforestation and carbon credits from nature-based projects."
            }
            Pathway::EnergyTransition => "Focuses on transitioning to renewable energy sources.",
        }
    }
}

impl fmt::Display for Pathway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pathway::Balanced => write!(f, "Balanced Approach"),
            Pathway::TechFocused => write!(f, "Technology-Focused"),
            Pathway::NatureBased => write!(f, "Nature-Based Solutions"),
            Pathway::EnergyTransition => write!(f, "Energy Transition"),
        }
    }
}

impl FromStr for Pathway {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "balanced" => Ok(Pathway::Balanced),
            "techfocused" | "tech" => Ok(Pathway::TechFocused),
            "naturebased" | "nature" => Ok(Pathway::NatureBased),
            "energytransition" | "energy" => Ok(Pathway::EnergyTransition),
            other => Err(CalculatorError::Validation(format!("unknown pathway '{other}'"))),
        }
    }
}

/// Mine size class, scaling the baseline emissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MineSize {
    /// Annual production below 1 million tons
    Small,
    /// Annual production of 1-10 million tons
    #[default]
    Medium,
    /// Annual production above 10 million tons
    Large,
}

impl MineSize {
    pub fn emissions_factor(&self) -> f64 {
        match self {
            MineSize::Small => 0.5,
            MineSize::Medium => 1.0,
            MineSize::Large => 2.0,
        }
    }
}

impl fmt::Display for MineSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MineSize::Small => write!(f, "small"),
            MineSize::Medium => write!(f, "medium"),
            MineSize::Large => write!(f, "large"),
        }
    }
}

impl FromStr for MineSize {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(MineSize::Small),
            "medium" => Ok(MineSize::Medium),
            "large" => Ok(MineSize::Large),
            other => Err(CalculatorError::Validation(format!(
                "unknown mine size '{other}', expected small, medium or large"
            ))),
        }
    }
}

/// One projected year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayYear {
    pub year: i32,
    /// Remaining emissions (tCO₂), never negative
    pub emissions: f64,
    pub clean_tech: f64,
    pub afforestation: f64,
    pub renewables: f64,
    pub energy_efficiency: f64,
    pub carbon_credits: f64,
}

impl PathwayYear {
    pub fn lever(&self, lever: ReductionLever) -> f64 {
        match lever {
            ReductionLever::CleanTech => self.clean_tech,
            ReductionLever::Afforestation => self.afforestation,
            ReductionLever::Renewables => self.renewables,
            ReductionLever::EnergyEfficiency => self.energy_efficiency,
            ReductionLever::CarbonCredits => self.carbon_credits,
        }
    }

    pub fn total_reduction(&self) -> f64 {
        ReductionLever::ALL.iter().map(|l| self.lever(*l)).sum()
    }
}

/// Parameters for a pathway projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayRequest {
    /// Baseline emissions (tCO₂/year)
    pub baseline_emissions: f64,
    pub mine_size: MineSize,
    pub pathway: Pathway,
    pub years: u32,
    pub start_year: i32,
}

impl PathwayRequest {
    pub fn new(baseline_emissions: f64, mine_size: MineSize, pathway: Pathway) -> Self {
        Self {
            baseline_emissions,
            mine_size,
            pathway,
            years: DEFAULT_PROJECTION_YEARS,
            start_year: DEFAULT_START_YEAR,
        }
    }
}

/// Project emissions year by year along a pathway
pub fn project_pathway(request: &PathwayRequest) -> CalculatorResult<Vec<PathwayYear>> {
    let baseline = require_non_negative("baselineEmissions", request.baseline_emissions)?;
    if request.years == 0 {
        return Err(CalculatorError::Validation(
            "years must be at least 1".to_string(),
        ));
    }

    let scaled = baseline * request.mine_size.emissions_factor();
    let factors = request.pathway.reduction_factors();
    let weight: f64 = factors.iter().sum();
    let horizon = f64::from(request.years);

    Ok((0..request.years)
        .map(|index| {
            let progress = f64::from(index + 1) / horizon;
            let contribution = |i: usize| factors[i] * scaled * progress;
            PathwayYear {
                year: request.start_year + index as i32,
                emissions: (scaled * (1.0 - weight * progress)).max(0.0),
                clean_tech: contribution(0),
                afforestation: contribution(1),
                renewables: contribution(2),
                energy_efficiency: contribution(3),
                carbon_credits: contribution(4),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        for pathway in Pathway::ALL {
            let sum: f64 = pathway.reduction_factors().iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "{pathway} sums to {sum}");
        }
    }

    #[test]
    fn test_balanced_medium_projection() {
        let request = PathwayRequest::new(1000.0, MineSize::Medium, Pathway::Balanced);
        let years = project_pathway(&request).unwrap();
        assert_eq!(years.len(), 10);
        assert_eq!(years[0].year, 2024);
        assert_eq!(years[9].year, 2033);
        assert!((years[0].emissions - 900.0).abs() < 1e-9);
        assert!((years[0].clean_tech - 20.0).abs() < 1e-9);
        assert!(years[9].emissions.abs() < 1e-9);
    }

    #[test]
    fn test_large_mine_scales_baseline() {
        let request = PathwayRequest::new(1000.0, MineSize::Large, Pathway::TechFocused);
        let years = project_pathway(&request).unwrap();
        let last = years.last().unwrap();
        assert!((last.clean_tech - 800.0).abs() < 1e-9);
        assert!((last.total_reduction() - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_requests() {
        let mut request = PathwayRequest::new(-1.0, MineSize::Small, Pathway::NatureBased);
        assert!(project_pathway(&request).is_err());
        request.baseline_emissions = 10.0;
        request.years = 0;
        assert!(project_pathway(&request).is_err());
    }

    #[test]
    fn test_parsing() {
        assert_eq!("tech-focused".parse::<Pathway>().unwrap(), Pathway::TechFocused);
        assert_eq!("energyTransition".parse::<Pathway>().unwrap(), Pathway::EnergyTransition);
        assert_eq!("LARGE".parse::<MineSize>().unwrap(), MineSize::Large);
        assert!("huge".parse::<MineSize>().is_err());
    }
}
