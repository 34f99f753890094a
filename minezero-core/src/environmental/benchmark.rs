use serde::{Deserialize, Serialize};
use std::fmt;

use crate::environmental::emissions_factors::MineType;

/// Where a mine's intensity sits relative to its industry benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkStatus {
    Below,
    At,
    Above,
}

impl fmt::Display for BenchmarkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchmarkStatus::Below => write!(f, "Below benchmark"),
            BenchmarkStatus::At => write!(f, "At benchmark"),
            BenchmarkStatus::Above => write!(f, "Above benchmark"),
        }
    }
}

/// Emission intensity compared against the industry benchmark
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkComparison {
    pub mine_type: MineType,
    /// Benchmark intensity (tCO₂/ton)
    pub benchmark: f64,
    /// Measured intensity (tCO₂/ton)
    pub intensity: f64,
    /// `intensity - benchmark`; negative means better than benchmark
    pub gap: f64,
    /// Intensity as a percentage of the benchmark
    pub percent_of_benchmark: f64,
    pub status: BenchmarkStatus,
}

impl BenchmarkComparison {
    pub fn compare(intensity: f64, mine_type: MineType) -> Self {
        let benchmark = mine_type.benchmark_intensity();
        let status = if intensity < benchmark {
            BenchmarkStatus::Below
        } else if intensity > benchmark {
            BenchmarkStatus::Above
        } else {
            BenchmarkStatus::At
        };

        Self {
            mine_type,
            benchmark,
            intensity,
            gap: intensity - benchmark,
            percent_of_benchmark: intensity / benchmark * 100.0,
            status,
        }
    }

    pub fn outperforms_industry(&self) -> bool {
        self.status == BenchmarkStatus::Below
    }
}
