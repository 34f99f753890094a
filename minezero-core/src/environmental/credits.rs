use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::environmental::validation::{require_non_negative, require_positive};
use crate::error::CalculatorResult;

/// Whether a mine earns or owes credits for the period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditType {
    /// Intensity strictly below target: credits earned
    Surplus,
    /// Intensity at or above target: credits needed
    Deficit,
}

impl fmt::Display for CreditType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreditType::Surplus => write!(f, "Surplus"),
            CreditType::Deficit => write!(f, "Deficit"),
        }
    }
}

/// Credit standing of a mine against its target, valued at a chosen price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditPosition {
    pub target_intensity: f64,
    pub actual_intensity: f64,
    pub production: f64,
    pub credit_price: f64,
    pub credit_type: CreditType,
    /// Credits earned (surplus) or needed (deficit), tCO₂
    pub credits: f64,
    pub trade_value: f64,
    /// `actual / target * 100`, capped at 100
    pub compliance_percentage: f64,
}

impl CreditPosition {
    pub fn assess(
        actual_intensity: f64,
        target_intensity: f64,
        production: f64,
        credit_price: f64,
    ) -> CalculatorResult<Self> {
        let actual_intensity = require_non_negative("actualIntensity", actual_intensity)?;
        let target_intensity = require_positive("targetIntensity", target_intensity)?;
        let production = require_positive("production", production)?;
        let credit_price = require_non_negative("creditPrice", credit_price)?;

        let credit_type = if actual_intensity < target_intensity {
            CreditType::Surplus
        } else {
            CreditType::Deficit
        };
        let credits = (target_intensity - actual_intensity).abs() * production;
        let trade_value = credits * credit_price;
        let compliance_percentage = (actual_intensity / target_intensity * 100.0).min(100.0);

        debug!(%credit_type, credits, trade_value, "assessed credit position");

        Ok(Self {
            target_intensity,
            actual_intensity,
            production,
            credit_price,
            credit_type,
            credits,
            trade_value,
            compliance_percentage,
        })
    }

    pub fn is_surplus(&self) -> bool {
        self.credit_type == CreditType::Surplus
    }

    pub fn recommendation(&self) -> &'static str {
        match self.credit_type {
            CreditType::Surplus => "Consider monetizing credits via the carbon market",
            CreditType::Deficit => {
                "Reduce intensity through efficiency measures or carbon market purchases"
            }
        }
    }
}
