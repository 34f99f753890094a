// Environmental accounting for MineZero
// Emission totals, carbon credits, offsets, benchmarks and neutrality pathways

pub mod benchmark;
pub mod calculator;
pub mod credits;
pub mod emissions_factors;
pub mod offsets;
pub mod pathways;
pub mod recommendations;
pub mod report;
pub mod validation;

pub use benchmark::{BenchmarkComparison, BenchmarkStatus};
pub use calculator::{
    calculate_emissions, ChartPoint, EmissionBreakdown, EmissionInput, EmissionResult,
};
pub use credits::{CreditPosition, CreditType};
pub use emissions_factors::{
    CarbonOffsetRates, EmissionFactors, EmissionSource, MineType, CARBON_MARKET_RATE,
};
pub use offsets::{calculate_offsets, OffsetMode, OffsetRequirements};
pub use pathways::{
    project_pathway, MineSize, Pathway, PathwayRequest, PathwayYear, ReductionLever,
};
pub use recommendations::{
    generate_recommendations, RuleBasedAdvisor, SuggestionProvider, SuggestionRequest,
};
pub use report::{Report, ReportRow};
